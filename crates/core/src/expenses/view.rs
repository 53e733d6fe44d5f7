//! Derived expense views: filtering, sorting, and summary.

use chrono::{Datelike, Days, NaiveDate};
use uuid::Uuid;

use crate::finance::FinanceService;

use super::types::{
    CategoryRef, DatePreset, ExpenseFilter, ExpenseRecord, ExpenseStatus, ExpenseSummary,
    SortDirection, SortKey,
};

/// Derived-view computations over expense records.
pub struct ExpenseView;

impl ExpenseView {
    /// Returns the records matching the filter, sorted per its sort settings.
    ///
    /// `today` anchors the relative date presets; callers pass the current
    /// date so the computation itself stays deterministic.
    #[must_use]
    pub fn filter_and_sort(
        records: &[ExpenseRecord],
        filter: &ExpenseFilter,
        categories: &[CategoryRef],
        subcategories: &[CategoryRef],
        today: NaiveDate,
    ) -> Vec<ExpenseRecord> {
        let search = filter
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let mut matched: Vec<ExpenseRecord> = records
            .iter()
            .filter(|record| Self::matches(record, filter, search.as_deref(), categories, subcategories, today))
            .cloned()
            .collect();

        Self::sort(&mut matched, filter.sort_key, filter.sort_direction);
        matched
    }

    /// Computes total and per-status sums plus the record count.
    #[must_use]
    pub fn summarize(records: &[ExpenseRecord]) -> ExpenseSummary {
        let amounts_where = |status: Option<ExpenseStatus>| -> Vec<Option<rust_decimal::Decimal>> {
            records
                .iter()
                .filter(|r| status.is_none_or(|s| r.status == s))
                .map(|r| r.amount)
                .collect()
        };

        ExpenseSummary {
            total: FinanceService::aggregate_amounts(&amounts_where(None)),
            pending: FinanceService::aggregate_amounts(&amounts_where(Some(ExpenseStatus::Pending))),
            completed: FinanceService::aggregate_amounts(&amounts_where(Some(
                ExpenseStatus::Completed,
            ))),
            cancelled: FinanceService::aggregate_amounts(&amounts_where(Some(
                ExpenseStatus::Cancelled,
            ))),
            count: records.len(),
        }
    }

    fn matches(
        record: &ExpenseRecord,
        filter: &ExpenseFilter,
        search: Option<&str>,
        categories: &[CategoryRef],
        subcategories: &[CategoryRef],
        today: NaiveDate,
    ) -> bool {
        if let Some(status) = filter.status
            && record.status != status
        {
            return false;
        }
        if let Some(category_id) = filter.category_id
            && record.category_id != Some(category_id)
        {
            return false;
        }
        if let Some(subcategory_id) = filter.subcategory_id
            && record.subcategory_id != Some(subcategory_id)
        {
            return false;
        }
        if let Some(preset) = filter.date_preset
            && !Self::in_preset(record.date, preset, today)
        {
            return false;
        }
        if let Some(year) = filter.year
            && record.date.year() != year
        {
            return false;
        }
        if let Some(needle) = search
            && !Self::matches_search(record, needle, categories, subcategories)
        {
            return false;
        }
        true
    }

    fn matches_search(
        record: &ExpenseRecord,
        needle: &str,
        categories: &[CategoryRef],
        subcategories: &[CategoryRef],
    ) -> bool {
        if record.description.to_lowercase().contains(needle) {
            return true;
        }
        if record
            .vendor_name
            .as_deref()
            .is_some_and(|v| v.to_lowercase().contains(needle))
        {
            return true;
        }
        if Self::ref_name(record.category_id, categories)
            .is_some_and(|n| n.to_lowercase().contains(needle))
        {
            return true;
        }
        Self::ref_name(record.subcategory_id, subcategories)
            .is_some_and(|n| n.to_lowercase().contains(needle))
    }

    fn ref_name(id: Option<Uuid>, refs: &[CategoryRef]) -> Option<&str> {
        let id = id?;
        refs.iter().find(|r| r.id == id).map(|r| r.name.as_str())
    }

    fn in_preset(date: NaiveDate, preset: DatePreset, today: NaiveDate) -> bool {
        match preset {
            DatePreset::Today => date == today,
            DatePreset::Week => {
                let week_ago = today.checked_sub_days(Days::new(7)).unwrap_or(today);
                date > week_ago && date <= today
            }
            DatePreset::Month => date.year() == today.year() && date.month() == today.month(),
            DatePreset::Year => date.year() == today.year(),
        }
    }

    fn sort(records: &mut [ExpenseRecord], key: SortKey, direction: SortDirection) {
        records.sort_by(|a, b| {
            let ordering = match key {
                SortKey::Date => a.date.cmp(&b.date),
                SortKey::Amount => FinanceService::safe_amount(a.amount)
                    .cmp(&FinanceService::safe_amount(b.amount)),
                SortKey::Description => a
                    .description
                    .to_lowercase()
                    .cmp(&b.description.to_lowercase()),
            };
            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }
}
