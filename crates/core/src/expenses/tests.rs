//! Unit tests for expense filtering, sorting, and summary.

use chrono::NaiveDate;
use rstest::rstest;
use rust_decimal_macros::dec;
use uuid::Uuid;

use super::types::{
    CategoryRef, DatePreset, ExpenseFilter, ExpenseRecord, ExpenseStatus, SortDirection, SortKey,
};
use super::view::ExpenseView;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn record(description: &str, amount: &str, d: NaiveDate, status: ExpenseStatus) -> ExpenseRecord {
    ExpenseRecord {
        id: Uuid::new_v4(),
        description: description.to_string(),
        amount: amount.parse().ok(),
        date: d,
        status,
        category_id: None,
        subcategory_id: None,
        vendor_name: None,
        reservation_id: None,
        is_recurring: false,
    }
}

fn sample() -> Vec<ExpenseRecord> {
    vec![
        record("Pool cleaning", "80", date(2026, 8, 4), ExpenseStatus::Completed),
        record("Linen service", "45.50", date(2026, 8, 1), ExpenseStatus::Pending),
        record("Boiler repair", "320", date(2026, 7, 15), ExpenseStatus::Completed),
        record("Welcome basket", "", date(2026, 8, 5), ExpenseStatus::Pending),
        record("City tax refund", "12", date(2025, 12, 30), ExpenseStatus::Cancelled),
    ]
}

const TODAY: (i32, u32, u32) = (2026, 8, 5);

fn today() -> NaiveDate {
    date(TODAY.0, TODAY.1, TODAY.2)
}

#[test]
fn default_sort_is_newest_date_first() {
    let result =
        ExpenseView::filter_and_sort(&sample(), &ExpenseFilter::default(), &[], &[], today());

    let dates: Vec<NaiveDate> = result.iter().map(|r| r.date).collect();
    let mut sorted = dates.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(dates, sorted);
    assert_eq!(result.len(), 5);
}

#[rstest]
#[case(SortKey::Amount, SortDirection::Asc, "Welcome basket")]
#[case(SortKey::Amount, SortDirection::Desc, "Boiler repair")]
#[case(SortKey::Description, SortDirection::Asc, "Boiler repair")]
#[case(SortKey::Description, SortDirection::Desc, "Welcome basket")]
fn sort_keys_and_directions(
    #[case] sort_key: SortKey,
    #[case] sort_direction: SortDirection,
    #[case] expected_first: &str,
) {
    let filter = ExpenseFilter {
        sort_key,
        sort_direction,
        ..ExpenseFilter::default()
    };
    let result = ExpenseView::filter_and_sort(&sample(), &filter, &[], &[], today());
    assert_eq!(result[0].description, expected_first);
}

#[rstest]
#[case(DatePreset::Today, 1)]
#[case(DatePreset::Week, 3)]
#[case(DatePreset::Month, 3)]
#[case(DatePreset::Year, 4)]
fn date_presets(#[case] preset: DatePreset, #[case] expected_count: usize) {
    let filter = ExpenseFilter {
        date_preset: Some(preset),
        ..ExpenseFilter::default()
    };
    let result = ExpenseView::filter_and_sort(&sample(), &filter, &[], &[], today());
    assert_eq!(result.len(), expected_count);
}

#[test]
fn absolute_year_filter() {
    let filter = ExpenseFilter {
        year: Some(2025),
        ..ExpenseFilter::default()
    };
    let result = ExpenseView::filter_and_sort(&sample(), &filter, &[], &[], today());
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].description, "City tax refund");
}

#[test]
fn status_filter() {
    let filter = ExpenseFilter {
        status: Some(ExpenseStatus::Pending),
        ..ExpenseFilter::default()
    };
    let result = ExpenseView::filter_and_sort(&sample(), &filter, &[], &[], today());
    assert_eq!(result.len(), 2);
}

#[test]
fn search_is_case_insensitive_and_spans_fields() {
    let category = CategoryRef {
        id: Uuid::new_v4(),
        name: "Maintenance".to_string(),
    };
    let mut records = sample();
    records[2].category_id = Some(category.id);
    records[1].vendor_name = Some("Lavandería Sol".to_string());

    let by_description = ExpenseFilter {
        search: Some("POOL".to_string()),
        ..ExpenseFilter::default()
    };
    let result =
        ExpenseView::filter_and_sort(&records, &by_description, std::slice::from_ref(&category), &[], today());
    assert_eq!(result.len(), 1);

    let by_vendor = ExpenseFilter {
        search: Some("lavandería".to_string()),
        ..ExpenseFilter::default()
    };
    let result =
        ExpenseView::filter_and_sort(&records, &by_vendor, std::slice::from_ref(&category), &[], today());
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].description, "Linen service");

    let by_category = ExpenseFilter {
        search: Some("mainten".to_string()),
        ..ExpenseFilter::default()
    };
    let result =
        ExpenseView::filter_and_sort(&records, &by_category, std::slice::from_ref(&category), &[], today());
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].description, "Boiler repair");
}

#[test]
fn whitespace_search_matches_everything() {
    let filter = ExpenseFilter {
        search: Some("   ".to_string()),
        ..ExpenseFilter::default()
    };
    let result = ExpenseView::filter_and_sort(&sample(), &filter, &[], &[], today());
    assert_eq!(result.len(), 5);
}

#[test]
fn category_equality_filter() {
    let category_id = Uuid::new_v4();
    let mut records = sample();
    records[0].category_id = Some(category_id);

    let filter = ExpenseFilter {
        category_id: Some(category_id),
        ..ExpenseFilter::default()
    };
    let result = ExpenseView::filter_and_sort(&records, &filter, &[], &[], today());
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].description, "Pool cleaning");
}

#[test]
fn summary_sums_by_status() {
    let summary = ExpenseView::summarize(&sample());

    assert_eq!(summary.count, 5);
    assert_eq!(summary.total, dec!(457.50));
    assert_eq!(summary.pending, dec!(45.50)); // missing amount counts as zero
    assert_eq!(summary.completed, dec!(400));
    assert_eq!(summary.cancelled, dec!(12));
}

#[test]
fn summary_of_empty_list_is_zero() {
    let summary = ExpenseView::summarize(&[]);
    assert_eq!(summary.count, 0);
    assert_eq!(summary.total, rust_decimal::Decimal::ZERO);
}
