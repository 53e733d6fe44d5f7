//! Expense filtering data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of an expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseStatus {
    /// Registered but not yet settled.
    Pending,
    /// Settled.
    Completed,
    /// Cancelled, kept for the record.
    Cancelled,
}

impl std::fmt::Display for ExpenseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Completed => write!(f, "completed"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for ExpenseStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("Unknown expense status: {s}")),
        }
    }
}

/// An expense record as seen by the filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Expense ID.
    pub id: Uuid,
    /// Free-text description.
    pub description: String,
    /// Amount (missing treated as zero in sums and sorting).
    pub amount: Option<Decimal>,
    /// Expense date.
    pub date: NaiveDate,
    /// Lifecycle status.
    pub status: ExpenseStatus,
    /// Category reference.
    pub category_id: Option<Uuid>,
    /// Subcategory reference.
    pub subcategory_id: Option<Uuid>,
    /// Vendor display name, when the vendor link is resolved.
    pub vendor_name: Option<String>,
    /// Linked reservation, when the expense belongs to one.
    pub reservation_id: Option<Uuid>,
    /// Whether the expense recurs periodically.
    pub is_recurring: bool,
}

/// A category or subcategory reference used for name lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRef {
    /// Reference ID.
    pub id: Uuid,
    /// Display name.
    pub name: String,
}

/// Relative date-range presets, resolved against an explicit "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatePreset {
    /// Same date as today.
    Today,
    /// Within the last 7 days, inclusive.
    Week,
    /// Same calendar month as today.
    Month,
    /// Same calendar year as today.
    Year,
}

impl std::str::FromStr for DatePreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "today" => Ok(Self::Today),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            _ => Err(format!("Unknown date preset: {s}")),
        }
    }
}

/// Field to sort the filtered expenses by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Sort by expense date.
    #[default]
    Date,
    /// Sort by amount (missing amounts count as zero).
    Amount,
    /// Sort by description, case-insensitive.
    Description,
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date" => Ok(Self::Date),
            "amount" => Ok(Self::Amount),
            "description" => Ok(Self::Description),
            _ => Err(format!("Unknown sort key: {s}")),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Ascending order.
    Asc,
    /// Descending order (default: newest first).
    #[default]
    Desc,
}

impl std::str::FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(format!("Unknown sort direction: {s}")),
        }
    }
}

/// Filter and sort criteria for an expense list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpenseFilter {
    /// Substring search across description, vendor, category, and subcategory names.
    pub search: Option<String>,
    /// Status equality filter.
    pub status: Option<ExpenseStatus>,
    /// Category equality filter.
    pub category_id: Option<Uuid>,
    /// Subcategory equality filter.
    pub subcategory_id: Option<Uuid>,
    /// Relative date-range preset.
    pub date_preset: Option<DatePreset>,
    /// Absolute calendar-year filter.
    pub year: Option<i32>,
    /// Sort field (default: date).
    #[serde(default)]
    pub sort_key: SortKey,
    /// Sort direction (default: descending).
    #[serde(default)]
    pub sort_direction: SortDirection,
}

/// Aggregate sums over an expense list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseSummary {
    /// Sum over all records.
    pub total: Decimal,
    /// Sum over pending records.
    pub pending: Decimal,
    /// Sum over completed records.
    pub completed: Decimal,
    /// Sum over cancelled records.
    pub cancelled: Decimal,
    /// Number of records.
    pub count: usize,
}
