//! Derived filtering, sorting, and summary over expense records.
//!
//! Pure computation over in-memory slices; "now" is always an explicit
//! argument so the functions stay deterministic and testable.

pub mod types;
pub mod view;

#[cfg(test)]
mod tests;

pub use types::{
    CategoryRef, DatePreset, ExpenseFilter, ExpenseRecord, ExpenseStatus, ExpenseSummary,
    SortDirection, SortKey,
};
pub use view::ExpenseView;
