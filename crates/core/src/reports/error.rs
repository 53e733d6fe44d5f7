//! Report error types.

use thiserror::Error;

/// Errors that can occur while preparing a report.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportsError {
    /// The requested filter is invalid.
    #[error("Invalid report filter: {0}")]
    InvalidFilter(String),
}
