//! Overview metrics aggregation.
//!
//! Validates report filters and computes overview statistics for a date
//! range, optionally narrowed to a property or a distribution channel.

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::ReportsError;
pub use service::OverviewService;
pub use types::{ChannelOverview, OverviewFilter, OverviewMetrics, ReservationSnapshot};
