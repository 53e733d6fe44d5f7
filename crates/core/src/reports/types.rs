//! Report data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use rentora_shared::TenantId;

use crate::finance::ReservationFinancials;

/// Filter for the overview report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewFilter {
    /// Tenant scope.
    pub tenant_id: TenantId,
    /// Optional property to narrow to.
    pub property_id: Option<Uuid>,
    /// Start of the date range (inclusive, on check-in date).
    pub date_from: NaiveDate,
    /// End of the date range (inclusive, on check-in date).
    pub date_to: NaiveDate,
    /// Optional distribution-channel name to narrow to.
    pub channel: Option<String>,
}

/// A reservation row as fed to the overview computation.
#[derive(Debug, Clone)]
pub struct ReservationSnapshot {
    /// The reservation's stored financial fields.
    pub financials: ReservationFinancials,
    /// Amounts of all payments registered against the reservation.
    pub payment_amounts: Vec<Option<Decimal>>,
    /// Name of the distribution channel, when linked.
    pub channel: Option<String>,
}

/// Overview statistics for a date range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewMetrics {
    /// Number of reservations in range.
    pub reservation_count: usize,
    /// Sum of reservation total amounts.
    pub total_revenue: Decimal,
    /// Sum of commission totals.
    pub total_commissions: Decimal,
    /// Sum of VAT charged on commissions.
    pub total_vat: Decimal,
    /// Sum of required payment amounts.
    pub total_required: Decimal,
    /// Sum of registered payments.
    pub total_collected: Decimal,
    /// Sum of pending amounts (each floored at zero).
    pub total_pending: Decimal,
    /// Reservations fully paid.
    pub paid_count: usize,
    /// Reservations partially paid.
    pub partial_count: usize,
    /// Reservations with no payment yet.
    pub pending_count: usize,
    /// Per-channel breakdown, ordered by revenue descending.
    pub channels: Vec<ChannelOverview>,
}

/// Per-channel slice of the overview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelOverview {
    /// Channel name ("Direct" for reservations without a channel link).
    pub channel: String,
    /// Number of reservations booked through the channel.
    pub reservation_count: usize,
    /// Sum of reservation total amounts for the channel.
    pub revenue: Decimal,
}
