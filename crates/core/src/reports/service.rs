//! Overview report computation.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::finance::{FinanceService, PaymentStatus};

use super::error::ReportsError;
use super::types::{ChannelOverview, OverviewFilter, OverviewMetrics, ReservationSnapshot};

/// Label used for reservations with no channel link.
const DIRECT_CHANNEL: &str = "Direct";

/// Service for computing overview statistics.
pub struct OverviewService;

impl OverviewService {
    /// Validates an overview filter.
    ///
    /// # Errors
    ///
    /// Returns `ReportsError::InvalidFilter` when the tenant ID is not
    /// positive or the date range is reversed.
    pub fn validate_filter(filter: &OverviewFilter) -> Result<(), ReportsError> {
        if !filter.tenant_id.is_valid() {
            return Err(ReportsError::InvalidFilter(format!(
                "tenant id must be positive, got {}",
                filter.tenant_id
            )));
        }
        if filter.date_from > filter.date_to {
            return Err(ReportsError::InvalidFilter(format!(
                "date range is reversed: {} > {}",
                filter.date_from, filter.date_to
            )));
        }
        Ok(())
    }

    /// Computes overview statistics in a single pass over the snapshots.
    #[must_use]
    pub fn compute(snapshots: &[ReservationSnapshot]) -> OverviewMetrics {
        let mut total_revenue = Decimal::ZERO;
        let mut total_commissions = Decimal::ZERO;
        let mut total_vat = Decimal::ZERO;
        let mut total_required = Decimal::ZERO;
        let mut total_collected = Decimal::ZERO;
        let mut total_pending = Decimal::ZERO;
        let mut paid_count = 0;
        let mut partial_count = 0;
        let mut pending_count = 0;
        let mut channel_totals: HashMap<String, (usize, Decimal)> = HashMap::new();

        for snapshot in snapshots {
            let amounts = FinanceService::reservation_amounts(&snapshot.financials, None);
            let summary =
                FinanceService::payment_summary(&snapshot.financials, &snapshot.payment_amounts, None);

            total_revenue += amounts.total_amount;
            total_commissions += amounts.total_commissions;
            total_vat += amounts.vat_amount;
            total_required += amounts.required_amount;
            total_collected += summary.total_paid;
            total_pending += summary.pending_amount;

            match summary.status {
                PaymentStatus::Paid => paid_count += 1,
                PaymentStatus::Partial => partial_count += 1,
                PaymentStatus::Pending => pending_count += 1,
            }

            let channel = snapshot
                .channel
                .clone()
                .unwrap_or_else(|| DIRECT_CHANNEL.to_string());
            let entry = channel_totals.entry(channel).or_insert((0, Decimal::ZERO));
            entry.0 += 1;
            entry.1 += amounts.total_amount;
        }

        let mut channels: Vec<ChannelOverview> = channel_totals
            .into_iter()
            .map(|(channel, (reservation_count, revenue))| ChannelOverview {
                channel,
                reservation_count,
                revenue,
            })
            .collect();
        channels.sort_by(|a, b| b.revenue.cmp(&a.revenue));

        OverviewMetrics {
            reservation_count: snapshots.len(),
            total_revenue,
            total_commissions,
            total_vat,
            total_required,
            total_collected,
            total_pending,
            paid_count,
            partial_count,
            pending_count,
            channels,
        }
    }
}
