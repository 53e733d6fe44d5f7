//! Unit tests for overview computation and filter validation.

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use rentora_shared::TenantId;

use crate::finance::{ReservationFinancials, VatConfig};

use super::service::OverviewService;
use super::types::{OverviewFilter, ReservationSnapshot};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn filter(tenant_id: i32) -> OverviewFilter {
    OverviewFilter {
        tenant_id: TenantId::new(tenant_id),
        property_id: None,
        date_from: date(2026, 7, 1),
        date_to: date(2026, 7, 31),
        channel: None,
    }
}

fn snapshot(
    total: &str,
    commission: &str,
    payments: &[&str],
    channel: Option<&str>,
) -> ReservationSnapshot {
    ReservationSnapshot {
        financials: ReservationFinancials {
            total_amount: total.parse().ok(),
            channel_commission: commission.parse().ok(),
            collection_commission: None,
            vat: Some(VatConfig {
                apply_vat: true,
                vat_percent: dec!(21),
            }),
        },
        payment_amounts: payments.iter().map(|p| p.parse().ok()).collect(),
        channel: channel.map(str::to_string),
    }
}

#[test]
fn validate_accepts_well_formed_filter() {
    assert!(OverviewService::validate_filter(&filter(1)).is_ok());
}

#[test]
fn validate_rejects_non_positive_tenant() {
    assert!(OverviewService::validate_filter(&filter(-1)).is_err());
    assert!(OverviewService::validate_filter(&filter(0)).is_err());
}

#[test]
fn validate_rejects_reversed_range() {
    let mut reversed = filter(1);
    reversed.date_from = date(2026, 8, 1);
    reversed.date_to = date(2026, 7, 1);
    assert!(OverviewService::validate_filter(&reversed).is_err());
}

#[test]
fn compute_empty_input() {
    let metrics = OverviewService::compute(&[]);

    assert_eq!(metrics.reservation_count, 0);
    assert_eq!(metrics.total_revenue, rust_decimal::Decimal::ZERO);
    assert!(metrics.channels.is_empty());
}

#[test]
fn compute_totals_and_status_counts() {
    let snapshots = vec![
        // required = 1000 - 150 * 1.21 = 818.50, fully paid
        snapshot("1000", "150", &["818.50"], Some("Booking")),
        // required = 500 - 50 * 1.21 = 439.50, partially paid
        snapshot("500", "50", &["200"], Some("Booking")),
        // required = 300, no commissions, unpaid, direct booking
        snapshot("300", "", &[], None),
    ];

    let metrics = OverviewService::compute(&snapshots);

    assert_eq!(metrics.reservation_count, 3);
    assert_eq!(metrics.total_revenue, dec!(1800));
    assert_eq!(metrics.total_commissions, dec!(200));
    assert_eq!(metrics.total_vat, dec!(31.50) + dec!(10.50));
    assert_eq!(metrics.total_required, dec!(818.50) + dec!(439.50) + dec!(300));
    assert_eq!(metrics.total_collected, dec!(1018.50));
    assert_eq!(metrics.total_pending, dec!(239.50) + dec!(300));
    assert_eq!(metrics.paid_count, 1);
    assert_eq!(metrics.partial_count, 1);
    assert_eq!(metrics.pending_count, 1);
}

#[test]
fn compute_channel_breakdown_orders_by_revenue() {
    let snapshots = vec![
        snapshot("1000", "", &[], Some("Booking")),
        snapshot("400", "", &[], Some("Airbnb")),
        snapshot("700", "", &[], Some("Booking")),
        snapshot("200", "", &[], None),
    ];

    let metrics = OverviewService::compute(&snapshots);

    assert_eq!(metrics.channels.len(), 3);
    assert_eq!(metrics.channels[0].channel, "Booking");
    assert_eq!(metrics.channels[0].reservation_count, 2);
    assert_eq!(metrics.channels[0].revenue, dec!(1700));
    assert_eq!(metrics.channels[1].channel, "Airbnb");
    assert_eq!(metrics.channels[2].channel, "Direct");
    assert_eq!(metrics.channels[2].revenue, dec!(200));
}
