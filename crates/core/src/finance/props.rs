//! Property-based tests for the finance calculations.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::service::FinanceService;
use super::types::{PaymentStatus, ReservationFinancials, VatConfig};

/// Strategy to generate money amounts (0.00 to 1,000,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate optional money amounts.
fn opt_amount() -> impl Strategy<Value = Option<Decimal>> {
    prop_oneof![Just(None), amount().prop_map(Some)]
}

/// Strategy to generate VAT percentages (0.00 to 99.99).
fn vat_percent() -> impl Strategy<Value = Decimal> {
    (0i64..10_000i64).prop_map(|v| Decimal::new(v, 2))
}

/// Strategy to generate full reservation financials.
fn financials() -> impl Strategy<Value = ReservationFinancials> {
    (opt_amount(), opt_amount(), opt_amount(), vat_percent(), any::<bool>()).prop_map(
        |(total, channel, collection, percent, apply)| ReservationFinancials {
            total_amount: total,
            channel_commission: channel,
            collection_commission: collection,
            vat: Some(VatConfig {
                apply_vat: apply,
                vat_percent: percent,
            }),
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The required amount is never negative, whatever the inputs.
    #[test]
    fn prop_required_amount_never_negative(reservation in financials()) {
        let required = FinanceService::required_amount(&reservation, None);
        prop_assert!(
            required >= Decimal::ZERO,
            "Required amount {} must not be negative",
            required
        );
    }

    /// The required amount has at most 2 decimal places.
    #[test]
    fn prop_required_amount_two_decimals(reservation in financials()) {
        let required = FinanceService::required_amount(&reservation, None);
        let scaled = required * Decimal::ONE_HUNDRED;
        prop_assert_eq!(
            scaled.round(), scaled,
            "Required amount {} should have at most 2 decimal places",
            required
        );
    }

    /// When VAT is not applied, the VAT amount is exactly zero.
    #[test]
    fn prop_vat_off_means_zero_vat(base in amount(), percent in vat_percent()) {
        prop_assert_eq!(
            FinanceService::vat_amount(base, percent, false),
            Decimal::ZERO
        );
    }

    /// The status is Paid whenever nothing is required, even with no payments.
    #[test]
    fn prop_zero_required_is_paid(percent in vat_percent(), apply in any::<bool>()) {
        let reservation = ReservationFinancials {
            total_amount: None,
            channel_commission: Some(Decimal::ZERO),
            collection_commission: None,
            vat: Some(VatConfig { apply_vat: apply, vat_percent: percent }),
        };
        prop_assert_eq!(
            FinanceService::payment_status(&reservation, &[], None),
            PaymentStatus::Paid
        );
    }

    /// Status trichotomy: Partial exactly when 0 < paid < required.
    #[test]
    fn prop_status_trichotomy(
        reservation in financials(),
        payments in prop::collection::vec(opt_amount(), 0..5),
    ) {
        let required = FinanceService::required_amount(&reservation, None);
        let total_paid = FinanceService::aggregate_amounts(&payments);
        let status = FinanceService::payment_status(&reservation, &payments, None);

        let expected = if required <= Decimal::ZERO || total_paid >= required {
            PaymentStatus::Paid
        } else if total_paid > Decimal::ZERO {
            PaymentStatus::Partial
        } else {
            PaymentStatus::Pending
        };
        prop_assert_eq!(status, expected);
    }

    /// The summary's pending amount is never negative and agrees with the status.
    #[test]
    fn prop_summary_consistent(
        reservation in financials(),
        payments in prop::collection::vec(opt_amount(), 0..5),
    ) {
        let summary = FinanceService::payment_summary(&reservation, &payments, None);

        prop_assert!(summary.pending_amount >= Decimal::ZERO);
        if summary.status == PaymentStatus::Paid {
            prop_assert_eq!(summary.pending_amount, Decimal::ZERO);
        } else {
            prop_assert!(summary.pending_amount > Decimal::ZERO);
        }
    }

    /// Aggregation ignores missing values and is order-independent.
    #[test]
    fn prop_aggregate_order_independent(
        amounts in prop::collection::vec(opt_amount(), 0..8),
    ) {
        let forward = FinanceService::aggregate_amounts(&amounts);
        let mut reversed = amounts.clone();
        reversed.reverse();
        prop_assert_eq!(forward, FinanceService::aggregate_amounts(&reversed));
    }
}
