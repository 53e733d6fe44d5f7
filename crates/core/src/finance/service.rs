//! Financial calculation service.

use rust_decimal::{Decimal, RoundingStrategy};

use super::types::{
    CommissionBreakdown, PaymentStatus, PaymentSummary, ReservationAmounts,
    ReservationFinancials, VatConfig,
};

/// Service for reservation commission, VAT, and payment calculations.
///
/// All operations are deterministic and side-effect free. Every public result
/// is re-rounded to 2 decimal places independently; intermediate values are
/// not carried at higher precision across call boundaries.
pub struct FinanceService;

impl FinanceService {
    /// Degrades a missing amount to zero.
    #[must_use]
    pub fn safe_amount(value: Option<Decimal>) -> Decimal {
        value.unwrap_or(Decimal::ZERO)
    }

    /// Rounds a money value to 2 decimal places, half-up.
    #[must_use]
    pub fn round_money(value: Decimal) -> Decimal {
        value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Returns the commission components of a reservation and their total.
    #[must_use]
    pub fn commissions(reservation: &ReservationFinancials) -> CommissionBreakdown {
        let channel_commission = Self::safe_amount(reservation.channel_commission);
        let collection_commission = Self::safe_amount(reservation.collection_commission);

        CommissionBreakdown {
            channel_commission,
            collection_commission,
            total_commissions: channel_commission + collection_commission,
        }
    }

    /// Resolves the VAT settings for a reservation.
    ///
    /// Precedence: explicit override, then the reservation's property-channel
    /// link, then the defaults (VAT applied at 21%).
    #[must_use]
    pub fn vat_config(
        reservation: &ReservationFinancials,
        vat_override: Option<VatConfig>,
    ) -> VatConfig {
        vat_override
            .or(reservation.vat)
            .unwrap_or_default()
    }

    /// Calculates the amount required to consider a reservation paid.
    ///
    /// `required = max(0, round2(total - commissions * (1 + vat/100)))`, where
    /// the VAT factor collapses to 1 when VAT is not applied.
    #[must_use]
    pub fn required_amount(
        reservation: &ReservationFinancials,
        vat_override: Option<VatConfig>,
    ) -> Decimal {
        let total = Self::safe_amount(reservation.total_amount);
        let commissions = Self::commissions(reservation).total_commissions;
        let vat = Self::vat_config(reservation, vat_override);

        let factor = if vat.apply_vat {
            Decimal::ONE + vat.vat_percent / Decimal::ONE_HUNDRED
        } else {
            Decimal::ONE
        };

        let required = Self::round_money(total - commissions * factor);
        required.max(Decimal::ZERO)
    }

    /// Calculates VAT over a base amount.
    ///
    /// Returns exactly zero when VAT is not applied.
    #[must_use]
    pub fn vat_amount(base: Decimal, vat_percent: Decimal, apply_vat: bool) -> Decimal {
        if !apply_vat {
            return Decimal::ZERO;
        }
        Self::round_money(base * vat_percent / Decimal::ONE_HUNDRED)
    }

    /// Returns the full amount breakdown for a reservation.
    #[must_use]
    pub fn reservation_amounts(
        reservation: &ReservationFinancials,
        vat_override: Option<VatConfig>,
    ) -> ReservationAmounts {
        let breakdown = Self::commissions(reservation);
        let vat = Self::vat_config(reservation, vat_override);

        ReservationAmounts {
            total_amount: Self::safe_amount(reservation.total_amount),
            channel_commission: breakdown.channel_commission,
            collection_commission: breakdown.collection_commission,
            total_commissions: breakdown.total_commissions,
            vat_amount: Self::vat_amount(breakdown.total_commissions, vat.vat_percent, vat.apply_vat),
            required_amount: Self::required_amount(reservation, vat_override),
        }
    }

    /// Sums a sequence of nullable amounts, rounding the sum to 2 decimals.
    ///
    /// Rounding happens AFTER summing; parts are not pre-rounded.
    #[must_use]
    pub fn aggregate_amounts(values: &[Option<Decimal>]) -> Decimal {
        let sum: Decimal = values.iter().map(|v| Self::safe_amount(*v)).sum();
        Self::round_money(sum)
    }

    /// Derives the payment status from a reservation and its payments.
    #[must_use]
    pub fn payment_status(
        reservation: &ReservationFinancials,
        payment_amounts: &[Option<Decimal>],
        vat_override: Option<VatConfig>,
    ) -> PaymentStatus {
        let required = Self::required_amount(reservation, vat_override);
        let total_paid = Self::aggregate_amounts(payment_amounts);
        let pending = required - total_paid;

        if required <= Decimal::ZERO || pending <= Decimal::ZERO {
            PaymentStatus::Paid
        } else if total_paid > Decimal::ZERO {
            PaymentStatus::Partial
        } else {
            PaymentStatus::Pending
        }
    }

    /// Bundles required, paid, and pending amounts with the derived status.
    #[must_use]
    pub fn payment_summary(
        reservation: &ReservationFinancials,
        payment_amounts: &[Option<Decimal>],
        vat_override: Option<VatConfig>,
    ) -> PaymentSummary {
        let required_amount = Self::required_amount(reservation, vat_override);
        let total_paid = Self::aggregate_amounts(payment_amounts);
        let pending_amount = (required_amount - total_paid).max(Decimal::ZERO);

        PaymentSummary {
            required_amount,
            total_paid,
            pending_amount,
            status: Self::payment_status(reservation, payment_amounts, vat_override),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn reservation() -> ReservationFinancials {
        ReservationFinancials {
            total_amount: Some(dec!(1000)),
            channel_commission: Some(dec!(100)),
            collection_commission: Some(dec!(50)),
            vat: Some(VatConfig {
                apply_vat: true,
                vat_percent: dec!(21),
            }),
        }
    }

    #[test]
    fn test_commissions_sum_components() {
        let result = FinanceService::commissions(&reservation());

        assert_eq!(result.channel_commission, dec!(100));
        assert_eq!(result.collection_commission, dec!(50));
        assert_eq!(result.total_commissions, dec!(150));
    }

    #[test]
    fn test_commissions_missing_fields_are_zero() {
        let result = FinanceService::commissions(&ReservationFinancials::default());

        assert_eq!(result.channel_commission, Decimal::ZERO);
        assert_eq!(result.total_commissions, Decimal::ZERO);
    }

    #[test]
    fn test_vat_config_precedence() {
        let override_cfg = VatConfig {
            apply_vat: false,
            vat_percent: dec!(10),
        };

        assert_eq!(
            FinanceService::vat_config(&reservation(), Some(override_cfg)),
            override_cfg
        );
        assert_eq!(
            FinanceService::vat_config(&reservation(), None).vat_percent,
            dec!(21)
        );
        // No link, no override: defaults.
        let defaults = FinanceService::vat_config(&ReservationFinancials::default(), None);
        assert!(defaults.apply_vat);
        assert_eq!(defaults.vat_percent, dec!(21));
    }

    #[test]
    fn test_required_amount_worked_example() {
        // 1000 - 150 * 1.21 = 1000 - 181.5 = 818.5
        assert_eq!(
            FinanceService::required_amount(&reservation(), None),
            dec!(818.50)
        );
    }

    #[test]
    fn test_required_amount_without_vat() {
        let cfg = VatConfig {
            apply_vat: false,
            vat_percent: dec!(21),
        };
        assert_eq!(
            FinanceService::required_amount(&reservation(), Some(cfg)),
            dec!(850)
        );
    }

    #[test]
    fn test_required_amount_floors_at_zero() {
        let upside_down = ReservationFinancials {
            total_amount: Some(dec!(100)),
            channel_commission: Some(dec!(500)),
            collection_commission: None,
            vat: None,
        };
        assert_eq!(
            FinanceService::required_amount(&upside_down, None),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_vat_amount_zero_when_not_applied() {
        assert_eq!(
            FinanceService::vat_amount(dec!(150), dec!(21), false),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_vat_amount_rounds_half_up() {
        // 150 * 21% = 31.5
        assert_eq!(FinanceService::vat_amount(dec!(150), dec!(21), true), dec!(31.50));
        // 10.01 * 21% = 2.1021 -> 2.10
        assert_eq!(FinanceService::vat_amount(dec!(10.01), dec!(21), true), dec!(2.10));
        // 2.005 rounds up, not to even
        assert_eq!(FinanceService::vat_amount(dec!(100.25), dec!(2), true), dec!(2.01));
    }

    #[test]
    fn test_reservation_amounts_breakdown() {
        let amounts = FinanceService::reservation_amounts(&reservation(), None);

        assert_eq!(amounts.total_amount, dec!(1000));
        assert_eq!(amounts.total_commissions, dec!(150));
        assert_eq!(amounts.vat_amount, dec!(31.50));
        assert_eq!(amounts.required_amount, dec!(818.50));
    }

    #[test]
    fn test_aggregate_amounts_rounds_after_summing() {
        let result = FinanceService::aggregate_amounts(&[
            None,
            Some(dec!(5)),
            None,
            Some(dec!(2.005)),
        ]);
        // 5 + 2.005 = 7.005 -> 7.01 (rounded sum, not sum of rounded parts)
        assert_eq!(result, dec!(7.01));
    }

    #[test]
    fn test_aggregate_amounts_empty() {
        assert_eq!(FinanceService::aggregate_amounts(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_payment_status_paid_with_exact_payment() {
        let status =
            FinanceService::payment_status(&reservation(), &[Some(dec!(818.50))], None);
        assert_eq!(status, PaymentStatus::Paid);
    }

    #[test]
    fn test_payment_status_partial() {
        let status = FinanceService::payment_status(&reservation(), &[Some(dec!(400))], None);
        assert_eq!(status, PaymentStatus::Partial);
    }

    #[test]
    fn test_payment_status_pending_without_payments() {
        let status = FinanceService::payment_status(&reservation(), &[], None);
        assert_eq!(status, PaymentStatus::Pending);
    }

    #[test]
    fn test_payment_status_paid_when_nothing_required() {
        let zero = ReservationFinancials::default();
        assert_eq!(
            FinanceService::payment_status(&zero, &[], None),
            PaymentStatus::Paid
        );
    }

    #[test]
    fn test_payment_summary_pending_floored_at_zero() {
        let summary =
            FinanceService::payment_summary(&reservation(), &[Some(dec!(1000))], None);

        assert_eq!(summary.total_paid, dec!(1000));
        assert_eq!(summary.pending_amount, Decimal::ZERO);
        assert_eq!(summary.status, PaymentStatus::Paid);
    }

    #[test]
    fn test_payment_summary_partial_example() {
        let summary = FinanceService::payment_summary(&reservation(), &[Some(dec!(400))], None);

        assert_eq!(summary.required_amount, dec!(818.50));
        assert_eq!(summary.pending_amount, dec!(418.50));
        assert_eq!(summary.status, PaymentStatus::Partial);
    }
}
