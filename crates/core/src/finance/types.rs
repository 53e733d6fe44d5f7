//! Financial calculation data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// VAT settings applied to commission amounts.
///
/// Inherited from a reservation's property-channel link; defaults to Spanish
/// general VAT when the link carries no settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VatConfig {
    /// Whether VAT is applied to commissions.
    pub apply_vat: bool,
    /// VAT percentage (e.g., 21 for 21%).
    pub vat_percent: Decimal,
}

impl Default for VatConfig {
    fn default() -> Self {
        Self {
            apply_vat: true,
            vat_percent: Decimal::new(21, 0),
        }
    }
}

/// The financial fields of a reservation, as stored.
///
/// Every amount is optional: the calculator treats missing values as zero
/// rather than failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReservationFinancials {
    /// Total reservation amount.
    pub total_amount: Option<Decimal>,
    /// Commission charged by the distribution channel.
    pub channel_commission: Option<Decimal>,
    /// Commission charged for payment collection.
    pub collection_commission: Option<Decimal>,
    /// VAT settings from the property-channel link, when present.
    pub vat: Option<VatConfig>,
}

/// Commission components of a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionBreakdown {
    /// Channel commission (zero when missing).
    pub channel_commission: Decimal,
    /// Collection commission (zero when missing).
    pub collection_commission: Decimal,
    /// Sum of both commission components.
    pub total_commissions: Decimal,
}

/// Full amount breakdown for a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationAmounts {
    /// Total reservation amount.
    pub total_amount: Decimal,
    /// Channel commission.
    pub channel_commission: Decimal,
    /// Collection commission.
    pub collection_commission: Decimal,
    /// Sum of both commission components.
    pub total_commissions: Decimal,
    /// VAT charged on commissions (zero when VAT is off).
    pub vat_amount: Decimal,
    /// Amount the operator must collect, floored at zero.
    pub required_amount: Decimal,
}

/// Payment status of a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Required amount fully covered (or nothing required).
    Paid,
    /// Some payment registered, but an amount remains pending.
    Partial,
    /// No payment registered yet.
    Pending,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Paid => write!(f, "paid"),
            Self::Partial => write!(f, "partial"),
            Self::Pending => write!(f, "pending"),
        }
    }
}

/// Summary of a reservation's payment position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSummary {
    /// Amount required to consider the reservation paid.
    pub required_amount: Decimal,
    /// Cumulative paid amount.
    pub total_paid: Decimal,
    /// Remaining amount, floored at zero.
    pub pending_amount: Decimal,
    /// Derived payment status.
    pub status: PaymentStatus,
}
