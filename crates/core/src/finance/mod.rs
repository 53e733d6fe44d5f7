//! VAT-aware reservation arithmetic.
//!
//! Pure calculations turning a reservation's stored totals into commission
//! breakdowns, VAT amounts, the required payment amount, and a payment status.
//! Nothing here fails: missing numeric inputs degrade to zero.

pub mod service;
pub mod types;

#[cfg(test)]
mod props;

pub use service::FinanceService;
pub use types::{
    CommissionBreakdown, PaymentStatus, PaymentSummary, ReservationAmounts,
    ReservationFinancials, VatConfig,
};
