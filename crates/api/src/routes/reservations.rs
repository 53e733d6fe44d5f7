//! Reservation routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde_json::json;
use tracing::error;
use uuid::Uuid;

use crate::AppState;
use crate::response::{backend_failure, not_found};
use rentora_core::finance::FinanceService;
use rentora_db::ReservationRepository;

/// Creates the reservation routes.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/reservations/{id}/payment-summary",
        get(get_payment_summary),
    )
}

/// GET `/reservations/{id}/payment-summary`
///
/// Returns the reservation's amount breakdown together with its payment
/// position, computed from the stored amounts, the property-channel VAT
/// settings, and the registered payments.
#[axum::debug_handler]
async fn get_payment_summary(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = ReservationRepository::new((*state.db).clone());

    let (reservation, payments) = match repo.find_with_payments(id).await {
        Ok(Some(found)) => found,
        Ok(None) => {
            return not_found("Reserva no encontrada");
        }
        Err(e) => {
            error!(error = %e, "Failed to fetch reservation");
            return backend_failure(e.to_string());
        }
    };

    let vat = match repo.vat_config(&reservation).await {
        Ok(v) => v,
        Err(e) => {
            error!(error = %e, "Failed to resolve VAT settings");
            return backend_failure(e.to_string());
        }
    };

    let financials = ReservationRepository::financials(&reservation, vat);
    let payment_amounts: Vec<_> = payments.iter().map(|p| p.amount).collect();

    let amounts = FinanceService::reservation_amounts(&financials, None);
    let summary = FinanceService::payment_summary(&financials, &payment_amounts, None);

    (
        StatusCode::OK,
        Json(json!({
            "reservation_id": reservation.id,
            "status": reservation.status,
            "amounts": amounts,
            "payments": summary,
        })),
    )
        .into_response()
}
