//! Report routes.

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use tracing::error;
use uuid::Uuid;
use validator::Validate;

use crate::AppState;
use rentora_core::reports::{OverviewFilter, OverviewMetrics, OverviewService};
use rentora_db::ReservationRepository;
use rentora_shared::TenantId;

/// Creates the report routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/reports/overview", post(generate_overview))
}

/// Request body for the overview report.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OverviewRequest {
    /// Tenant scope; must be positive.
    #[validate(range(min = 1))]
    pub tenant_id: i32,
    /// Optional property to narrow to.
    pub property_id: Option<Uuid>,
    /// Range start, `YYYY-MM-DD`.
    pub date_from: String,
    /// Range end, `YYYY-MM-DD`.
    pub date_to: String,
    /// Optional distribution-channel name to narrow to.
    pub channel: Option<String>,
}

/// Decodes and validates a raw request body into an overview filter.
///
/// # Errors
///
/// Returns a description of the first problem found: body shape, field
/// ranges, date format, or a reversed range.
pub fn parse_overview_filter(body: &[u8]) -> Result<OverviewFilter, String> {
    let request: OverviewRequest =
        serde_json::from_slice(body).map_err(|e| format!("invalid body: {e}"))?;
    request
        .validate()
        .map_err(|e| format!("invalid fields: {e}"))?;

    let date_from = parse_date(&request.date_from)?;
    let date_to = parse_date(&request.date_to)?;

    let filter = OverviewFilter {
        tenant_id: TenantId::new(request.tenant_id),
        property_id: request.property_id,
        date_from,
        date_to,
        channel: request.channel,
    };
    OverviewService::validate_filter(&filter).map_err(|e| e.to_string())?;

    Ok(filter)
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| format!("invalid date {raw:?}: {e}"))
}

/// POST /reports/overview
///
/// Every failure, body shape and validation included, deliberately maps to
/// the same 500 response; see DESIGN.md on the inherited error contract.
#[axum::debug_handler]
async fn generate_overview(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    match compute_overview(&state, &body).await {
        Ok(metrics) => (StatusCode::OK, Json(metrics)).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to generate overview report");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "Error generating report" })),
            )
                .into_response()
        }
    }
}

async fn compute_overview(state: &AppState, body: &[u8]) -> Result<OverviewMetrics, String> {
    let filter = parse_overview_filter(body)?;

    let reservation_repo = ReservationRepository::new((*state.db).clone());
    let snapshots = reservation_repo
        .overview_rows(&filter)
        .await
        .map_err(|e| e.to_string())?;

    Ok(OverviewService::compute(&snapshots))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::parse_overview_filter;

    fn body(tenant_id: i32, date_from: &str, date_to: &str) -> Vec<u8> {
        serde_json::json!({
            "tenantId": tenant_id,
            "dateFrom": date_from,
            "dateTo": date_to,
        })
        .to_string()
        .into_bytes()
    }

    #[test]
    fn accepts_well_formed_request() {
        let filter = parse_overview_filter(&body(1, "2026-07-01", "2026-07-31"))
            .expect("should parse");
        assert_eq!(filter.tenant_id.into_inner(), 1);
        assert!(filter.property_id.is_none());
    }

    #[rstest]
    #[case(-1, "2026-07-01", "2026-07-31")] // negative tenant
    #[case(0, "2026-07-01", "2026-07-31")] // zero tenant
    #[case(1, "07/01/2026", "2026-07-31")] // bad date format
    #[case(1, "2026-08-01", "2026-07-01")] // reversed range
    fn rejects_invalid_requests(
        #[case] tenant_id: i32,
        #[case] date_from: &str,
        #[case] date_to: &str,
    ) {
        assert!(parse_overview_filter(&body(tenant_id, date_from, date_to)).is_err());
    }

    #[test]
    fn rejects_malformed_body() {
        assert!(parse_overview_filter(b"not json").is_err());
        assert!(parse_overview_filter(br#"{"tenantId": "one"}"#).is_err());
    }

    #[test]
    fn accepts_camel_case_optionals() {
        let raw = serde_json::json!({
            "tenantId": 3,
            "propertyId": "8e7a4df2-4f5b-4f4a-9a8e-0d1e6f2a3b4c",
            "dateFrom": "2026-01-01",
            "dateTo": "2026-12-31",
            "channel": "Booking",
        })
        .to_string();
        let filter = parse_overview_filter(raw.as_bytes()).expect("should parse");
        assert!(filter.property_id.is_some());
        assert_eq!(filter.channel.as_deref(), Some("Booking"));
    }
}
