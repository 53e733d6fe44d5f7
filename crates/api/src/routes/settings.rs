//! Tenant settings routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use crate::AppState;
use crate::response::{backend_failure, bad_request, not_found};
use rentora_db::SettingRepository;
use rentora_shared::TenantId;

/// Creates the settings routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/settings/{key}", get(get_setting))
}

/// Query parameters for a setting lookup.
#[derive(Debug, Deserialize)]
pub struct SettingQuery {
    /// Tenant scope.
    pub tenant_id: i32,
}

/// GET `/settings/{key}` - typed lookup of a tenant setting.
#[axum::debug_handler]
async fn get_setting(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(query): Query<SettingQuery>,
) -> impl IntoResponse {
    let tenant_id = TenantId::new(query.tenant_id);
    if !tenant_id.is_valid() {
        return bad_request("Identificador de cuenta no válido");
    }

    let repo = SettingRepository::new((*state.db).clone());
    match repo.get_value(tenant_id, &key).await {
        Ok(Some(value)) => {
            (StatusCode::OK, Json(json!({ "key": key, "values": value }))).into_response()
        }
        Ok(None) => not_found("Configuración no encontrada"),
        Err(e) => {
            error!(error = %e, key, "Failed to load setting");
            backend_failure(e.to_string())
        }
    }
}
