//! Distribution channel routes.

use axum::{
    Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post,
};
use serde::Deserialize;
use serde_json::json;
use tracing::error;
use uuid::Uuid;

use crate::AppState;
use rentora_db::ChannelRepository;

/// Creates the channel routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/_link-channel-person", post(link_channel_person))
}

/// Request body for linking a channel to a person record.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkChannelPersonRequest {
    /// Channel to update.
    pub channel_id: Option<Uuid>,
    /// Person record to point the channel at.
    pub person_id: Option<Uuid>,
}

/// POST /_link-channel-person
///
/// Updates a distribution channel's person reference. Responds with the
/// `{ok: bool}` contract: 400 when either id is missing, 500 on backend
/// failure, 200 on success.
#[axum::debug_handler]
async fn link_channel_person(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    let request: LinkChannelPersonRequest = serde_json::from_value(body).unwrap_or_default();

    let (Some(channel_id), Some(person_id)) = (request.channel_id, request.person_id) else {
        return (StatusCode::BAD_REQUEST, Json(json!({ "ok": false }))).into_response();
    };

    let repo = ChannelRepository::new((*state.db).clone());
    match repo.link_person(channel_id, person_id).await {
        Ok(_) => (StatusCode::OK, Json(json!({ "ok": true }))).into_response(),
        Err(e) => {
            error!(error = %e, %channel_id, %person_id, "Failed to link channel to person");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "ok": false })),
            )
                .into_response()
        }
    }
}
