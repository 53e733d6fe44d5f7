//! People directory routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, patch, post},
};
use serde::Deserialize;
use std::str::FromStr;
use tracing::error;
use uuid::Uuid;

use crate::AppState;
use crate::response::{backend_failure, bad_request, not_found};
use rentora_core::people::PersonType;
use rentora_db::PersonRepository;
use rentora_db::repositories::person::{
    CreatePersonInput, PersonError, SearchPeopleParams, UpdatePersonInput,
};

/// Default and maximum result counts for directory searches.
const DEFAULT_SEARCH_LIMIT: u64 = 20;
const MAX_SEARCH_LIMIT: u64 = 50;

/// Creates the people directory routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/people", get(list_people))
        .route("/people", post(create_person))
        .route("/people/search", get(search_people))
        .route("/people/{id}", get(get_person))
        .route("/people/{id}", patch(update_person))
        .route("/people/{id}", delete(delete_person))
}

/// Query parameters for listing people.
#[derive(Debug, Deserialize)]
pub struct ListPeopleQuery {
    /// Person type to filter by.
    #[serde(rename = "type")]
    pub person_type: Option<String>,
}

/// Query parameters for searching people.
#[derive(Debug, Deserialize)]
pub struct SearchPeopleQuery {
    /// Search query; empty returns no results.
    #[serde(default)]
    pub query: String,
    /// Person type to scope the search to.
    #[serde(rename = "type")]
    pub person_type: Option<String>,
    /// Maximum number of results.
    pub limit: Option<u64>,
}

/// Request body for creating a person.
#[derive(Debug, Deserialize)]
pub struct CreatePersonRequest {
    /// Role of the record; one of guest/provider/distribution_channel/other.
    pub person_type: String,
    /// First name.
    pub first_name: Option<String>,
    /// Last name.
    pub last_name: Option<String>,
    /// Company name.
    pub company_name: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone.
    pub phone: Option<String>,
    /// Fiscal identifier.
    pub tax_id: Option<String>,
    /// Fiscal address.
    pub fiscal_address: Option<String>,
}

/// Request body for patching a person.
#[derive(Debug, Default, Deserialize)]
pub struct UpdatePersonRequest {
    /// New role.
    pub person_type: Option<String>,
    /// New first name.
    pub first_name: Option<String>,
    /// New last name.
    pub last_name: Option<String>,
    /// New company name.
    pub company_name: Option<String>,
    /// New contact email.
    pub email: Option<String>,
    /// New contact phone.
    pub phone: Option<String>,
    /// New fiscal identifier.
    pub tax_id: Option<String>,
    /// New fiscal address.
    pub fiscal_address: Option<String>,
}

fn repo_failure(e: &PersonError) -> axum::response::Response {
    error!(error = %e, "People directory backend failure");
    backend_failure(e.to_string())
}

fn person_not_found() -> axum::response::Response {
    not_found("Persona no encontrada")
}

/// GET /people - list people, most recently updated first.
#[axum::debug_handler]
async fn list_people(
    State(state): State<AppState>,
    Query(query): Query<ListPeopleQuery>,
) -> impl IntoResponse {
    let person_type = match query.person_type.as_deref().map(PersonType::from_str) {
        None => None,
        Some(Ok(pt)) => Some(pt),
        Some(Err(_)) => return bad_request("Tipo de persona no válido"),
    };

    let repo = PersonRepository::new((*state.db).clone());
    match repo.list(person_type).await {
        Ok(people) => (StatusCode::OK, Json(people)).into_response(),
        Err(e) => repo_failure(&e),
    }
}

/// POST /people - create a person record.
#[axum::debug_handler]
async fn create_person(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    let Ok(request) = serde_json::from_value::<CreatePersonRequest>(body) else {
        return bad_request("Datos de persona no válidos");
    };
    let Ok(person_type) = PersonType::from_str(&request.person_type) else {
        return bad_request("Tipo de persona no válido");
    };

    let repo = PersonRepository::new((*state.db).clone());
    let input = CreatePersonInput {
        person_type: Some(person_type),
        first_name: request.first_name,
        last_name: request.last_name,
        company_name: request.company_name,
        email: request.email,
        phone: request.phone,
        tax_id: request.tax_id,
        fiscal_address: request.fiscal_address,
    };

    match repo.create(input).await {
        Ok(person) => (StatusCode::CREATED, Json(person)).into_response(),
        Err(PersonError::Validation(e)) => bad_request(&e.to_string()),
        Err(e) => repo_failure(&e),
    }
}

/// GET `/people/{id}` - fetch a single person.
#[axum::debug_handler]
async fn get_person(State(state): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    let repo = PersonRepository::new((*state.db).clone());
    match repo.find_by_id(id).await {
        Ok(Some(person)) => (StatusCode::OK, Json(person)).into_response(),
        Ok(None) => person_not_found(),
        Err(e) => repo_failure(&e),
    }
}

/// PATCH `/people/{id}` - apply a partial update.
#[axum::debug_handler]
async fn update_person(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    let Ok(request) = serde_json::from_value::<UpdatePersonRequest>(body) else {
        return bad_request("Datos de persona no válidos");
    };
    let person_type = match request.person_type.as_deref().map(PersonType::from_str) {
        None => None,
        Some(Ok(pt)) => Some(pt),
        Some(Err(_)) => return bad_request("Tipo de persona no válido"),
    };

    let repo = PersonRepository::new((*state.db).clone());
    let patch = UpdatePersonInput {
        person_type,
        first_name: request.first_name,
        last_name: request.last_name,
        company_name: request.company_name,
        email: request.email,
        phone: request.phone,
        tax_id: request.tax_id,
        fiscal_address: request.fiscal_address,
    };

    match repo.update(id, patch).await {
        Ok(person) => (StatusCode::OK, Json(person)).into_response(),
        Err(PersonError::NotFound(_)) => person_not_found(),
        Err(e) => repo_failure(&e),
    }
}

/// DELETE `/people/{id}` - hard-delete a person.
#[axum::debug_handler]
async fn delete_person(State(state): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    let repo = PersonRepository::new((*state.db).clone());
    match repo.delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(PersonError::NotFound(_)) => person_not_found(),
        Err(e) => repo_failure(&e),
    }
}

/// GET /people/search - case-insensitive substring search.
#[axum::debug_handler]
async fn search_people(
    State(state): State<AppState>,
    Query(query): Query<SearchPeopleQuery>,
) -> impl IntoResponse {
    let person_type = match query.person_type.as_deref().map(PersonType::from_str) {
        None => None,
        Some(Ok(pt)) => Some(pt),
        Some(Err(_)) => return bad_request("Tipo de persona no válido"),
    };
    let limit = query
        .limit
        .unwrap_or(DEFAULT_SEARCH_LIMIT)
        .min(MAX_SEARCH_LIMIT);

    let repo = PersonRepository::new((*state.db).clone());
    match repo
        .search(SearchPeopleParams {
            query: query.query,
            person_type,
            limit,
        })
        .await
    {
        Ok(people) => (StatusCode::OK, Json(people)).into_response(),
        Err(e) => repo_failure(&e),
    }
}
