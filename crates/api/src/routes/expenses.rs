//! Expense routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, patch, post},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use std::str::FromStr;
use tracing::error;
use uuid::Uuid;

use crate::AppState;
use crate::response::{backend_failure, bad_request, not_found};
use rentora_core::expenses::{
    DatePreset, ExpenseFilter, ExpenseStatus, ExpenseView, SortDirection, SortKey,
};
use rentora_db::ExpenseRepository;
use rentora_db::repositories::expense::{CreateExpenseInput, ExpenseError, UpdateExpenseInput};
use rentora_shared::TenantId;

/// Creates the expense routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/expenses", get(list_expenses))
        .route("/expenses", post(create_expense))
        .route("/expenses/categories", get(list_categories))
        .route("/expenses/{id}", patch(update_expense))
        .route("/expenses/{id}", delete(delete_expense))
}

/// Query parameters for the expense list.
#[derive(Debug, Deserialize)]
pub struct ExpenseListQuery {
    /// Tenant scope.
    pub tenant_id: i32,
    /// Substring search across description, vendor, and category names.
    pub search: Option<String>,
    /// Status equality filter.
    pub status: Option<String>,
    /// Category equality filter.
    pub category_id: Option<Uuid>,
    /// Subcategory equality filter.
    pub subcategory_id: Option<Uuid>,
    /// Relative range preset: today/week/month/year.
    pub range: Option<String>,
    /// Absolute calendar-year filter.
    pub year: Option<i32>,
    /// Sort field: date/amount/description.
    pub sort: Option<String>,
    /// Sort direction: asc/desc.
    pub direction: Option<String>,
}

/// Request body for creating an expense.
#[derive(Debug, Deserialize)]
pub struct CreateExpenseRequest {
    /// Tenant scope.
    pub tenant_id: i32,
    /// Free-text description.
    pub description: String,
    /// Expense amount.
    pub amount: Option<Decimal>,
    /// Expense date.
    pub expense_date: NaiveDate,
    /// Lifecycle status; defaults to pending.
    pub status: Option<String>,
    /// Category reference.
    pub category_id: Option<Uuid>,
    /// Subcategory reference.
    pub subcategory_id: Option<Uuid>,
    /// Vendor (person) reference.
    pub vendor_id: Option<Uuid>,
    /// Linked reservation.
    pub reservation_id: Option<Uuid>,
    /// Whether the expense recurs periodically.
    #[serde(default)]
    pub is_recurring: bool,
}

/// Request body for patching an expense.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateExpenseRequest {
    /// New description.
    pub description: Option<String>,
    /// New amount.
    pub amount: Option<Decimal>,
    /// New expense date.
    pub expense_date: Option<NaiveDate>,
    /// New status.
    pub status: Option<String>,
    /// New category reference.
    pub category_id: Option<Uuid>,
    /// New subcategory reference.
    pub subcategory_id: Option<Uuid>,
    /// New vendor reference.
    pub vendor_id: Option<Uuid>,
    /// New recurring flag.
    pub is_recurring: Option<bool>,
}

fn repo_failure(e: &ExpenseError) -> axum::response::Response {
    error!(error = %e, "Expense backend failure");
    backend_failure(e.to_string())
}

fn parse_filter(query: &ExpenseListQuery) -> Result<ExpenseFilter, axum::response::Response> {
    let status = match query.status.as_deref().map(ExpenseStatus::from_str) {
        None => None,
        Some(Ok(s)) => Some(s),
        Some(Err(_)) => return Err(bad_request("Estado de gasto no válido")),
    };
    let date_preset = match query.range.as_deref().map(DatePreset::from_str) {
        None => None,
        Some(Ok(p)) => Some(p),
        Some(Err(_)) => return Err(bad_request("Rango de fechas no válido")),
    };
    let sort_key = match query.sort.as_deref().map(SortKey::from_str) {
        None => SortKey::default(),
        Some(Ok(k)) => k,
        Some(Err(_)) => return Err(bad_request("Orden no válido")),
    };
    let sort_direction = match query.direction.as_deref().map(SortDirection::from_str) {
        None => SortDirection::default(),
        Some(Ok(d)) => d,
        Some(Err(_)) => return Err(bad_request("Dirección de orden no válida")),
    };

    Ok(ExpenseFilter {
        search: query.search.clone(),
        status,
        category_id: query.category_id,
        subcategory_id: query.subcategory_id,
        date_preset,
        year: query.year,
        sort_key,
        sort_direction,
    })
}

/// GET /expenses - filtered and sorted expense list with its summary.
#[axum::debug_handler]
async fn list_expenses(
    State(state): State<AppState>,
    Query(query): Query<ExpenseListQuery>,
) -> impl IntoResponse {
    let tenant_id = TenantId::new(query.tenant_id);
    if !tenant_id.is_valid() {
        return bad_request("Identificador de cuenta no válido");
    }
    let filter = match parse_filter(&query) {
        Ok(f) => f,
        Err(response) => return response,
    };

    let repo = ExpenseRepository::new((*state.db).clone());
    let records = match repo.list_records(tenant_id).await {
        Ok(r) => r,
        Err(e) => return repo_failure(&e),
    };
    let categories = match repo.categories().await {
        Ok(c) => c,
        Err(e) => return repo_failure(&e),
    };
    let subcategories = match repo.subcategories().await {
        Ok(c) => c,
        Err(e) => return repo_failure(&e),
    };

    let today = chrono::Utc::now().date_naive();
    let expenses =
        ExpenseView::filter_and_sort(&records, &filter, &categories, &subcategories, today);
    let summary = ExpenseView::summarize(&expenses);

    (
        StatusCode::OK,
        Json(json!({ "expenses": expenses, "summary": summary })),
    )
        .into_response()
}

/// POST /expenses - create an expense.
#[axum::debug_handler]
async fn create_expense(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    let Ok(request) = serde_json::from_value::<CreateExpenseRequest>(body) else {
        return bad_request("Datos de gasto no válidos");
    };
    let tenant_id = TenantId::new(request.tenant_id);
    if !tenant_id.is_valid() {
        return bad_request("Identificador de cuenta no válido");
    }
    let status = match request.status.as_deref().map(ExpenseStatus::from_str) {
        None => ExpenseStatus::Pending,
        Some(Ok(s)) => s,
        Some(Err(_)) => return bad_request("Estado de gasto no válido"),
    };

    let repo = ExpenseRepository::new((*state.db).clone());
    let input = CreateExpenseInput {
        tenant_id,
        description: request.description,
        amount: request.amount,
        expense_date: request.expense_date,
        status,
        category_id: request.category_id,
        subcategory_id: request.subcategory_id,
        vendor_id: request.vendor_id,
        reservation_id: request.reservation_id,
        is_recurring: request.is_recurring,
    };

    match repo.create(input).await {
        Ok(expense) => (StatusCode::CREATED, Json(expense)).into_response(),
        Err(e) => repo_failure(&e),
    }
}

/// PATCH `/expenses/{id}` - apply a partial update.
#[axum::debug_handler]
async fn update_expense(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    let Ok(request) = serde_json::from_value::<UpdateExpenseRequest>(body) else {
        return bad_request("Datos de gasto no válidos");
    };
    let status = match request.status.as_deref().map(ExpenseStatus::from_str) {
        None => None,
        Some(Ok(s)) => Some(s),
        Some(Err(_)) => return bad_request("Estado de gasto no válido"),
    };

    let repo = ExpenseRepository::new((*state.db).clone());
    let patch = UpdateExpenseInput {
        description: request.description,
        amount: request.amount.map(Some),
        expense_date: request.expense_date,
        status,
        category_id: request.category_id.map(Some),
        subcategory_id: request.subcategory_id.map(Some),
        vendor_id: request.vendor_id.map(Some),
        is_recurring: request.is_recurring,
    };

    match repo.update(id, patch).await {
        Ok(expense) => (StatusCode::OK, Json(expense)).into_response(),
        Err(ExpenseError::NotFound(_)) => not_found("Gasto no encontrado"),
        Err(e) => repo_failure(&e),
    }
}

/// DELETE `/expenses/{id}` - hard-delete an expense.
#[axum::debug_handler]
async fn delete_expense(State(state): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    let repo = ExpenseRepository::new((*state.db).clone());
    match repo.delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(ExpenseError::NotFound(_)) => not_found("Gasto no encontrado"),
        Err(e) => repo_failure(&e),
    }
}

/// GET /expenses/categories - category and subcategory reference lists.
#[axum::debug_handler]
async fn list_categories(State(state): State<AppState>) -> impl IntoResponse {
    let repo = ExpenseRepository::new((*state.db).clone());
    let categories = match repo.categories().await {
        Ok(c) => c,
        Err(e) => return repo_failure(&e),
    };
    let subcategories = match repo.subcategories().await {
        Ok(c) => c,
        Err(e) => return repo_failure(&e),
    };

    (
        StatusCode::OK,
        Json(json!({ "categories": categories, "subcategories": subcategories })),
    )
        .into_response()
}
