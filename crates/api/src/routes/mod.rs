//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod channels;
pub mod expenses;
pub mod health;
pub mod people;
pub mod reports;
pub mod reservations;
pub mod settings;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(people::routes())
        .merge(reports::routes())
        .merge(channels::routes())
        .merge(expenses::routes())
        .merge(reservations::routes())
        .merge(settings::routes())
}
