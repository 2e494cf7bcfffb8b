pub mod auth;
pub mod availability;
pub mod customers;
pub mod health;
pub mod hotels;
pub mod reservations;
pub mod rooms;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                      login (public)
///
/// /hotels                          list, create
/// /hotels/{id}                     get, update, delete
///
/// /rooms                           list, create
/// /rooms/{number}                  get, update, delete
///
/// /customers                       list, create
/// /customers/{id}                  get, update, delete
///
/// /reservations                    list, create
/// /reservations/{id}               get, update, delete
///
/// /availability/reconcile          recompute room flags (POST)
/// ```
///
/// Everything except `/auth/login` requires a Bearer token (enforced per
/// handler via the `AuthUser` extractor).
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(hotels::router())
        .merge(rooms::router())
        .merge(customers::router())
        .merge(reservations::router())
        .merge(availability::router())
}
