use axum::routing::post;
use axum::Router;

use crate::handlers::availability;
use crate::state::AppState;

/// Mount `/availability` routes.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/availability/reconcile",
        post(availability::reconcile),
    )
}
