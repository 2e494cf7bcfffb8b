use axum::routing::get;
use axum::Router;

use crate::handlers::reservations;
use crate::state::AppState;

/// Mount `/reservations` routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/reservations",
            get(reservations::list).post(reservations::create),
        )
        .route(
            "/reservations/{id}",
            get(reservations::get_by_id)
                .put(reservations::update)
                .delete(reservations::delete),
        )
}
