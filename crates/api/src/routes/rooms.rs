use axum::routing::get;
use axum::Router;

use crate::handlers::rooms;
use crate::state::AppState;

/// Mount `/rooms` routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/rooms", get(rooms::list).post(rooms::create))
        .route(
            "/rooms/{number}",
            get(rooms::get_by_number)
                .put(rooms::update)
                .delete(rooms::delete),
        )
}
