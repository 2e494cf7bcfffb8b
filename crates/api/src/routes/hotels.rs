use axum::routing::get;
use axum::Router;

use crate::handlers::hotels;
use crate::state::AppState;

/// Mount `/hotels` routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/hotels", get(hotels::list).post(hotels::create))
        .route(
            "/hotels/{id}",
            get(hotels::get_by_id)
                .put(hotels::update)
                .delete(hotels::delete),
        )
}
