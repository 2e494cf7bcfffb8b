use axum::routing::get;
use axum::Router;

use crate::handlers::customers;
use crate::state::AppState;

/// Mount `/customers` routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/customers", get(customers::list).post(customers::create))
        .route(
            "/customers/{id}",
            get(customers::get_by_id)
                .put(customers::update)
                .delete(customers::delete),
        )
}
