use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Mount `/auth` routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/auth/login", post(handlers::auth::login))
}
