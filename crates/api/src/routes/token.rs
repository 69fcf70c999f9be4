use axum::routing::get;
use axum::Router;

use crate::handlers::token;
use crate::state::AppState;

/// Development token route.
///
/// ```text
/// GET /generate-token -> generate_token
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/generate-token", get(token::generate_token))
}
