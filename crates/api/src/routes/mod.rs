pub mod health;
pub mod token;
pub mod webtoons;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// /health             service + store health
/// /webtoons           list (GET), create (POST, auth required)
/// /webtoons/{id}      fetch (GET), delete (DELETE, auth required)
/// /generate-token     development token issuer
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(token::router())
        .merge(webtoons::router())
}
