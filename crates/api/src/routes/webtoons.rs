use axum::routing::get;
use axum::Router;

use crate::handlers::webtoons;
use crate::state::AppState;

/// Webtoon resource routes.
///
/// ```text
/// GET    /webtoons        -> list_webtoons
/// POST   /webtoons        -> create_webtoon (auth required)
/// GET    /webtoons/{id}   -> get_webtoon
/// DELETE /webtoons/{id}   -> delete_webtoon (auth required)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/webtoons",
            get(webtoons::list_webtoons).post(webtoons::create_webtoon),
        )
        .route(
            "/webtoons/{id}",
            get(webtoons::get_webtoon).delete(webtoons::delete_webtoon),
        )
}
