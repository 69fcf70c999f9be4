//! Handlers for the `/webtoons` resource.
//!
//! Reads are public; create and delete require authentication via
//! [`AuthUser`]. The authorization gate runs before payload validation,
//! which in turn runs before any store access.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use toonvault_core::error::CoreError;
use toonvault_core::types::DbId;
use toonvault_db::models::webtoon::{CreateWebtoon, Webtoon};
use toonvault_db::repositories::WebtoonRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Response body for `DELETE /webtoons/{id}`.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Parse a path segment into a store key, so malformed identifiers are
/// rejected with 400 before the store is consulted.
fn parse_id(raw: &str) -> Result<DbId, AppError> {
    raw.parse::<DbId>().map_err(|_| {
        AppError::Core(CoreError::InvalidId {
            entity: "webtoon",
            value: raw.to_string(),
        })
    })
}

/// GET /webtoons
///
/// List all webtoons in the store's insertion order.
pub async fn list_webtoons(State(state): State<AppState>) -> AppResult<Json<Vec<Webtoon>>> {
    let webtoons = WebtoonRepo::list_all(&state.pool).await?;

    Ok(Json(webtoons))
}

/// GET /webtoons/{id}
///
/// Fetch a single webtoon by id.
pub async fn get_webtoon(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Webtoon>> {
    let id = parse_id(&id)?;

    let webtoon = WebtoonRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Webtoon",
            id,
        }))?;

    Ok(Json(webtoon))
}

/// POST /webtoons (auth required)
///
/// Validate and create a webtoon, returning the created record with its
/// assigned id.
pub async fn create_webtoon(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateWebtoon>,
) -> AppResult<(StatusCode, Json<Webtoon>)> {
    let draft = input.validate().map_err(AppError::Validation)?;

    // Insert failures surface as client errors on this route: the only
    // remaining cause for a validated draft is a payload the schema
    // constraints reject.
    let webtoon = WebtoonRepo::insert(&state.pool, &draft)
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    tracing::info!(webtoon_id = webtoon.id, username = %auth.username, "Webtoon created");

    Ok((StatusCode::CREATED, Json(webtoon)))
}

/// DELETE /webtoons/{id} (auth required)
///
/// Delete a webtoon by id.
pub async fn delete_webtoon(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_id(&id)?;

    let deleted = WebtoonRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Webtoon",
            id,
        }));
    }

    tracing::info!(webtoon_id = id, username = %auth.username, "Webtoon deleted");

    Ok(Json(MessageResponse {
        message: "Webtoon deleted",
    }))
}
