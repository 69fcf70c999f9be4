//! Handler for the development token issuer.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::auth::jwt;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Username embedded in development tokens.
const DEV_USERNAME: &str = "testUser";

/// Response body for `GET /generate-token`.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// GET /generate-token
///
/// Issue a short-lived signed token for exercising the protected routes.
/// The endpoint is itself unauthenticated: a development aid, not an
/// authentication flow.
pub async fn generate_token(State(state): State<AppState>) -> AppResult<Json<TokenResponse>> {
    let token = jwt::generate_token(DEV_USERNAME, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token signing error: {e}")))?;

    Ok(Json(TokenResponse { token }))
}
