//! Handlers for the session cookie (issue, clear, inspect).

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::response::IntoResponse;
use axum::Json;
use blogsphere_core::document::{into_document, Document};
use serde::Serialize;

use crate::auth::cookie::{clear_session_cookie, session_cookie, CookiePolicy};
use crate::auth::jwt::issue_token;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::SessionUser;
use crate::state::AppState;

/// Body returned by issue and clear.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// POST /jwt
///
/// Sign the request body (any JSON object) into a session token and set it
/// as the `token` cookie.
pub async fn issue(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> AppResult<impl IntoResponse> {
    let identity = into_document(body)?;

    let token = issue_token(&identity, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let cookie = session_cookie(
        &token,
        state.config.jwt.session_ttl_secs(),
        CookiePolicy::for_mode(state.config.mode),
    );

    Ok(([(SET_COOKIE, cookie)], Json(SuccessResponse { success: true })))
}

/// GET /logout
///
/// Tell the client to drop its session cookie. The token itself stays
/// valid until it expires; nothing is revoked server-side.
pub async fn clear(State(state): State<AppState>) -> impl IntoResponse {
    let cookie = clear_session_cookie(CookiePolicy::for_mode(state.config.mode));
    ([(SET_COOKIE, cookie)], Json(SuccessResponse { success: true }))
}

/// GET /session
///
/// Return the identity payload of the caller's active session.
pub async fn current(user: SessionUser) -> Json<Document> {
    Json(user.identity)
}
