//! Cookie-based session extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use blogsphere_core::document::Document;
use blogsphere_core::error::CoreError;

use crate::auth::cookie::{read_cookie, SESSION_COOKIE_NAME};
use crate::auth::jwt::verify_token;
use crate::error::AppError;
use crate::state::AppState;

/// Identity of the caller, decoded from a valid `token` cookie.
///
/// Use this as an extractor parameter in any handler that requires a session:
///
/// ```ignore
/// async fn my_handler(user: SessionUser) -> AppResult<Json<Document>> {
///     Ok(Json(user.identity))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SessionUser {
    /// The payload supplied when the token was issued.
    pub identity: Document,
}

impl FromRequestParts<AppState> for SessionUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = read_cookie(&parts.headers, SESSION_COOKIE_NAME).ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Missing session cookie".into()))
        })?;

        let identity = verify_token(token, &state.config.jwt).map_err(|e| {
            tracing::debug!(error = %e, "Rejected session token");
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(SessionUser { identity })
    }
}
