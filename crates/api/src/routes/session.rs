//! Route definitions for the session cookie.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::session;
use crate::state::AppState;

/// ```text
/// POST /jwt      -> issue
/// GET  /logout   -> clear
/// ```
pub fn public() -> Router<AppState> {
    Router::new()
        .route("/jwt", post(session::issue))
        .route("/logout", get(session::clear))
}

/// ```text
/// GET  /session  -> current
/// ```
pub fn protected() -> Router<AppState> {
    Router::new().route("/session", get(session::current))
}
