//! Route definitions for wish-list entries.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::wishes;
use crate::state::AppState;

/// ```text
/// GET    /wish/{id}        -> list_by_email
/// GET    /wish-find/{id}   -> list_by_user
/// ```
pub fn public() -> Router<AppState> {
    Router::new()
        .route("/wish/{id}", get(wishes::list_by_email))
        .route("/wish-find/{id}", get(wishes::list_by_user))
}

/// ```text
/// POST   /wish-create      -> create
/// DELETE /wishes/{id}      -> delete
/// ```
pub fn writes() -> Router<AppState> {
    Router::new()
        .route("/wish-create", post(wishes::create))
        .route("/wishes/{id}", delete(wishes::delete))
}
