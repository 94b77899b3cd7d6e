//! Route definitions for blog posts.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::blogs;
use crate::state::AppState;

/// ```text
/// GET  /blogs         -> list_all
/// GET  /blogs/{id}    -> get_by_id
/// GET  /view/{id}     -> get_by_id
/// GET  /all-blogs     -> list_page
/// GET  /blogs-count   -> count
/// ```
pub fn public() -> Router<AppState> {
    Router::new()
        .route("/blogs", get(blogs::list_all))
        .route("/blogs/{id}", get(blogs::get_by_id))
        .route("/view/{id}", get(blogs::get_by_id))
        .route("/all-blogs", get(blogs::list_page))
        .route("/blogs-count", get(blogs::count))
}

/// ```text
/// POST /blog          -> create
/// ```
pub fn writes() -> Router<AppState> {
    Router::new().route("/blog", post(blogs::create))
}
