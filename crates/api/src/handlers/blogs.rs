//! Handlers for blog posts.

use axum::extract::{Path, Query, State};
use axum::Json;
use blogsphere_core::document::{into_document, Document};
use blogsphere_core::error::CoreError;
use blogsphere_db::models::InsertOneResult;
use blogsphere_db::repositories::BlogRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::query::{CountParams, ListParams};
use crate::state::AppState;

/// Response body for `GET /blogs-count`.
#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub count: u64,
}

/// GET /blogs
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<Vec<Document>>> {
    let blogs = BlogRepo::list_all(state.store.as_ref()).await?;
    Ok(Json(blogs))
}

/// POST /blog
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> AppResult<Json<InsertOneResult>> {
    let document = into_document(body)?;
    let result = BlogRepo::create(state.store.as_ref(), document).await?;
    tracing::info!(id = %result.inserted_id, "Blog created");
    Ok(Json(result))
}

/// GET /blogs/{id} and GET /view/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Document>> {
    let blog = BlogRepo::find_by_id(state.store.as_ref(), &id).await?;
    blog.map(Json)
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Blog", id }))
}

/// GET /all-blogs?size=&page=&filter=&search=
///
/// `page` is 1-based. Missing or non-numeric `size` returns every match.
pub async fn list_page(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Document>>> {
    let query = params.to_list_query()?;
    let page = BlogRepo::list_page(state.store.as_ref(), &query).await?;
    tracing::debug!(
        skip = page.skip,
        limit = ?page.limit,
        returned = page.records.len(),
        "Listed blog page"
    );
    Ok(Json(page.records))
}

/// GET /blogs-count?filter=&search=
///
/// Counts with the same filter `/all-blogs` would use for these parameters.
pub async fn count(
    State(state): State<AppState>,
    Query(params): Query<CountParams>,
) -> AppResult<Json<CountResponse>> {
    let filter = params.to_filter()?;
    let count = BlogRepo::count(state.store.as_ref(), &filter).await?;
    Ok(Json(CountResponse { count }))
}
