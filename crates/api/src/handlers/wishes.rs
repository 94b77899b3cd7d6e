//! Handlers for wish-list entries.

use axum::extract::{Path, State};
use axum::Json;
use blogsphere_core::document::{into_document, Document};
use blogsphere_db::models::{DeleteResult, InsertOneResult};
use blogsphere_db::repositories::WishRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /wish/{email}
pub async fn list_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<Vec<Document>>> {
    let wishes = WishRepo::list_by_email(state.store.as_ref(), &email).await?;
    Ok(Json(wishes))
}

/// GET /wish-find/{user_id}
pub async fn list_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<Vec<Document>>> {
    let wishes = WishRepo::list_by_user_id(state.store.as_ref(), &user_id).await?;
    Ok(Json(wishes))
}

/// POST /wish-create
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> AppResult<Json<InsertOneResult>> {
    let document = into_document(body)?;
    let result = WishRepo::create(state.store.as_ref(), document).await?;
    tracing::info!(id = %result.inserted_id, "Wish created");
    Ok(Json(result))
}

/// DELETE /wishes/{id}
///
/// Deleting an id that does not exist succeeds with `deletedCount: 0`.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResult>> {
    let result = WishRepo::delete_by_id(state.store.as_ref(), &id).await?;
    tracing::info!(%id, deleted = result.deleted_count, "Wish delete");
    Ok(Json(result))
}
