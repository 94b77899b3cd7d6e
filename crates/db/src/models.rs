//! Result shapes returned by write operations.
//!
//! Field names are camelCase on the wire (`insertedId`, `deletedCount`), the
//! shape BlogSphere clients already consume.

use blogsphere_core::types::DocumentId;
use serde::Serialize;

/// Outcome of [`DocumentStore::insert_one`](crate::DocumentStore::insert_one).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertOneResult {
    pub acknowledged: bool,
    pub inserted_id: DocumentId,
}

/// Outcome of [`DocumentStore::delete_one`](crate::DocumentStore::delete_one).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub acknowledged: bool,
    pub deleted_count: u64,
}
