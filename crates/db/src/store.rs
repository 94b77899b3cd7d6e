use std::sync::Arc;

use async_trait::async_trait;
use blogsphere_core::document::Document;
use blogsphere_core::listing::{FilterSpec, PageWindow};
use blogsphere_core::types::DocumentId;

use crate::error::StoreError;
use crate::models::{DeleteResult, InsertOneResult};

/// Shared handle to whichever store the server was started with.
pub type SharedStore = Arc<dyn DocumentStore>;

/// A collection-oriented document store.
///
/// Every operation touches one collection in a single call. Matching
/// semantics are defined by [`FilterSpec::matches`]; implementations must
/// agree with it so listings and counts line up across backends. Documents
/// come back in insertion order with their `_id` field set.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Matching documents, with the window applied after filtering.
    async fn find(
        &self,
        collection: &str,
        filter: &FilterSpec,
        window: PageWindow,
    ) -> Result<Vec<Document>, StoreError>;

    /// The first matching document, if any.
    async fn find_one(
        &self,
        collection: &str,
        filter: &FilterSpec,
    ) -> Result<Option<Document>, StoreError>;

    /// Store `document` under a freshly assigned id. Any caller-supplied
    /// `_id` is replaced.
    async fn insert_one(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<InsertOneResult, StoreError>;

    /// Remove the first matching document.
    async fn delete_one(
        &self,
        collection: &str,
        filter: &FilterSpec,
    ) -> Result<DeleteResult, StoreError>;

    /// Number of matching documents.
    async fn count_documents(&self, collection: &str, filter: &FilterSpec)
        -> Result<u64, StoreError>;

    /// Confirm the backend is reachable.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Release backend resources. Called once after the server stops.
    async fn close(&self);
}

/// Parse a path identifier into a [`DocumentId`].
pub fn parse_document_id(raw: &str) -> Result<DocumentId, StoreError> {
    raw.parse::<DocumentId>()
        .map_err(|_| StoreError::MalformedId(raw.to_string()))
}
