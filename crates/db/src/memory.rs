//! In-process [`DocumentStore`] backed by per-collection vectors.
//!
//! Matching goes through [`FilterSpec::matches`] directly, so this store is
//! the reference behaviour the PostgreSQL store is checked against.

use std::collections::HashMap;

use async_trait::async_trait;
use blogsphere_core::document::{Document, ID_FIELD};
use blogsphere_core::listing::{FilterSpec, PageWindow};
use blogsphere_core::types::new_document_id;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::models::{DeleteResult, InsertOneResult};
use crate::store::DocumentStore;

#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn find(
        &self,
        collection: &str,
        filter: &FilterSpec,
        window: PageWindow,
    ) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().await;
        let Some(docs) = collections.get(collection) else {
            return Ok(Vec::new());
        };
        Ok(window.apply(docs.iter().filter(|d| filter.matches(d)).cloned()))
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: &FilterSpec,
    ) -> Result<Option<Document>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| filter.matches(d)).cloned()))
    }

    async fn insert_one(
        &self,
        collection: &str,
        mut document: Document,
    ) -> Result<InsertOneResult, StoreError> {
        let id = new_document_id();
        document.insert(ID_FIELD.to_string(), Value::String(id.to_string()));

        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(document);

        Ok(InsertOneResult {
            acknowledged: true,
            inserted_id: id,
        })
    }

    async fn delete_one(
        &self,
        collection: &str,
        filter: &FilterSpec,
    ) -> Result<DeleteResult, StoreError> {
        let mut collections = self.collections.write().await;
        let position = collections
            .get(collection)
            .and_then(|docs| docs.iter().position(|d| filter.matches(d)));

        let deleted_count = match (position, collections.get_mut(collection)) {
            (Some(idx), Some(docs)) => {
                docs.remove(idx);
                1
            }
            _ => 0,
        };

        Ok(DeleteResult {
            acknowledged: true,
            deleted_count,
        })
    }

    async fn count_documents(
        &self,
        collection: &str,
        filter: &FilterSpec,
    ) -> Result<u64, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map_or(0, |docs| docs.iter().filter(|d| filter.matches(d)).count() as u64))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn close(&self) {}
}
