//! Repository for the `blogs` collection.

use blogsphere_core::document::{collections, Document, ID_FIELD};
use blogsphere_core::listing::{FilterSpec, ListQuery, Page, PageWindow};

use crate::error::StoreError;
use crate::models::InsertOneResult;
use crate::store::{parse_document_id, DocumentStore};

/// Provides read and insert operations for blog posts.
pub struct BlogRepo;

impl BlogRepo {
    /// Every blog post, in insertion order.
    pub async fn list_all(store: &dyn DocumentStore) -> Result<Vec<Document>, StoreError> {
        store
            .find(collections::BLOGS, &FilterSpec::all(), PageWindow::UNBOUNDED)
            .await
    }

    /// Insert a blog post.
    pub async fn create(
        store: &dyn DocumentStore,
        document: Document,
    ) -> Result<InsertOneResult, StoreError> {
        store.insert_one(collections::BLOGS, document).await
    }

    /// Find a blog post by its `_id`. A malformed id is an error, not a miss.
    pub async fn find_by_id(
        store: &dyn DocumentStore,
        id: &str,
    ) -> Result<Option<Document>, StoreError> {
        let id = parse_document_id(id)?;
        store
            .find_one(collections::BLOGS, &FilterSpec::eq(ID_FIELD, id.to_string()))
            .await
    }

    /// One page of the filtered listing, with the window that produced it.
    pub async fn list_page(
        store: &dyn DocumentStore,
        query: &ListQuery,
    ) -> Result<Page<Document>, StoreError> {
        let records = store
            .find(collections::BLOGS, &query.filter, query.window)
            .await?;
        Ok(Page::new(records, query.window))
    }

    /// Number of blog posts matching `filter`. Pass the listing's filter so
    /// the total agrees with the pages.
    pub async fn count(store: &dyn DocumentStore, filter: &FilterSpec) -> Result<u64, StoreError> {
        store.count_documents(collections::BLOGS, filter).await
    }
}
