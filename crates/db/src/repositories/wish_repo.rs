//! Repository for the `wish` collection.

use blogsphere_core::document::{collections, wish_fields, Document, ID_FIELD};
use blogsphere_core::listing::{FilterSpec, PageWindow};

use crate::error::StoreError;
use crate::models::{DeleteResult, InsertOneResult};
use crate::store::{parse_document_id, DocumentStore};

/// Provides lookup, insert and delete operations for wish-list entries.
pub struct WishRepo;

impl WishRepo {
    /// Wishes belonging to the given email address.
    pub async fn list_by_email(
        store: &dyn DocumentStore,
        email: &str,
    ) -> Result<Vec<Document>, StoreError> {
        store
            .find(
                collections::WISHES,
                &FilterSpec::eq(wish_fields::EMAIL, email),
                PageWindow::UNBOUNDED,
            )
            .await
    }

    /// Wishes belonging to the given user identifier.
    pub async fn list_by_user_id(
        store: &dyn DocumentStore,
        user_id: &str,
    ) -> Result<Vec<Document>, StoreError> {
        store
            .find(
                collections::WISHES,
                &FilterSpec::eq(wish_fields::USER_ID, user_id),
                PageWindow::UNBOUNDED,
            )
            .await
    }

    pub async fn create(
        store: &dyn DocumentStore,
        document: Document,
    ) -> Result<InsertOneResult, StoreError> {
        store.insert_one(collections::WISHES, document).await
    }

    /// Delete a wish by `_id`. Deleting a missing id reports zero deletions.
    pub async fn delete_by_id(
        store: &dyn DocumentStore,
        id: &str,
    ) -> Result<DeleteResult, StoreError> {
        let id = parse_document_id(id)?;
        store
            .delete_one(collections::WISHES, &FilterSpec::eq(ID_FIELD, id.to_string()))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryDocumentStore;
    use serde_json::json;

    fn wish(value: serde_json::Value) -> Document {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn list_by_user_id_returns_only_that_user() {
        let store = InMemoryDocumentStore::new();
        let mine = WishRepo::create(&store, wish(json!({ "user_id": "u1", "blog_id": "b1" })))
            .await
            .unwrap();
        WishRepo::create(&store, wish(json!({ "user_id": "u2", "blog_id": "b1" })))
            .await
            .unwrap();

        let found = WishRepo::list_by_user_id(&store, "u1").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0][ID_FIELD], mine.inserted_id.to_string());
    }

    #[tokio::test]
    async fn list_by_email_matches_email_field() {
        let store = InMemoryDocumentStore::new();
        WishRepo::create(&store, wish(json!({ "email": "a@example.com" })))
            .await
            .unwrap();
        WishRepo::create(&store, wish(json!({ "email": "b@example.com" })))
            .await
            .unwrap();

        let found = WishRepo::list_by_email(&store, "a@example.com").await.unwrap();
        assert_eq!(found.len(), 1);
        assert!(WishRepo::list_by_email(&store, "c@example.com")
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn deleted_wish_is_gone() {
        let store = InMemoryDocumentStore::new();
        let inserted = WishRepo::create(&store, wish(json!({ "user_id": "u1" })))
            .await
            .unwrap();
        let id = inserted.inserted_id.to_string();

        let result = WishRepo::delete_by_id(&store, &id).await.unwrap();
        assert_eq!(result.deleted_count, 1);
        assert!(WishRepo::list_by_user_id(&store, "u1").await.unwrap().is_empty());

        let again = WishRepo::delete_by_id(&store, &id).await.unwrap();
        assert_eq!(again.deleted_count, 0);
    }
}
