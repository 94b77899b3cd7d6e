//! PostgreSQL [`DocumentStore`]: one `documents` table, bodies kept as JSONB.
//!
//! Filters are translated clause by clause into a `WHERE` that must agree
//! with [`FilterSpec::matches`]:
//!
//! - `Equals` compares the JSONB value (`body -> field = $n::jsonb`), so a
//!   missing field never matches. `_id` lookups hit the primary key.
//! - `Contains` requires a JSON string and uses `ILIKE` with every LIKE
//!   metacharacter escaped, so search text is matched literally.

use async_trait::async_trait;
use blogsphere_core::document::{Document, ID_FIELD};
use blogsphere_core::listing::{Condition, FilterSpec, PageWindow};
use blogsphere_core::types::{new_document_id, DocumentId};
use serde_json::Value;
use sqlx::types::Json;
use sqlx::{Postgres, QueryBuilder};

use crate::error::StoreError;
use crate::models::{DeleteResult, InsertOneResult};
use crate::store::DocumentStore;
use crate::DbPool;

/// Ordering that reproduces insertion order.
const NATURAL_ORDER: &str = " ORDER BY created_at, id";

pub struct PgDocumentStore {
    pool: DbPool,
}

impl PgDocumentStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn find(
        &self,
        collection: &str,
        filter: &FilterSpec,
        window: PageWindow,
    ) -> Result<Vec<Document>, StoreError> {
        let mut qb = QueryBuilder::<Postgres>::new("SELECT body FROM documents");
        push_where(&mut qb, collection, filter);
        qb.push(NATURAL_ORDER);
        if let Some(limit) = window.limit {
            qb.push(" LIMIT ").push_bind(to_i64(limit));
        }
        if window.skip > 0 {
            qb.push(" OFFSET ").push_bind(to_i64(window.skip));
        }

        let rows: Vec<(Json<Document>,)> = qb.build_query_as().fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(|(Json(body),)| body).collect())
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: &FilterSpec,
    ) -> Result<Option<Document>, StoreError> {
        let window = PageWindow {
            skip: 0,
            limit: Some(1),
        };
        Ok(self.find(collection, filter, window).await?.into_iter().next())
    }

    async fn insert_one(
        &self,
        collection: &str,
        mut document: Document,
    ) -> Result<InsertOneResult, StoreError> {
        let id = new_document_id();
        document.insert(ID_FIELD.to_string(), Value::String(id.to_string()));

        sqlx::query("INSERT INTO documents (id, collection, body) VALUES ($1, $2, $3)")
            .bind(id)
            .bind(collection)
            .bind(Json(&document))
            .execute(&self.pool)
            .await?;

        tracing::debug!(collection, %id, "Inserted document");
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
        let mut qb =
            QueryBuilder::<Postgres>::new("DELETE FROM documents WHERE id IN (SELECT id FROM documents");
        push_where(&mut qb, collection, filter);
        qb.push(NATURAL_ORDER);
        qb.push(" LIMIT 1)");

        let deleted_count = qb.build().execute(&self.pool).await?.rows_affected();
        tracing::debug!(collection, deleted_count, "Deleted document");
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
        let mut qb = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM documents");
        push_where(&mut qb, collection, filter);

        let count: i64 = qb.build_query_scalar().fetch_one(&self.pool).await?;
        Ok(u64::try_from(count).unwrap_or(0))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}

/// Append `WHERE collection = .. AND <conditions>` to `qb`.
fn push_where(qb: &mut QueryBuilder<'_, Postgres>, collection: &str, filter: &FilterSpec) {
    qb.push(" WHERE collection = ").push_bind(collection.to_string());

    for condition in filter.conditions() {
        match condition {
            Condition::Equals { field, value } => {
                if let Some(id) = primary_key_lookup(field, value) {
                    qb.push(" AND id = ").push_bind(id);
                } else {
                    qb.push(" AND body -> ")
                        .push_bind(field.clone())
                        .push(" = ")
                        .push_bind(Json(value.clone()));
                }
            }
            Condition::Contains { field, needle } => {
                qb.push(" AND jsonb_typeof(body -> ")
                    .push_bind(field.clone())
                    .push(") = 'string' AND body ->> ")
                    .push_bind(field.clone())
                    .push(" ILIKE ")
                    .push_bind(format!("%{}%", escape_like(needle)))
                    .push(" ESCAPE '\\'");
            }
        }
    }
}

/// `_id` equality against a well-formed id can use the primary key.
fn primary_key_lookup(field: &str, value: &Value) -> Option<DocumentId> {
    if field != ID_FIELD {
        return None;
    }
    value.as_str().and_then(|s| s.parse().ok())
}

/// Escape `\`, `%` and `_` so the text matches literally inside `LIKE`.
pub fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn to_i64(n: u64) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}
