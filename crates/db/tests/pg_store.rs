//! Integration tests for the PostgreSQL document store.
//!
//! These need a live database (`DATABASE_URL`); run them with
//! `cargo test -p blogsphere-db -- --ignored`.

use blogsphere_core::document::{Document, ID_FIELD};
use blogsphere_core::listing::{build_filter, FilterSpec, ListQuery, PageWindow};
use blogsphere_db::repositories::{BlogRepo, WishRepo};
use blogsphere_db::{DocumentStore, PgDocumentStore};
use serde_json::json;
use sqlx::PgPool;

fn doc(value: serde_json::Value) -> Document {
    value.as_object().cloned().unwrap()
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn insert_then_find_by_id(pool: PgPool) {
    let store = PgDocumentStore::new(pool);
    let inserted = BlogRepo::create(&store, doc(json!({ "blog_title": "Hello", "category": "tech" })))
        .await
        .unwrap();

    let found = BlogRepo::find_by_id(&store, &inserted.inserted_id.to_string())
        .await
        .unwrap()
        .expect("document should exist");
    assert_eq!(found["blog_title"], "Hello");
    assert_eq!(found[ID_FIELD], inserted.inserted_id.to_string());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn search_is_literal_and_case_insensitive(pool: PgPool) {
    let store = PgDocumentStore::new(pool);
    for title in ["100% Rust", "rusty", "snake_case tips", "snakecase"] {
        BlogRepo::create(&store, doc(json!({ "blog_title": title, "category": "tech" })))
            .await
            .unwrap();
    }
    BlogRepo::create(&store, doc(json!({ "blog_title": 42, "category": "tech" })))
        .await
        .unwrap();

    let rust = build_filter(Some("RUST"), None).unwrap();
    assert_eq!(BlogRepo::count(&store, &rust).await.unwrap(), 2);

    let percent = build_filter(Some("%"), None).unwrap();
    assert_eq!(BlogRepo::count(&store, &percent).await.unwrap(), 1);

    let underscore = build_filter(Some("e_c"), None).unwrap();
    assert_eq!(BlogRepo::count(&store, &underscore).await.unwrap(), 1);

    assert_eq!(BlogRepo::count(&store, &FilterSpec::all()).await.unwrap(), 5);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn pagination_follows_insertion_order(pool: PgPool) {
    let store = PgDocumentStore::new(pool);
    for n in 1..=25 {
        BlogRepo::create(&store, doc(json!({ "blog_title": format!("Post {n}"), "n": n })))
            .await
            .unwrap();
    }

    let query = ListQuery::from_params(None, None, Some("3"), Some("10")).unwrap();
    let page = BlogRepo::list_page(&store, &query).await.unwrap();
    let ns: Vec<i64> = page.records.iter().map(|d| d["n"].as_i64().unwrap()).collect();
    assert_eq!(ns, (21..=25).collect::<Vec<_>>());
    assert_eq!(page.skip, 20);

    let all = store
        .find("blogs", &FilterSpec::all(), PageWindow::UNBOUNDED)
        .await
        .unwrap();
    assert_eq!(all.len(), 25);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn wish_insert_find_delete(pool: PgPool) {
    let store = PgDocumentStore::new(pool);
    let inserted = WishRepo::create(&store, doc(json!({ "user_id": "u1", "email": "u1@example.com" })))
        .await
        .unwrap();
    let id = inserted.inserted_id.to_string();

    let by_user = WishRepo::list_by_user_id(&store, "u1").await.unwrap();
    assert_eq!(by_user.len(), 1);
    assert_eq!(by_user[0][ID_FIELD], id);

    let deleted = WishRepo::delete_by_id(&store, &id).await.unwrap();
    assert_eq!(deleted.deleted_count, 1);
    assert!(WishRepo::list_by_user_id(&store, "u1").await.unwrap().is_empty());
}
