//! Tests for the SQLite note repository.

use crate::db::{Database, DbError, NoteRepository, SqliteDatabase};

async fn setup_db() -> SqliteDatabase {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Migration should succeed");
    db
}

#[tokio::test(flavor = "multi_thread")]
async fn create_and_read() {
    let db = setup_db().await;
    let notes = db.notes();

    let a = notes.create("hello").await.unwrap();
    let b = notes.create("world").await.unwrap();

    let all = notes.list().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].body, "hello");
    assert_eq!(all[1].body, "world");
    assert!(a.id > 0);
    assert!(b.id > 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_assigns_sequential_ids() {
    let db = setup_db().await;
    let notes = db.notes();

    let a = notes.create("first").await.unwrap();
    let b = notes.create("second").await.unwrap();
    let c = notes.create("third").await.unwrap();

    assert!(a.id < b.id, "IDs should be sequential: a < b");
    assert!(b.id < c.id, "IDs should be sequential: b < c");
}

#[tokio::test(flavor = "multi_thread")]
async fn list_orders_by_id_not_content() {
    let db = setup_db().await;
    let notes = db.notes();

    let z = notes.create("zzz").await.unwrap();
    let a = notes.create("aaa").await.unwrap();
    let m = notes.create("mmm").await.unwrap();

    let ids: Vec<i64> = notes.list().await.unwrap().iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![z.id, a.id, m.id]);
}

#[tokio::test(flavor = "multi_thread")]
async fn list_on_empty_table_is_empty() {
    let db = setup_db().await;
    assert!(db.notes().list().await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn create_preserves_unicode() {
    let db = setup_db().await;
    let unicode = "Привет мир 你好世界 😀🚀";

    let note = db.notes().create(unicode).await.unwrap();
    let found = db
        .notes()
        .list()
        .await
        .unwrap()
        .into_iter()
        .find(|n| n.id == note.id)
        .expect("created note should be listed");

    assert_eq!(found.body, unicode);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_stores_long_text() {
    let db = setup_db().await;
    let long_text = "a".repeat(10_000);

    let note = db.notes().create(&long_text).await.unwrap();
    assert!(note.id > 0);

    let found = db
        .notes()
        .list()
        .await
        .unwrap()
        .into_iter()
        .find(|n| n.id == note.id)
        .expect("created note should be listed");
    assert_eq!(found.body.len(), 10_000);
    assert_eq!(found.body, long_text);
}

#[tokio::test(flavor = "multi_thread")]
async fn ids_are_not_reused_after_rows_disappear() {
    let db = setup_db().await;

    let first = db.notes().create("first").await.unwrap();
    sqlx::query("DELETE FROM notes")
        .execute(db.pool())
        .await
        .unwrap();
    let second = db.notes().create("second").await.unwrap();

    assert!(second.id > first.id);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_without_schema_propagates_error() {
    let db = SqliteDatabase::in_memory().await.unwrap();

    let err = db.notes().create("orphan").await.unwrap_err();
    assert!(matches!(err, DbError::Database { .. }), "got {:?}", err);
}
