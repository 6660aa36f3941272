//! Tests for domain models.

use crate::db::models::*;

#[test]
fn note_serializes_with_id_and_body() {
    let note = Note::new(7, "hello");
    let value = serde_json::to_value(&note).unwrap();
    assert_eq!(value, serde_json::json!({"id": 7, "body": "hello"}));
}

#[test]
fn note_preserves_unicode_body() {
    let body = "Привет мир 你好世界 😀🚀";
    let note = Note::new(1, body);
    let json = serde_json::to_string(&note).unwrap();
    let back: Note = serde_json::from_str(&json).unwrap();
    assert_eq!(back.body, body);
}
