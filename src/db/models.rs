//! Domain models for the notes database.
//!
//! These models are storage-agnostic and represent the core entities
//! used throughout the application.

use serde::{Deserialize, Serialize};

/// Store-assigned note identifier. Always positive.
pub type Id = i64;

/// A short text record.
///
/// Notes are created once and never mutated. `body` is guaranteed non-blank
/// by the HTTP boundary, not by this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: Id,
    pub body: String,
}

impl Note {
    pub fn new(id: Id, body: impl Into<String>) -> Self {
        Self {
            id,
            body: body.into(),
        }
    }
}
