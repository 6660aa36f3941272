//! Database abstraction layer.
//!
//! This module provides trait-based abstractions for data access,
//! allowing different storage backends (SQLite, in-memory) to be swapped
//! without changing the HTTP layer.
//!
//! # Architecture
//!
//! - `error`: Storage-agnostic error types
//! - `models`: Domain entities (Note)
//! - `repository`: Trait definitions for data access
//! - `sqlite`: SQLx-backed implementation
//! - `memory`: In-process implementation for tests

mod error;
mod memory;
mod models;
mod repository;
pub mod sqlite;

#[cfg(test)]
mod models_test;

pub use error::{DbError, DbResult};
pub use memory::{InMemoryDatabase, InMemoryNoteRepository};
pub use models::*;
pub use repository::*;
pub use sqlite::SqliteDatabase;
