//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing business logic.

use std::future::Future;

use crate::db::{DbResult, models::Note};

/// Repository for Note operations.
///
/// There is intentionally no update or delete: notes are append-only.
pub trait NoteRepository: Send + Sync {
    /// Insert a new note and return it with its store-assigned ID.
    fn create(&self, body: &str) -> impl Future<Output = DbResult<Note>> + Send;

    /// Get all notes in ascending ID order.
    fn list(&self) -> impl Future<Output = DbResult<Vec<Note>>> + Send;
}

/// Combined database interface.
///
/// Provides access to repositories via associated types, avoiding dynamic dispatch.
pub trait Database: Send + Sync {
    type Notes<'a>: NoteRepository
    where
        Self: 'a;

    /// Run pending migrations.
    fn migrate(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Check that the store is reachable.
    fn ping(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Get the note repository.
    fn notes(&self) -> Self::Notes<'_>;
}
