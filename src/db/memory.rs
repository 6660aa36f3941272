//! In-process implementation of the database traits.
//!
//! Backs the HTTP layer in tests without touching SQLite. Every gateway
//! call is counted so tests can assert that rejected requests never reach
//! storage.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::db::{Database, DbError, DbResult, Id, Note, NoteRepository};

#[derive(Debug, Default)]
struct Store {
    notes: Vec<Note>,
    last_id: Id,
}

/// Vector-backed database.
#[derive(Debug, Default)]
pub struct InMemoryDatabase {
    store: Mutex<Store>,
    calls: AtomicUsize,
    unavailable: bool,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// A database whose every operation fails with a connection error.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Number of `create`/`list` calls made through any repository handle.
    pub fn invocations(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn with_store<T>(&self, f: impl FnOnce(&mut Store) -> T) -> DbResult<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.unavailable {
            return Err(DbError::Connection {
                message: "in-memory database is unavailable".to_string(),
            });
        }

        let mut store = self.store.lock().map_err(|e| DbError::Database {
            message: format!("Failed to acquire database lock: {}", e),
        })?;
        Ok(f(&mut store))
    }
}

impl Database for InMemoryDatabase {
    type Notes<'a> = InMemoryNoteRepository<'a>;

    async fn migrate(&self) -> DbResult<()> {
        Ok(())
    }

    // Not counted in `invocations`: pings never touch notes.
    async fn ping(&self) -> DbResult<()> {
        if self.unavailable {
            return Err(DbError::Connection {
                message: "in-memory database is unavailable".to_string(),
            });
        }
        Ok(())
    }

    fn notes(&self) -> Self::Notes<'_> {
        InMemoryNoteRepository { db: self }
    }
}

/// Note repository handle over an [`InMemoryDatabase`].
pub struct InMemoryNoteRepository<'a> {
    db: &'a InMemoryDatabase,
}

impl NoteRepository for InMemoryNoteRepository<'_> {
    async fn create(&self, body: &str) -> DbResult<Note> {
        self.db.with_store(|store| {
            store.last_id += 1;
            let note = Note::new(store.last_id, body);
            store.notes.push(note.clone());
            note
        })
    }

    async fn list(&self) -> DbResult<Vec<Note>> {
        // Insertion order is ID order since IDs only grow.
        self.db.with_store(|store| store.notes.clone())
    }
}
