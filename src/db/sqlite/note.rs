//! SQLite NoteRepository implementation.

use sqlx::{Row, SqlitePool};
use tracing::debug;

use crate::db::{DbResult, Note, NoteRepository};

/// SQLx-backed note repository.
pub struct SqliteNoteRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

impl NoteRepository for SqliteNoteRepository<'_> {
    async fn create(&self, body: &str) -> DbResult<Note> {
        let id: i64 = sqlx::query_scalar("INSERT INTO notes (body) VALUES (?) RETURNING id")
            .bind(body)
            .fetch_one(self.pool)
            .await?;

        debug!(id, "Created note");
        Ok(Note::new(id, body))
    }

    async fn list(&self) -> DbResult<Vec<Note>> {
        let rows = sqlx::query("SELECT id, body FROM notes ORDER BY id ASC")
            .fetch_all(self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| Note {
                id: row.get("id"),
                body: row.get("body"),
            })
            .collect())
    }
}
