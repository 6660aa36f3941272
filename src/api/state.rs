//! Application state for the API server.

use std::sync::Arc;

use crate::db::Database;
use crate::echo::Echo;

/// Shared application state.
///
/// Built once at startup and handed to the router. Generic over
/// `D: Database` and `E: Echo` so tests can inject in-memory or mocked
/// implementations.
pub struct AppState<D: Database, E: Echo + Send + Sync> {
    db: Arc<D>,
    echo: Arc<E>,
}

// Manual Clone impl - we only need the Arcs to be cloneable, not D or E
impl<D: Database, E: Echo + Send + Sync> Clone for AppState<D, E> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
            echo: Arc::clone(&self.echo),
        }
    }
}

impl<D: Database, E: Echo + Send + Sync> AppState<D, E> {
    pub fn new(db: D, echo: E) -> Self {
        Self {
            db: Arc::new(db),
            echo: Arc::new(echo),
        }
    }

    /// Get a reference to the database.
    pub fn db(&self) -> &D {
        &self.db
    }

    /// Get a cloned Arc to the database.
    pub fn db_arc(&self) -> Arc<D> {
        Arc::clone(&self.db)
    }

    /// Get a reference to the echo transform.
    pub fn echo(&self) -> &E {
        &self.echo
    }
}
