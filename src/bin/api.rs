//! Echo Notes API server binary.
//!
//! This binary creates the concrete database implementation and passes it
//! to the API server. The API layer remains agnostic of the storage backend.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;
use echo_notes::api::{self, ApiError, AppState, Config};
use echo_notes::db::{Database, DbError, SqliteDatabase};
use echo_notes::echo::IdentityEcho;
use miette::Diagnostic;
use thiserror::Error;
use tracing::info;

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Database error: {0}")]
    #[diagnostic(code(echo_notes::binary::database))]
    Database(#[from] DbError),

    #[error("Failed to create data directory: {0}")]
    #[diagnostic(code(echo_notes::binary::io))]
    Io(#[from] std::io::Error),

    #[error("API server error: {0}")]
    #[diagnostic(code(echo_notes::binary::api))]
    Api(#[from] ApiError),
}

#[derive(Parser)]
#[command(name = "echo-notes-api")]
#[command(author, version, about = "Echo and notes API server", long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Database file path (defaults to $ECHO_NOTES_DB, then ~/.local/share/echo-notes/notes.db)
    #[arg(long, conflicts_with = "in_memory")]
    db: Option<PathBuf>,

    /// Keep notes in memory only; they are lost on exit
    #[arg(long)]
    in_memory: bool,
}

#[tokio::main]
async fn main() -> Result<(), BinaryError> {
    let cli = Cli::parse();
    api::init_tracing();

    let mut config = Config::new().with_host(cli.host).with_port(cli.port);
    if let Some(db) = cli.db {
        config = config.with_db_path(db);
    }

    let db = if cli.in_memory {
        info!("Using in-memory database");
        SqliteDatabase::in_memory().await?
    } else {
        info!("Opening database at {:?}", config.db_path);

        // Ensure parent directory exists
        if let Some(parent) = config.db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        SqliteDatabase::open(&config.db_path).await?
    };

    // Run migrations before starting the server
    db.migrate().await?;
    info!("Database migrations complete");

    api::run(&config, AppState::new(db, IdentityEcho::new())).await?;

    Ok(())
}
