//! Note handlers.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use utoipa::ToSchema;

use crate::api::validation::require_non_blank;
use crate::api::{AppError, AppState, ErrorResponse};
use crate::db::{Database, Note, NoteRepository};
use crate::echo::Echo;

// =============================================================================
// DTOs
// =============================================================================

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NoteResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "hello")]
    pub body: String,
}

impl From<Note> for NoteResponse {
    fn from(n: Note) -> Self {
        Self {
            id: n.id,
            body: n.body,
        }
    }
}

/// `body` is optional here so a missing or null field surfaces as a
/// validation error rather than a deserialization failure.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateNoteRequest {
    #[schema(example = "hello")]
    pub body: Option<String>,
}

// =============================================================================
// Handlers
// =============================================================================

#[utoipa::path(
    post,
    path = "/api/notes",
    tag = "notes",
    request_body = CreateNoteRequest,
    responses(
        (status = 200, description = "Note created", body = NoteResponse),
        (status = 400, description = "Blank, missing or malformed body", body = ErrorResponse),
        (status = 415, description = "Content-Type is not application/json", body = ErrorResponse),
        (status = 413, description = "Request body could not be buffered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_note<D: Database, E: Echo + Send + Sync>(
    State(state): State<AppState<D, E>>,
    payload: Result<Json<CreateNoteRequest>, JsonRejection>,
) -> Result<Json<NoteResponse>, AppError> {
    let Json(req) = payload?;
    let body = require_non_blank("body", req.body.as_deref())?;

    let note = state.db().notes().create(body).await?;
    debug!(id = note.id, "Note stored");

    Ok(Json(NoteResponse::from(note)))
}

#[utoipa::path(
    get,
    path = "/api/notes",
    tag = "notes",
    responses(
        (status = 200, description = "All notes in creation order", body = Vec<NoteResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_notes<D: Database, E: Echo + Send + Sync>(
    State(state): State<AppState<D, E>>,
) -> Result<Json<Vec<NoteResponse>>, AppError> {
    let notes = state.db().notes().list().await?;

    Ok(Json(notes.into_iter().map(NoteResponse::from).collect()))
}
