//! Echo handler.

use axum::extract::{Query, State, rejection::QueryRejection};
use serde::Deserialize;
use tracing::instrument;
use utoipa::IntoParams;

use crate::api::validation::require_non_blank;
use crate::api::{AppError, AppState, ErrorResponse};
use crate::db::Database;
use crate::echo::Echo;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EchoQuery {
    /// Text to echo back; must not be blank
    #[param(example = "hello")]
    pub q: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/echo",
    tag = "echo",
    params(EchoQuery),
    responses(
        (status = 200, description = "The query value, verbatim", body = String, content_type = "text/plain"),
        (status = 400, description = "Missing or blank query", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn echo<D: Database, E: Echo + Send + Sync>(
    State(state): State<AppState<D, E>>,
    query: Result<Query<EchoQuery>, QueryRejection>,
) -> Result<String, AppError> {
    let Query(query) = query?;
    let q = require_non_blank("q", query.q.as_deref())?;

    Ok(state.echo().echo(q))
}
