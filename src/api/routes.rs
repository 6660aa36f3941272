//! API route configuration.

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::handlers::{self, CreateNoteRequest, HealthResponse, NoteResponse};
use super::{AppState, ErrorResponse};
use crate::db::Database;
use crate::echo::Echo;

/// Build routes with generic state types.
///
/// This macro reduces boilerplate when registering handlers that are generic
/// over the Database and Echo traits. It applies the turbofish operator automatically.
macro_rules! routes {
    ($D:ty, $E:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$D, $E>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Echo Notes API",
        version = "0.1.0",
        description = "Echo a query value and keep simple text notes",
        license(name = "GPL-2.0")
    ),
    paths(
        handlers::health,
        handlers::echo,
        handlers::create_note,
        handlers::list_notes,
    ),
    components(
        schemas(
            HealthResponse,
            NoteResponse,
            CreateNoteRequest,
            ErrorResponse,
        )
    ),
    tags(
        (name = "system", description = "System health and status endpoints"),
        (name = "echo", description = "Echo endpoint"),
        (name = "notes", description = "Note endpoints")
    )
)]
pub struct ApiDoc;

/// Create the API router with OpenAPI documentation
pub fn create_router<D, E>(state: AppState<D, E>) -> Router
where
    D: Database + 'static,
    E: Echo + Send + Sync + 'static,
{
    let api = ApiDoc::openapi();

    let api_routes = routes!(D, E => {
        get "/health" => handlers::health,
        get "/api/echo" => handlers::echo,
        get "/api/notes" => handlers::list_notes,
    })
    // Note bodies are only bounded by the store.
    .route(
        "/api/notes",
        post(handlers::create_note::<D, E>).layer(DefaultBodyLimit::disable()),
    );

    api_routes
        .merge(Scalar::with_url("/docs", api))
        .with_state(state)
}
