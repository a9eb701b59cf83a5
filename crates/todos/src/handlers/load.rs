//! Read handler: returns the stored todo list verbatim.

use axum::{
    extract::State,
    http::{header, Method},
    response::{IntoResponse, Response},
};

use super::{method_not_allowed, HandlerError};
use crate::state::AppState;

/// Load the todo list (GET /loadTodos).
///
/// Any other method gets a bare 405 without touching the store.
#[axum::debug_handler]
pub async fn load_todos(
    method: Method,
    State(state): State<AppState>,
) -> Result<Response, HandlerError> {
    if method != Method::GET {
        return Ok(method_not_allowed(&method, Method::GET));
    }

    let store = state.store.get().await?;
    let document = store.get(&state.path).await?;

    tracing::debug!(path = %state.path, bytes = document.len(), "Loaded todos");

    Ok((
        [(header::CONTENT_TYPE, "application/json")],
        document.into_bytes(),
    )
        .into_response())
}
