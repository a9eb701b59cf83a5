//! Write handler: replaces the stored todo list with the request body.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::Method,
    response::{IntoResponse, Response},
    Json,
};

use todos_core::document::{validate_json, Document};

use super::{method_not_allowed, HandlerError};
use crate::state::AppState;

/// Save the todo list (PUT /saveTodos).
///
/// The body is stored as-is and the store's write acknowledgment is
/// returned as JSON. Any other method gets a bare 405 without touching the
/// store.
#[axum::debug_handler]
pub async fn save_todos(
    method: Method,
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, HandlerError> {
    if method != Method::PUT {
        return Ok(method_not_allowed(&method, Method::PUT));
    }

    let body = body?;
    if state.validate_json {
        validate_json(&body)?;
    }

    let store = state.store.get().await?;
    let bytes = body.len();
    let result = store.upsert(&state.path, Document::from(body.to_vec())).await?;

    tracing::info!(path = %state.path, bytes, cas = result.cas, "Saved todos");

    Ok(Json(result).into_response())
}
