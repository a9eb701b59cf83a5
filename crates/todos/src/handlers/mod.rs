pub mod error;
pub mod health;
pub mod load;
pub mod save;

use axum::{
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
};

pub use error::HandlerError;

/// 405 with an empty body, advertising the one accepted method.
fn method_not_allowed(received: &Method, allowed: Method) -> Response {
    tracing::debug!(method = %received, allowed = %allowed, "Method not allowed");
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, allowed.as_str().to_owned())],
    )
        .into_response()
}
