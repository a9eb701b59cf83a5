use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use todos_core::document::DocumentError;
use todos_core::storage::StoreError;

/// Failures a handler turns into an HTTP response.
///
/// Store failures of every kind become a 500 carrying the error's text;
/// nothing finer-grained is exposed to callers.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error(transparent)]
    Body(#[from] BytesRejection),
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        match self {
            Self::Store(e) => {
                tracing::error!(error = %e, "Store error");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
            }
            Self::Document(e) => {
                tracing::warn!(error = %e, "Rejected document");
                (StatusCode::BAD_REQUEST, e.to_string()).into_response()
            }
            Self::Body(rejection) => {
                tracing::warn!(error = %rejection, "Failed to read request body");
                rejection.into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_text(response: Response) -> String {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(body.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_store_error_is_500_with_text() {
        let response = HandlerError::from(StoreError::Timeout {
            operation: "get",
            timeout_ms: 10_000,
        })
        .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, "get timed out after 10000ms");
    }

    #[tokio::test]
    async fn test_document_error_is_400() {
        let response =
            HandlerError::from(DocumentError::MalformedJson("expected value".to_string()))
                .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_text(response).await,
            "Document is not valid JSON: expected value"
        );
    }
}
