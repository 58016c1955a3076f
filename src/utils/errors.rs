use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use utoipa::ToSchema;

/// Error body returned by every failing endpoint.
#[derive(ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: Option<String>,
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
    pub message: Option<String>,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
            message: None,
        }
    }

    /// Attach the human-readable `message` half of the error body.
    pub fn with_message<M>(mut self, message: M) -> Self
    where
        M: Into<String>,
    {
        self.message = Some(message.into());
        self
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::NOT_FOUND, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    pub fn unauthorized<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::UNAUTHORIZED, err)
    }

    pub fn forbidden<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::FORBIDDEN, err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Unexpected failures keep their cause out of the `error` label; the
        // detail still reaches the client in `message` and the server log.
        let (error, message) = if self.status.is_server_error() {
            tracing::error!(error = %self.error, "request failed");
            let detail = self
                .message
                .unwrap_or_else(|| self.error.to_string());
            ("Something went wrong".to_string(), Some(detail))
        } else {
            (self.error.to_string(), self.message)
        };

        let body = match message {
            Some(message) => json!({ "error": error, "message": message }),
            None => json!({ "error": error }),
        };

        (self.status, Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}
