//! Application error type with HTTP response conversion.
//!
//! Every fallible handler and service in the API returns [`AppError`]. It pairs
//! an HTTP status with an [`anyhow::Error`] carrying the human-readable message,
//! and renders as:
//!
//! ```json
//! { "error": "Email already exists" }
//! ```
//!
//! Any error convertible into [`anyhow::Error`] can be propagated with `?` and
//! becomes a `500 Internal Server Error`. Its text is logged but the client
//! only sees `"Internal server error"`; messages given to
//! [`AppError::internal_error`] are sent as written.

use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
    exposed: bool,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
            exposed: true,
        }
    }

    /// Wraps an untyped failure; the response body stays generic.
    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            exposed: false,
            ..Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
        }
    }

    pub fn internal_error(message: String) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, anyhow::anyhow!(message))
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    pub fn unauthorized(message: String) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, anyhow::anyhow!(message))
    }

    /// Maps `validator` failures to a 400 with every field message joined.
    pub fn validation(errors: &validator::ValidationErrors) -> Self {
        Self::bad_request(anyhow::anyhow!("{}", format_validation_errors(errors)))
    }

    pub fn message(&self) -> String {
        self.error.to_string()
    }

    /// Text sent in the `error` field of the response body.
    pub fn client_message(&self) -> String {
        if self.exposed {
            self.message()
        } else {
            "Internal server error".to_string()
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.error, self.status)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status.as_u16(), error = ?self.error, "Internal server error");
        }

        let body = Json(json!({
            "error": self.client_message()
        }));

        (self.status, body).into_response()
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

/// Flattens `validator` field errors into `"msg, msg"`, falling back to
/// `"<field> is invalid"` for rules without a message.
pub fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();
    messages.sort();
    messages.join(", ")
}
