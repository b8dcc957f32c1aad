//! Error types for rolodex-api

use axum::response::{Html, IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;

use crate::html;

/// Result type alias for rolodex-api operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in rolodex-api
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from rolodex-core
    #[error("Core error: {0}")]
    Core(#[from] rolodex_core::Error),

    /// Error from rolodex-storage
    #[error("Storage error: {0}")]
    Storage(#[from] rolodex_storage::Error),

    /// Error from rolodex-auth
    #[error("Session error: {0}")]
    Auth(#[from] rolodex_auth::AuthError),

    /// Malformed request, such as a non-numeric contact id
    #[error("{0}")]
    BadRequest(String),

    /// Caller is not allowed into the admin area
    #[error("Forbidden")]
    Forbidden,

    /// Listener I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Storage(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            Error::Storage(e) if e.is_duplicate() => StatusCode::CONFLICT,
            Error::Storage(e) if e.is_validation() => StatusCode::UNPROCESSABLE_ENTITY,
            Error::Core(rolodex_core::Error::Validation { .. }) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::Forbidden => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = if status.is_server_error() {
            tracing::error!("Request failed: {self}");
            "The server encountered an internal error and was unable to complete your request."
                .to_string()
        } else {
            self.to_string()
        };

        let title = status.canonical_reason().unwrap_or("Error");
        let body = format!(
            "<h1>{}</h1>\n<p>{}</p>",
            html::escape(title),
            html::escape(&message)
        );
        (status, Html(body)).into_response()
    }
}
