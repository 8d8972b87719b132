//! Error types for the listing server.
//!
//! Every fallible server operation returns [`Error`], which aggregates configuration,
//! translation provider and database failures. All errors implement `IntoResponse` so
//! handlers can propagate them with `?`, and use `thiserror` for the `Display` and `Error`
//! implementations.

pub mod config;
pub mod retry;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::config::ConfigError, translation::TranslateError};

/// Main error type for the listing server.
///
/// Uses `thiserror`'s `#[from]` attribute so the underlying errors convert with `?`.
/// Whether an error is worth retrying is decided by [`Error::to_retry_strategy`].
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Translation provider error (request, status or response body).
    #[error(transparent)]
    TranslateError(#[from] TranslateError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in the server's code.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

/// Converts application errors into HTTP responses.
///
/// None of the errors are caused by the request itself, so all of them map to a
/// 500 Internal Server Error with the details logged rather than returned.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the client
/// to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
