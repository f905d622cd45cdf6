//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error returned by every handler and service. It wraps the
//! domain-specific errors and implements `IntoResponse`, so handlers can use `?` freely.

pub mod auth;
pub mod config;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError},
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication error, delegated to `AuthError::into_response()` (401).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Socket or listener failure while serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// No row with the requested id.
    ///
    /// Results in 404 Not Found with an empty body. The message is only logged.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request: malformed JSON, a missing field, an unknown reference or a
    /// conflicting identity.
    ///
    /// Results in 400 Bad Request with the message in the body.
    #[error("{0}")]
    BadRequest(String),

    /// The resource does not support the requested operation.
    ///
    /// Results in 405 Method Not Allowed with the message in the body.
    #[error("{0}")]
    MethodNotAllowed(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The message is logged but a generic
    /// message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Maps JSON extraction failures (bad syntax, wrong types, missing fields) to 400.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`
/// - 401 Unauthorized - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 404 Not Found - For `NotFound`, empty body
/// - 405 Method Not Allowed - For `MethodNotAllowed`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                tracing::debug!("Not found: {}", msg);
                StatusCode::NOT_FOUND.into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { message: msg })).into_response()
            }
            Self::MethodNotAllowed(msg) => (
                StatusCode::METHOD_NOT_ALLOWED,
                Json(ErrorDto { message: msg }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the full error and returns a generic message so internals never reach the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                message: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
