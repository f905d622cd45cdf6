use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization` header, or one without a `Token`/`Bearer` scheme.
    #[error("Authentication credentials were not provided")]
    MissingToken,

    /// The presented token does not belong to any account.
    #[error("Invalid token")]
    InvalidToken,

    /// The token belongs to an account that has been deactivated.
    #[error("Account {0} is inactive")]
    InactiveAccount(i32),
}

/// Converts authentication errors into 401 responses.
///
/// Inactive accounts get the same client message as unknown tokens; the account id is
/// only logged.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request: {}", self);

        let message = match self {
            Self::MissingToken => self.to_string(),
            Self::InvalidToken | Self::InactiveAccount(_) => "Invalid token".to_string(),
        };

        (
            StatusCode::UNAUTHORIZED,
            [(header::WWW_AUTHENTICATE, "Token")],
            Json(ErrorDto { message }),
        )
            .into_response()
    }
}
