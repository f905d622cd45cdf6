use axum::http::{header, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::account::AccountRepository,
    error::{auth::AuthError, AppError},
    model::auth::Caller,
};

/// Authorization schemes accepted in front of a token key.
const SCHEMES: [&str; 2] = ["Token", "Bearer"];

/// Resolves the caller of a request from its `Authorization` header.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, headers: &'a HeaderMap) -> Self {
        Self { db, headers }
    }

    /// Requires a valid token belonging to an active account.
    ///
    /// # Returns
    /// - `Ok(Caller)` - Authenticated account and its player profile
    /// - `Err(AuthError::MissingToken)` - No usable `Authorization` header
    /// - `Err(AuthError::InvalidToken)` - Token unknown
    /// - `Err(AuthError::InactiveAccount)` - Token belongs to a deactivated account
    pub async fn require(&self) -> Result<Caller, AppError> {
        let Some(key) = self
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_authorization)
        else {
            return Err(AuthError::MissingToken.into());
        };

        let repo = AccountRepository::new(self.db);

        let Some(account) = repo.find_by_token(key).await? else {
            return Err(AuthError::InvalidToken.into());
        };

        if !account.is_active {
            return Err(AuthError::InactiveAccount(account.id).into());
        }

        let player = repo.find_player(account.id).await?;

        Ok(Caller { account, player })
    }

    /// Authenticates like `require`, but lets requests without a header through as `None`.
    ///
    /// A header that is present but invalid is still rejected.
    pub async fn optional(&self) -> Result<Option<Caller>, AppError> {
        if !self.headers.contains_key(header::AUTHORIZATION) {
            return Ok(None);
        }

        self.require().await.map(Some)
    }

    /// Guard for list and retrieve.
    ///
    /// # Arguments
    /// - `allow_anonymous` - Whether reads without a token are permitted
    pub async fn read(&self, allow_anonymous: bool) -> Result<Option<Caller>, AppError> {
        if allow_anonymous {
            self.optional().await
        } else {
            self.require().await.map(Some)
        }
    }
}

/// Extracts the token key from an `Authorization` header value.
///
/// Accepts `Token <key>` and `Bearer <key>`, scheme matched case-insensitively.
pub fn parse_authorization(value: &str) -> Option<&str> {
    let (scheme, key) = value.trim().split_once(' ')?;
    let key = key.trim();

    if key.is_empty() || key.contains(' ') {
        return None;
    }

    SCHEMES
        .iter()
        .any(|accepted| accepted.eq_ignore_ascii_case(scheme))
        .then_some(key)
}
