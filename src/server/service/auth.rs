use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::server::{
    data::account::AccountRepository,
    error::AppError,
    model::auth::{AuthSession, LoginParams, RegisterParams, DUPLICATE_IDENTITY},
    util::password::{hash_password, verify_password},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks credentials and returns the account's token.
    ///
    /// Unknown usernames, inactive accounts and wrong passwords all yield `None`; the
    /// caller cannot tell them apart.
    ///
    /// # Returns
    /// - `Ok(Some(AuthSession))` - Credentials valid
    /// - `Ok(None)` - Credentials rejected
    /// - `Err(AppError::DbErr)` - Database error during lookup or token issue
    pub async fn login(&self, params: LoginParams) -> Result<Option<AuthSession>, AppError> {
        let repo = AccountRepository::new(self.db);

        let Some(account) = repo.find_by_username(&params.username).await? else {
            tracing::debug!("Login rejected: unknown username");
            return Ok(None);
        };

        if !account.is_active || !verify_password(&params.password, &account.password) {
            tracing::debug!(account_id = account.id, "Login rejected");
            return Ok(None);
        }

        let player = repo.find_player(account.id).await?;
        let token = repo.token_for(account.id).await?;

        Ok(Some(AuthSession {
            token,
            staff: account.is_staff,
            is_game_master: player.map(|p| p.game_master).unwrap_or(false),
        }))
    }

    /// Creates an account, its player profile and its token in one transaction.
    ///
    /// # Returns
    /// - `Ok(AuthSession)` - Registration succeeded
    /// - `Err(AppError::BadRequest)` - Username or email already in use
    /// - `Err(AppError::DbErr)` - Database error during write
    pub async fn register(&self, params: RegisterParams) -> Result<AuthSession, AppError> {
        let password_hash = hash_password(&params.password)?;

        let txn = self.db.begin().await?;
        let repo = AccountRepository::new(&txn);

        if repo.identity_taken(&params.username, &params.email).await? {
            return Err(AppError::BadRequest(DUPLICATE_IDENTITY.to_string()));
        }

        let (account, player) = repo
            .create(&params, password_hash)
            .await
            .map_err(duplicate_identity)?;
        let token = repo.token_for(account.id).await?;

        txn.commit().await?;

        tracing::info!(account_id = account.id, player_id = player.id, "registered");

        Ok(AuthSession {
            token,
            staff: account.is_staff,
            is_game_master: player.game_master,
        })
    }
}

/// Reports a unique-constraint violation on account insert as a duplicate identity.
///
/// Covers a concurrent registration that wins between the identity check and the insert.
pub fn duplicate_identity(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::BadRequest(DUPLICATE_IDENTITY.to_string())
        }
        _ => err.into(),
    }
}
