//! Account, player profile and token storage.
//!
//! `AccountRepository` is generic over the connection so the same queries run against the
//! pool for reads and inside a transaction for registration and player updates.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, SqlErr,
};

use crate::server::{model::auth::RegisterParams, util::token::generate_token};

/// Identity fields of an account that a player update overwrites.
#[derive(Debug, Clone)]
pub struct AccountIdentity {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

pub struct AccountRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AccountRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, account_id: i32) -> Result<Option<entity::account::Model>, DbErr> {
        entity::prelude::Account::find_by_id(account_id)
            .one(self.db)
            .await
    }

    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::account::Model>, DbErr> {
        entity::prelude::Account::find()
            .filter(entity::account::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Finds the account a token key was issued to.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Token exists
    /// - `Ok(None)` - Unknown token
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_token(&self, key: &str) -> Result<Option<entity::account::Model>, DbErr> {
        let found = entity::prelude::AuthToken::find_by_id(key.to_string())
            .find_also_related(entity::prelude::Account)
            .one(self.db)
            .await?;

        Ok(found.and_then(|(_, account)| account))
    }

    pub async fn find_player(&self, account_id: i32) -> Result<Option<entity::player::Model>, DbErr> {
        entity::prelude::Player::find()
            .filter(entity::player::Column::AccountId.eq(account_id))
            .one(self.db)
            .await
    }

    /// Checks whether any account already uses the username or the email.
    pub async fn identity_taken(&self, username: &str, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Account::find()
            .filter(
                Condition::any()
                    .add(entity::account::Column::Username.eq(username))
                    .add(entity::account::Column::Email.eq(email)),
            )
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether an account other than `account_id` uses the username or the email.
    pub async fn identity_taken_by_other(
        &self,
        username: &str,
        email: &str,
        account_id: i32,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Account::find()
            .filter(
                Condition::any()
                    .add(entity::account::Column::Username.eq(username))
                    .add(entity::account::Column::Email.eq(email)),
            )
            .filter(entity::account::Column::Id.ne(account_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts a new account and the player profile hanging off it.
    ///
    /// # Arguments
    /// - `params` - Validated registration form
    /// - `password_hash` - Argon2 PHC string for the account password
    ///
    /// # Returns
    /// - `Ok((account, player))` - Created rows
    /// - `Err(DbErr)` - Database error, including unique username violations
    pub async fn create(
        &self,
        params: &RegisterParams,
        password_hash: String,
    ) -> Result<(entity::account::Model, entity::player::Model), DbErr> {
        let account = entity::account::ActiveModel {
            username: ActiveValue::Set(params.username.clone()),
            email: ActiveValue::Set(params.email.clone()),
            first_name: ActiveValue::Set(params.first_name.clone()),
            last_name: ActiveValue::Set(params.last_name.clone()),
            password: ActiveValue::Set(password_hash),
            is_staff: ActiveValue::Set(false),
            is_active: ActiveValue::Set(true),
            date_joined: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let player = entity::player::ActiveModel {
            account_id: ActiveValue::Set(account.id),
            game_master: ActiveValue::Set(params.is_game_master),
            company_name: ActiveValue::Set(Some(params.company_name.clone())),
            phone_number: ActiveValue::Set(Some(params.phone_number.clone())),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok((account, player))
    }

    /// Overwrites the identity fields of an account, leaving password and flags alone.
    pub async fn update_identity(
        &self,
        account_id: i32,
        identity: AccountIdentity,
    ) -> Result<entity::account::Model, DbErr> {
        entity::account::ActiveModel {
            id: ActiveValue::Unchanged(account_id),
            username: ActiveValue::Set(identity.username),
            email: ActiveValue::Set(identity.email),
            first_name: ActiveValue::Set(identity.first_name),
            last_name: ActiveValue::Set(identity.last_name),
            ..Default::default()
        }
        .update(self.db)
        .await
    }

    /// Deletes an account together with its token.
    pub async fn delete(&self, account_id: i32) -> Result<(), DbErr> {
        entity::prelude::AuthToken::delete_many()
            .filter(entity::auth_token::Column::AccountId.eq(account_id))
            .exec(self.db)
            .await?;
        entity::prelude::Account::delete_by_id(account_id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Returns the account's token, issuing one if it has none yet.
    pub async fn token_for(&self, account_id: i32) -> Result<String, DbErr> {
        match self.find_token(account_id).await? {
            Some(key) => Ok(key),
            None => self.issue_token(account_id).await,
        }
    }

    /// Inserts a token for the account.
    ///
    /// When a concurrent request issued one first, the unique `account_id` rejects this
    /// insert and the token already stored is returned instead.
    pub async fn issue_token(&self, account_id: i32) -> Result<String, DbErr> {
        let inserted = entity::auth_token::ActiveModel {
            key: ActiveValue::Set(generate_token()),
            account_id: ActiveValue::Set(account_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await;

        match inserted {
            Ok(token) => Ok(token.key),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                tracing::debug!(account_id, "Token issued concurrently, reusing it");
                self.find_token(account_id).await?.ok_or(err)
            }
            Err(err) => Err(err),
        }
    }

    async fn find_token(&self, account_id: i32) -> Result<Option<String>, DbErr> {
        let existing = entity::prelude::AuthToken::find()
            .filter(entity::auth_token::Column::AccountId.eq(account_id))
            .one(self.db)
            .await?;

        Ok(existing.map(|token| token.key))
    }
}
