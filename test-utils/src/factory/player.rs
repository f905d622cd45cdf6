//! Player factory. Every player is created together with its account.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Password column value that no argon2 verification accepts.
pub const UNUSABLE_PASSWORD: &str = "!";

/// Factory for creating an account and its linked player.
///
/// # Example
///
/// ```rust,ignore
/// let (account, player) = PlayerFactory::new(&db)
///     .username("ariel")
///     .game_master(true)
///     .build()
///     .await?;
/// ```
pub struct PlayerFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    email: String,
    first_name: String,
    last_name: String,
    password: String,
    is_staff: bool,
    is_active: bool,
    game_master: bool,
}

impl<'a> PlayerFactory<'a> {
    /// Creates a new PlayerFactory with default values.
    ///
    /// Defaults:
    /// - username: `"player_{id}"`, email: `"player_{id}@example.com"`
    /// - first_name: `"First"`, last_name: `"Last {id}"`
    /// - password: unusable, so login always fails unless overridden
    /// - is_staff: `false`, is_active: `true`, game_master: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("player_{}", id),
            email: format!("player_{}@example.com", id),
            first_name: "First".to_string(),
            last_name: format!("Last {}", id),
            password: UNUSABLE_PASSWORD.to_string(),
            is_staff: false,
            is_active: true,
            game_master: false,
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    /// Sets the stored password hash. Pass an argon2 PHC string for login tests.
    pub fn password_hash(mut self, hash: impl Into<String>) -> Self {
        self.password = hash.into();
        self
    }

    pub fn staff(mut self, is_staff: bool) -> Self {
        self.is_staff = is_staff;
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn game_master(mut self, game_master: bool) -> Self {
        self.game_master = game_master;
        self
    }

    /// Inserts the account and then the player pointing at it.
    ///
    /// # Returns
    /// - `Ok((account, player))` - Created entities
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<(entity::account::Model, entity::player::Model), DbErr> {
        let account = entity::account::ActiveModel {
            username: ActiveValue::Set(self.username),
            email: ActiveValue::Set(self.email),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            password: ActiveValue::Set(self.password),
            is_staff: ActiveValue::Set(self.is_staff),
            is_active: ActiveValue::Set(self.is_active),
            date_joined: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let player = entity::player::ActiveModel {
            account_id: ActiveValue::Set(account.id),
            game_master: ActiveValue::Set(self.game_master),
            company_name: ActiveValue::Set(None),
            phone_number: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok((account, player))
    }
}

/// Creates an account and player with default values.
pub async fn create_player(
    db: &DatabaseConnection,
) -> Result<(entity::account::Model, entity::player::Model), DbErr> {
    PlayerFactory::new(db).build().await
}
