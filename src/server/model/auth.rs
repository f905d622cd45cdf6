//! Login, registration and caller models.

use crate::{
    model::auth::{AuthResponseDto, LoginDto, RegisterDto},
    server::error::AppError,
};

/// Message returned when a registration form is incomplete.
pub const REGISTER_MISSING_FIELDS: &str = "You must provide email, password, first_name, \
     last_name, username, is_game_master, company_name and phone_number";

/// Message returned when a username or email is already used by another account.
pub const DUPLICATE_IDENTITY: &str =
    "An account with that username or email address already exists";

/// The account behind a request's token, plus its player profile when one exists.
#[derive(Debug, Clone)]
pub struct Caller {
    pub account: entity::account::Model,
    pub player: Option<entity::player::Model>,
}

impl Caller {
    pub fn account_id(&self) -> i32 {
        self.account.id
    }

    pub fn player_id(&self) -> Option<i32> {
        self.player.as_ref().map(|p| p.id)
    }
}

#[derive(Debug, Clone)]
pub struct LoginParams {
    pub username: String,
    pub password: String,
}

impl From<LoginDto> for LoginParams {
    fn from(dto: LoginDto) -> Self {
        Self {
            username: dto.username,
            password: dto.password,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub password: String,
    pub is_game_master: bool,
    pub company_name: String,
    pub phone_number: String,
}

impl RegisterParams {
    /// Validates that every registration field is present.
    ///
    /// # Returns
    /// - `Ok(RegisterParams)` - All fields provided
    /// - `Err(AppError::BadRequest)` - At least one field missing or null
    pub fn from_dto(dto: RegisterDto) -> Result<Self, AppError> {
        let missing = || AppError::BadRequest(REGISTER_MISSING_FIELDS.to_string());

        Ok(Self {
            email: dto.email.ok_or_else(missing)?,
            first_name: dto.first_name.ok_or_else(missing)?,
            last_name: dto.last_name.ok_or_else(missing)?,
            username: dto.username.ok_or_else(missing)?,
            password: dto.password.ok_or_else(missing)?,
            is_game_master: dto.is_game_master.ok_or_else(missing)?,
            company_name: dto.company_name.ok_or_else(missing)?,
            phone_number: dto.phone_number.ok_or_else(missing)?,
        })
    }
}

/// Token and role flags issued by a successful login or registration.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub staff: bool,
    pub is_game_master: bool,
}

impl AuthSession {
    pub fn into_dto(self) -> AuthResponseDto {
        AuthResponseDto {
            valid: true,
            token: Some(self.token),
            staff: Some(self.staff),
            is_game_master: Some(self.is_game_master),
        }
    }

    /// Response body for a rejected login.
    pub fn invalid_dto() -> AuthResponseDto {
        AuthResponseDto {
            valid: false,
            token: None,
            staff: None,
            is_game_master: None,
        }
    }
}
