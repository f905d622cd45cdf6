use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct LoginDto {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Registration form. Every field is required; they are optional here so a
/// missing field maps to one consistent validation message.
#[derive(Debug, Default, Deserialize)]
pub struct RegisterDto {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub is_game_master: Option<bool>,
    pub company_name: Option<String>,
    pub phone_number: Option<String>,
}

/// Login and registration outcome. A failed login carries only `valid: false`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponseDto {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_game_master: Option<bool>,
}
