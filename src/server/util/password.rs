//! Argon2 password hashing.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::Rng;

use crate::server::error::AppError;

/// Hashes a password into an Argon2 PHC string with a fresh random salt.
///
/// # Returns
/// - `Ok(String)` - PHC string suitable for the `account.password` column
/// - `Err(AppError::InternalError)` - Salt encoding or hashing failed
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let mut salt_bytes = [0u8; 16];
    rand::rng().fill(&mut salt_bytes);

    let salt = SaltString::encode_b64(&salt_bytes)
        .map_err(|e| AppError::InternalError(format!("Failed to encode password salt: {}", e)))?;

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))?;

    Ok(hash.to_string())
}

/// Checks a password against a stored PHC string.
///
/// Stored values that are not valid PHC strings, such as the `!` marker for accounts
/// without a usable password, never verify.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
