//! One-way password hashing with Argon2id.
//!
//! The rest of the application only ever calls these two functions; the
//! stored value is a PHC-formatted string carrying its own salt and
//! parameters.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::AppError;

/// Hashes a plaintext password into a PHC-formatted string.
///
/// # Arguments
/// - `password` - The plaintext password to hash
///
/// # Returns
/// - `Ok(String)` - PHC string including algorithm, salt, and parameters
/// - `Err(AppError::PasswordHash)` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::PasswordHash(e.to_string()))?;

    Ok(hash.to_string())
}

/// Verifies a plaintext password against a stored PHC hash.
///
/// # Arguments
/// - `password` - The plaintext password to check
/// - `hash` - The stored PHC-formatted hash
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match
/// - `Err(AppError::PasswordHash)` - The stored hash is not parseable
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(hash).map_err(|e| AppError::PasswordHash(e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
