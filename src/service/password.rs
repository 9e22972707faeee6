use crate::error::DirectoryError;
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

/// Hash with argon2id and a fresh random salt; returns the PHC string.
pub fn hash_password(password: &str) -> Result<String, DirectoryError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// `Ok(false)` on mismatch; `Err` only when `hash` is not a valid PHC string.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, DirectoryError> {
    let parsed = PasswordHash::new(hash)?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Run [`hash_password`] on the blocking pool.
pub async fn hash_password_blocking(password: String) -> Result<String, DirectoryError> {
    tokio::task::spawn_blocking(move || hash_password(&password)).await?
}

/// Run [`verify_password`] on the blocking pool.
pub async fn verify_password_blocking(
    password: String,
    hash: String,
) -> Result<bool, DirectoryError> {
    tokio::task::spawn_blocking(move || verify_password(&password, &hash)).await?
}
