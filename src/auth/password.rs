// Argon2 password hashing. Both directions are CPU-bound and run on the
// blocking pool.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::domain::error::{DomainError, DomainResult};

pub async fn hash(password: String) -> DomainResult<String> {
    tokio::task::spawn_blocking(move || hash_blocking(&password))
        .await
        .map_err(|err| DomainError::unexpected(format!("hashing task failed: {err}")))?
}

pub async fn verify(password: String, hash: String) -> DomainResult<bool> {
    tokio::task::spawn_blocking(move || verify_blocking(&password, &hash))
        .await
        .map_err(|err| DomainError::unexpected(format!("verification task failed: {err}")))?
}

pub fn hash_blocking(password: &str) -> DomainResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hashed| hashed.to_string())
        .map_err(|err| DomainError::unexpected(format!("password hashing failed: {err}")))
}

pub fn verify_blocking(password: &str, hash: &str) -> DomainResult<bool> {
    let parsed = PasswordHash::new(hash)
        .map_err(|err| DomainError::unexpected(format!("stored hash is malformed: {err}")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
