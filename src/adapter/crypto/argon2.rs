use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use async_trait::async_trait;

use crate::application::app_error::{AppError, AppResult};
use crate::application::interface::crypto::CredentialsHasher;

/// Argon2id with the crate defaults. Hashing runs on the blocking pool so a
/// slow hash never stalls the request executor.
#[derive(Default, Clone)]
pub struct ArgonPasswordHasher;

#[async_trait]
impl CredentialsHasher for ArgonPasswordHasher {
    async fn hash_password(&self, password: &str) -> AppResult<String> {
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            Argon2::default()
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|_| AppError::PasswordHash)
        })
        .await
        .map_err(|_| AppError::PasswordHash)?
    }

    async fn verify_password(&self, password: &str, hashed: &str) -> AppResult<bool> {
        let password = password.to_owned();
        let hashed = hashed.to_owned();
        tokio::task::spawn_blocking(move || {
            let parsed = PasswordHash::new(&hashed).map_err(|_| AppError::InvalidCredentials)?;
            Ok(Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok())
        })
        .await
        .map_err(|_| AppError::InvalidCredentials)?
    }
}
