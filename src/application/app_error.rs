use thiserror::Error;

use crate::domain::validation::FieldErrors;

#[derive(Error, Debug)]
pub enum AppError {
    /// Field-keyed validation errors, rendered to the client as-is.
    #[error("validation failed")]
    Validation(FieldErrors),
    #[error("{message}")]
    NotFound {
        key: &'static str,
        message: &'static str,
    },
    #[error("{message}")]
    Conflict {
        key: &'static str,
        message: &'static str,
    },
    #[error("{message}")]
    Forbidden {
        key: &'static str,
        message: &'static str,
    },
    #[error("Invalid Credentials")]
    InvalidCredentials,
    #[error("{0}")]
    InvalidId(String),
    #[error("password hashing failed")]
    PasswordHash,
    #[error("token signing failed")]
    TokenSign,
    #[error(transparent)]
    Database(#[from] mongodb::error::Error),
}

pub type AppResult<T> = Result<T, AppError>;
