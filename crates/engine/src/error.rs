//! The module contains the errors the engine can throw.
//!
//! The errors are:
//!
//! - [`DuplicateId`] thrown when an entity is created with an id already in use.
//! - [`KeyNotFound`] thrown when an entity is not found.
//! - [`InvalidInput`] thrown when a value fails validation.
//! - [`UnsupportedAccountType`] thrown when an account is created with an
//!   unknown type tag.
//! - [`EmptyInput`] thrown when statistics are requested over no data.
//!
//!  [`DuplicateId`]: EngineError::DuplicateId
//!  [`KeyNotFound`]: EngineError::KeyNotFound
//!  [`InvalidInput`]: EngineError::InvalidInput
//!  [`UnsupportedAccountType`]: EngineError::UnsupportedAccountType
//!  [`EmptyInput`]: EngineError::EmptyInput
use sea_orm::DbErr;
use thiserror::Error;

use crate::store::StoreError;

pub type ResultEngine<T> = Result<T, EngineError>;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("{0} already exists")]
    DuplicateId(String),
    #[error("{0} not found")]
    KeyNotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Unsupported account type: {0}")]
    UnsupportedAccountType(String),
    #[error("Not enough data: {0}")]
    EmptyInput(String),
    #[error("Corrupted record: {0}")]
    Corrupted(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::DuplicateId(a), Self::DuplicateId(b)) => a == b,
            (Self::KeyNotFound(a), Self::KeyNotFound(b)) => a == b,
            (Self::InvalidInput(a), Self::InvalidInput(b)) => a == b,
            (Self::UnsupportedAccountType(a), Self::UnsupportedAccountType(b)) => a == b,
            (Self::EmptyInput(a), Self::EmptyInput(b)) => a == b,
            (Self::Corrupted(a), Self::Corrupted(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}

impl From<StoreError> for EngineError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound(id) => Self::KeyNotFound(format!("id {id}")),
            StoreError::Corrupted(msg) => Self::Corrupted(msg),
            StoreError::Database(err) => Self::Database(err),
        }
    }
}
