// src/application/error.rs
use crate::domain::errors::{DomainError, ValidationError};
use std::collections::BTreeMap;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Validation failures keyed by wire field name
/// (nom, prenom, email, dateNaissance, cp, ville).
pub type FieldErrors = BTreeMap<String, ValidationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation failed for {} field(s)", .0.len())]
    InvalidFields(FieldErrors),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }
}
