// src/domain/errors.rs
use serde::Serialize;
use std::fmt;
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Stable machine-readable identifiers for every business-rule violation.
/// The serialized form is the contract clients and tests match against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationCode {
    InvalidDate,
    Underage,
    InvalidType,
    InvalidPostalCode,
    XssDetected,
    InvalidName,
    InvalidEmail,
    DuplicateEmail,
}

impl ValidationCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidDate => "INVALID_DATE",
            Self::Underage => "UNDERAGE",
            Self::InvalidType => "INVALID_TYPE",
            Self::InvalidPostalCode => "INVALID_POSTAL_CODE",
            Self::XssDetected => "XSS_DETECTED",
            Self::InvalidName => "INVALID_NAME",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::DuplicateEmail => "DUPLICATE_EMAIL",
        }
    }
}

impl fmt::Display for ValidationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single failure value produced by every field validator.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message}")]
pub struct ValidationError {
    pub code: ValidationCode,
    pub message: String,
}

impl ValidationError {
    pub fn new(code: ValidationCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}
