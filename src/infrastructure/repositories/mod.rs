// src/infrastructure/repositories/mod.rs
pub mod memory;
pub mod sqlite_registration;

pub use memory::InMemoryRegistrationRepository;
pub use sqlite_registration::SqliteRegistrationRepository;

use crate::domain::errors::DomainError;

pub(crate) fn map_sqlx(err: sqlx::Error) -> DomainError {
    DomainError::Persistence(err.to_string())
}
