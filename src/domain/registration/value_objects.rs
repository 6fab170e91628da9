// src/domain/registration/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegistrationId(pub i64);

impl RegistrationId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Persistence(
                "registration id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<RegistrationId> for i64 {
    fn from(value: RegistrationId) -> Self {
        value.0
    }
}
