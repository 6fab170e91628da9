// src/domain/registration/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::registration::entity::{NewRegistration, Registration};
use async_trait::async_trait;

#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    async fn count(&self) -> DomainResult<u64>;

    async fn insert(&self, new_registration: NewRegistration) -> DomainResult<Registration>;

    async fn list(&self) -> DomainResult<Vec<Registration>>;
}
