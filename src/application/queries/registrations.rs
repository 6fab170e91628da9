// src/application/queries/registrations.rs
use crate::{
    application::{dto::RegistrationDto, error::ApplicationResult},
    domain::registration::RegistrationRepository,
};
use std::sync::Arc;

pub struct RegistrationQueryService {
    registration_repo: Arc<dyn RegistrationRepository>,
}

impl RegistrationQueryService {
    pub fn new(registration_repo: Arc<dyn RegistrationRepository>) -> Self {
        Self { registration_repo }
    }

    pub async fn list(&self) -> ApplicationResult<Vec<RegistrationDto>> {
        let registrations = self.registration_repo.list().await?;
        Ok(registrations.into_iter().map(Into::into).collect())
    }

    pub async fn count(&self) -> ApplicationResult<u64> {
        Ok(self.registration_repo.count().await?)
    }
}
