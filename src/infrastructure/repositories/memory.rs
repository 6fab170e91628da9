// src/infrastructure/repositories/memory.rs
use crate::domain::errors::DomainResult;
use crate::domain::registration::{
    NewRegistration, Registration, RegistrationId, RegistrationRepository,
};
use async_trait::async_trait;
use std::sync::Mutex;

/// Mutex-backed store for tests and ephemeral runs. Mirrors the
/// local-storage mode of the original form: nothing survives the process.
#[derive(Default)]
pub struct InMemoryRegistrationRepository {
    inner: Mutex<Vec<Registration>>,
}

impl InMemoryRegistrationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RegistrationRepository for InMemoryRegistrationRepository {
    async fn count(&self) -> DomainResult<u64> {
        let store = self.inner.lock().expect("registration store poisoned");
        Ok(store.len() as u64)
    }

    async fn insert(&self, new_registration: NewRegistration) -> DomainResult<Registration> {
        let mut store = self.inner.lock().expect("registration store poisoned");
        let registration = Registration {
            id: RegistrationId::new(store.len() as i64 + 1)?,
            nom: new_registration.nom,
            prenom: new_registration.prenom,
            email: new_registration.email,
            date_naissance: new_registration.date_naissance,
            cp: new_registration.cp,
            ville: new_registration.ville,
            created_at: new_registration.created_at,
        };
        store.push(registration.clone());
        Ok(registration)
    }

    async fn list(&self) -> DomainResult<Vec<Registration>> {
        let store = self.inner.lock().expect("registration store poisoned");
        Ok(store.clone())
    }
}
