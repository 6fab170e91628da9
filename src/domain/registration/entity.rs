// src/domain/registration/entity.rs
use crate::domain::registration::value_objects::RegistrationId;
use chrono::{DateTime, NaiveDate, Utc};

/// An accepted registration. Field names follow the submitted form
/// (nom/prenom/cp/ville), which is also the persisted shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub id: RegistrationId,
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub date_naissance: NaiveDate,
    pub cp: String,
    pub ville: String,
    pub created_at: DateTime<Utc>,
}

/// A validated candidate awaiting persistence.
#[derive(Debug, Clone)]
pub struct NewRegistration {
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub date_naissance: NaiveDate,
    pub cp: String,
    pub ville: String,
    pub created_at: DateTime<Utc>,
}
