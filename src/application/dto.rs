// src/application/dto.rs
use crate::domain::registration::Registration;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationDto {
    pub id: i64,
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub date_naissance: NaiveDate,
    pub cp: String,
    pub ville: String,
    pub created_at: DateTime<Utc>,
}

impl From<Registration> for RegistrationDto {
    fn from(registration: Registration) -> Self {
        Self {
            id: registration.id.into(),
            nom: registration.nom,
            prenom: registration.prenom,
            email: registration.email,
            date_naissance: registration.date_naissance,
            cp: registration.cp,
            ville: registration.ville,
            created_at: registration.created_at,
        }
    }
}
