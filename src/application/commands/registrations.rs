// src/application/commands/registrations.rs
use crate::{
    application::{
        dto::RegistrationDto,
        error::{ApplicationError, ApplicationResult, FieldErrors},
        ports::time::Clock,
    },
    domain::registration::{validators, NewRegistration, RegistrationRepository},
};
use chrono::NaiveDate;
use serde_json::{json, Value};
use std::sync::Arc;

/// Raw form submission. Fields stay untyped JSON values so the validators
/// can report wrong types with their own error codes.
#[derive(Debug, Clone)]
pub struct RegisterRegistrationCommand {
    pub nom: Value,
    pub prenom: Value,
    pub email: Value,
    pub date_naissance: Value,
    pub cp: Value,
    pub ville: Value,
}

pub struct RegistrationCommandService {
    registration_repo: Arc<dyn RegistrationRepository>,
    clock: Arc<dyn Clock>,
}

impl RegistrationCommandService {
    pub fn new(registration_repo: Arc<dyn RegistrationRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            registration_repo,
            clock,
        }
    }

    /// Validates every field of the submission and persists it when clean.
    ///
    /// All validators run even after the first failure so the caller gets
    /// one error per offending field in a single round trip.
    pub async fn register(
        &self,
        command: RegisterRegistrationCommand,
    ) -> ApplicationResult<RegistrationDto> {
        let now = self.clock.now();
        let existing = self.registration_repo.list().await?;
        let known_emails: Vec<Value> = existing
            .iter()
            .map(|registration| json!({ "email": registration.email }))
            .collect();

        let mut errors = FieldErrors::new();

        let age = match validators::validate_age(&command.date_naissance, now.date_naive()) {
            Ok(age) => Some(age),
            Err(error) => {
                errors.insert("dateNaissance".into(), error);
                None
            }
        };

        for (field, value) in [
            ("nom", &command.nom),
            ("prenom", &command.prenom),
            ("ville", &command.ville),
        ] {
            if let Err(error) = validators::validate_identity(value) {
                errors.insert(field.into(), error);
            }
        }

        match validators::validate_email(&command.email) {
            Err(error) => {
                errors.insert("email".into(), error);
            }
            Ok(()) => {
                // Uniqueness assumes the candidate already passed the format
                // check, so it only runs on that branch.
                if let Some(candidate) = command.email.as_str() {
                    if let Err(error) = validators::validate_unique_email(candidate, &known_emails)
                    {
                        errors.insert("email".into(), error);
                    }
                }
            }
        }

        if let Err(error) = validators::validate_postal_code(&command.cp) {
            errors.insert("cp".into(), error);
        }

        if !errors.is_empty() {
            tracing::debug!(rejected_fields = errors.len(), "registration rejected");
            return Err(ApplicationError::InvalidFields(errors));
        }

        let new_registration = NewRegistration {
            nom: validated_text(&command.nom)?,
            prenom: validated_text(&command.prenom)?,
            email: validated_text(&command.email)?,
            date_naissance: validated_birth_date(&command.date_naissance)?,
            cp: validated_text(&command.cp)?,
            ville: validated_text(&command.ville)?,
            created_at: now,
        };

        let registration = self.registration_repo.insert(new_registration).await?;
        tracing::info!(
            id = i64::from(registration.id),
            age = age.unwrap_or_default(),
            "registration accepted"
        );

        Ok(registration.into())
    }
}

// Field extraction once every validator has passed. The error arms exist
// only to keep the extraction fallible without panicking.
fn validated_text(value: &Value) -> ApplicationResult<String> {
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| ApplicationError::infrastructure("validated field is not a string"))
}

fn validated_birth_date(value: &Value) -> ApplicationResult<NaiveDate> {
    value
        .as_str()
        .and_then(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
        .ok_or_else(|| ApplicationError::infrastructure("validated birth date does not parse"))
}
