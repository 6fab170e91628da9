// src/infrastructure/repositories/sqlite_registration.rs
use super::map_sqlx;
use crate::domain::errors::DomainResult;
use crate::domain::registration::{
    NewRegistration, Registration, RegistrationId, RegistrationRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

#[derive(Clone)]
pub struct SqliteRegistrationRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteRegistrationRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct RegistrationRow {
    id: i64,
    nom: String,
    prenom: String,
    email: String,
    date_naissance: NaiveDate,
    cp: String,
    ville: String,
    created_at: DateTime<Utc>,
}

impl RegistrationRow {
    fn into_registration(self) -> DomainResult<Registration> {
        Ok(Registration {
            id: RegistrationId::new(self.id)?,
            nom: self.nom,
            prenom: self.prenom,
            email: self.email,
            date_naissance: self.date_naissance,
            cp: self.cp,
            ville: self.ville,
            created_at: self.created_at,
        })
    }
}

#[async_trait]
impl RegistrationRepository for SqliteRegistrationRepository {
    async fn count(&self) -> DomainResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM registrations")
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(map_sqlx)?;

        Ok(count.max(0) as u64)
    }

    async fn insert(&self, new_registration: NewRegistration) -> DomainResult<Registration> {
        let row: RegistrationRow = sqlx::query_as(
            "INSERT INTO registrations (nom, prenom, email, date_naissance, cp, ville, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?) \
             RETURNING id, nom, prenom, email, date_naissance, cp, ville, created_at",
        )
        .bind(&new_registration.nom)
        .bind(&new_registration.prenom)
        .bind(&new_registration.email)
        .bind(new_registration.date_naissance)
        .bind(&new_registration.cp)
        .bind(&new_registration.ville)
        .bind(new_registration.created_at)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(map_sqlx)?;

        row.into_registration()
    }

    async fn list(&self) -> DomainResult<Vec<Registration>> {
        let rows: Vec<RegistrationRow> = sqlx::query_as(
            "SELECT id, nom, prenom, email, date_naissance, cp, ville, created_at \
             FROM registrations ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(RegistrationRow::into_registration)
            .collect()
    }
}
