// src/presentation/http/controllers/registrations.rs
use crate::application::{
    commands::registrations::RegisterRegistrationCommand, dto::RegistrationDto,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::{CountResponse, RegistrationListResponse};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

/// Raw submission payload. Every field defaults to JSON null when absent so
/// wrong or missing values reach the validators instead of failing
/// deserialization with an opaque 422.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    #[serde(default)]
    #[schema(value_type = String, example = "Dupont")]
    pub nom: Value,
    #[serde(default)]
    #[schema(value_type = String, example = "Jean-Pierre")]
    pub prenom: Value,
    #[serde(default)]
    #[schema(value_type = String, example = "jean.dupont@mail.fr")]
    pub email: Value,
    #[serde(default, rename = "dateNaissance")]
    #[schema(value_type = String, example = "1990-01-01")]
    pub date_naissance: Value,
    #[serde(default)]
    #[schema(value_type = String, example = "75001")]
    pub cp: Value,
    #[serde(default)]
    #[schema(value_type = String, example = "Paris")]
    pub ville: Value,
}

#[utoipa::path(
    post,
    path = "/api/v1/registrations",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Registration accepted and stored.", body = RegistrationDto),
        (status = 400, description = "One or more fields failed validation.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Registrations"
)]
pub async fn register(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<RegisterRequest>,
) -> HttpResult<(StatusCode, Json<RegistrationDto>)> {
    let command = RegisterRegistrationCommand {
        nom: payload.nom,
        prenom: payload.prenom,
        email: payload.email,
        date_naissance: payload.date_naissance,
        cp: payload.cp,
        ville: payload.ville,
    };

    state
        .services
        .registration_commands
        .register(command)
        .await
        .into_http()
        .map(|dto| (StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/api/v1/registrations",
    responses(
        (status = 200, description = "All accepted registrations.", body = RegistrationListResponse)
    ),
    tag = "Registrations"
)]
pub async fn list_registrations(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<RegistrationListResponse>> {
    state
        .services
        .registration_queries
        .list()
        .await
        .into_http()
        .map(|items| Json(RegistrationListResponse { items }))
}

#[utoipa::path(
    get,
    path = "/api/v1/registrations/count",
    responses(
        (status = 200, description = "Number of accepted registrations.", body = CountResponse)
    ),
    tag = "Registrations"
)]
pub async fn count_registrations(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<CountResponse>> {
    state
        .services
        .registration_queries
        .count()
        .await
        .into_http()
        .map(|count| Json(CountResponse { count }))
}
