// src/presentation/http/openapi.rs
use crate::application::dto::RegistrationDto;
use axum::Router;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegistrationListResponse {
    pub items: Vec<RegistrationDto>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CountResponse {
    pub count: u64,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::registrations::register,
        crate::presentation::http::controllers::registrations::list_registrations,
        crate::presentation::http::controllers::registrations::count_registrations,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            RegistrationListResponse,
            CountResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::error::FieldErrorBody,
            crate::presentation::http::controllers::registrations::RegisterRequest,
            crate::application::dto::RegistrationDto
        )
    ),
    tags(
        (name = "Registrations", description = "Registration submission and listing."),
        (name = "System", description = "Service health.")
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    SwaggerUi::new("/docs")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}
