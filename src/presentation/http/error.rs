// src/presentation/http/error.rs
use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::{DomainError, ValidationError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
    field_errors: Option<BTreeMap<String, FieldErrorBody>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FieldErrorBody {
    pub code: String,
    pub message: String,
}

impl From<ValidationError> for FieldErrorBody {
    fn from(error: ValidationError) -> Self {
        Self {
            code: error.code.as_str().to_string(),
            message: error.message,
        }
    }
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::InvalidFields(fields) => {
                let field_errors = fields
                    .into_iter()
                    .map(|(field, error)| (field, error.into()))
                    .collect();
                Self {
                    status: StatusCode::BAD_REQUEST,
                    message: "La soumission contient des champs invalides".to_string(),
                    field_errors: Some(field_errors),
                }
            }
            ApplicationError::Domain(DomainError::Validation(error)) => {
                Self::new(StatusCode::BAD_REQUEST, error.message)
            }
            ApplicationError::Domain(DomainError::NotFound(msg)) => {
                Self::new(StatusCode::NOT_FOUND, msg)
            }
            ApplicationError::Domain(DomainError::Conflict(msg)) => {
                Self::new(StatusCode::CONFLICT, msg)
            }
            ApplicationError::Domain(DomainError::Persistence(msg)) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ApplicationError::Infrastructure(msg) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        }
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self {
            status,
            message,
            field_errors: None,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            message: self.message,
            errors: self.field_errors,
        };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, FieldErrorBody>>,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
