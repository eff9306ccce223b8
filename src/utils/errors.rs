use std::collections::BTreeMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;
use validator::ValidationErrors;

use crate::validator::collect_field_errors;

/// Error envelope returned for 404 and 500 responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "error")]
    pub status: String,
    #[schema(example = "Estudiante no encontrado")]
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}

/// Error envelope returned for 422 responses, with one or more messages
/// per invalid field.
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    #[schema(example = "error")]
    pub status: String,
    #[schema(example = "Error en la validación de datos")]
    pub message: String,
    pub errors: BTreeMap<String, Vec<String>>,
}

/// Error type returned by every handler, converted into the JSON envelope
/// at the response boundary.
#[derive(Debug)]
pub enum ApiError {
    /// The referenced student does not exist.
    NotFound,
    /// One or more fields violated a validation rule.
    Validation(ValidationErrors),
    /// The insert failed at the persistence layer.
    CreateFailed(anyhow::Error),
    /// Any other persistence failure. The source is logged, never sent to
    /// the client.
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Estudiante no encontrado")),
            )
                .into_response(),
            ApiError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationErrorResponse {
                    status: "error".to_string(),
                    message: "Error en la validación de datos".to_string(),
                    errors: collect_field_errors(&errors),
                }),
            )
                .into_response(),
            ApiError::CreateFailed(err) => {
                error!(error = %err, "Failed to create student");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("Error al crear el estudiante")),
                )
                    .into_response()
            }
            ApiError::Internal(err) => {
                error!(error = %err, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("Error interno del servidor")),
                )
                    .into_response()
            }
        }
    }
}

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        ApiError::Internal(err.into())
    }
}
