//! HTTP error type and its JSON body.

use std::collections::HashMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use service::ServiceError;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed request (unparseable JSON, wrong content type).
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation failed")]
    ValidationError(ValidationErrorDetails),

    #[error("Database error: {0}")]
    Database(String),
}

/// Field-level validation failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationErrorDetails {
    pub message: String,
    pub fields: HashMap<String, Vec<FieldError>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldError {
    /// e.g. "length", "email", "range".
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<serde_json::Value>,
}

impl ValidationErrorDetails {
    pub fn field(field: &str, code: &str, message: &str) -> Self {
        let mut fields = HashMap::new();
        fields.insert(
            field.to_string(),
            vec![FieldError { code: code.to_string(), message: message.to_string(), params: None }],
        );
        Self { message: format!("Validation failed for field '{}'", field), fields }
    }

    /// A failure not tied to one field, raised below the HTTP layer.
    pub fn general(message: &str) -> Self {
        Self { message: message.to_string(), fields: HashMap::new() }
    }

    pub fn from_fields(fields: HashMap<String, Vec<FieldError>>) -> Self {
        let message = match fields.len() {
            1 => match fields.keys().next() {
                Some(field) => format!("Validation failed for field '{}'", field),
                None => "Validation failed".to_string(),
            },
            n => format!("Validation failed for {} fields", n),
        };
        Self { message, fields }
    }
}

/// JSON error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::ValidationError(_) => "VALIDATION_ERROR",
            ApiError::Database(_) => "DATABASE_ERROR",
        }
    }

    pub fn validation_field(field: &str, code: &str, message: &str) -> Self {
        ApiError::ValidationError(ValidationErrorDetails::field(field, code, message))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(event = "request_failed", code = self.error_code(), error = %self);
        }
        let (message, details) = match &self {
            ApiError::ValidationError(details) if details.fields.is_empty() => (details.message.clone(), None),
            ApiError::ValidationError(details) => (
                details.message.clone(),
                Some(serde_json::to_value(&details.fields).unwrap_or_default()),
            ),
            _ => (self.to_string(), None),
        };

        let body = ErrorResponse { code: self.error_code().to_string(), message, details };
        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        use models::errors::ModelError;
        match err {
            ServiceError::NotFound(msg) => ApiError::NotFound(msg),
            ServiceError::Validation(msg) | ServiceError::Model(ModelError::Validation(msg)) => {
                ApiError::ValidationError(ValidationErrorDetails::general(&msg))
            }
            ServiceError::Db(msg) => ApiError::Database(msg),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut fields: HashMap<String, Vec<FieldError>> = HashMap::new();

        for (field_name, field_errors) in err.field_errors() {
            let errors: Vec<FieldError> = field_errors
                .iter()
                .map(|e| {
                    let code = e.code.to_string();
                    let message = e
                        .message
                        .clone()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Field '{}' failed validation: {}", field_name, code));
                    let params = if e.params.is_empty() {
                        None
                    } else {
                        Some(serde_json::to_value(&e.params).unwrap_or_default())
                    };
                    FieldError { code, message, params }
                })
                .collect();
            fields.insert(field_name.to_string(), errors);
        }

        ApiError::ValidationError(ValidationErrorDetails::from_fields(fields))
    }
}
