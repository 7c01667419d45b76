//! HTTP-facing error type and its JSON representation.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use validator::ValidationErrors;

use crate::domain::error::UrlError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload returned in every error response.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Errors returned by HTTP handlers.
///
/// # Status Mapping
///
/// - `Validation` → 400 Bad Request
/// - `NotFound` → 404 Not Found
/// - `Conflict` → 409 Conflict
/// - `Internal` → 500 Internal Server Error
#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    Conflict { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_error_info(self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Conflict { message, details } => ("conflict", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<UrlError> for AppError {
    fn from(e: UrlError) -> Self {
        match e {
            UrlError::InvalidUrl { .. } => {
                AppError::bad_request(e.to_string(), json!({ "field": "url" }))
            }
            UrlError::InvalidAliasFormat { length } => {
                AppError::bad_request(e.to_string(), json!({ "alias_length": length }))
            }
            UrlError::AliasReserved { ref alias } => {
                let details = json!({ "alias": alias });
                AppError::bad_request(e.to_string(), details)
            }
            UrlError::AlreadyExists { ref short_url } => {
                let details = json!({ "short_url": short_url });
                AppError::conflict(e.to_string(), details)
            }
            UrlError::NotFound { ref short_url } => {
                let details = json!({ "short_url": short_url });
                AppError::not_found(e.to_string(), details)
            }
            UrlError::Database(ref source) => {
                tracing::error!(error = %source, "Database error");
                AppError::internal("Database error", json!({}))
            }
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(e: ValidationErrors) -> Self {
        let mut fields: Vec<String> = e
            .field_errors()
            .into_keys()
            .map(|k| k.to_string())
            .collect();
        fields.sort();
        AppError::bad_request("Request validation failed", json!({ "fields": fields }))
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::bad_request("Invalid request body", json!({ "reason": e.body_text() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_error_status_mapping() {
        let cases = [
            (
                UrlError::InvalidAliasFormat { length: 2 },
                StatusCode::BAD_REQUEST,
            ),
            (
                UrlError::AliasReserved {
                    alias: "api/x".to_string(),
                },
                StatusCode::BAD_REQUEST,
            ),
            (
                UrlError::InvalidUrl {
                    url: "http://a\nb".to_string(),
                },
                StatusCode::BAD_REQUEST,
            ),
            (UrlError::already_exists("abcd"), StatusCode::CONFLICT),
            (UrlError::not_found("abcd"), StatusCode::NOT_FOUND),
            (
                UrlError::Database(sqlx::Error::PoolTimedOut),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(AppError::from(err).status_code(), expected);
        }
    }

    #[test]
    fn test_database_error_details_are_not_leaked() {
        let info = AppError::from(UrlError::Database(sqlx::Error::PoolTimedOut)).to_error_info();

        assert_eq!(info.code, "internal_error");
        assert_eq!(info.message, "Database error");
        assert_eq!(info.details, json!({}));
    }

    #[test]
    fn test_not_found_error_info() {
        let info = AppError::from(UrlError::not_found("abcd1234")).to_error_info();

        assert_eq!(info.code, "not_found");
        assert_eq!(info.details, json!({ "short_url": "abcd1234" }));
    }
}
