use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::validation::{FieldError, Violation};

#[derive(Debug, Error)]
pub enum AppError {
    /// Missing credentials, unknown login and wrong password all map here.
    #[error("Access Denied")]
    Unauthenticated,
    #[error("Forbidden")]
    Forbidden,
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("Validation failed")]
    Validation(Vec<Violation>),
    #[error("{0} must be unique")]
    UniqueConstraintViolation(&'static str),
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Internal server error")]
    Db(#[from] sqlx::Error),
    #[error("Internal server error")]
    Unexpected(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthenticated => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::UniqueConstraintViolation(_) => StatusCode::BAD_REQUEST,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Db(_) | AppError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Turns a non-empty violation list into an error.
    pub fn check(violations: Vec<Violation>) -> Result<(), AppError> {
        if violations.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(violations))
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            AppError::Db(e) => {
                error!(error = %e, "database error");
                json!({ "message": self.to_string() })
            }
            AppError::Unexpected(e) => {
                error!(error = ?e, "unexpected error");
                json!({ "message": self.to_string() })
            }
            AppError::Validation(violations) => {
                let errors: Vec<FieldError> = violations.iter().map(FieldError::from).collect();
                json!({ "message": self.to_string(), "errors": errors })
            }
            AppError::UniqueConstraintViolation(field) => json!({
                "message": self.to_string(),
                "errors": [{ "field": field, "message": self.to_string() }],
            }),
            _ => json!({ "message": self.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}

/// True when the database rejected a write because of a UNIQUE constraint.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}
