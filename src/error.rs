use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::Display;
use serde_json::json;
use sqlx::error::ErrorKind;
use tracing::error;

/// Domain error taxonomy. Every handler returns `Result<_, ApiError>` and the
/// `ResponseError` impl below turns the variant into the wire response.
#[derive(Debug, Display)]
pub enum ApiError {
    #[display(fmt = "{}", _0)]
    NotFound(String),
    #[display(fmt = "{}", _0)]
    Conflict(String),
    #[display(fmt = "{}", _0)]
    Validation(String),
    #[display(fmt = "Internal Server Error")]
    Database(sqlx::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Database(e) = self {
            error!(error = %e, "Database error");
        }
        HttpResponse::build(self.status_code()).json(json!({
            "detail": self.to_string()
        }))
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        // The uniqueness pre-checks in the handlers are a best-effort fast
        // path; the constraints in the schema are the real enforcement point.
        // A violation that slips past a pre-check still surfaces as Conflict.
        if let sqlx::Error::Database(db_err) = &e {
            if matches!(db_err.kind(), ErrorKind::UniqueViolation) {
                return ApiError::Conflict("Duplicate value for a unique field".to_string());
            }
        }
        ApiError::Database(e)
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(e: validator::ValidationErrors) -> Self {
        ApiError::Validation(e.to_string())
    }
}
