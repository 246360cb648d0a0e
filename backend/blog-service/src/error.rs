/// Error types for blog-service
///
/// Errors are converted to the HTTP responses the presentation layer
/// expects: validation problems come back as a 400 with a field message to
/// re-render into the form, missing resources as a 404, and unauthenticated
/// mutation attempts as a redirect to the login entry point rather than a
/// hard failure.
use actix_web::http::header::LOCATION;
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use thiserror::Error;

/// Entry point of the external authentication flow.
pub const LOGIN_PATH: &str = "/auth/login";

/// Result type for blog-service operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// Input failed validation (empty required text, duplicate slug)
    #[error("validation failed: {0}")]
    Validation(String),

    /// Resource not found (unknown id, slug or username)
    #[error("not found: {0}")]
    NotFound(String),

    /// Caller must authenticate before performing this action
    #[error("authentication required")]
    AuthRequired,

    /// Caller is authenticated but not permitted to touch this resource
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Database operation failed
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AuthRequired => StatusCode::SEE_OTHER,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::AuthRequired => HttpResponse::SeeOther()
                .insert_header((LOCATION, LOGIN_PATH))
                .finish(),
            other => {
                let status = other.status_code();
                HttpResponse::build(status).json(serde_json::json!({
                    "error": other.to_string(),
                    "status": status.as_u16(),
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_mutation_redirects_instead_of_failing() {
        let response = AppError::AuthRequired.error_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let location = response.headers().get(LOCATION).unwrap();
        assert_eq!(location.to_str().unwrap(), LOGIN_PATH);
    }

    #[test]
    fn validation_maps_to_bad_request() {
        assert_eq!(
            AppError::Validation("text must not be empty".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("post".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Forbidden("not the author".into()).status_code(),
            StatusCode::FORBIDDEN
        );
    }
}
