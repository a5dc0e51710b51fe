// src/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mechinsight_api::{ErrorResponse, FieldError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum AppError {
    // === Erreurs Repository ===
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Already exists: {0}")]
    Duplicate(String),
    #[error("Database error: {0}")]
    DatabaseError(String),

    // === Erreurs d'Authentification ===
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Forbidden: {0}")]
    Forbidden(String),
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    // === Erreurs de Validation ===
    #[error("Validation failed")]
    Validation(Vec<FieldError>),
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // === Erreurs de Hashing/Cryptographie ===
    #[error("Password hashing failed: {0}")]
    PasswordHashingFailed(String),
    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    // === Erreurs internes ===
    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_code, message, internal_detail) = self.get_error_info();

        if let Some(ref detail) = internal_detail {
            tracing::error!(error_code, %status, %detail, "Request failed");
        }

        let details = match self {
            AppError::Validation(errors) => Some(errors),
            _ => None,
        };

        let body = Json(ErrorResponse {
            error: error_code.to_string(),
            message,
            details,
        });

        (status, body).into_response()
    }
}

impl AppError {
    /// Récupère les informations d'erreur formatées pour la réponse HTTP
    fn get_error_info(&self) -> (StatusCode, &'static str, String, Option<String>) {
        match self {
            // 404 Not Found
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone(), None),

            // 403 Forbidden - machine exists / machine is someone else's:
            // the client cannot tell
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone(), None),

            // 401 Unauthorized
            AppError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone(), None)
            }

            // 400 Bad Request
            AppError::InvalidCredentials(msg) => (
                StatusCode::BAD_REQUEST,
                "INVALID_CREDENTIALS",
                msg.clone(),
                None,
            ),
            AppError::Duplicate(msg) => {
                (StatusCode::BAD_REQUEST, "DUPLICATE_ENTRY", msg.clone(), None)
            }
            AppError::Validation(_) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                "Bad request".to_string(),
                None,
            ),
            AppError::InvalidInput(msg) => {
                (StatusCode::BAD_REQUEST, "INVALID_INPUT", msg.clone(), None)
            }

            // 500 Internal Server Error
            AppError::PasswordHashingFailed(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "HASHING_ERROR",
                "Internal Server Error".to_string(),
                Some(msg.clone()),
            ),
            AppError::TokenGenerationFailed(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "TOKEN_ERROR",
                "Internal Server Error".to_string(),
                Some(msg.clone()),
            ),
            AppError::DatabaseError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DATABASE_ERROR",
                "Internal Server Error".to_string(),
                Some(msg.clone()),
            ),
            AppError::InternalServerError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "Internal Server Error".to_string(),
                Some(msg.clone()),
            ),
        }
    }

    // === Constructeurs helpers ===
    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn duplicate(msg: impl Into<String>) -> Self {
        AppError::Duplicate(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        AppError::DatabaseError(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::InternalServerError(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        AppError::InvalidInput(msg.into())
    }

    pub fn invalid_credentials(msg: impl Into<String>) -> Self {
        AppError::InvalidCredentials(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        AppError::Unauthorized(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        AppError::Forbidden(msg.into())
    }

    /// Retourne le code de statut HTTP
    #[expect(dead_code, reason = "Used in unit tests")]
    pub fn status_code(&self) -> StatusCode {
        self.get_error_info().0
    }
}

// === Conversions automatiques depuis d'autres types d'erreurs ===

// Depuis RepositoryError
impl From<crate::db::error::RepositoryError> for AppError {
    fn from(err: crate::db::error::RepositoryError) -> Self {
        match err {
            crate::db::error::RepositoryError::NotFound(msg) => AppError::not_found(msg),
            crate::db::error::RepositoryError::UniqueViolation(msg) => AppError::duplicate(msg),
            crate::db::error::RepositoryError::PoolError(msg) => AppError::database(msg),
            crate::db::error::RepositoryError::DatabaseError(msg) => AppError::database(msg),
        }
    }
}

// Depuis JwtError
impl From<crate::auth::jwt::JwtError> for AppError {
    fn from(err: crate::auth::jwt::JwtError) -> Self {
        match err {
            crate::auth::jwt::JwtError::GenerationFailed(e) => {
                AppError::TokenGenerationFailed(e.to_string())
            }
            crate::auth::jwt::JwtError::VerificationFailed(_) => {
                AppError::unauthorized("Invalid token")
            }
        }
    }
}

// Depuis PasswordError
impl From<crate::auth::password::PasswordError> for AppError {
    fn from(err: crate::auth::password::PasswordError) -> Self {
        AppError::PasswordHashingFailed(err.to_string())
    }
}

// Depuis String (erreurs externes)
impl From<String> for AppError {
    fn from(err: String) -> Self {
        AppError::internal(err)
    }
}

// Depuis &str
impl From<&str> for AppError {
    fn from(err: &str) -> Self {
        AppError::internal(err.to_string())
    }
}

// Depuis serde_json::Error
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::invalid_input(format!("JSON error: {err}"))
    }
}

// Depuis axum::extract::rejection::JsonRejection
impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(err: axum::extract::rejection::JsonRejection) -> Self {
        AppError::invalid_input(format!("Invalid JSON: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_displays_correct_message() {
        let err = AppError::not_found("Machine");
        assert_eq!(err.to_string(), "Not found: Machine");
    }

    #[test]
    fn not_found_maps_to_404_status() {
        assert_eq!(
            AppError::not_found("test").status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn forbidden_maps_to_403_status() {
        assert_eq!(
            AppError::forbidden("not yours").status_code(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn unauthorized_maps_to_401_status() {
        assert_eq!(
            AppError::unauthorized("No token provided").status_code(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn invalid_credentials_map_to_400_status() {
        // login failures stay at 400, the contract the frontend expects
        assert_eq!(
            AppError::invalid_credentials("Wrong Password").status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn validation_error_maps_to_400_status() {
        assert_eq!(
            AppError::Validation(Vec::new()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn database_error_maps_to_500_and_hides_the_detail() {
        let err = AppError::database("connection refused by peer");
        let (status, _, message, internal_detail) = err.get_error_info();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "Internal Server Error");
        assert_eq!(internal_detail.as_deref(), Some("connection refused by peer"));
    }

    #[test]
    fn repository_not_found_converts_to_app_not_found() {
        let err: AppError =
            crate::db::error::RepositoryError::NotFound("No data found for this machine".into())
                .into();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn not_found_into_response_sets_404_status() {
        let err = AppError::not_found("Machine");
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
