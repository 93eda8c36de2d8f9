use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============= Authentication Types =============

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
    pub message: String,
}

/// Decoded JWT payload attached to a request as its identity.
///
/// Carries a minimal identity reference only - never the stored user
/// record or its password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub username: String,
    pub exp: usize,
    pub iat: usize,
}

// ============= Kitten Types =============

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateKittenRequest {
    pub name: String,
    pub age: i64,
    pub color: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct KittenResponse {
    pub name: String,
    pub age: i64,
    pub color: String,
}

// ============= Error Types =============

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("{0}")]
    Auth(String),

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Error class rendered in the `name` field of the JSON body.
    fn name(&self) -> &'static str {
        match self {
            AppError::Database(_) => "Database",
            AppError::Auth(_) => "Auth",
            AppError::InvalidToken(_) => "InvalidToken",
            AppError::Conflict(_) => "Conflict",
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::Internal(_) => "Internal",
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            AppError::Database(_) => axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Auth(_) => axum::http::StatusCode::UNAUTHORIZED,
            AppError::InvalidToken(_) => axum::http::StatusCode::UNAUTHORIZED,
            AppError::Conflict(_) => axum::http::StatusCode::CONFLICT,
            AppError::InvalidInput(_) => axum::http::StatusCode::BAD_REQUEST,
            AppError::Internal(_) => axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = self.to_string();
        let body = serde_json::json!({
            "error": message,
            "name": self.name(),
            "message": message,
        });

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn test_error_status_mapping() {
        let cases = [
            (AppError::Database("x".into()), 500),
            (AppError::Auth("x".into()), 401),
            (AppError::InvalidToken("x".into()), 401),
            (AppError::Conflict("x".into()), 409),
            (AppError::InvalidInput("x".into()), 400),
            (AppError::Internal("x".into()), 500),
        ];

        for (err, expected) in cases {
            let response = err.into_response();
            assert_eq!(response.status().as_u16(), expected);
        }
    }

    #[test]
    fn test_error_name() {
        assert_eq!(AppError::Conflict("taken".into()).name(), "Conflict");
        assert_eq!(AppError::InvalidToken("bad".into()).name(), "InvalidToken");
    }
}
