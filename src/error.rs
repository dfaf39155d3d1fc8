use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use thiserror::Error;

/// Request-level failures, split into the two tiers the API reports:
/// client errors (400) and server errors (500). Every response body carries
/// a machine-readable `code` plus the human-readable `error` message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("ID obligatorio")]
    MissingUserId,

    #[error("Ya registraste tu ingreso hoy")]
    DuplicateCheckIn,

    #[error("No tienes un ingreso pendiente")]
    NoOpenSession,

    #[error("Código incorrecto")]
    InvalidCode,

    #[error("No se pudo generar un código único")]
    CodeSpaceExhausted,

    #[error("Error interno del servidor")]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::MissingUserId => "MISSING_USER_ID",
            ApiError::DuplicateCheckIn => "DUPLICATE_CHECK_IN",
            ApiError::NoOpenSession => "NO_OPEN_SESSION",
            ApiError::InvalidCode => "INVALID_CODE",
            ApiError::CodeSpaceExhausted => "CODE_SPACE_EXHAUSTED",
            ApiError::Database(_) => "INTERNAL_ERROR",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingUserId
            | ApiError::DuplicateCheckIn
            | ApiError::NoOpenSession
            | ApiError::InvalidCode => StatusCode::BAD_REQUEST,
            ApiError::CodeSpaceExhausted | ApiError::Database(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Database(e) = self {
            tracing::error!(error = %e, "Database error");
        }

        HttpResponse::build(self.status_code()).json(json!({
            "code": self.kind(),
            "error": self.to_string(),
        }))
    }
}
