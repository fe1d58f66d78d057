use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;
use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::errors::ErrorCode;
use crate::http::Envelope;
use crate::infra::db_errors::map_db_err;
use crate::trace_ctx;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: ErrorCode, detail: String },
    #[error("Invalid JSON: {detail}")]
    InvalidJson { detail: String },
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Conflict: {detail}")]
    Conflict { code: ErrorCode, detail: String },
    #[error("Database error: {detail}")]
    Db { code: ErrorCode, detail: String },
    #[error("Database unavailable")]
    DbUnavailable,
    #[error("Internal error: {detail}")]
    Internal { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    /// Internal classification of this error, used for logging.
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { code, .. } => *code,
            AppError::InvalidJson { .. } => ErrorCode::InvalidJson,
            AppError::MethodNotAllowed => ErrorCode::MethodNotAllowed,
            AppError::NotFound { code, .. } => *code,
            AppError::Conflict { code, .. } => *code,
            AppError::Db { code, .. } => *code,
            AppError::DbUnavailable => ErrorCode::DbUnavailable,
            AppError::Internal { .. } => ErrorCode::Internal,
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::InvalidJson { .. } => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Db { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::DbUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the public envelope.
    ///
    /// Only validation failures expose their detail; everything else maps to
    /// the coarse message of its code.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation { code, detail } => format!("{}: {detail}", code.wire_message()),
            other => other.code().wire_message().to_string(),
        }
    }

    pub fn invalid(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Validation {
            code,
            detail: detail.into(),
        }
    }

    pub fn invalid_json(detail: impl Into<String>) -> Self {
        Self::InvalidJson {
            detail: detail.into(),
        }
    }

    pub fn method_not_allowed() -> Self {
        Self::MethodNotAllowed
    }

    pub fn not_found(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            detail: detail.into(),
        }
    }

    pub fn conflict(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Conflict {
            code,
            detail: detail.into(),
        }
    }

    pub fn db(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Db {
            code,
            detail: detail.into(),
        }
    }

    pub fn db_unavailable() -> Self {
        Self::DbUnavailable
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(detail) => {
                AppError::invalid(ErrorCode::ValidationError, detail)
            }
            DomainError::NotFound(kind, detail) => {
                let code = match kind {
                    NotFoundKind::Player => ErrorCode::PlayerNotFound,
                    NotFoundKind::Game => ErrorCode::GameNotFound,
                    NotFoundKind::GamePlayer => ErrorCode::GamePlayerNotFound,
                    NotFoundKind::Reference => ErrorCode::FkViolation,
                    _ => ErrorCode::NotFound,
                };
                AppError::not_found(code, detail)
            }
            DomainError::Conflict(kind, detail) => {
                let code = match kind {
                    ConflictKind::AlreadyAttached => ErrorCode::AlreadyAttached,
                    _ => ErrorCode::Conflict,
                };
                AppError::conflict(code, detail)
            }
            DomainError::Infra(kind, detail) => match kind {
                InfraErrorKind::DbUnavailable => AppError::db_unavailable(),
                InfraErrorKind::Timeout => AppError::db(ErrorCode::DbTimeout, detail),
                _ => AppError::db(ErrorCode::DbError, detail),
            },
        }
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(e: sea_orm::DbErr) -> Self {
        AppError::from(map_db_err(e))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let trace_id = trace_ctx::trace_id();

        // The envelope hides the failure kind; the log keeps it.
        if status.is_server_error() {
            error!(trace_id = %trace_id, code = %self.code(), error = %self, "request_failed");
        } else {
            warn!(trace_id = %trace_id, code = %self.code(), error = %self, "request_rejected");
        }

        HttpResponse::build(status)
            .insert_header(("x-trace-id", trace_id))
            .json(Envelope::failure(self.public_message()))
    }
}
