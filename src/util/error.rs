use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::repository::repository_error::RepositoryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HandlerErrorKind {
    NotFound,
    Validation,
    Internal,
    Unauthorized,
    Conflict,
    BadRequest,
}

impl std::fmt::Display for HandlerErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            HandlerErrorKind::NotFound => "NotFound",
            HandlerErrorKind::Validation => "Validation",
            HandlerErrorKind::Internal => "Internal",
            HandlerErrorKind::Unauthorized => "Unauthorized",
            HandlerErrorKind::Conflict => "Conflict",
            HandlerErrorKind::BadRequest => "BadRequest",
        };
        write!(f, "{}", s)
    }
}

/// HTTP boundary error: converted into a status code plus a JSON `{message}`
/// body that the admin UI surfaces verbatim.
#[derive(Debug, Serialize)]
pub struct HandlerError {
    #[serde(skip)]
    pub kind: HandlerErrorKind,
    pub message: String,
}

impl HandlerError {
    pub fn bad_request<T: Into<String>>(message: T) -> Self {
        HandlerError {
            kind: HandlerErrorKind::BadRequest,
            message: message.into(),
        }
    }

    pub fn validation<T: Into<String>>(message: T) -> Self {
        HandlerError {
            kind: HandlerErrorKind::Validation,
            message: message.into(),
        }
    }

    pub fn not_found<T: Into<String>>(message: T) -> Self {
        HandlerError {
            kind: HandlerErrorKind::NotFound,
            message: message.into(),
        }
    }

    pub fn internal<T: Into<String>>(message: T) -> Self {
        HandlerError {
            kind: HandlerErrorKind::Internal,
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self.kind {
            HandlerErrorKind::NotFound => StatusCode::NOT_FOUND,
            HandlerErrorKind::Validation | HandlerErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            HandlerErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            HandlerErrorKind::Conflict => StatusCode::CONFLICT,
            HandlerErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for HandlerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for HandlerError {}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, axum::Json(self)).into_response()
    }
}

impl From<ServiceError> for HandlerError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(msg) => HandlerError {
                kind: HandlerErrorKind::NotFound,
                message: msg,
            },
            ServiceError::InvalidInput(msg) => HandlerError {
                kind: HandlerErrorKind::Validation,
                message: msg,
            },
            ServiceError::Conflict(msg) => HandlerError {
                kind: HandlerErrorKind::Conflict,
                message: msg,
            },
            ServiceError::Unauthorized(msg) => HandlerError {
                kind: HandlerErrorKind::Unauthorized,
                message: msg,
            },
            // Storage details stay in the logs, clients get a generic message
            ServiceError::InternalError(_) => HandlerError {
                kind: HandlerErrorKind::Internal,
                message: "Server Error".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ServiceError {
    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Invalid Input: {0}")]
    InvalidInput(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal Error: {0}")]
    InternalError(String),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(msg) => ServiceError::NotFound(msg),
            RepositoryError::ValidationError(msg) => ServiceError::InvalidInput(msg),
            RepositoryError::AlreadyExists(msg) => ServiceError::Conflict(msg),
            RepositoryError::DatabaseError(msg) => ServiceError::InternalError(msg),
            RepositoryError::ConnectionError(msg) => ServiceError::InternalError(msg),
            RepositoryError::SerializationError(msg) => ServiceError::InternalError(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_map_to_400() {
        let err = HandlerError::from(ServiceError::InvalidInput("bad status".to_string()));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "bad status");
    }

    #[test]
    fn not_found_maps_to_404() {
        let err = HandlerError::from(ServiceError::NotFound("Enquiry not found".to_string()));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn unauthorized_maps_to_401() {
        let err = HandlerError::from(ServiceError::Unauthorized(
            "Invalid email or password".to_string(),
        ));
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn internal_errors_hide_storage_details() {
        let err = HandlerError::from(ServiceError::InternalError(
            "mongodb: pool exhausted".to_string(),
        ));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "Server Error");
    }

    #[test]
    fn repository_errors_keep_their_category() {
        let service: ServiceError = RepositoryError::not_found("gone").into();
        assert!(matches!(service, ServiceError::NotFound(_)));
        let service: ServiceError = RepositoryError::validation("bad").into();
        assert!(matches!(service, ServiceError::InvalidInput(_)));
    }
}
