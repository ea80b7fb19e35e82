use axum::{http::StatusCode, response::{IntoResponse, Response}};
use serde::Serialize;
use tracing::error;

use crate::repository::repository_error::RepositoryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerErrorKind {
    NotFound,
    BadRequest,
    Internal,
}

impl std::fmt::Display for HandlerErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            HandlerErrorKind::NotFound => "NotFound",
            HandlerErrorKind::BadRequest => "BadRequest",
            HandlerErrorKind::Internal => "Internal",
        };
        write!(f, "{}", s)
    }
}

/// Error returned by every handler. Only `message` reaches the client.
#[derive(Debug, Serialize)]
pub struct HandlerError {
    #[serde(skip)]
    pub error: HandlerErrorKind,
    pub message: String,
}

impl HandlerError {
    pub fn bad_request<T: Into<String>>(message: T) -> Self {
        HandlerError { error: HandlerErrorKind::BadRequest, message: message.into() }
    }

    pub fn not_found<T: Into<String>>(message: T) -> Self {
        HandlerError { error: HandlerErrorKind::NotFound, message: message.into() }
    }

    pub fn internal<T: Into<String>>(message: T) -> Self {
        HandlerError { error: HandlerErrorKind::Internal, message: message.into() }
    }

    /// Client errors keep their message and map to 400. Store and internal
    /// failures are logged and replaced by `internal_message`.
    pub fn from_service(err: ServiceError, internal_message: &str) -> Self {
        match err {
            ServiceError::Validation(msg)
            | ServiceError::Conflict(msg)
            | ServiceError::NotFound(msg)
            | ServiceError::Auth(msg) => HandlerError::bad_request(msg),
            ServiceError::Store(detail) | ServiceError::Internal(detail) => {
                error!("{}: {}", internal_message, detail);
                HandlerError::internal(internal_message)
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self.error {
            HandlerErrorKind::NotFound => StatusCode::NOT_FOUND,
            HandlerErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            HandlerErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for HandlerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for HandlerError {}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Auth(String),
    #[error("Store error: {0}")]
    Store(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::AlreadyExists(_) => ServiceError::Conflict(messages::USER_EXISTS.to_string()),
            other => ServiceError::Store(other.to_string()),
        }
    }
}

/// Client-facing messages.
pub mod messages {
    pub const REGISTER_MISSING_FIELDS: &str = "Please fill all required fields";
    pub const USER_EXISTS: &str = "User already exists";
    pub const REGISTER_SUCCESS: &str = "Registration successful!";
    pub const LOGIN_MISSING_FIELDS: &str = "Please enter both email and password";
    pub const USER_NOT_FOUND: &str = "User not found";
    pub const INVALID_PASSWORD: &str = "Invalid password";
    pub const LOGIN_SUCCESS: &str = "Login successful";
    pub const SERVER_ERROR: &str = "Server error";

    pub const COURSE_MISSING_FIELDS: &str = "All fields are required";
    pub const COURSE_CREATED: &str = "Course created successfully";
    pub const COURSE_CREATE_FAILED: &str = "Error creating course";
    pub const COURSE_LIST_FAILED: &str = "Failed to fetch courses";
    pub const COURSE_NOT_FOUND: &str = "Course not found";
    pub const COURSE_DELETED: &str = "Course deleted successfully";
    pub const COURSE_DELETE_FAILED: &str = "Error deleting course";
}
