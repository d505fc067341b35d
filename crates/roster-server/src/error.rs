//! Error translation to HTTP responses.

use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;

use roster_core::Error;

/// JSON body every failed request carries.
#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: &'a str,
}

/// A request failure with a stable error code and an HTTP status.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl ApiError {
    /// A 400 with the generic `bad_request` code, for failures that happen
    /// before a domain error exists (malformed multipart, bad file names).
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            code: "bad_request",
            message: message.into(),
        }
    }

    /// A plain 404 for resources outside the record collection.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            code: "not_found",
            message: message.into(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let (status, code) = match &err {
            Error::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            Error::Validation(_) => (StatusCode::BAD_REQUEST, "validation"),
            Error::StorageRead(_) => (StatusCode::INTERNAL_SERVER_ERROR, "storage_read"),
            Error::StorageWrite(_) => (StatusCode::INTERNAL_SERVER_ERROR, "storage_write"),
            Error::Transport(_) => (StatusCode::BAD_GATEWAY, "transport"),
        };
        Self {
            status,
            code,
            message: err.to_string(),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status).json(ErrorBody {
            error: self.code,
            message: &self.message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::error::ValidationError;

    #[test]
    fn not_found_maps_to_404() {
        let err = ApiError::from(Error::NotFound { id: 123456 });
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.code, "not_found");
    }

    #[test]
    fn validation_maps_to_400() {
        let err = ApiError::from(Error::Validation(ValidationError::Empty { field: "name" }));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.message.contains("name"));
    }

    #[test]
    fn transport_maps_to_502() {
        let err = ApiError::from(Error::Transport(
            roster_core::error::TransportError::Timeout,
        ));
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }
}
