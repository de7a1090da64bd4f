use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    kind: &'static str,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        let kind = err.kind();
        match err {
            ApplicationError::InvalidArgument(msg) => {
                Self::new(StatusCode::BAD_REQUEST, kind, msg)
            }
            // a malformed id names no resource
            ApplicationError::InvalidResourceId(msg) => {
                Self::new(StatusCode::NOT_FOUND, kind, msg)
            }
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, kind, msg),
            ApplicationError::UpstreamUnavailable(msg) => Self::internal(kind, msg),
            ApplicationError::Domain(DomainError::Validation(msg)) => {
                Self::new(StatusCode::BAD_REQUEST, kind, msg)
            }
            ApplicationError::Domain(DomainError::NotFound(msg)) => {
                Self::new(StatusCode::NOT_FOUND, kind, msg)
            }
            ApplicationError::Domain(DomainError::Persistence(msg)) => Self::internal(kind, msg),
        }
    }

    pub fn path_not_found() -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            "not_found",
            "The requested path was not found".into(),
        )
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    fn internal(kind: &'static str, detail: String) -> Self {
        tracing::error!(error = %detail, "upstream failure while handling request");
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            kind,
            "The content store is currently unavailable".into(),
        )
    }

    fn new(status: StatusCode, kind: &'static str, message: String) -> Self {
        Self {
            status,
            kind,
            message,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            message: self.message,
            kind: self.kind.to_string(),
        };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Canonical HTTP reason phrase.
    pub error: String,
    pub message: String,
    /// One of `invalid_argument`, `not_found`, `upstream_unavailable`.
    pub kind: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
