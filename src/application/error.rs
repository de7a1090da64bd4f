// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A request parameter could not be interpreted.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The resource id in the path is missing or malformed. Callers see
    /// this as a missing resource.
    #[error("invalid resource id: {0}")]
    InvalidResourceId(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),
}

impl ApplicationError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn invalid_resource_id(msg: impl Into<String>) -> Self {
        Self::InvalidResourceId(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::UpstreamUnavailable(msg.into())
    }

    /// Stable, machine readable classification of the failure.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Domain(DomainError::Validation(_)) => "invalid_argument",
            Self::Domain(DomainError::NotFound(_)) => "not_found",
            Self::Domain(DomainError::Persistence(_)) => "upstream_unavailable",
            Self::InvalidArgument(_) | Self::InvalidResourceId(_) => "invalid_argument",
            Self::NotFound(_) => "not_found",
            Self::UpstreamUnavailable(_) => "upstream_unavailable",
        }
    }
}
