//! Error types raised by the document handlers.

use crate::clients::SsmError;
use crate::framework::{HandlerErrorCode, HandlerFailure};
use std::fmt;
use thiserror::Error;

/// What went wrong with a remote call, independent of the SSM error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The document (or its tags) does not exist.
    ResourceNotFound,
    /// The API rate limit was exceeded.
    Throttled,
    /// The caller is not allowed to perform the call.
    AccessDenied,
    /// The service failed on its side.
    ServiceInternal,
    /// Any error code without a dedicated mapping.
    Unknown,
}

impl ErrorKind {
    pub fn error_code(self) -> HandlerErrorCode {
        match self {
            ErrorKind::ResourceNotFound => HandlerErrorCode::NotFound,
            ErrorKind::Throttled => HandlerErrorCode::Throttling,
            ErrorKind::AccessDenied => HandlerErrorCode::AccessDenied,
            ErrorKind::ServiceInternal => HandlerErrorCode::ServiceInternalError,
            ErrorKind::Unknown => HandlerErrorCode::GeneralServiceException,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorKind::ResourceNotFound => "resource not found",
            ErrorKind::Throttled => "throttled",
            ErrorKind::AccessDenied => "access denied",
            ErrorKind::ServiceInternal => "service internal error",
            ErrorKind::Unknown => "unknown error",
        };
        f.write_str(label)
    }
}

/// A remote call failure, tagged with the operation and document it hit.
///
/// The SSM error is kept as the [`source`](std::error::Error::source).
#[derive(Debug, Clone, Error, PartialEq)]
#[error("General service failure: {operation} on {resource_name} ({kind}): {source}")]
pub struct HandlerError {
    kind: ErrorKind,
    resource_name: String,
    operation: String,
    source: SsmError,
}

impl HandlerError {
    pub fn new(
        kind: ErrorKind,
        resource_name: impl Into<String>,
        operation: impl Into<String>,
        source: SsmError,
    ) -> Self {
        Self {
            kind,
            resource_name: resource_name.into(),
            operation: operation.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn resource_name(&self) -> &str {
        &self.resource_name
    }

    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// The SSM error this was translated from.
    pub fn ssm_error(&self) -> &SsmError {
        &self.source
    }
}

impl HandlerFailure for HandlerError {
    fn error_code(&self) -> HandlerErrorCode {
        self.kind.error_code()
    }
}
