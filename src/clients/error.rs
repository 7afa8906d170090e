//! Error types raised by the SSM API.

use std::fmt;
use thiserror::Error;

/// Error code declared by the SSM API on a failed call.
///
/// Codes the handlers know about get their own variant; anything else is kept
/// verbatim in [`SsmErrorCode::Unrecognized`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SsmErrorCode {
    /// The named document does not exist (or is not shared with the caller).
    InvalidDocument,
    /// The requested document version does not exist.
    InvalidDocumentVersion,
    /// The tagged resource id does not exist.
    InvalidResourceId,
    /// The resource type is not taggable.
    InvalidResourceType,
    ThrottlingException,
    TooManyUpdates,
    AccessDeniedException,
    InternalServerError,
    Unrecognized(String),
}

impl SsmErrorCode {
    pub fn as_str(&self) -> &str {
        match self {
            SsmErrorCode::InvalidDocument => "InvalidDocument",
            SsmErrorCode::InvalidDocumentVersion => "InvalidDocumentVersion",
            SsmErrorCode::InvalidResourceId => "InvalidResourceId",
            SsmErrorCode::InvalidResourceType => "InvalidResourceType",
            SsmErrorCode::ThrottlingException => "ThrottlingException",
            SsmErrorCode::TooManyUpdates => "TooManyUpdates",
            SsmErrorCode::AccessDeniedException => "AccessDeniedException",
            SsmErrorCode::InternalServerError => "InternalServerError",
            SsmErrorCode::Unrecognized(code) => code,
        }
    }
}

impl From<&str> for SsmErrorCode {
    fn from(code: &str) -> Self {
        match code {
            "InvalidDocument" => SsmErrorCode::InvalidDocument,
            "InvalidDocumentVersion" => SsmErrorCode::InvalidDocumentVersion,
            "InvalidResourceId" => SsmErrorCode::InvalidResourceId,
            "InvalidResourceType" => SsmErrorCode::InvalidResourceType,
            "ThrottlingException" => SsmErrorCode::ThrottlingException,
            "TooManyUpdates" => SsmErrorCode::TooManyUpdates,
            "AccessDeniedException" => SsmErrorCode::AccessDeniedException,
            "InternalServerError" => SsmErrorCode::InternalServerError,
            other => SsmErrorCode::Unrecognized(other.to_string()),
        }
    }
}

impl fmt::Display for SsmErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed SSM API call.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{code}: {message}")]
pub struct SsmError {
    pub code: SsmErrorCode,
    pub message: String,
}

impl SsmError {
    pub fn new(code: impl Into<SsmErrorCode>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}
