//! Classifies SSM API failures into [`HandlerError`]s.

use crate::clients::{SsmError, SsmErrorCode};
use crate::document_handler::error::{ErrorKind, HandlerError};
use tracing::warn;

/// Turns an [`SsmError`] into a typed [`HandlerError`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentExceptionTranslator;

impl DocumentExceptionTranslator {
    /// Classify `error` raised by `operation` on the document `resource_name`.
    ///
    /// Every code maps to exactly one [`ErrorKind`]; unrecognized codes become
    /// [`ErrorKind::Unknown`].
    pub fn get_handler_error(
        &self,
        error: SsmError,
        resource_name: &str,
        operation: &str,
    ) -> HandlerError {
        let kind = classify(&error.code);
        warn!(
            resource_name,
            operation,
            %kind,
            code = %error.code,
            error = %error.message,
            "SSM call failed"
        );
        HandlerError::new(kind, resource_name, operation, error)
    }
}

fn classify(code: &SsmErrorCode) -> ErrorKind {
    match code {
        SsmErrorCode::InvalidDocument
        | SsmErrorCode::InvalidDocumentVersion
        | SsmErrorCode::InvalidResourceId => ErrorKind::ResourceNotFound,
        SsmErrorCode::ThrottlingException | SsmErrorCode::TooManyUpdates => ErrorKind::Throttled,
        SsmErrorCode::AccessDeniedException => ErrorKind::AccessDenied,
        SsmErrorCode::InternalServerError => ErrorKind::ServiceInternal,
        SsmErrorCode::InvalidResourceType | SsmErrorCode::Unrecognized(_) => ErrorKind::Unknown,
    }
}
