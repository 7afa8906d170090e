//! # Handler Framework Boundary
//!
//! This module defines the types exchanged with the orchestration framework that
//! drives a resource towards convergence.
//!
//! ## Key Types
//!
//! - [`ResourceHandler`]: The trait every lifecycle handler implements.
//! - [`ResourceHandlerRequest`]: The envelope carrying the desired resource state.
//! - [`ProgressEvent`]: What a handler reports back (success, in progress, failed).
//! - [`HandlerErrorCode`]: The framework's closed set of failure codes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any lifecycle handler (read, create, update, delete) implements.
///
/// # Architecture Note
/// The framework invokes a handler once per reconciliation tick. The handler
/// translates the desired state into remote calls, translates the answers back,
/// and reports a [`ProgressEvent`]. Retrying and polling belong to the framework:
/// a handler signals "call me again" only through [`OperationStatus::InProgress`].
///
/// # Client Injection
/// The remote client is passed into every call instead of being owned by the
/// handler. One handler value can therefore serve many concurrent invocations
/// against different accounts or regions.
///
/// # Errors
/// `Err` means the handler itself could not execute (the remote call failed).
/// A resource that *did* answer but reports a failed state is an `Ok` event
/// with [`OperationStatus::Failed`].
#[async_trait]
pub trait ResourceHandler: Send + Sync {
    /// The resource model this handler reads and reports.
    type Model: Clone + Send + Sync + Debug;

    /// The remote API client handle (usually a trait object).
    type Client: ?Sized + Sync;

    /// The error raised when the handler cannot complete.
    type Error: HandlerFailure + Send + Sync + 'static;

    /// Run one invocation of the handler.
    async fn handle_request(
        &self,
        client: &Self::Client,
        request: &ResourceHandlerRequest<Self::Model>,
    ) -> Result<ProgressEvent<Self::Model>, Self::Error>;
}

/// Errors that know which framework failure code they correspond to.
pub trait HandlerFailure: std::error::Error {
    fn error_code(&self) -> HandlerErrorCode;
}

// =============================================================================
// 2. THE REQUEST ENVELOPE
// =============================================================================

/// The framework's request for a single handler invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceHandlerRequest<M> {
    pub desired_resource_state: M,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logical_resource_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,
}

impl<M> ResourceHandlerRequest<M> {
    pub fn new(desired_resource_state: M) -> Self {
        Self {
            desired_resource_state,
            logical_resource_identifier: None,
            client_request_token: None,
        }
    }

    pub fn with_logical_resource_identifier(mut self, id: impl Into<String>) -> Self {
        self.logical_resource_identifier = Some(id.into());
        self
    }

    pub fn with_client_request_token(mut self, token: impl Into<String>) -> Self {
        self.client_request_token = Some(token.into());
        self
    }
}

// =============================================================================
// 3. THE PROGRESS EVENT
// =============================================================================

/// Overall status reported to the framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationStatus {
    Success,
    InProgress,
    Failed,
}

/// Failure codes understood by the framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandlerErrorCode {
    NotFound,
    Throttling,
    AccessDenied,
    ServiceInternalError,
    GeneralServiceException,
    /// The resource answered but settled in a failed state.
    NotStabilized,
}

/// The handler's report for one invocation.
///
/// # Invariants
/// - `Success` always carries the resource model.
/// - `Failed` never carries a model and always carries a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEvent<M> {
    pub status: OperationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_model: Option<M>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<HandlerErrorCode>,
}

impl<M> ProgressEvent<M> {
    pub fn success(model: M) -> Self {
        Self {
            status: OperationStatus::Success,
            resource_model: Some(model),
            message: None,
            error_code: None,
        }
    }

    pub fn in_progress(model: Option<M>) -> Self {
        Self {
            status: OperationStatus::InProgress,
            resource_model: model,
            message: None,
            error_code: None,
        }
    }

    pub fn failed(error_code: HandlerErrorCode, message: impl Into<String>) -> Self {
        Self {
            status: OperationStatus::Failed,
            resource_model: None,
            message: Some(message.into()),
            error_code: Some(error_code),
        }
    }

    /// Render a raised handler error as a failed event.
    ///
    /// For frameworks that record every invocation as an event instead of
    /// propagating the error.
    pub fn from_error<E: HandlerFailure + ?Sized>(error: &E) -> Self {
        Self::failed(error.error_code(), error.to_string())
    }

    pub fn is_terminal(&self) -> bool {
        self.status != OperationStatus::InProgress
    }
}
