//! Boundary types shared with the orchestration framework.
//!
//! This module provides the handler contract and the values exchanged across it.
//!
//! # Main Components
//!
//! - [`ResourceHandler`] - Trait that lifecycle handlers implement
//! - [`ResourceHandlerRequest`] - Desired-state envelope passed to a handler
//! - [`ProgressEvent`] / [`OperationStatus`] - What a handler reports back
//! - [`HandlerErrorCode`] / [`HandlerFailure`] - Typed failure codes

pub mod core;

// Re-export core types for convenience
pub use core::*;
