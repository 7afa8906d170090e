//! # SSM Document Handler
//!
//! > **Read reconciliation for `AWS::SSM::Document`.**
//!
//! This crate reads the live state of an SSM document, merges its tags, classifies
//! its lifecycle status and reports a typed progress event to the orchestration
//! framework that drives the resource towards convergence.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Report, don't retry
//!
//! A handler runs once per reconciliation tick. It never sleeps, polls or retries:
//! - **`Success`**: the document is `Active`; the event carries the full model.
//! - **`InProgress`**: the document is still creating, updating or deleting; the framework calls again.
//! - **`Failed`**: the document settled in a failed state; the event carries the status detail.
//!
//! ### Two kinds of failure
//!
//! "The document is broken" and "we could not read the document" are different answers.
//! The first is a returned [`ProgressEvent`](framework::ProgressEvent) with status `Failed`.
//! The second is a raised [`HandlerError`](document_handler::HandlerError) naming the
//! document, the SSM operation and the classified [`ErrorKind`](document_handler::ErrorKind),
//! with the underlying SSM error as its source.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Exhaustive translation tables
//! Remote statuses and remote error codes are enums matched without wildcard arms.
//! A new remote status is a compile error, not a silent `Success`.
//!
//! ### 2. Client injection
//! The SSM client is passed into every call (`handle_request(&client, &request)`),
//! so one handler value serves any number of concurrent invocations.
//!
//! ### 3. Observability
//! We use `tracing` everywhere. Each invocation runs inside a span named after the
//! document. See the [`runtime::tracing`] module for details.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Boundary ([`framework`])
//! - **Role**: The types exchanged with the orchestration framework.
//! - **Key items**: [`ResourceHandler`](framework::ResourceHandler), [`ProgressEvent`](framework::ProgressEvent).
//!
//! ### 2. The Remote API ([`clients`])
//! - **Role**: The two SSM calls the handler needs, behind the [`SsmClient`](clients::SsmClient) trait.
//! - **Key items**: [`SsmError`](clients::SsmError), [`MockSsmClient`](clients::mock::MockSsmClient).
//!
//! ### 3. The Model ([`model`])
//! - **Role**: The document's desired/observed state and lifecycle status.
//!
//! ### 4. The Implementation ([`document_handler`])
//! - **Role**: Request/response translators, the tag reader, error classification and the [`ReadHandler`](document_handler::ReadHandler).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the tests with handler logs
//! RUST_LOG=info cargo test -- --nocapture
//! ```

pub mod clients;
pub mod document_handler;
pub mod framework;
pub mod model;
pub mod runtime;
