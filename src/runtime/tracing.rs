//! # Observability & Tracing
//!
//! The handlers log through `tracing`; the hosting process decides where the
//! events go. [`setup_tracing`] installs a compact `fmt` subscriber for hosts
//! that have none of their own.
//!
//! ## What Gets Traced
//!
//! - **Invocation span**: `handle_request{document=... logical_id=...}` around every read
//! - **Remote calls**: the `GetDocument` request at `debug`, tag counts at `debug`
//! - **Outcome**: `Document read status=ACTIVE` at `info`
//! - **Failures**: every translated SSM error at `warn`, with operation, kind and code
//!
//! ## Usage Examples
//!
//! ```bash
//! # Outcomes and failures
//! RUST_LOG=info cargo test
//!
//! # Request payloads and tag counts
//! RUST_LOG=ssm_document_handler=debug cargo test
//! ```
//!
//! **With `RUST_LOG=debug`**:
//!
//! ```text
//! DEBUG handle_request: Reading document get_request=GetDocumentRequest { name: "sampleDocument" } document=sampleDocument logical_id=-
//! DEBUG handle_request:get_document_tags: Tags listed count=2 document_name="sampleDocument"
//! INFO handle_request: Document read status=ACTIVE document=sampleDocument logical_id=-
//! ```

/// Initializes the tracing subscriber, filtered by `RUST_LOG`.
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // span names already say where we are
        .compact()
        .try_init();
}
