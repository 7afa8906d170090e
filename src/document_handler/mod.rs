//! # Document Handlers
//!
//! Lifecycle handlers for the `AWS::SSM::Document` resource.
//!
//! ## Structure
//!
//! - [`read`] - [`ReadHandler`], the [`ResourceHandler`](crate::framework::ResourceHandler) for reads
//! - [`translator`] - desired state → SSM request
//! - [`response_translator`] - SSM response + tags → [`ResourceInformation`](crate::model::ResourceInformation)
//! - [`tags`] - [`TagReader`] for `ListTagsForResource`
//! - [`exception_translator`] - SSM errors → [`HandlerError`]
//! - [`error`] - [`HandlerError`] and its [`ErrorKind`] taxonomy
//!
//! ## Usage
//!
//! ```rust
//! use ssm_document_handler::clients::mock::MockSsmClient;
//! use ssm_document_handler::clients::{DocumentStatus, GetDocumentResponse};
//! use ssm_document_handler::document_handler::ReadHandler;
//! use ssm_document_handler::framework::{OperationStatus, ResourceHandler, ResourceHandlerRequest};
//! use ssm_document_handler::model::ResourceModel;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MockSsmClient::new();
//!     client
//!         .expect_get_document("sampleDocument")
//!         .return_ok(GetDocumentResponse::new("sampleDocument", DocumentStatus::Active));
//!     client.expect_list_tags("sampleDocument").return_ok(vec![]);
//!
//!     let request = ResourceHandlerRequest::new(ResourceModel::new("sampleDocument"));
//!     let event = ReadHandler::default().handle_request(&client, &request).await?;
//!
//!     assert_eq!(event.status, OperationStatus::Success);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod exception_translator;
pub mod read;
pub mod response_translator;
pub mod tags;
pub mod translator;

pub use error::*;
pub use exception_translator::*;
pub use read::*;
pub use response_translator::*;
pub use tags::*;
pub use translator::*;

/// Operation name attached to `GetDocument` failures.
pub const GET_DOCUMENT: &str = "GetDocument";

/// Operation name attached to `ListTagsForResource` failures.
pub const LIST_TAGS_FOR_RESOURCE: &str = "ListTagsForResource";
