//! # Read Handler
//!
//! Reads the current state of an SSM document and reports it to the framework.
//!
//! One invocation runs:
//!
//! 1. desired state → `GetDocument` request
//! 2. `GetDocument` and `ListTagsForResource`, issued concurrently
//! 3. response + tags → [`ResourceInformation`]
//! 4. lifecycle status → [`ProgressEvent`]
//!
//! Any failed remote call aborts the invocation with a [`HandlerError`]. A
//! document in `Failed` state is *not* an error: it is reported as a failed
//! event so the framework can tell "could not read" from "read a broken document".

use crate::clients::SsmClient;
use crate::document_handler::error::HandlerError;
use crate::document_handler::exception_translator::DocumentExceptionTranslator;
use crate::document_handler::response_translator::DocumentResponseModelTranslator;
use crate::document_handler::tags::TagReader;
use crate::document_handler::translator::DocumentModelTranslator;
use crate::document_handler::{GET_DOCUMENT, LIST_TAGS_FOR_RESOURCE};
use crate::framework::{
    HandlerErrorCode, ProgressEvent, ResourceHandler, ResourceHandlerRequest,
};
use crate::model::{ResourceInformation, ResourceModel, ResourceStatus};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Read handler for `AWS::SSM::Document`.
///
/// Stateless: build it once with `ReadHandler::default()` and share it across
/// invocations.
#[derive(Debug, Clone, Default)]
pub struct ReadHandler {
    model_translator: DocumentModelTranslator,
    response_translator: DocumentResponseModelTranslator,
    tag_reader: TagReader,
    exception_translator: DocumentExceptionTranslator,
}

#[async_trait]
impl ResourceHandler for ReadHandler {
    type Model = ResourceModel;
    type Client = dyn SsmClient;
    type Error = HandlerError;

    #[instrument(
        skip_all,
        fields(
            document = %request.desired_resource_state.name,
            logical_id = request.logical_resource_identifier.as_deref().unwrap_or("-"),
        )
    )]
    async fn handle_request(
        &self,
        client: &Self::Client,
        request: &ResourceHandlerRequest<ResourceModel>,
    ) -> Result<ProgressEvent<ResourceModel>, HandlerError> {
        let desired = &request.desired_resource_state;
        let name = desired.name.as_str();

        let get_request = self.model_translator.generate_get_document_request(desired);
        debug!(?get_request, "Reading document");

        let document = async {
            client.get_document(get_request).await.map_err(|e| {
                self.exception_translator
                    .get_handler_error(e, name, GET_DOCUMENT)
            })
        };
        let tags = async {
            self.tag_reader
                .get_document_tags(name, client)
                .await
                .map_err(|e| {
                    self.exception_translator
                        .get_handler_error(e, name, LIST_TAGS_FOR_RESOURCE)
                })
        };
        let (response, tags) = tokio::try_join!(document, tags)?;

        let information = self
            .response_translator
            .generate_resource_information(desired, &response, tags);
        info!(status = %information.status, "Document read");

        Ok(progress_event(information))
    }
}

/// The framework status is decided by the lifecycle status alone.
fn progress_event(information: ResourceInformation) -> ProgressEvent<ResourceModel> {
    match information.status {
        ResourceStatus::Active => ProgressEvent::success(information.resource_model),
        ResourceStatus::Creating | ResourceStatus::Updating | ResourceStatus::Deleting => {
            ProgressEvent::in_progress(Some(information.resource_model))
        }
        ResourceStatus::Failed => ProgressEvent::failed(
            HandlerErrorCode::NotStabilized,
            information.status_information,
        ),
    }
}
