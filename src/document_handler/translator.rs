//! Desired state → SSM request translation.

use crate::clients::GetDocumentRequest;
use crate::model::ResourceModel;

/// Builds SSM requests from a document's desired state.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentModelTranslator;

impl DocumentModelTranslator {
    /// The `GetDocument` request for `model`, keyed by name only.
    pub fn generate_get_document_request(&self, model: &ResourceModel) -> GetDocumentRequest {
        GetDocumentRequest {
            name: model.name.clone(),
        }
    }
}
