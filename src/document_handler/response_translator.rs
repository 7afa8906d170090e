//! SSM response → resource snapshot translation.

use crate::clients::{DocumentStatus, GetDocumentResponse};
use crate::model::{DocumentFormat, ResourceInformation, ResourceModel, ResourceStatus, TagMap};
use serde_json::Value;
use tracing::warn;

/// Merges a `GetDocument` response and the document's tags into a
/// [`ResourceInformation`].
///
/// The snapshot starts from the desired model and overlays what the remote
/// reports. The name is never taken from the response: SSM answers a read by
/// ARN or shared name with the canonical name.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentResponseModelTranslator;

impl DocumentResponseModelTranslator {
    pub fn generate_resource_information(
        &self,
        desired: &ResourceModel,
        response: &GetDocumentResponse,
        tags: TagMap,
    ) -> ResourceInformation {
        let status = resource_status(response.status);
        let mut resource_model = desired.clone();

        if let Some(content) = response.content.as_deref() {
            let format = response
                .document_format
                .or(desired.document_format)
                .unwrap_or_default();
            resource_model.content = Some(decode_content(&desired.name, content, format));
        }
        if response.document_type.is_some() {
            resource_model.document_type = response.document_type.clone();
        }
        if response.document_format.is_some() {
            resource_model.document_format = response.document_format;
        }
        if response.version_name.is_some() {
            resource_model.version_name = response.version_name.clone();
        }
        if response.requires.is_some() {
            resource_model.requires = response.requires.clone();
        }
        resource_model.tags = Some(tags);

        let status_information = match response.status_information.as_deref() {
            Some(info) if !info.trim().is_empty() => info.to_string(),
            _ => format!("Document {} is {}", desired.name, status),
        };

        ResourceInformation {
            resource_model,
            status,
            status_information,
        }
    }
}

fn resource_status(status: DocumentStatus) -> ResourceStatus {
    match status {
        DocumentStatus::Active => ResourceStatus::Active,
        DocumentStatus::Creating => ResourceStatus::Creating,
        DocumentStatus::Updating => ResourceStatus::Updating,
        DocumentStatus::Deleting => ResourceStatus::Deleting,
        DocumentStatus::Failed => ResourceStatus::Failed,
    }
}

fn decode_content(name: &str, content: &str, format: DocumentFormat) -> Value {
    let decoded = match format {
        DocumentFormat::Json => serde_json::from_str::<Value>(content).map_err(|e| e.to_string()),
        DocumentFormat::Yaml => serde_yaml::from_str::<Value>(content).map_err(|e| e.to_string()),
        DocumentFormat::Text => return Value::String(content.to_string()),
    };

    decoded.unwrap_or_else(|error| {
        warn!(name, ?format, %error, "Document content kept as raw text");
        Value::String(content.to_string())
    })
}
