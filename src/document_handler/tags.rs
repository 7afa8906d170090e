//! Reads the tags attached to a document.

use crate::clients::{ListTagsForResourceRequest, ResourceTypeForTagging, SsmClient, SsmError};
use crate::model::TagMap;
use tracing::{debug, instrument};

/// Fetches document tags with a dedicated `ListTagsForResource` call.
///
/// Failures are returned untouched; classifying them is the caller's job.
#[derive(Debug, Clone, Copy, Default)]
pub struct TagReader;

impl TagReader {
    #[instrument(skip(self, client))]
    pub async fn get_document_tags(
        &self,
        document_name: &str,
        client: &dyn SsmClient,
    ) -> Result<TagMap, SsmError> {
        let request = ListTagsForResourceRequest {
            resource_type: ResourceTypeForTagging::Document,
            resource_id: document_name.to_string(),
        };
        let response = client.list_tags_for_resource(request).await?;
        debug!(count = response.tag_list.len(), "Tags listed");

        Ok(response
            .tag_list
            .into_iter()
            .map(|tag| (tag.key, tag.value))
            .collect())
    }
}
