//! # SSM Client
//!
//! The two read operations the document handlers need from the SSM API,
//! together with their request and response shapes.
//!
//! Transport, credentials and request signing live behind [`SsmClient`]; the
//! handlers only see `request -> Result<response, SsmError>`.

use crate::clients::error::SsmError;
use crate::model::{DocumentFormat, DocumentRequires};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Remote management API for SSM documents.
///
/// Implementations must be shareable across tasks; the handler may issue both
/// calls of one invocation concurrently.
#[async_trait]
pub trait SsmClient: Send + Sync {
    /// `GetDocument`
    async fn get_document(
        &self,
        request: GetDocumentRequest,
    ) -> Result<GetDocumentResponse, SsmError>;

    /// `ListTagsForResource`
    async fn list_tags_for_resource(
        &self,
        request: ListTagsForResourceRequest,
    ) -> Result<ListTagsForResourceResponse, SsmError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetDocumentRequest {
    pub name: String,
}

/// Remote-native document status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentStatus {
    Creating,
    Active,
    Updating,
    Deleting,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetDocumentResponse {
    pub name: String,
    #[serde(default)]
    pub content: Option<String>,
    pub status: DocumentStatus,
    #[serde(default)]
    pub status_information: Option<String>,
    #[serde(default)]
    pub document_type: Option<String>,
    #[serde(default)]
    pub document_format: Option<DocumentFormat>,
    #[serde(default)]
    pub version_name: Option<String>,
    #[serde(default)]
    pub requires: Option<Vec<DocumentRequires>>,
}

impl GetDocumentResponse {
    /// A response carrying only a name and a status.
    pub fn new(name: impl Into<String>, status: DocumentStatus) -> Self {
        Self {
            name: name.into(),
            content: None,
            status,
            status_information: None,
            document_type: None,
            document_format: None,
            version_name: None,
            requires: None,
        }
    }
}

/// Kinds of SSM resources that carry tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceTypeForTagging {
    Document,
    ManagedInstance,
    MaintenanceWindow,
    Parameter,
    PatchBaseline,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTagsForResourceRequest {
    pub resource_type: ResourceTypeForTagging,
    pub resource_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTagsForResourceResponse {
    #[serde(default)]
    pub tag_list: Vec<Tag>,
}
