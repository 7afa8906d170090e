//! # Mock SSM Client
//!
//! Utilities for testing handlers without a real SSM endpoint.
//!
//! Create a [`MockSsmClient`], queue expectations with [`MockSsmClient::expect_get_document`]
//! or [`MockSsmClient::expect_list_tags`], hand `&mock` to the handler, then call
//! [`MockSsmClient::verify`] to assert every expectation was consumed.
//!
//! Expectations are matched by operation and resource name, not by arrival
//! order, so handlers are free to issue their calls concurrently.

use crate::clients::error::SsmError;
use crate::clients::ssm_client::{
    GetDocumentRequest, GetDocumentResponse, ListTagsForResourceRequest,
    ListTagsForResourceResponse, SsmClient, Tag,
};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tracing::debug;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected call and the canned answer for it.
enum Expectation {
    GetDocument {
        name: String,
        response: Result<GetDocumentResponse, SsmError>,
    },
    ListTags {
        resource_id: String,
        response: Result<ListTagsForResourceResponse, SsmError>,
    },
}

/// A mock SSM client with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mock = MockSsmClient::new();
/// mock.expect_get_document("sampleDocument")
///     .return_ok(GetDocumentResponse::new("sampleDocument", DocumentStatus::Active));
/// mock.expect_list_tags("sampleDocument").return_ok(vec![]);
///
/// let event = handler.handle_request(&mock, &request).await?;
/// mock.verify(); // Ensures all expectations were met
/// ```
#[derive(Clone, Default)]
pub struct MockSsmClient {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl MockSsmClient {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `GetDocument` call for `name`.
    pub fn expect_get_document(&self, name: impl Into<String>) -> GetDocumentExpectationBuilder {
        GetDocumentExpectationBuilder {
            name: name.into(),
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `ListTagsForResource` call for the document `name`.
    pub fn expect_list_tags(&self, name: impl Into<String>) -> ListTagsExpectationBuilder {
        ListTagsExpectationBuilder {
            resource_id: name.into(),
            expectations: self.expectations.clone(),
        }
    }

    /// Number of expectations not yet consumed.
    pub fn remaining(&self) -> usize {
        self.expectations.lock().unwrap().len()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.remaining();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }

    fn take(&self, matches: impl Fn(&Expectation) -> bool) -> Option<Expectation> {
        let mut exps = self.expectations.lock().unwrap();
        let position = exps.iter().position(matches)?;
        exps.remove(position)
    }
}

#[async_trait]
impl SsmClient for MockSsmClient {
    async fn get_document(
        &self,
        request: GetDocumentRequest,
    ) -> Result<GetDocumentResponse, SsmError> {
        debug!(name = %request.name, "Mock GetDocument");
        let expectation = self.take(|e| {
            matches!(e, Expectation::GetDocument { name, .. } if *name == request.name)
        });
        match expectation {
            Some(Expectation::GetDocument { response, .. }) => response,
            _ => panic!("Unexpected GetDocument request for {}", request.name),
        }
    }

    async fn list_tags_for_resource(
        &self,
        request: ListTagsForResourceRequest,
    ) -> Result<ListTagsForResourceResponse, SsmError> {
        debug!(resource_id = %request.resource_id, "Mock ListTagsForResource");
        let expectation = self.take(|e| {
            matches!(e, Expectation::ListTags { resource_id, .. } if *resource_id == request.resource_id)
        });
        match expectation {
            Some(Expectation::ListTags { response, .. }) => response,
            _ => panic!(
                "Unexpected ListTagsForResource request for {}",
                request.resource_id
            ),
        }
    }
}

/// Builder for `GetDocument` expectations.
pub struct GetDocumentExpectationBuilder {
    name: String,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl GetDocumentExpectationBuilder {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, response: GetDocumentResponse) {
        self.push(Ok(response));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: SsmError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<GetDocumentResponse, SsmError>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::GetDocument {
            name: self.name,
            response,
        });
    }
}

/// Builder for `ListTagsForResource` expectations.
pub struct ListTagsExpectationBuilder {
    resource_id: String,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl ListTagsExpectationBuilder {
    /// Sets the expectation to return the given tags.
    pub fn return_ok(self, tags: Vec<Tag>) {
        self.push(Ok(ListTagsForResourceResponse { tag_list: tags }));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: SsmError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<ListTagsForResourceResponse, SsmError>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::ListTags {
            resource_id: self.resource_id,
            response,
        });
    }
}
