use ssm_document_handler::clients::mock::MockSsmClient;
use ssm_document_handler::clients::{
    DocumentStatus, GetDocumentResponse, SsmError, SsmErrorCode, Tag,
};
use ssm_document_handler::document_handler::{ErrorKind, HandlerError, ReadHandler};
use ssm_document_handler::framework::{
    HandlerErrorCode, HandlerFailure, OperationStatus, ProgressEvent, ResourceHandler,
    ResourceHandlerRequest,
};
use ssm_document_handler::model::{ResourceModel, TagMap};
use ssm_document_handler::runtime::setup_tracing;
use std::error::Error;

const SAMPLE_DOCUMENT_NAME: &str = "sampleDocument";
const SAMPLE_DOCUMENT_CONTENT: &str =
    r#"{"schemaVersion":"1.2","description":"Join instances to an AWS Directory Service domain."}"#;

fn sample_request() -> ResourceHandlerRequest<ResourceModel> {
    ResourceHandlerRequest::new(ResourceModel::new(SAMPLE_DOCUMENT_NAME))
}

fn sample_tags() -> Vec<Tag> {
    vec![
        Tag::new("tagKey1", "tagValue1"),
        Tag::new("tagKey2", "tagValue2"),
    ]
}

fn sample_tag_map() -> TagMap {
    TagMap::from([
        ("tagKey1".to_string(), "tagValue1".to_string()),
        ("tagKey2".to_string(), "tagValue2".to_string()),
    ])
}

fn document(status: DocumentStatus) -> GetDocumentResponse {
    GetDocumentResponse::new(SAMPLE_DOCUMENT_NAME, status)
}

async fn read(client: &MockSsmClient) -> Result<ProgressEvent<ResourceModel>, HandlerError> {
    ReadHandler::default()
        .handle_request(client, &sample_request())
        .await
}

/// Active document: success event carrying the name, content and exactly the listed tags.
#[tokio::test]
async fn test_read_active_document_returns_success() {
    setup_tracing();

    let mock = MockSsmClient::new();
    let mut response = document(DocumentStatus::Active);
    response.content = Some(SAMPLE_DOCUMENT_CONTENT.to_string());
    mock.expect_get_document(SAMPLE_DOCUMENT_NAME).return_ok(response);
    mock.expect_list_tags(SAMPLE_DOCUMENT_NAME).return_ok(sample_tags());

    let event = read(&mock).await.expect("read should succeed");

    let expected_model = ResourceModel::new(SAMPLE_DOCUMENT_NAME)
        .with_content(serde_json::json!({
            "schemaVersion": "1.2",
            "description": "Join instances to an AWS Directory Service domain."
        }))
        .with_tags(sample_tag_map());
    assert_eq!(event, ProgressEvent::success(expected_model));

    mock.verify();
}

#[tokio::test]
async fn test_read_transitional_document_returns_in_progress() {
    for status in [
        DocumentStatus::Creating,
        DocumentStatus::Updating,
        DocumentStatus::Deleting,
    ] {
        let mock = MockSsmClient::new();
        mock.expect_get_document(SAMPLE_DOCUMENT_NAME).return_ok(document(status));
        mock.expect_list_tags(SAMPLE_DOCUMENT_NAME).return_ok(vec![]);

        let event = read(&mock).await.unwrap();

        assert_eq!(event.status, OperationStatus::InProgress, "{status:?}");
        assert!(!event.is_terminal());
        mock.verify();
    }
}

/// A failed document is a returned event, not a raised error.
#[tokio::test]
async fn test_read_failed_document_returns_failed_event() {
    let mock = MockSsmClient::new();
    let mut response = document(DocumentStatus::Failed);
    response.status_information = Some("Document content is not valid".to_string());
    mock.expect_get_document(SAMPLE_DOCUMENT_NAME).return_ok(response);
    mock.expect_list_tags(SAMPLE_DOCUMENT_NAME).return_ok(sample_tags());

    let event = read(&mock).await.unwrap();

    assert_eq!(event.status, OperationStatus::Failed);
    assert!(event.resource_model.is_none());
    assert_eq!(event.message.as_deref(), Some("Document content is not valid"));
    assert_eq!(event.error_code, Some(HandlerErrorCode::NotStabilized));
    mock.verify();
}

#[tokio::test]
async fn test_read_failed_document_without_detail_still_has_message() {
    let mock = MockSsmClient::new();
    mock.expect_get_document(SAMPLE_DOCUMENT_NAME)
        .return_ok(document(DocumentStatus::Failed));
    mock.expect_list_tags(SAMPLE_DOCUMENT_NAME).return_ok(vec![]);

    let event = read(&mock).await.unwrap();

    let message = event.message.expect("failed event carries a message");
    assert!(!message.is_empty());
}

#[tokio::test]
async fn test_read_untagged_document_has_empty_tag_set() {
    let mock = MockSsmClient::new();
    mock.expect_get_document(SAMPLE_DOCUMENT_NAME)
        .return_ok(document(DocumentStatus::Active));
    mock.expect_list_tags(SAMPLE_DOCUMENT_NAME).return_ok(vec![]);

    let event = read(&mock).await.unwrap();

    let model = event.resource_model.unwrap();
    assert_eq!(model.name, SAMPLE_DOCUMENT_NAME);
    assert_eq!(model.tags, Some(TagMap::new()));
}

/// GetDocument failure: raised error tagged with the document and operation, SSM error kept.
#[tokio::test]
async fn test_read_get_document_error_is_raised() {
    let mock = MockSsmClient::new();
    mock.expect_get_document(SAMPLE_DOCUMENT_NAME)
        .return_err(SsmError::new("InternalServerError", "service unavailable"));
    // Issued concurrently; may or may not be consumed before the failure wins.
    mock.expect_list_tags(SAMPLE_DOCUMENT_NAME).return_ok(sample_tags());

    let err = read(&mock).await.unwrap_err();

    assert_eq!(err.resource_name(), SAMPLE_DOCUMENT_NAME);
    assert_eq!(err.operation(), "GetDocument");
    assert_eq!(err.kind(), ErrorKind::ServiceInternal);
    assert_eq!(err.error_code(), HandlerErrorCode::ServiceInternalError);

    let source = err
        .source()
        .and_then(|s| s.downcast_ref::<SsmError>())
        .expect("SSM error is wrapped");
    assert_eq!(source.code, SsmErrorCode::InternalServerError);
    assert_eq!(source.message, "service unavailable");
}

#[tokio::test]
async fn test_read_missing_document_is_not_found() {
    let mock = MockSsmClient::new();
    mock.expect_get_document(SAMPLE_DOCUMENT_NAME)
        .return_err(SsmError::new("InvalidDocument", "document does not exist"));
    mock.expect_list_tags(SAMPLE_DOCUMENT_NAME)
        .return_err(SsmError::new("InvalidResourceId", "document does not exist"));

    let err = read(&mock).await.unwrap_err();

    // Either call may lose the race; both classify as not found.
    assert_eq!(err.kind(), ErrorKind::ResourceNotFound);
    assert!(["GetDocument", "ListTagsForResource"].contains(&err.operation()));

    let event: ProgressEvent<ResourceModel> = ProgressEvent::from_error(&err);
    assert_eq!(event.status, OperationStatus::Failed);
    assert_eq!(event.error_code, Some(HandlerErrorCode::NotFound));
}

#[tokio::test]
async fn test_read_tag_error_is_attributed_to_list_tags() {
    let mock = MockSsmClient::new();
    mock.expect_get_document(SAMPLE_DOCUMENT_NAME)
        .return_ok(document(DocumentStatus::Active));
    mock.expect_list_tags(SAMPLE_DOCUMENT_NAME)
        .return_err(SsmError::new("ThrottlingException", "Rate exceeded"));

    let err = read(&mock).await.unwrap_err();

    assert_eq!(err.operation(), "ListTagsForResource");
    assert_eq!(err.resource_name(), SAMPLE_DOCUMENT_NAME);
    assert_eq!(err.kind(), ErrorKind::Throttled);
}

#[tokio::test]
async fn test_read_unrecognized_error_is_general_service_failure() {
    let mock = MockSsmClient::new();
    mock.expect_get_document(SAMPLE_DOCUMENT_NAME)
        .return_err(SsmError::new("SomeFutureException", "new failure mode"));
    mock.expect_list_tags(SAMPLE_DOCUMENT_NAME).return_ok(vec![]);

    let err = read(&mock).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Unknown);
    assert_eq!(err.error_code(), HandlerErrorCode::GeneralServiceException);
    assert!(err.to_string().starts_with("General service failure"));
}

/// Same descriptor, same remote state: same event.
#[tokio::test]
async fn test_read_is_idempotent() {
    let mock = MockSsmClient::new();
    for _ in 0..2 {
        mock.expect_get_document(SAMPLE_DOCUMENT_NAME)
            .return_ok(document(DocumentStatus::Active));
        mock.expect_list_tags(SAMPLE_DOCUMENT_NAME).return_ok(sample_tags());
    }

    let handler = ReadHandler::default();
    let request = sample_request();
    let first = handler.handle_request(&mock, &request).await.unwrap();
    let second = handler.handle_request(&mock, &request).await.unwrap();

    assert_eq!(first, second);
    mock.verify();
}

/// One handler value serves concurrent invocations for different documents.
#[tokio::test]
async fn test_concurrent_reads_do_not_interfere() {
    let mock = MockSsmClient::new();
    mock.expect_get_document("docA")
        .return_ok(GetDocumentResponse::new("docA", DocumentStatus::Active));
    mock.expect_list_tags("docA").return_ok(vec![Tag::new("owner", "a")]);
    mock.expect_get_document("docB")
        .return_ok(GetDocumentResponse::new("docB", DocumentStatus::Creating));
    mock.expect_list_tags("docB").return_ok(vec![]);

    let handler = ReadHandler::default();
    let request_a = ResourceHandlerRequest::new(ResourceModel::new("docA"));
    let request_b = ResourceHandlerRequest::new(ResourceModel::new("docB"))
        .with_logical_resource_identifier("DocB");

    let (a, b) = tokio::join!(
        handler.handle_request(&mock, &request_a),
        handler.handle_request(&mock, &request_b),
    );

    let a = a.unwrap();
    assert_eq!(a.status, OperationStatus::Success);
    assert_eq!(
        a.resource_model.unwrap().tags,
        Some(TagMap::from([("owner".to_string(), "a".to_string())]))
    );
    assert_eq!(b.unwrap().status, OperationStatus::InProgress);
    mock.verify();
}

/// SSM answers a read by ARN with the canonical name; the model keeps the requested one.
#[tokio::test]
async fn test_read_by_arn_keeps_descriptor_name() {
    let arn = "arn:aws:ssm:us-east-1:123456789012:document/sampleDocument";
    let mock = MockSsmClient::new();
    mock.expect_get_document(arn)
        .return_ok(GetDocumentResponse::new("canonicalName", DocumentStatus::Active));
    mock.expect_list_tags(arn).return_ok(vec![]);

    let request = ResourceHandlerRequest::new(ResourceModel::new(arn));
    let event = ReadHandler::default()
        .handle_request(&mock, &request)
        .await
        .expect("read should succeed");

    assert_eq!(event.status, OperationStatus::Success);
    assert_eq!(event.resource_model.unwrap().name, arn);
    mock.verify();
}

/// A declared version does not pin the read: the request is keyed by name alone.
#[tokio::test]
async fn test_read_with_declared_version_is_keyed_by_name() {
    let mut desired = ResourceModel::new(SAMPLE_DOCUMENT_NAME);
    desired.version_name = Some("v1".to_string());

    let mock = MockSsmClient::new();
    mock.expect_get_document(SAMPLE_DOCUMENT_NAME)
        .return_ok(document(DocumentStatus::Active));
    mock.expect_list_tags(SAMPLE_DOCUMENT_NAME).return_ok(vec![]);

    let event = ReadHandler::default()
        .handle_request(&mock, &ResourceHandlerRequest::new(desired))
        .await
        .expect("read should succeed");

    let model = event.resource_model.expect("success carries the model");
    assert_eq!(model.name, SAMPLE_DOCUMENT_NAME);
    assert_eq!(model.version_name.as_deref(), Some("v1"));
    mock.verify();
}

/// Properties the remote does not report are carried over from the descriptor.
#[tokio::test]
async fn test_read_keeps_descriptor_only_properties() {
    let mut desired = ResourceModel::new(SAMPLE_DOCUMENT_NAME);
    desired.target_type = Some("/AWS::EC2::Instance".to_string());

    let mock = MockSsmClient::new();
    let mut response = document(DocumentStatus::Active);
    response.document_type = Some("Command".to_string());
    mock.expect_get_document(SAMPLE_DOCUMENT_NAME).return_ok(response);
    mock.expect_list_tags(SAMPLE_DOCUMENT_NAME).return_ok(sample_tags());

    let event = ReadHandler::default()
        .handle_request(&mock, &ResourceHandlerRequest::new(desired))
        .await
        .expect("read should succeed");

    let model = event.resource_model.expect("success carries the model");
    assert_eq!(model.target_type.as_deref(), Some("/AWS::EC2::Instance"));
    assert_eq!(model.document_type.as_deref(), Some("Command"));
    assert_eq!(model.tags, Some(sample_tag_map()));
    mock.verify();
}
