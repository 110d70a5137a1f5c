use std::sync::Once;

use pretty_assertions::assert_eq;
use snaptext_client::{ClientSettings, ExtractClient, ReqwestExtractClient};
use snaptext_core::{ExtractionResult, KeyValuePair, SelectedFile, UploadError};
use wiremock::matchers::{body_string_contains, header_regex, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(snaptext_logging::initialize_for_tests);
}

fn client_for(server: &MockServer) -> ReqwestExtractClient {
    let settings = ClientSettings::for_origin(&server.uri()).expect("mock server origin");
    ReqwestExtractClient::new(settings)
}

fn screenshot() -> SelectedFile {
    SelectedFile::new("screenshot.png", "image/png", b"not really a png".to_vec())
}

#[tokio::test]
async fn posts_multipart_file_and_decodes_result() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/extract"))
        .and(header_regex("content-type", "^multipart/form-data; boundary="))
        .and(body_string_contains("name=\"file\"; filename=\"screenshot.png\""))
        .and(body_string_contains("not really a png"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "text": "hello",
            "key_values": [{"key": "A", "value": "1"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server)
        .extract(&screenshot())
        .await
        .expect("extract ok");

    assert_eq!(
        result,
        ExtractionResult {
            text: Some("hello".to_string()),
            key_values: Some(vec![KeyValuePair::new("A", "1")]),
            warning: None,
            error: None,
        }
    );
}

#[tokio::test]
async fn application_error_is_returned_as_body() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/extract"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"error": "bad image"})),
        )
        .mount(&server)
        .await;

    let result = client_for(&server)
        .extract(&screenshot())
        .await
        .expect("2xx is not a transport failure");
    assert_eq!(result.application_error(), Some("bad image"));
}

#[tokio::test]
async fn non_success_status_maps_to_http_error() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/extract"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(serde_json::json!({"error": "Processing failed: boom"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .extract(&screenshot())
        .await
        .unwrap_err();
    assert_eq!(
        err,
        UploadError::Http {
            status: 500,
            status_text: "Internal Server Error".to_string(),
        }
    );
    assert_eq!(err.to_string(), "HTTP 500: Internal Server Error");
}

#[tokio::test]
async fn undecodable_body_is_transport_failure() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/extract"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .extract(&screenshot())
        .await
        .unwrap_err();
    assert!(matches!(err, UploadError::Transport(_)));
    assert!(err.to_string().starts_with("Failed to process image: "));
}

#[tokio::test]
async fn unreachable_server_is_transport_failure() {
    init_logging();
    let server = MockServer::start().await;
    let client = client_for(&server);
    drop(server);

    let err = client.extract(&screenshot()).await.unwrap_err();
    assert!(matches!(err, UploadError::Transport(_)));
}
