use serde_json::Value;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

use crate::fixtures::sample_error_body;

pub async fn setup_chat_completion_mock(status: u16, body: impl Into<Value>) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body.into()))
        .expect(1)
        .mount(&mock_server)
        .await;

    mock_server
}

pub async fn setup_error_mock(status_code: u16, error_message: &str) -> MockServer {
    setup_chat_completion_mock(status_code, sample_error_body(error_message, "api_error")).await
}

/// Upstream that must not be contacted; verified when the server drops.
pub async fn setup_untouched_mock() -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&mock_server)
        .await;

    mock_server
}
