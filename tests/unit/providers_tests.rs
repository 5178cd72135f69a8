/*!
 * Tests for provider implementations
 */

use bookwai::providers::Provider;
use bookwai::providers::mock::{MockProvider, MockRequest};
use bookwai::providers::openai::OpenAIRequest;
use bookwai::translation::ChunkTranslator;

fn request(text: &str) -> MockRequest {
    MockRequest {
        text: text.to_string(),
        source_language: "en".to_string(),
        target_language: "fa".to_string(),
    }
}

#[test]
fn test_openAiRequest_serialization_shouldOmitUnsetFields() {
    let bare = OpenAIRequest::new("gpt-4o").add_message("user", "Hello");
    let serialized = serde_json::to_string(&bare).unwrap();

    assert!(serialized.contains("\"model\":\"gpt-4o\""));
    assert!(!serialized.contains("temperature"));
    assert!(!serialized.contains("max_tokens"));
}

#[test]
fn test_openAiRequest_serialization_shouldIncludeSetFields() {
    let full = OpenAIRequest::new("gpt-4o")
        .add_message("system", "You are a translator.")
        .add_message("user", "Hello")
        .temperature(0.3)
        .max_tokens(4000);
    let serialized = serde_json::to_string(&full).unwrap();

    assert!(serialized.contains("\"temperature\":0.3"));
    assert!(serialized.contains("\"max_tokens\":4000"));
    assert!(serialized.contains("\"role\":\"system\""));
}

#[tokio::test]
async fn test_mockProvider_asChunkTranslator_shouldTranslate() {
    let provider = MockProvider::upper_casing();
    let result = provider.translate_chunk("some chunk text.", "en", "fa").await.unwrap();
    assert_eq!(result, "SOME CHUNK TEXT.");
}

#[tokio::test]
async fn test_mockProvider_testConnection_shouldReflectBehavior() {
    assert!(MockProvider::working().test_connection().await.is_ok());
    assert!(MockProvider::failing().test_connection().await.is_err());
}

#[tokio::test]
async fn test_mockProvider_requestCount_shouldTrackCalls() {
    let provider = MockProvider::working();
    assert_eq!(provider.request_count(), 0);

    provider.complete(request("one")).await.unwrap();
    provider.complete(request("two")).await.unwrap();
    assert_eq!(provider.request_count(), 2);
}
