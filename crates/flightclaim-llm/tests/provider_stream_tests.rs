//! HTTP-level tests for the OpenAI-compatible streaming provider

use flightclaim_core::ClaimError;
use flightclaim_llm::{collect_text, LLMClient, LLMError, LLMRequest, OpenAIProvider};
use futures::StreamExt;
use mockito::Matcher;

fn sse_body(fragments: &[&str]) -> String {
    let mut body = String::new();
    for fragment in fragments {
        body.push_str(&format!(
            "data: {}\n\n",
            serde_json::json!({"choices": [{"delta": {"content": fragment}}]})
        ));
    }
    body.push_str("data: [DONE]\n\n");
    body
}

fn request() -> LLMRequest {
    LLMRequest::new("Is this flight eligible?".to_string(), "deepseek-r1-distill-llama-70b".to_string())
        .with_max_tokens(1000)
        .with_temperature(0.1)
}

// Tests

#[tokio::test]
async fn test_stream_yields_fragments_in_order() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer test-key")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "model": "deepseek-r1-distill-llama-70b",
            "stream": true,
            "max_tokens": 1000
        })))
        .with_status(200)
        .with_header("content-type", "text/event-stream")
        .with_body(sse_body(&["You ", "are ", "eligible."]))
        .create_async()
        .await;

    let provider = OpenAIProvider::with_base_url("test-key".to_string(), server.url());
    let fragments: Vec<String> = provider
        .stream(request())
        .await
        .unwrap()
        .map(|item| item.unwrap())
        .collect()
        .await;

    assert_eq!(fragments, vec!["You ", "are ", "eligible."]);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_call_drains_and_splits_thinking() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body(sse_body(&["<think>Cancelled, policy ", "offers rebooking</think>", "\n\nYes."]))
        .create_async()
        .await;

    let provider = OpenAIProvider::with_base_url("k".to_string(), server.url());
    let response = provider.call(request()).await.unwrap();

    assert_eq!(response.content, "Yes.");
    assert_eq!(response.thinking.as_deref(), Some("Cancelled, policy offers rebooking"));
    assert_eq!(response.model, "deepseek-r1-distill-llama-70b");
}

#[tokio::test]
async fn test_malformed_fragment_is_skipped() {
    let mut server = mockito::Server::new_async().await;
    let body = format!(
        "data: {{\"choices\":[{{\"delta\":{{\"content\":\"A\"}}}}]}}\n\ndata: {{oops\n\n{}",
        sse_body(&["B"])
    );
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body(body)
        .create_async()
        .await;

    let provider = OpenAIProvider::with_base_url("k".to_string(), server.url());
    let text = collect_text(provider.stream(request()).await.unwrap()).await.unwrap();
    assert_eq!(text, "AB");
}

#[tokio::test]
async fn test_non_success_status_fails_before_streaming() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(401)
        .with_body("{\"error\":{\"message\":\"Invalid API Key\"}}")
        .create_async()
        .await;

    let provider = OpenAIProvider::with_base_url("bad".to_string(), server.url());
    let err = match provider.stream(request()).await {
        Err(e) => e,
        Ok(_) => panic!("Expected an error"),
    };

    match &err {
        LLMError::ApiStatus { status, body } => {
            assert_eq!(*status, 401);
            assert!(body.contains("Invalid API Key"));
        }
        other => panic!("Expected ApiStatus, got {:?}", other),
    }

    let claim: ClaimError = err.into();
    assert_eq!(claim.upstream_status(), Some(401));
}

#[tokio::test]
async fn test_unreachable_engine_is_api_call_failure() {
    // Nothing listens on the discard port
    let provider = OpenAIProvider::with_base_url("k".to_string(), "http://127.0.0.1:9".to_string());
    match provider.stream(request()).await {
        Err(LLMError::ApiCallFailed(_)) => {}
        Err(other) => panic!("Expected ApiCallFailed, got {:?}", other),
        Ok(_) => panic!("Expected an error"),
    }
}
