//! End-to-end dispatch tests against mocked provider HTTP endpoints
//!
//! These exercise the full pipeline the way the server wires it: provider
//! settings → registry → dispatcher → real backend over HTTP.

use config::ProviderSettings;
use httpmock::prelude::*;
use providers::{CompletionRequest, DispatchError, Dispatcher, ProviderRegistry};
use std::sync::Arc;

fn dispatcher_for(settings: &ProviderSettings) -> Dispatcher {
    Dispatcher::new(Arc::new(ProviderRegistry::from_settings(settings)))
}

#[tokio::test]
async fn openai_dispatch_end_to_end() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/chat/completions")
                .header("authorization", "Bearer sk-test");
            then.status(200).json_body(serde_json::json!({
                "choices": [{"index": 0, "message": {"role": "assistant", "content": "hi there"}}],
                "usage": {"prompt_tokens": 2, "completion_tokens": 2, "total_tokens": 4}
            }));
        })
        .await;

    let mut settings = ProviderSettings::disabled();
    settings.openai_api_key = Some("sk-test".to_string());
    settings.openai_base_url = server.url("/v1");

    let dispatcher = dispatcher_for(&settings);
    let request = CompletionRequest::new("hello", Some("gpt-4o".to_string()));
    let result = dispatcher.dispatch(&request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(result.text, "hi there");
    assert_eq!(result.provider, "OpenAI");
    assert_eq!(result.usage.unwrap().total_tokens, 4);
}

#[tokio::test]
async fn deepseek_reasoner_uses_deepseek_endpoint_and_model() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/chat/completions")
                .json_body_partial(r#"{"model": "deepseek-reasoner"}"#);
            then.status(200).json_body(serde_json::json!({
                "choices": [{"index": 0, "message": {"role": "assistant", "content": "thought about it"}}]
            }));
        })
        .await;

    let mut settings = ProviderSettings::disabled();
    settings.deepseek_api_key = Some("sk-ds".to_string());
    settings.deepseek_base_url = server.url("/v1");

    let dispatcher = dispatcher_for(&settings);
    let request = CompletionRequest::new("hello", Some("deepseek-reasoner".to_string()));
    let result = dispatcher.dispatch(&request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(result.provider, "DeepSeek");
    assert_eq!(result.text, "thought about it");
}

#[tokio::test]
async fn anthropic_tool_block_is_a_shape_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/messages");
            then.status(200).json_body(serde_json::json!({
                "content": [{"type": "tool_use", "id": "toolu_1", "name": "lookup", "input": {}}]
            }));
        })
        .await;

    let mut settings = ProviderSettings::disabled();
    settings.anthropic_api_key = Some("sk-ant".to_string());
    settings.anthropic_base_url = server.url("/v1");

    let dispatcher = dispatcher_for(&settings);
    let request = CompletionRequest::new("hello", Some("claude-3.5".to_string()));
    let err = dispatcher.dispatch(&request).await.unwrap_err();

    assert!(matches!(err, DispatchError::UnexpectedResponseShape(_)));
}

#[tokio::test]
async fn disabled_provider_short_circuits_before_the_network() {
    // A mock server with zero expected hits stands in for the vendor
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/messages");
            then.status(200).json_body(serde_json::json!({"content": []}));
        })
        .await;

    let mut settings = ProviderSettings::disabled();
    settings.anthropic_base_url = server.url("/v1");
    // No anthropic_api_key: provider stays disabled

    let dispatcher = dispatcher_for(&settings);
    let request = CompletionRequest::new("hello", Some("claude-3.5".to_string()));
    let err = dispatcher.dispatch(&request).await.unwrap_err();

    assert_eq!(
        err,
        DispatchError::ProviderUnavailable("Anthropic".to_string())
    );
    mock.assert_hits_async(0).await;
}

#[tokio::test]
async fn upstream_5xx_surfaces_as_upstream_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(500).body("internal error");
        })
        .await;

    let mut settings = ProviderSettings::disabled();
    settings.openai_api_key = Some("sk-test".to_string());
    settings.openai_base_url = server.url("/v1");

    let dispatcher = dispatcher_for(&settings);
    let request = CompletionRequest::new("hello", Some("gpt-4o".to_string()));
    let err = dispatcher.dispatch(&request).await.unwrap_err();

    match err {
        DispatchError::UpstreamFailure(msg) => assert!(msg.contains("500")),
        other => panic!("Expected UpstreamFailure, got {other:?}"),
    }
}
