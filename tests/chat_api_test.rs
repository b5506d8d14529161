//! Chat completions against a mock ReGraph API.

mod support;

use regraph::prelude::*;
use serde_json::json;
use support::{API_KEY, client_for};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn chat_completion_response() -> serde_json::Value {
    json!({
        "id": "c1",
        "object": "chat.completion",
        "created": 123,
        "model": "gpt-5",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": "Hi!"},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 5, "completion_tokens": 2, "total_tokens": 7}
    })
}

#[tokio::test]
async fn test_chat_completion_round_trip() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/inference"))
        .and(header("Authorization", format!("Bearer {API_KEY}").as_str()))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({
            "model": "gpt-5",
            "messages": [{"role": "user", "content": "Hello!"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client
        .chat()
        .completions()
        .create(ChatCompletionRequest::new(
            "gpt-5",
            vec![ChatMessage::user("Hello!")],
        ))
        .await
        .unwrap();

    assert_eq!(response.choices[0].message.content, "Hi!");
    assert_eq!(response.choices[0].message.role, ChatRole::Assistant);
    assert_eq!(response.choices[0].finish_reason.as_deref(), Some("stop"));
    assert_eq!(response.usage.total_tokens, 7);
    assert_eq!(response.id, "c1");
    assert_eq!(response.created, Some(123));
}

#[tokio::test]
async fn test_chat_shorthand_uses_same_endpoint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/inference"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client
        .chat()
        .create(
            ChatCompletionRequest::new("gpt-5", vec![])
                .message(ChatMessage::system("You are terse."))
                .message(ChatMessage::user("Hello!"))
                .temperature(0.7)
                .max_tokens(500),
        )
        .await
        .unwrap();
    assert_eq!(response.content(), Some("Hi!"));

    let requests = mock_server.received_requests().await.unwrap();
    let sent: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(sent["temperature"], json!(0.7));
    assert_eq!(sent["max_tokens"], json!(500));
    assert_eq!(sent["messages"][0]["role"], "system");
    assert!(sent.get("top_p").is_none());
}

#[tokio::test]
async fn test_response_decodes_to_the_documented_values() {
    let mock_server = MockServer::start().await;
    let body = chat_completion_response();

    Mock::given(method("POST"))
        .and(path("/inference"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&mock_server)
        .await;

    let response = client_for(&mock_server)
        .chat()
        .create(ChatCompletionRequest::new("gpt-5", vec![ChatMessage::user("Hello!")]))
        .await
        .unwrap();

    // Re-encoding yields the exact document the server sent.
    assert_eq!(serde_json::to_value(&response).unwrap(), body);
}
