use mockito::Matcher;
use solace_llm::{GenerationOptions, GenerationRequest, OpenAIClient, TextGenerator};

fn request() -> GenerationRequest {
    GenerationRequest::new("User: I can't sleep\nAssistant:")
        .with_options(GenerationOptions::new().max_length(200).temperature(0.8))
}

#[tokio::test]
async fn test_generate_returns_first_choice_content() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer sk-test")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "model": "gpt-4o-mini",
            "messages": [{ "role": "user", "content": "User: I can't sleep\nAssistant:" }],
            "max_tokens": 200,
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "id": "chatcmpl-1",
                "model": "gpt-4o-mini",
                "choices": [
                    {"index": 0, "message": {"role": "assistant", "content": "Try a slow breathing routine tonight."}, "finish_reason": "stop"},
                    {"index": 1, "message": {"role": "assistant", "content": "Second choice"}, "finish_reason": "stop"}
                ]
            }"#,
        )
        .create_async()
        .await;

    let client = OpenAIClient::new("sk-test", "gpt-4o-mini")
        .unwrap()
        .with_base_url(server.url());

    let response = client.generate(request()).await.unwrap();
    assert_eq!(
        response.text.as_deref(),
        Some("Try a slow breathing routine tonight.")
    );
    assert_eq!(response.raw["id"], "chatcmpl-1");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_generate_fails_on_error_status() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(500)
        .with_body(r#"{"error": {"message": "upstream failure"}}"#)
        .create_async()
        .await;

    let client = OpenAIClient::new("sk-test", "gpt-4o-mini")
        .unwrap()
        .with_base_url(server.url());

    let err = client.generate(request()).await.unwrap_err();
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn test_generate_without_choices_has_no_text() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "chatcmpl-2", "model": "gpt-4o-mini", "choices": []}"#)
        .create_async()
        .await;

    let client = OpenAIClient::new("sk-test", "gpt-4o-mini")
        .unwrap()
        .with_base_url(server.url());

    let response = client.generate(request()).await.unwrap();
    assert!(response.text.is_none());
}

#[tokio::test]
async fn test_generate_with_null_content_has_no_text() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"choices": [{"index": 0, "message": {"role": "assistant", "content": null}, "finish_reason": "length"}]}"#,
        )
        .create_async()
        .await;

    let client = OpenAIClient::new("sk-test", "gpt-4o-mini")
        .unwrap()
        .with_base_url(server.url());

    let response = client.generate(request()).await.unwrap();
    assert!(response.text.is_none());
    assert_eq!(client.provider_name(), "openai");
}
