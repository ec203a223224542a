use solace_llm::{GenerationOptions, GenerationRequest, HuggingFaceClient, TextGenerator};

fn request() -> GenerationRequest {
    GenerationRequest::new("User: I feel low\nAssistant:")
        .with_options(GenerationOptions::new().max_length(200).temperature(0.8).do_sample(true))
}

#[tokio::test]
async fn test_generate_returns_first_generated_text() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/models/microsoft/DialoGPT-medium")
        .match_header("authorization", "Bearer hf_test")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"generated_text": "That sounds heavy. Let's breathe together."}]"#)
        .create_async()
        .await;

    let client = HuggingFaceClient::new("hf_test", "microsoft/DialoGPT-medium")
        .unwrap()
        .with_base_url(server.url());

    let response = client.generate(request()).await.unwrap();
    assert_eq!(
        response.text.as_deref(),
        Some("That sounds heavy. Let's breathe together.")
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_generate_fails_on_error_status() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/models/gpt2")
        .with_status(503)
        .with_body(r#"{"error": "Model gpt2 is currently loading"}"#)
        .create_async()
        .await;

    let client = HuggingFaceClient::new("hf_test", "gpt2")
        .unwrap()
        .with_base_url(server.url());

    let err = client.generate(request()).await.unwrap_err();
    assert!(err.to_string().contains("503"));
}

#[tokio::test]
async fn test_generate_fails_on_malformed_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/models/gpt2")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"unexpected": true}"#)
        .create_async()
        .await;

    let client = HuggingFaceClient::new("hf_test", "gpt2")
        .unwrap()
        .with_base_url(server.url());

    assert!(client.generate(request()).await.is_err());
}

#[tokio::test]
async fn test_generate_tolerates_missing_text() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/models/gpt2")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[{}]")
        .create_async()
        .await;

    let client = HuggingFaceClient::new("hf_test", "gpt2")
        .unwrap()
        .with_base_url(server.url());

    let response = client.generate(request()).await.unwrap();
    assert!(response.text.is_none());
}
