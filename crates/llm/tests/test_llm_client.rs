use llm::{ChatMessage, CompletionRequest, LlmClient, LlmProvider};
use mockito::Server;

fn create_mock_openai_response(content: &str) -> String {
    format!(
        r#"{{
        "choices": [{{
            "message": {{
                "role": "assistant",
                "content": "{content}"
            }}
        }}]
    }}"#
    )
}

fn local_client(server: &Server) -> LlmClient {
    LlmClient::new(
        LlmProvider::Local {
            url: server.url(),
            model: "test-model".to_string(),
        },
        256,
        0.2,
    )
}

#[test]
fn test_completion_request_builder() {
    let request = CompletionRequest::new("find parts")
        .max_tokens(512)
        .temperature(0.1)
        .system_prompt("you are an inventory analyst");

    assert_eq!(request.prompt, "find parts");
    assert_eq!(request.max_tokens, Some(512));
    assert_eq!(request.temperature, Some(0.1));
    assert!(request.system_prompt.is_some());
}

#[test]
fn test_chat_message_roles() {
    assert_eq!(ChatMessage::user("oi").role, "user");
    assert_eq!(ChatMessage::assistant("olá").role, "assistant");
    assert_eq!(ChatMessage::system("regras").role, "system");
}

#[tokio::test]
async fn test_local_chat_roundtrip() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(create_mock_openai_response("Test response"))
        .create_async()
        .await;

    let client = local_client(&server);
    let answer = client.chat_simple("hello").await.expect("chat");
    assert_eq!(answer, "Test response");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_http_error_is_surfaced() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(500)
        .with_body("backend down")
        .create_async()
        .await;

    let client = local_client(&server);
    let result = client.chat_simple("hello").await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_complete_applies_system_prompt() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_body(mockito::Matcher::PartialJsonString(
            r#"{"model": "test-model"}"#.to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(create_mock_openai_response("ok"))
        .create_async()
        .await;

    let client = local_client(&server);
    let request = CompletionRequest::new("question").system_prompt("context");
    let answer = client.complete(request).await.expect("complete");
    assert_eq!(answer, "ok");

    mock.assert_async().await;
}
