use std::sync::Arc;

use super::*;
use crate::llm::types::{ChatResponse, ContentBlock, LlmChat, LlmError, Message, Tool};

struct StaticLlm {
    result: fn() -> Result<ChatResponse, LlmError>,
}

#[async_trait::async_trait]
impl LlmChat for StaticLlm {
    async fn chat(
        &self,
        _max_tokens: u32,
        _system: &str,
        _messages: &[Message],
        _tools: Option<&[Tool]>,
    ) -> Result<ChatResponse, LlmError> {
        (self.result)()
    }
}

fn state_with(result: fn() -> Result<ChatResponse, LlmError>) -> AppState {
    AppState::new(Some(Arc::new(StaticLlm { result })))
}

fn submit_board_response() -> Result<ChatResponse, LlmError> {
    Ok(ChatResponse {
        content: vec![ContentBlock::ToolUse {
            id: "tu_1".into(),
            name: "submitBoard".into(),
            input: serde_json::json!({
                "properties": [{"name": "Old Mill", "group": "Riverfront", "color": "#AAAAAA"}]
            }),
        }],
        model: "mock".into(),
        stop_reason: "tool_use".into(),
        input_tokens: 0,
        output_tokens: 0,
    })
}

#[tokio::test]
async fn empty_theme_is_unprocessable() {
    let response = generate(
        State(state_with(submit_board_response)),
        Json(GenerateRequest { theme: "   ".into() }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn missing_llm_is_service_unavailable() {
    let response = generate(
        State(AppState::new(None)),
        Json(GenerateRequest { theme: "Kansas City".into() }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn successful_generation_is_ok() {
    let response = generate(
        State(state_with(submit_board_response)),
        Json(GenerateRequest { theme: "Kansas City".into() }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn provider_failure_is_bad_gateway() {
    let response = generate(
        State(state_with(|| {
            Err(LlmError::ApiResponse { status: 500, body: "oops".into() })
        })),
        Json(GenerateRequest { theme: "Kansas City".into() }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[test]
fn every_generate_error_maps_to_bad_gateway() {
    assert_eq!(
        generate_error_to_status(&GenerateError::MissingBoard),
        StatusCode::BAD_GATEWAY
    );
    assert_eq!(
        generate_error_to_status(&GenerateError::MalformedBoard("bad".into())),
        StatusCode::BAD_GATEWAY
    );
}
