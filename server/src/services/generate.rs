//! Generation service: theme prompt → LLM tool call → flat property list.
//!
//! DESIGN
//! ======
//! One chat turn with a single `submitBoard` tool. The model is told to
//! answer by calling the tool, and the tool input is the property list the
//! client will group into a board. An empty list is a valid result; only a
//! missing or malformed tool call is an error.

#[cfg(test)]
#[path = "generate_test.rs"]
mod generate_test;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::llm::LlmChat;
use crate::llm::tools::{SUBMIT_BOARD_TOOL, board_tools};
use crate::llm::types::{ContentBlock, Message};

const GENERATE_MAX_TOKENS: u32 = 4096;

const SYSTEM_PROMPT: &str = "\
You are an expert Monopoly board game designer.

You will generate a list of properties for a Monopoly board based on the \
theme given by the user. Group the properties by likeness, similar to the \
original Monopoly game, and give each group a distinct color. Every entry \
in a group must repeat that group's name and color exactly.

Report the finished list by calling the submitBoard tool exactly once.";

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("LLM error: {0}")]
    Llm(#[from] crate::llm::types::LlmError),
    #[error("model response did not include a board")]
    MissingBoard,
    #[error("model returned a malformed board: {0}")]
    MalformedBoard(String),
}

/// One generated entry: a property name plus its group and group color.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeneratedProperty {
    pub name: String,
    pub group: String,
    #[serde(default)]
    pub color: String,
}

#[derive(Deserialize)]
struct SubmitBoardInput {
    properties: Vec<GeneratedProperty>,
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Generate the flat property list for `theme`.
///
/// # Errors
///
/// Returns an error when the provider call fails or the model does not
/// produce a usable `submitBoard` call.
pub async fn generate_board(
    llm: &dyn LlmChat,
    theme: &str,
) -> Result<Vec<GeneratedProperty>, GenerateError> {
    info!(theme_len = theme.len(), "generate: prompt received");

    let tools = board_tools();
    let messages = vec![Message { role: "user".into(), content: format!("Theme: {theme}") }];

    let response = llm
        .chat(GENERATE_MAX_TOKENS, SYSTEM_PROMPT, &messages, Some(&tools))
        .await?;

    info!(
        model = %response.model,
        stop_reason = %response.stop_reason,
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        "generate: LLM response"
    );

    extract_properties(&response.content)
}

// Pull the property list out of the first submitBoard call.
fn extract_properties(content: &[ContentBlock]) -> Result<Vec<GeneratedProperty>, GenerateError> {
    for block in content {
        if let ContentBlock::ToolUse { name, input, .. } = block {
            if name == SUBMIT_BOARD_TOOL {
                let parsed: SubmitBoardInput = serde_json::from_value(input.clone())
                    .map_err(|e| GenerateError::MalformedBoard(e.to_string()))?;
                return Ok(parsed.properties);
            }
            warn!(tool = %name, "generate: unexpected tool call ignored");
        }
    }
    Err(GenerateError::MissingBoard)
}
