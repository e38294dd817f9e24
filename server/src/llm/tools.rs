//! Tool definitions for the board generation agent.

#[cfg(test)]
#[path = "tools_test.rs"]
mod tools_test;

use super::types::Tool;

/// Name of the tool the model must call with the finished board.
pub const SUBMIT_BOARD_TOOL: &str = "submitBoard";

/// Build the tool set for board generation: a single `submitBoard` tool
/// whose input schema is the flat property list. Forcing output through
/// the tool call gives schema-shaped results without parsing free text.
#[must_use]
pub fn board_tools() -> Vec<Tool> {
    vec![Tool {
        name: SUBMIT_BOARD_TOOL.into(),
        description: "Submit the finished list of themed board properties.".into(),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {
                "properties": {
                    "type": "array",
                    "description": "Every property on the board, grouped entries adjacent, in board order.",
                    "items": {
                        "type": "object",
                        "properties": {
                            "name": { "type": "string", "description": "The name of the property" },
                            "group": { "type": "string", "description": "The group the property belongs to (e.g. Brown, Light Blue)" },
                            "color": { "type": "string", "description": "CSS color shared by the whole group (hex, e.g. #8B4513)" }
                        },
                        "required": ["name", "group", "color"]
                    }
                }
            },
            "required": ["properties"]
        }),
    }]
}
