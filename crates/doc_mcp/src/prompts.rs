//! Prompt handlers

use crate::{parse_params, JsonRpcError};
use doc_common::DocError;
use doc_core::prompt::{format_messages, FORMAT_PROMPT_DESCRIPTION, FORMAT_PROMPT_NAME};
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
struct GetPromptParams {
    name: String,
    #[serde(default)]
    arguments: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct FormatPromptArgs {
    doc_id: String,
}

/// Result of `prompts/list`
pub fn list_prompts() -> Value {
    json!({
        "prompts": [{
            "name": FORMAT_PROMPT_NAME,
            "description": FORMAT_PROMPT_DESCRIPTION,
            "arguments": [{
                "name": "doc_id",
                "description": "The id of the document to format",
                "required": true,
            }],
        }]
    })
}

/// Handle `prompts/get`
pub fn handle_get_prompt(params: Option<Value>) -> Result<Value, JsonRpcError> {
    let params: GetPromptParams = parse_params(params)?;

    if params.name != FORMAT_PROMPT_NAME {
        return Err(DocError::ValidationError(format!("Unknown prompt: {}", params.name)).into());
    }

    let args: FormatPromptArgs = parse_params(params.arguments)?;
    let messages: Vec<Value> = format_messages(&args.doc_id)
        .into_iter()
        .map(|m| {
            json!({
                "role": m.role,
                "content": { "type": "text", "text": m.text },
            })
        })
        .collect();

    Ok(json!({
        "description": FORMAT_PROMPT_DESCRIPTION,
        "messages": messages,
    }))
}
