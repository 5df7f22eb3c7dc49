//! Tool handlers: `read_documents` and `edit_document`
//!
//! Parameter descriptions live on the param structs and reach clients
//! through the generated JSON Schema.

use crate::{parse_params, JsonRpcError};
use doc_common::{DocError, Result};
use doc_core::DocumentStore;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::sync::RwLock;

pub const READ_DOCUMENTS: &str = "read_documents";
pub const EDIT_DOCUMENT: &str = "edit_document";

/// Arguments for `read_documents`
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ReadDocumentParams {
    /// The id of the document to read
    pub doc_id: String,
}

/// Arguments for `edit_document`
#[derive(Debug, Deserialize, JsonSchema)]
pub struct EditDocumentParams {
    /// The id of the document to edit
    pub doc_id: String,
    /// The text to replace. Must match exactly, including white spaces
    pub old_str: String,
    /// The new text to insert in the place of the old text
    pub new_str: String,
}

#[derive(Debug, Deserialize)]
struct CallToolParams {
    name: String,
    #[serde(default)]
    arguments: Option<Value>,
}

/// JSON Schema for a tool's arguments, without the `$schema` marker
pub fn input_schema<T: JsonSchema>() -> Value {
    let mut schema = serde_json::to_value(schemars::schema_for!(T)).unwrap_or_else(|_| json!({}));
    if let Some(obj) = schema.as_object_mut() {
        obj.remove("$schema");
    }
    schema
}

/// Result of `tools/list`
pub fn list_tools() -> Value {
    json!({
        "tools": [
            {
                "name": READ_DOCUMENTS,
                "description": "Read documents and extract the content as string.",
                "inputSchema": input_schema::<ReadDocumentParams>(),
            },
            {
                "name": EDIT_DOCUMENT,
                "description": "Edit the content of a document by replacing with a new content",
                "inputSchema": input_schema::<EditDocumentParams>(),
            },
        ]
    })
}

/// Handle `tools/call`.
///
/// Store failures come back as a successful response with `isError: true`;
/// unknown tools and malformed arguments are protocol errors.
pub async fn handle_call_tool(
    store: &RwLock<DocumentStore>,
    params: Option<Value>,
) -> std::result::Result<Value, JsonRpcError> {
    let call: CallToolParams = parse_params(params)?;

    let outcome = match call.name.as_str() {
        READ_DOCUMENTS => {
            let args: ReadDocumentParams = parse_params(call.arguments)?;
            read_document(store, &args).await.map(|content| vec![content])
        }
        EDIT_DOCUMENT => {
            let args: EditDocumentParams = parse_params(call.arguments)?;
            edit_document(store, &args).await.map(|()| Vec::new())
        }
        other => {
            return Err(DocError::ValidationError(format!("Unknown tool: {}", other)).into());
        }
    };

    Ok(match outcome {
        Ok(texts) => tool_result(texts, false),
        Err(e) => tool_result(
            vec![format!("Error executing tool {}: {}", call.name, e)],
            true,
        ),
    })
}

async fn read_document(store: &RwLock<DocumentStore>, args: &ReadDocumentParams) -> Result<String> {
    let store = store.read().await;
    store.read(&args.doc_id).map(str::to_string)
}

async fn edit_document(store: &RwLock<DocumentStore>, args: &EditDocumentParams) -> Result<()> {
    let mut store = store.write().await;
    let replaced = store.matches(&args.doc_id, &args.old_str)?;
    store.edit(&args.doc_id, &args.old_str, &args.new_str)?;
    tracing::debug!(doc_id = %args.doc_id, replaced, "Edited document");
    Ok(())
}

fn tool_result(texts: Vec<String>, is_error: bool) -> Value {
    let content: Vec<Value> = texts
        .into_iter()
        .map(|text| json!({ "type": "text", "text": text }))
        .collect();
    json!({ "content": content, "isError": is_error })
}
