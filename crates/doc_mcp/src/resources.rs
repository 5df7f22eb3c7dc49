//! Resource handlers for `docs://documents` and `docs://documents/{doc_id}`

use crate::{error_codes, parse_params, JsonRpcError};
use doc_core::DocumentStore;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::sync::RwLock;

pub const DOCUMENTS_URI: &str = "docs://documents";
pub const DOCUMENT_URI_TEMPLATE: &str = "docs://documents/{doc_id}";

/// Static resource definition
#[derive(Debug, Serialize)]
struct Resource {
    uri: &'static str,
    name: &'static str,
    description: &'static str,
    #[serde(rename = "mimeType")]
    mime_type: &'static str,
}

/// Parameterised resource definition
#[derive(Debug, Serialize)]
struct ResourceTemplate {
    #[serde(rename = "uriTemplate")]
    uri_template: &'static str,
    name: &'static str,
    description: &'static str,
    #[serde(rename = "mimeType")]
    mime_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct ReadResourceParams {
    uri: String,
}

/// What a `docs://` URI points at
#[derive(Debug, PartialEq, Eq)]
pub enum DocumentUri<'a> {
    /// The id listing
    Listing,
    /// A single document's content
    Document(&'a str),
}

impl<'a> DocumentUri<'a> {
    pub fn parse(uri: &'a str) -> Option<Self> {
        if uri == DOCUMENTS_URI {
            return Some(Self::Listing);
        }
        uri.strip_prefix(DOCUMENTS_URI)
            .and_then(|rest| rest.strip_prefix('/'))
            .filter(|doc_id| !doc_id.is_empty())
            .map(Self::Document)
    }
}

/// Result of `resources/list`
pub fn list_resources() -> Value {
    let resources = vec![Resource {
        uri: DOCUMENTS_URI,
        name: "list_docs",
        description: "Ids of every document in the store",
        mime_type: "application/json",
    }];
    json!({ "resources": resources })
}

/// Result of `resources/templates/list`
pub fn list_resource_templates() -> Value {
    let templates = vec![ResourceTemplate {
        uri_template: DOCUMENT_URI_TEMPLATE,
        name: "fetch_doc",
        description: "Contents of a single document",
        mime_type: "text/plain",
    }];
    json!({ "resourceTemplates": templates })
}

/// Handle `resources/read`
pub async fn handle_read_resource(
    store: &RwLock<DocumentStore>,
    params: Option<Value>,
) -> Result<Value, JsonRpcError> {
    let params: ReadResourceParams = parse_params(params)?;
    let uri = params.uri.as_str();

    let target = DocumentUri::parse(uri).ok_or_else(|| {
        JsonRpcError::new(
            error_codes::INVALID_PARAMS,
            format!("Unknown resource: {}", uri),
        )
    })?;

    let store = store.read().await;
    let (mime_type, text) = match target {
        DocumentUri::Listing => {
            let ids = store.list();
            let text = serde_json::to_string(&ids).map_err(doc_common::DocError::from)?;
            ("application/json", text)
        }
        DocumentUri::Document(doc_id) => ("text/plain", store.fetch(doc_id)?.to_string()),
    };

    Ok(json!({
        "contents": [{
            "uri": uri,
            "mimeType": mime_type,
            "text": text,
        }]
    }))
}
