//! MCP (Model Context Protocol) server implementation
//!
//! This crate provides the JSON-RPC server that exposes the document store
//! as tools, resources and prompts.
//!
//! CRITICAL: stdout is reserved EXCLUSIVELY for JSON-RPC responses.
//! All logs (Info/Warn/Error) MUST go to stderr to avoid protocol corruption.

pub mod prompts;
pub mod resources;
pub mod tools;
pub mod transport;

use doc_common::{DocError, Result};
use doc_config::{Config, ServerConfig};
use doc_core::DocumentStore;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::sync::RwLock;

/// Standard JSON-RPC and MCP error codes
pub mod error_codes {
    pub const PARSE_ERROR: i32 = -32700;
    pub const INVALID_REQUEST: i32 = -32600;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;
    pub const RESOURCE_NOT_FOUND: i32 = -32002;
}

/// JSON-RPC request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

impl JsonRpcRequest {
    pub fn new(id: impl Into<Value>, method: &str, params: Option<Value>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id: Some(id.into()),
            method: method.to_string(),
            params,
        }
    }

    /// A request without an id expects no response
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

/// JSON-RPC response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(id: Option<Value>, error: JsonRpcError) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(error),
        }
    }
}

/// JSON-RPC error object
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    pub fn method_not_found(method: &str) -> Self {
        Self::new(
            error_codes::METHOD_NOT_FOUND,
            format!("Method not found: {}", method),
        )
    }

    pub fn parse_error(detail: impl std::fmt::Display) -> Self {
        Self::new(error_codes::PARSE_ERROR, format!("Parse error: {}", detail))
    }

    /// Convert DocError to JSON-RPC error
    pub fn from_doc_error(err: &DocError) -> Self {
        let code = match err {
            DocError::NotFound { .. } => error_codes::RESOURCE_NOT_FOUND,
            DocError::ValidationError(_) => error_codes::INVALID_PARAMS,
            DocError::ParseError(_) => error_codes::PARSE_ERROR,
            _ => error_codes::INTERNAL_ERROR,
        };

        let data = match err {
            DocError::NotFound { doc_id } => Some(json!({ "doc_id": doc_id })),
            _ => None,
        };

        Self {
            code,
            message: err.to_string(),
            data,
        }
    }
}

impl From<DocError> for JsonRpcError {
    fn from(err: DocError) -> Self {
        Self::from_doc_error(&err)
    }
}

/// Deserialize request params into a typed struct
pub(crate) fn parse_params<T: DeserializeOwned>(params: Option<Value>) -> Result<T> {
    params
        .ok_or_else(|| DocError::ValidationError("Missing params".to_string()))
        .and_then(|v| {
            serde_json::from_value(v)
                .map_err(|e| DocError::ValidationError(format!("Invalid params: {}", e)))
        })
}

/// Owns the document store for the lifetime of the process and answers
/// JSON-RPC requests against it.
pub struct DocumentServer {
    store: RwLock<DocumentStore>,
    info: ServerConfig,
}

impl DocumentServer {
    pub fn new(store: DocumentStore, config: &Config) -> Self {
        Self {
            store: RwLock::new(store),
            info: config.server.clone(),
        }
    }

    /// Seeded store with default configuration
    pub fn with_defaults() -> Self {
        Self::new(DocumentStore::seeded(), &Config::default())
    }

    /// Shut the server down and hand back the store
    pub fn into_store(self) -> DocumentStore {
        self.store.into_inner()
    }

    /// Handle a single JSON-RPC request.
    ///
    /// Returns `None` for notifications, which never get a response.
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        // Log to stderr only
        tracing::info!(target: "mcp", method = %request.method, "Handling MCP request");

        if request.is_notification() {
            tracing::debug!(method = %request.method, "Notification, no response");
            return None;
        }

        if request.jsonrpc != "2.0" {
            return Some(JsonRpcResponse::failure(
                request.id,
                JsonRpcError::new(
                    error_codes::INVALID_REQUEST,
                    format!("Unsupported jsonrpc version: {}", request.jsonrpc),
                ),
            ));
        }

        let result = match request.method.as_str() {
            "initialize" => Ok(self.handle_initialize(request.params.as_ref())),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(tools::list_tools()),
            "tools/call" => tools::handle_call_tool(&self.store, request.params).await,
            "resources/list" => Ok(resources::list_resources()),
            "resources/templates/list" => Ok(resources::list_resource_templates()),
            "resources/read" => resources::handle_read_resource(&self.store, request.params).await,
            "prompts/list" => Ok(prompts::list_prompts()),
            "prompts/get" => prompts::handle_get_prompt(request.params),
            _ => Err(JsonRpcError::method_not_found(&request.method)),
        };

        Some(match result {
            Ok(value) => JsonRpcResponse::success(request.id, value),
            Err(e) => {
                tracing::warn!(method = %request.method, code = e.code, "{}", e.message);
                JsonRpcResponse::failure(request.id, e)
            }
        })
    }

    fn handle_initialize(&self, params: Option<&Value>) -> Value {
        let protocol_version = params
            .and_then(|p| p.get("protocolVersion"))
            .and_then(Value::as_str)
            .unwrap_or(self.info.protocol_version.as_str());

        json!({
            "protocolVersion": protocol_version,
            "serverInfo": {
                "name": self.info.name,
                "version": env!("CARGO_PKG_VERSION"),
            },
            "capabilities": {
                "tools": { "listChanged": false },
                "resources": { "subscribe": false, "listChanged": false },
                "prompts": { "listChanged": false },
            }
        })
    }
}
