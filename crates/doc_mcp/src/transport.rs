//! Line-delimited JSON-RPC transport
//!
//! One request per input line, one response per output line. Blank lines
//! are skipped and notifications produce no output.

use crate::{error_codes, DocumentServer, JsonRpcError, JsonRpcRequest, JsonRpcResponse};
use doc_common::Result;
use serde_json::Value;
use std::io::{BufRead, Write};
use tokio::runtime::Runtime;

/// Serve requests from `input` until EOF, writing responses to `output`.
///
/// Lines that are not UTF-8 or not JSON get a `-32700` response, JSON that
/// is not a request gets `-32600`, and the loop continues either way. A
/// failed read or write ends the loop with an error.
pub fn serve<R: BufRead, W: Write>(
    server: &DocumentServer,
    rt: &Runtime,
    mut input: R,
    mut output: W,
) -> Result<()> {
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let response = match std::str::from_utf8(&buf) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => {
                tracing::debug!("Received: {}", line.trim_end());
                match decode_request(line) {
                    Ok(request) => rt.block_on(server.handle_request(request)),
                    Err(rejected) => Some(rejected),
                }
            }
            Err(e) => {
                tracing::error!("Request is not valid UTF-8: {}", e);
                Some(JsonRpcResponse::failure(None, JsonRpcError::parse_error(e)))
            }
        };

        // Notifications don't get responses
        if let Some(resp) = response {
            let response_json = serde_json::to_string(&resp)?;
            tracing::debug!("Sending: {}", response_json);
            writeln!(output, "{}", response_json)?;
            output.flush()?;
        }
    }

    Ok(())
}

/// Parse one line into a request, or the error response owed for it
fn decode_request(line: &str) -> std::result::Result<JsonRpcRequest, JsonRpcResponse> {
    let value: Value = serde_json::from_str(line).map_err(|e| {
        tracing::error!("Failed to parse request: {}", e);
        JsonRpcResponse::failure(None, JsonRpcError::parse_error(e))
    })?;

    let id = value.get("id").filter(|id| !id.is_null()).cloned();

    serde_json::from_value(value).map_err(|e| {
        tracing::error!("Invalid request: {}", e);
        JsonRpcResponse::failure(
            id,
            JsonRpcError::new(
                error_codes::INVALID_REQUEST,
                format!("Invalid Request: {}", e),
            ),
        )
    })
}
