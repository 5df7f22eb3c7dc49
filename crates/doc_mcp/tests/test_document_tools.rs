use doc_core::SEED_DOCUMENTS;
use doc_mcp::{DocumentServer, JsonRpcRequest};
use doc_test_helpers::logging::suppress_logs;
use serde_json::{json, Value};

async fn call_tool(server: &DocumentServer, name: &str, args: Value) -> Value {
    let req = JsonRpcRequest::new(
        1,
        "tools/call",
        Some(json!({
            "name": name,
            "arguments": args
        })),
    );

    let resp = server.handle_request(req).await.expect("Request failed");
    assert!(resp.error.is_none(), "Tool call returned error: {:?}", resp.error);
    resp.result.unwrap()
}

fn first_text(result: &Value) -> &str {
    result["content"][0]["text"].as_str().expect("Should have text")
}

#[tokio::test]
async fn test_read_every_seed_document() {
    suppress_logs();
    let server = DocumentServer::with_defaults();

    for (id, content) in SEED_DOCUMENTS {
        let result = call_tool(&server, "read_documents", json!({ "doc_id": id })).await;
        assert_eq!(result["isError"], false);
        assert_eq!(first_text(&result), content);
    }
}

#[tokio::test]
async fn test_edit_then_read_plan() {
    suppress_logs();
    let server = DocumentServer::with_defaults();

    let edit = call_tool(
        &server,
        "edit_document",
        json!({
            "doc_id": "plan.md",
            "old_str": "the project's implementation",
            "new_str": "the deployment"
        }),
    )
    .await;
    assert_eq!(edit["isError"], false);
    assert_eq!(edit["content"].as_array().unwrap().len(), 0);

    let read = call_tool(&server, "read_documents", json!({ "doc_id": "plan.md" })).await;
    assert_eq!(first_text(&read), "The plan outlines the steps for the deployment.");
}

#[tokio::test]
async fn test_edit_without_match_is_noop() {
    suppress_logs();
    let server = DocumentServer::with_defaults();

    let edit = call_tool(
        &server,
        "edit_document",
        json!({ "doc_id": "spec.txt", "old_str": "no such words", "new_str": "x" }),
    )
    .await;
    assert_eq!(edit["isError"], false);

    let read = call_tool(&server, "read_documents", json!({ "doc_id": "spec.txt" })).await;
    assert_eq!(first_text(&read), SEED_DOCUMENTS[5].1);
}

#[tokio::test]
async fn test_missing_document_is_tool_error() {
    suppress_logs();
    let server = DocumentServer::with_defaults();

    let read = call_tool(&server, "read_documents", json!({ "doc_id": "missing.md" })).await;
    assert_eq!(read["isError"], true);
    assert!(first_text(&read).contains("Doc with id missing.md not found"));

    let edit = call_tool(
        &server,
        "edit_document",
        json!({ "doc_id": "missing.md", "old_str": "a", "new_str": "b" }),
    )
    .await;
    assert_eq!(edit["isError"], true);
}

#[tokio::test]
async fn test_empty_old_str_rejected() {
    suppress_logs();
    let server = DocumentServer::with_defaults();

    let edit = call_tool(
        &server,
        "edit_document",
        json!({ "doc_id": "report.pdf", "old_str": "", "new_str": "!" }),
    )
    .await;
    assert_eq!(edit["isError"], true);
    assert!(first_text(&edit).contains("old_str must not be empty"));

    let read = call_tool(&server, "read_documents", json!({ "doc_id": "report.pdf" })).await;
    assert_eq!(first_text(&read), SEED_DOCUMENTS[1].1);
}

#[tokio::test]
async fn test_missing_arguments_is_invalid_params() {
    suppress_logs();
    let server = DocumentServer::with_defaults();

    let req = JsonRpcRequest::new(
        3,
        "tools/call",
        Some(json!({ "name": "edit_document", "arguments": { "doc_id": "plan.md" } })),
    );
    let resp = server.handle_request(req).await.unwrap();
    let err = resp.error.expect("Should be a protocol error");
    assert_eq!(err.code, -32602);
    assert!(err.message.contains("old_str"));
}

#[tokio::test]
async fn test_tools_list_schema() {
    suppress_logs();
    let server = DocumentServer::with_defaults();

    let resp = server
        .handle_request(JsonRpcRequest::new(1, "tools/list", None))
        .await
        .unwrap();
    let tools = resp.result.unwrap()["tools"].as_array().unwrap().clone();
    assert_eq!(tools.len(), 2);

    let read = &tools[0];
    assert_eq!(read["name"], "read_documents");
    assert_eq!(
        read["inputSchema"]["properties"]["doc_id"]["description"],
        "The id of the document to read"
    );
}
