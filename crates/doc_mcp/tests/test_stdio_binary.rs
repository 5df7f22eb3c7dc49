use doc_test_helpers::prelude::*;
use predicates::prelude::*;
use serde_json::Value;

fn response_lines(stdout: &[u8]) -> Vec<Value> {
    String::from_utf8_lossy(stdout)
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).expect("stdout must only carry JSON-RPC"))
        .collect()
}

#[test]
fn test_session_over_stdio() {
    let workspace = init_workspace();
    let input = [
        r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05","capabilities":{},"clientInfo":{"name":"test","version":"0"}}}"#,
        r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
        r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"edit_document","arguments":{"doc_id":"plan.md","old_str":"the project's implementation","new_str":"the deployment"}}}"#,
        r#"{"jsonrpc":"2.0","id":3,"method":"resources/read","params":{"uri":"docs://documents/plan.md"}}"#,
    ]
    .join("\n");

    let assert = doc_mcp_command()
        .current_dir(workspace.path())
        .write_stdin(format!("{}\n", input))
        .assert()
        .success()
        .stdout(every_line_is_jsonrpc())
        .stderr(stderr_not_contains(&["ERROR", "WARN"]));

    let responses = response_lines(&assert.get_output().stdout);
    assert_eq!(responses.len(), 3, "notification must not be answered");
    assert_eq!(responses[0]["result"]["serverInfo"]["name"], "DocumentMCP");
    assert_eq!(responses[1]["id"], 2);
    assert_eq!(
        responses[2]["result"]["contents"][0]["text"],
        "The plan outlines the steps for the deployment."
    );
}

#[test]
fn test_malformed_line_gets_parse_error() {
    doc_mcp_command()
        .write_stdin("{not json\n{\"jsonrpc\":\"2.0\",\"id\":5,\"method\":\"ping\"}\n")
        .assert()
        .success()
        .stdout(has_error_code(-32700))
        .stdout(predicate::str::contains("\"id\":5"));
}

#[test]
fn test_workspace_config_sets_server_name() {
    let workspace = workspace_with_config("[server]\nname = \"ConfiguredDocs\"\n");

    doc_mcp_command()
        .current_dir(workspace.path())
        .write_stdin("{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"initialize\"}\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("ConfiguredDocs"));
}

#[test]
fn test_bad_config_exits_with_config_error() {
    let workspace = workspace_with_config("[server\n");

    doc_mcp_command()
        .current_dir(workspace.path())
        .write_stdin("")
        .assert()
        .code(101)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to parse config"));
}

#[test]
fn test_logs_stay_off_stdout() {
    doc_mcp_command()
        .env("RUST_LOG", "debug")
        .write_stdin("{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"tools/list\"}\n")
        .assert()
        .success()
        .stdout(every_line_is_jsonrpc())
        .stdout(predicate::str::contains("Handling MCP request").not())
        .stderr(predicate::str::contains("Handling MCP request"));
}

#[test]
fn test_non_utf8_line_does_not_stop_server() {
    let mut input = b"\xff\xfe garbage\n".to_vec();
    input.extend_from_slice(b"{\"jsonrpc\":\"2.0\",\"id\":9}\n");
    input.extend_from_slice(b"{\"jsonrpc\":\"2.0\",\"id\":11,\"method\":\"ping\"}\n");

    let assert = doc_mcp_command()
        .write_stdin(input)
        .assert()
        .success()
        .stdout(every_line_is_jsonrpc());

    let responses = response_lines(&assert.get_output().stdout);
    assert_eq!(responses.len(), 3);
    assert_eq!(responses[0]["error"]["code"], -32700);
    assert_eq!(responses[1]["id"], 9);
    assert_eq!(responses[1]["error"]["code"], -32600);
    assert_eq!(responses[2]["id"], 11);
}
