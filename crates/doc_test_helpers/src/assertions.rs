//! JSON-RPC assertion helpers for DocDeck tests

use predicates::prelude::*;
use predicates::str::contains;

/// Assert that stderr does NOT contain any of the given strings
///
/// # Example
///
/// ```rust
/// use doc_test_helpers::assertions::stderr_not_contains;
/// use predicates::prelude::*;
///
/// assert!(stderr_not_contains(&["ERROR", "WARN"]).eval("all quiet"));
/// ```
pub fn stderr_not_contains(values: &[&str]) -> impl Predicate<str> {
    let owned_values: Vec<String> = values.iter().map(|&s| s.to_string()).collect();
    predicate::function(move |s: &str| !owned_values.iter().any(|v| s.contains(v.as_str())))
}

/// Assert that a string is a JSON-RPC response
///
/// Checks for basic JSON-RPC structure (jsonrpc field, id, result or error).
///
/// # Example
/// ```rust
/// use doc_test_helpers::assertions::valid_jsonrpc_response;
/// use predicates::prelude::*;
///
/// let response = r#"{"jsonrpc":"2.0","id":1,"result":{}}"#;
/// assert!(valid_jsonrpc_response().eval(response));
/// ```
pub fn valid_jsonrpc_response() -> impl Predicate<str> {
    contains("\"jsonrpc\"")
        .and(contains("\"id\""))
        .and(contains("\"result\"").or(contains("\"error\"")))
}

/// Assert that every non-empty line is a JSON-RPC response
pub fn every_line_is_jsonrpc() -> impl Predicate<str> {
    predicate::function(|s: &str| {
        s.lines()
            .filter(|l| !l.trim().is_empty())
            .all(|l| valid_jsonrpc_response().eval(l))
    })
}

/// Assert that output contains a JSON-RPC error with `code`
pub fn has_error_code(code: i32) -> impl Predicate<str> {
    contains(format!("\"code\":{}", code))
}
