//! Response builders for the Lambda result contract.
//!
//! The invoker expects `{statusCode, body}` where `body` is a JSON-encoded
//! string.

use serde_json::{Value, json};

/// Returns a 200 OK response.
#[must_use]
pub fn ok(text: &str) -> Value {
    json!({ "statusCode": 200, "body": json!(text).to_string() })
}

/// Returns a 400 response for validation and no-thread conditions.
#[must_use]
pub fn client_error(text: &str) -> Value {
    json!({ "statusCode": 400, "body": json!(text).to_string() })
}

/// Returns a 500 response for unexpected failures.
#[must_use]
pub fn server_error(text: &str) -> Value {
    json!({ "statusCode": 500, "body": json!(text).to_string() })
}
