//! JSON-RPC envelope encoding
//!
//! A reply is always `{"jsonrpc": "2.0", "id": …}` plus exactly one of
//! `result` or `error`. The error field is a flat reason string; nothing
//! else ever leaks out of the core. The id is echoed verbatim from the
//! request, including error replies, and only degrades to `null` when the
//! request itself was unparsable.

use serde_json::{json, Value};

/// Protocol tag carried by every reply.
pub const JSONRPC_VERSION: &str = "2.0";

/// Reason sent when the request body is not valid JSON.
pub const ERR_INVALID_REQUEST: &str = "invalid request";
/// Reason sent when `method` or `id` is missing from the envelope.
pub const ERR_METHOD_ID_NOT_FOUND: &str = "method/id not found";
/// Reason sent when the method name is not registered.
pub const ERR_INVALID_METHOD: &str = "invalid method";
/// Reason sent for parameter validation and collaborator failures.
pub const ERR_INVALID_METHOD_CALL: &str = "invalid method call";

/// Encodes a success reply.
pub fn result_reply(id: &Value, result: Value) -> String {
    encode(json!({
        "jsonrpc": JSONRPC_VERSION,
        "id": id,
        "result": result,
    }))
}

/// Encodes an error reply with a flat reason string.
pub fn error_reply(id: &Value, reason: &str) -> String {
    encode(json!({
        "jsonrpc": JSONRPC_VERSION,
        "id": id,
        "error": reason,
    }))
}

fn encode(reply: Value) -> String {
    // Serializing a just-built Value cannot fail.
    serde_json::to_string(&reply).unwrap_or_default()
}
