//! JSON-RPC 1.1 Wire Types
//!
//! Envelope and response shapes exchanged with the ProbModelSEED service.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Protocol version sent in every envelope
pub const JSONRPC_VERSION: &str = "1.1";

/// Service prefix of every remote method name
pub const SERVICE_NAME: &str = "ProbModelSEED";

/// JSON-RPC 1.1 request envelope
#[derive(Debug, Clone, Serialize)]
pub struct RpcRequest {
    pub params: Vec<Value>,
    pub method: String,
    pub version: &'static str,
    pub id: String,
}

impl RpcRequest {
    /// Build a fresh envelope with a random decimal id
    pub fn new(method: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            params,
            method: method.into(),
            version: JSONRPC_VERSION,
            id: random_id(),
        }
    }
}

/// Random decimal request id.
///
/// The service echoes it back but this client never matches on it.
fn random_id() -> String {
    rand::random::<u64>().to_string()
}

/// Success response body
#[derive(Debug, Clone)]
pub struct RpcResponse {
    pub result: Value,
}

impl RpcResponse {
    /// Parse a 2xx body. Only a JSON object is a response; a missing
    /// `result` field reads as `null`.
    pub fn parse(body: &str) -> std::result::Result<Self, String> {
        match serde_json::from_str::<Value>(body).map_err(|e| e.to_string())? {
            Value::Object(mut fields) => Ok(Self {
                result: fields.remove("result").unwrap_or(Value::Null),
            }),
            other => Err(format!("expected a JSON object, got {}", json_kind(&other))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Number of return values a remote method declares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnArity {
    /// No meaningful return; the whole `result` is handed back
    Zero,
    /// First element of `result`
    One,
}

impl ReturnArity {
    pub fn count(self) -> u8 {
        match self {
            ReturnArity::Zero => 0,
            ReturnArity::One => 1,
        }
    }

    /// Pull the caller-facing value out of a response's `result` field.
    ///
    /// Returns `None` when `One` is requested but `result` is not a
    /// non-empty list.
    pub fn extract(self, result: Value) -> Option<Value> {
        match self {
            ReturnArity::Zero => Some(result),
            ReturnArity::One => match result {
                Value::Array(mut values) if !values.is_empty() => Some(values.swap_remove(0)),
                _ => None,
            },
        }
    }
}

/// Static credentials supplied at client construction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthInfo {
    pub token: String,
    pub user_id: String,
}

impl AuthInfo {
    pub fn new(token: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            user_id: user_id.into(),
        }
    }
}

/// Remote method descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RpcMethod {
    /// Rust facade name (snake_case)
    pub rust_name: &'static str,
    /// Name on the wire, without the service prefix
    pub name: &'static str,
    pub arity: ReturnArity,
}

impl RpcMethod {
    /// Service-qualified name, e.g. `ProbModelSEED.list_models`
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", SERVICE_NAME, self.name)
    }
}
