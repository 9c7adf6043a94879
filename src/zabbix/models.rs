//! JSON-RPC envelope models shared by every API call

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outgoing JSON-RPC request envelope
#[derive(Serialize, Debug)]
pub struct RpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub method: &'a str,
    pub params: &'a Value,
    pub id: u32,
    /// Session token; serialized as `null` before login
    pub auth: Option<&'a str>,
}

/// Incoming JSON-RPC response envelope
#[derive(Deserialize, Debug)]
pub struct RpcResponse {
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<RpcError>,
}

/// Error member of a JSON-RPC response
#[derive(Deserialize, Debug, Clone)]
pub struct RpcError {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
    /// Zabbix puts the human-readable diagnostic here
    #[serde(default)]
    pub data: Option<Value>,
}

impl RpcError {
    /// Diagnostic text from the `data` member, empty when absent
    pub fn data_text(&self) -> String {
        match &self.data {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}
