//! Zabbix JSON-RPC client

use log::debug;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::time::Duration;

use crate::config::api;
use crate::error::{Result, ZbxError};

use super::models::{RpcRequest, RpcResponse};
use super::session::Session;

/// Connection options for the HTTP transport
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Per-call timeout
    pub timeout: Duration,
    /// Validate the server certificate (off for self-signed deployments)
    pub verify_tls: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(api::TIMEOUT_SECS),
            verify_tls: false,
        }
    }
}

/// Zabbix API client
pub struct ZabbixClient {
    client: Client,
    base_url: String,
}

impl ZabbixClient {
    /// Create a new client for the server at `base_url`
    pub fn new(base_url: &str, options: &ClientOptions) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10).min(options.timeout))
            .timeout(options.timeout)
            .danger_accept_invalid_certs(!options.verify_tls)
            .build()?;

        if !options.verify_tls {
            debug!("TLS certificate validation disabled");
        }

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Full URL of the JSON-RPC endpoint
    pub fn endpoint(&self) -> String {
        format!("{}/{}", self.base_url, api::ENDPOINT_PATH)
    }

    /// Invoke a remote method and return its `result` member
    ///
    /// A missing or null result is returned as an empty object.
    pub async fn call(
        &self,
        method: &str,
        params: Value,
        session: Option<&Session>,
    ) -> Result<Value> {
        let request = RpcRequest {
            jsonrpc: api::JSONRPC_VERSION,
            method,
            params: &params,
            id: api::REQUEST_ID,
            auth: session.map(Session::token),
        };
        let body = serde_json::to_vec(&request)?;
        let url = self.endpoint();

        debug!("Calling {} at {}", method, url);

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, api::CONTENT_TYPE)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ZbxError::Status {
                status: status.as_u16(),
                message: format!(
                    "{} while calling {}",
                    status.canonical_reason().unwrap_or("unexpected status"),
                    method
                ),
            });
        }

        let text = response.text().await?;
        let parsed: RpcResponse = serde_json::from_str(&text).map_err(|e| {
            ZbxError::Protocol(format!("invalid response to {}: {}", method, e))
        })?;

        if let Some(error) = parsed.error {
            debug!("{} failed: {} {}", method, error.message, error.data_text());
            return Err(ZbxError::Api {
                code: error.code,
                data: error.data_text(),
                message: error.message,
            });
        }

        match parsed.result {
            None | Some(Value::Null) => Ok(json!({})),
            Some(result) => Ok(result),
        }
    }

    /// Invoke a remote method and deserialize its result into `T`
    pub async fn call_as<T>(
        &self,
        method: &str,
        params: Value,
        session: Option<&Session>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let result = self.call(method, params, session).await?;
        serde_json::from_value(result).map_err(|e| {
            ZbxError::Protocol(format!("unexpected result from {}: {}", method, e))
        })
    }
}

#[cfg(test)]
impl ZabbixClient {
    /// Create a test client pointing at a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::new(base_url, &ClientOptions::default()).unwrap()
    }
}
