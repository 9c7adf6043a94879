//! Authentication session

use chrono::{DateTime, Utc};
use log::{debug, info};
use serde_json::{json, Value};
use std::fmt;

use crate::config::api;
use crate::error::{Result, ZbxError};

use super::ZabbixClient;

/// Authenticated API session
///
/// Created once by [`ZabbixClient::login`] and never refreshed. If the server
/// expires the token, the next call fails with an API error.
#[derive(Clone)]
pub struct Session {
    token: String,
    established_at: DateTime<Utc>,
}

impl Session {
    /// Wrap an existing session token
    pub fn new(token: String) -> Self {
        Self {
            token,
            established_at: Utc::now(),
        }
    }

    /// Raw token for the request envelope
    pub fn token(&self) -> &str {
        &self.token
    }

    /// When the login succeeded
    pub fn established_at(&self) -> DateTime<Utc> {
        self.established_at
    }
}

// Keeps the token out of logs and panic messages
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .field("established_at", &self.established_at)
            .finish()
    }
}

impl ZabbixClient {
    /// Log in and return the resulting session
    pub async fn login(&self, username: &str, password: &str) -> Result<Session> {
        debug!("Logging in as '{}'", username);

        let params = json!({
            "user": username,
            "password": password,
        });
        let result = self.call(api::METHOD_LOGIN, params, None).await?;

        match result {
            Value::String(token) if !token.is_empty() => {
                info!("Authenticated as '{}'", username);
                Ok(Session::new(token))
            }
            other => Err(ZbxError::Protocol(format!(
                "{} returned no session token: {}",
                api::METHOD_LOGIN,
                other
            ))),
        }
    }
}
