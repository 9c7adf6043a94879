//! Host provisioning data models

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::IpAddr;

use crate::config::host as host_config;
use crate::error::{Result, ZbxError};

/// Everything needed to create one host
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostRequest {
    pub hostname: String,
    pub ip: String,
    /// Host group names, in order
    pub groups: Vec<String>,
    /// Template names, in order
    pub templates: Vec<String>,
    pub psk_identity: Option<String>,
    pub psk_key: Option<String>,
}

impl HostRequest {
    /// Check the request and extract its PSK settings
    ///
    /// Fails on an empty hostname, an IP that is not an IPv4/IPv6 literal, or
    /// a PSK identity without a key (and vice versa).
    pub fn validate(&self) -> Result<Option<PskConfig>> {
        if self.hostname.trim().is_empty() {
            return Err(ZbxError::Record("hostname is empty".to_string()));
        }
        if self.ip.trim().parse::<IpAddr>().is_err() {
            return Err(ZbxError::Record(format!(
                "'{}' is not a valid IP address",
                self.ip
            )));
        }
        PskConfig::from_parts(self.psk_identity.as_deref(), self.psk_key.as_deref())
    }
}

/// Split a comma-joined name list, trimming names and dropping empty ones
pub fn split_names(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Pre-shared-key identity and key pair
#[derive(Clone, PartialEq)]
pub struct PskConfig {
    pub identity: String,
    pub key: String,
}

impl PskConfig {
    /// Build from optional parts; both or neither must be given
    pub fn from_parts(identity: Option<&str>, key: Option<&str>) -> Result<Option<Self>> {
        let identity = identity.map(str::trim).filter(|s| !s.is_empty());
        let key = key.map(str::trim).filter(|s| !s.is_empty());

        match (identity, key) {
            (Some(identity), Some(key)) => Ok(Some(Self {
                identity: identity.to_string(),
                key: key.to_string(),
            })),
            (None, None) => Ok(None),
            (Some(_), None) => Err(ZbxError::Record(
                "psk_identity given without psk_key".to_string(),
            )),
            (None, Some(_)) => Err(ZbxError::Record(
                "psk_key given without psk_identity".to_string(),
            )),
        }
    }
}

impl fmt::Debug for PskConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PskConfig")
            .field("identity", &self.identity)
            .field("key", &"<redacted>")
            .finish()
    }
}

/// Parameters of a `host.create` call
#[derive(Serialize, Debug)]
pub struct HostCreateParams {
    pub host: String,
    pub interfaces: Vec<HostInterface>,
    pub groups: Vec<GroupId>,
    pub templates: Vec<TemplateId>,
    pub inventory_mode: i8,
    pub description: String,
    #[serde(flatten)]
    pub tls: Option<TlsPsk>,
}

impl HostCreateParams {
    pub fn new(
        request: &HostRequest,
        group_ids: Vec<String>,
        template_ids: Vec<String>,
        psk: Option<PskConfig>,
    ) -> Self {
        Self {
            host: request.hostname.trim().to_string(),
            interfaces: vec![HostInterface::agent(request.ip.trim())],
            groups: group_ids
                .into_iter()
                .map(|groupid| GroupId { groupid })
                .collect(),
            templates: template_ids
                .into_iter()
                .map(|templateid| TemplateId { templateid })
                .collect(),
            inventory_mode: host_config::INVENTORY_MODE_AUTOMATIC,
            description: host_config::DESCRIPTION.to_string(),
            tls: psk.map(TlsPsk::from),
        }
    }
}

/// Host interface definition
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct HostInterface {
    #[serde(rename = "type")]
    pub interface_type: u8,
    pub main: u8,
    pub useip: u8,
    pub ip: String,
    pub dns: String,
    pub port: String,
}

impl HostInterface {
    /// Main agent interface addressed by IP
    pub fn agent(ip: &str) -> Self {
        Self {
            interface_type: host_config::INTERFACE_TYPE_AGENT,
            main: 1,
            useip: 1,
            ip: ip.to_string(),
            dns: String::new(),
            port: host_config::AGENT_PORT.to_string(),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GroupId {
    pub groupid: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TemplateId {
    pub templateid: String,
}

/// PSK encryption for both directions
#[derive(Serialize, Clone, PartialEq)]
pub struct TlsPsk {
    pub tls_connect: u8,
    pub tls_accept: u8,
    pub tls_psk_identity: String,
    pub tls_psk: String,
}

impl From<PskConfig> for TlsPsk {
    fn from(psk: PskConfig) -> Self {
        Self {
            tls_connect: host_config::TLS_PSK,
            tls_accept: host_config::TLS_PSK,
            tls_psk_identity: psk.identity,
            tls_psk: psk.key,
        }
    }
}

impl fmt::Debug for TlsPsk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TlsPsk")
            .field("tls_connect", &self.tls_connect)
            .field("tls_accept", &self.tls_accept)
            .field("tls_psk_identity", &self.tls_psk_identity)
            .field("tls_psk", &"<redacted>")
            .finish()
    }
}

/// Result of a `host.create` call
#[derive(Deserialize, Debug)]
pub struct HostCreateResponse {
    #[serde(default)]
    pub hostids: Vec<String>,
}

/// Outcome of one provisioning attempt
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HostStatus {
    Success,
    Error,
}

impl fmt::Display for HostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostStatus::Success => write!(f, "success"),
            HostStatus::Error => write!(f, "error"),
        }
    }
}

/// Result of provisioning one host
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct HostCreationResult {
    pub hostname: String,
    pub status: HostStatus,
    pub host_id: Option<String>,
    pub error_message: Option<String>,
    /// Group and template names that could not be resolved
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl HostCreationResult {
    pub fn success(hostname: &str, host_id: String, warnings: Vec<String>) -> Self {
        Self {
            hostname: hostname.to_string(),
            status: HostStatus::Success,
            host_id: Some(host_id),
            error_message: None,
            warnings,
        }
    }

    pub fn error(hostname: &str, message: impl Into<String>) -> Self {
        Self {
            hostname: hostname.to_string(),
            status: HostStatus::Error,
            host_id: None,
            error_message: Some(message.into()),
            warnings: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == HostStatus::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request() -> HostRequest {
        HostRequest {
            hostname: "sensor01".to_string(),
            ip: "10.0.0.5".to_string(),
            groups: vec!["Linux servers".to_string()],
            templates: vec!["Template OS Linux".to_string()],
            psk_identity: None,
            psk_key: None,
        }
    }

    #[test]
    fn test_split_names() {
        assert_eq!(
            split_names("Linux servers, Web servers,,"),
            vec!["Linux servers", "Web servers"]
        );
        assert!(split_names("").is_empty());
        assert!(split_names(" , ").is_empty());
    }

    #[test]
    fn test_validate_plain_request() {
        assert_eq!(request().validate().unwrap(), None);
    }

    #[test]
    fn test_validate_rejects_empty_hostname() {
        let req = HostRequest {
            hostname: "  ".to_string(),
            ..request()
        };
        assert!(req.validate().unwrap_err().is_record());
    }

    #[test]
    fn test_validate_rejects_bad_ip() {
        let req = HostRequest {
            ip: "10.0.0.300".to_string(),
            ..request()
        };
        let err = req.validate().unwrap_err();
        assert!(err.is_record());
        assert!(err.to_string().contains("10.0.0.300"));
    }

    #[test]
    fn test_validate_accepts_ipv6() {
        let req = HostRequest {
            ip: "2001:db8::5".to_string(),
            ..request()
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_psk_both_parts() {
        let psk = PskConfig::from_parts(Some("PSK 001"), Some("1f87b595725ac58dd977beef14b97461"))
            .unwrap()
            .unwrap();
        assert_eq!(psk.identity, "PSK 001");
    }

    #[test]
    fn test_psk_partial_is_rejected() {
        let err = PskConfig::from_parts(Some("PSK 001"), None).unwrap_err();
        assert!(err.is_record());
        assert!(err.to_string().contains("psk_key"));

        let err = PskConfig::from_parts(None, Some("abcd")).unwrap_err();
        assert!(err.to_string().contains("psk_identity"));
    }

    #[test]
    fn test_psk_empty_strings_are_absent() {
        assert_eq!(PskConfig::from_parts(Some(""), Some(" ")).unwrap(), None);
        assert!(PskConfig::from_parts(Some("id"), Some("")).is_err());
    }

    #[test]
    fn test_psk_debug_redacts_key() {
        let psk = PskConfig {
            identity: "PSK 001".to_string(),
            key: "secretkey".to_string(),
        };
        assert!(!format!("{:?}", psk).contains("secretkey"));
    }

    #[test]
    fn test_create_params_without_psk() {
        let params = HostCreateParams::new(
            &request(),
            vec!["2".to_string()],
            vec!["10001".to_string()],
            None,
        );
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(
            value,
            json!({
                "host": "sensor01",
                "interfaces": [{
                    "type": 1,
                    "main": 1,
                    "useip": 1,
                    "ip": "10.0.0.5",
                    "dns": "",
                    "port": "10050"
                }],
                "groups": [{"groupid": "2"}],
                "templates": [{"templateid": "10001"}],
                "inventory_mode": 1,
                "description": "Automatically added via API"
            })
        );
    }

    #[test]
    fn test_create_params_with_psk() {
        let psk = PskConfig {
            identity: "PSK 001".to_string(),
            key: "1f87b595725ac58dd977beef14b97461".to_string(),
        };
        let params = HostCreateParams::new(&request(), vec![], vec![], Some(psk));
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value["tls_connect"], 2);
        assert_eq!(value["tls_accept"], 2);
        assert_eq!(value["tls_psk_identity"], "PSK 001");
        assert_eq!(value["tls_psk"], "1f87b595725ac58dd977beef14b97461");
        assert_eq!(value["groups"], json!([]));
    }

    #[test]
    fn test_result_serialization() {
        let ok = HostCreationResult::success("sensor01", "10105".to_string(), vec![]);
        let value = serde_json::to_value(&ok).unwrap();
        assert_eq!(value["status"], "success");
        assert_eq!(value["host_id"], "10105");
        assert!(value.get("warnings").is_none());

        let failed = HostCreationResult::error("sensor02", "boom");
        assert!(!failed.is_success());
        assert_eq!(serde_json::to_value(&failed).unwrap()["status"], "error");
    }
}
