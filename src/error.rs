use std::fmt;

/// Custom error type for Zabbix provisioning operations
#[derive(Debug)]
pub enum ZbxError {
    /// HTTP request failed (connection refused, DNS, timeout)
    Http(reqwest::Error),
    /// Server answered with a non-success HTTP status
    Status { status: u16, message: String },
    /// Response body was not a usable JSON-RPC response
    Protocol(String),
    /// Remote method ran but reported an error
    Api {
        code: i64,
        message: String,
        data: String,
    },
    /// Malformed or incomplete host record
    Record(String),
    /// A group or template name matched more than one remote object
    AmbiguousName {
        kind: &'static str,
        name: String,
        matches: usize,
    },
    /// Input file could not be opened or read
    Input(String),
    /// JSON parsing error
    Json(String),
    /// Configuration error
    Config(String),
}

impl fmt::Display for ZbxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZbxError::Http(e) => write!(f, "Request failed: {}", e),
            ZbxError::Status { status, message } => {
                write!(f, "HTTP error (status {}): {}", status, message)
            }
            ZbxError::Protocol(msg) => write!(f, "Protocol error: {}", msg),
            ZbxError::Api {
                code,
                message,
                data,
            } => {
                if data.is_empty() {
                    write!(f, "API error ({}): {}", code, message)
                } else {
                    write!(f, "API error ({}): {} {}", code, message, data)
                }
            }
            ZbxError::Record(msg) => write!(f, "Invalid host record: {}", msg),
            ZbxError::AmbiguousName {
                kind,
                name,
                matches,
            } => write!(
                f,
                "{} name '{}' is ambiguous ({} matches)",
                kind, name, matches
            ),
            ZbxError::Input(msg) => write!(f, "{}", msg),
            ZbxError::Json(msg) => write!(f, "JSON error: {}", msg),
            ZbxError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for ZbxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ZbxError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl ZbxError {
    /// Network or HTTP-layer failure
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ZbxError::Http(_) | ZbxError::Status { .. } | ZbxError::Protocol(_)
        )
    }

    /// Logical error reported by the remote API
    pub fn is_api(&self) -> bool {
        matches!(self, ZbxError::Api { .. })
    }

    /// Problem with the host record itself
    pub fn is_record(&self) -> bool {
        matches!(self, ZbxError::Record(_))
    }
}

impl From<reqwest::Error> for ZbxError {
    fn from(err: reqwest::Error) -> Self {
        ZbxError::Http(err)
    }
}

impl From<serde_json::Error> for ZbxError {
    fn from(err: serde_json::Error) -> Self {
        ZbxError::Json(err.to_string())
    }
}

impl From<csv::Error> for ZbxError {
    fn from(err: csv::Error) -> Self {
        ZbxError::Input(format!("CSV error: {}", err))
    }
}

/// Result type alias for Zabbix operations
pub type Result<T> = std::result::Result<T, ZbxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ZbxError::Api {
            code: -32602,
            message: "Invalid params.".to_string(),
            data: "Host with the same name \"web01\" already exists.".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("-32602"));
        assert!(msg.contains("Invalid params."));
        assert!(msg.contains("already exists"));
    }

    #[test]
    fn test_api_error_display_without_data() {
        let err = ZbxError::Api {
            code: -32500,
            message: "Application error.".to_string(),
            data: String::new(),
        };
        assert_eq!(err.to_string(), "API error (-32500): Application error.");
    }

    #[test]
    fn test_status_error_display() {
        let err = ZbxError::Status {
            status: 502,
            message: "Bad Gateway".to_string(),
        };
        assert!(err.to_string().contains("502"));
        assert!(err.to_string().contains("Bad Gateway"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ZbxError>();
    }

    #[test]
    fn test_classification() {
        assert!(ZbxError::Protocol("x".to_string()).is_transport());
        assert!(ZbxError::Status {
            status: 500,
            message: String::new()
        }
        .is_transport());
        assert!(ZbxError::Api {
            code: 1,
            message: String::new(),
            data: String::new()
        }
        .is_api());
        assert!(ZbxError::Record("x".to_string()).is_record());
        assert!(!ZbxError::Record("x".to_string()).is_transport());
    }

    #[test]
    fn test_ambiguous_name_display() {
        let err = ZbxError::AmbiguousName {
            kind: "Host group",
            name: "Linux servers".to_string(),
            matches: 2,
        };
        assert_eq!(
            err.to_string(),
            "Host group name 'Linux servers' is ambiguous (2 matches)"
        );
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: ZbxError = json_err.into();
        match err {
            ZbxError::Json(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected ZbxError::Json"),
        }
    }

    #[test]
    fn test_error_source_non_http() {
        use std::error::Error;
        let err = ZbxError::Config("missing url".to_string());
        assert!(err.source().is_none());
    }
}
