/// Configuration constants for the Zabbix JSON-RPC API
pub mod api {
    /// Endpoint path under the server base URL
    pub const ENDPOINT_PATH: &str = "api_jsonrpc.php";

    /// Content type expected by the endpoint
    pub const CONTENT_TYPE: &str = "application/json-rpc";

    /// JSON-RPC protocol version tag
    pub const JSONRPC_VERSION: &str = "2.0";

    /// Fixed request identifier
    pub const REQUEST_ID: u32 = 1;

    /// Per-call timeout in seconds
    pub const TIMEOUT_SECS: u64 = 30;

    pub const METHOD_LOGIN: &str = "user.login";
    pub const METHOD_HOSTGROUP_GET: &str = "hostgroup.get";
    pub const METHOD_TEMPLATE_GET: &str = "template.get";
    pub const METHOD_HOST_CREATE: &str = "host.create";
}

/// Values written into every created host
pub mod host {
    /// Interface type: Zabbix agent
    pub const INTERFACE_TYPE_AGENT: u8 = 1;

    /// Default Zabbix agent port
    pub const AGENT_PORT: &str = "10050";

    /// Inventory mode: automatic
    pub const INVENTORY_MODE_AUTOMATIC: i8 = 1;

    /// TLS connection mode: pre-shared key
    pub const TLS_PSK: u8 = 2;

    /// Description attached to provisioned hosts
    pub const DESCRIPTION: &str = "Automatically added via API";
}

/// Default values for CLI
pub mod defaults {
    /// Default Zabbix user
    pub const USERNAME: &str = "Admin";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Hosts provisioned at once in bulk mode
    pub const CONCURRENCY: usize = 1;

    /// Hostname used when a record carries none
    pub const UNKNOWN_HOSTNAME: &str = "unknown";
}

/// Configuration constants for the settings file and environment
pub mod settings {
    /// Settings directory name (in home directory)
    pub const DIR_NAME: &str = ".zbxctl";

    /// Settings file name
    pub const FILE_NAME: &str = "config.json";

    pub const URL_ENV_VAR: &str = "ZABBIX_URL";
    pub const USER_ENV_VAR: &str = "ZABBIX_USER";
    pub const PASSWORD_ENV_VAR: &str = "ZABBIX_PASSWORD";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_path_is_relative() {
        assert!(!api::ENDPOINT_PATH.starts_with('/'));
        assert!(api::ENDPOINT_PATH.ends_with(".php"));
    }

    #[test]
    fn test_agent_port_is_numeric() {
        assert!(host::AGENT_PORT.parse::<u16>().is_ok());
    }

    #[test]
    fn test_env_var_names() {
        assert_eq!(settings::URL_ENV_VAR, "ZABBIX_URL");
        assert_eq!(settings::PASSWORD_ENV_VAR, "ZABBIX_PASSWORD");
    }
}
