//! Connection settings from CLI flags, environment and the settings file

use log::debug;
use serde::Deserialize;
use std::fs;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::{api, defaults, settings as settings_config};
use crate::error::{Result, ZbxError};
use crate::zabbix::ClientOptions;

/// Contents of the optional settings file
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct SettingsFile {
    pub url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub verify_tls: Option<bool>,
    pub timeout_secs: Option<u64>,
}

/// Handles reading the settings file
pub struct SettingsStore {
    path: PathBuf,
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsStore {
    /// Create a store using the default path (~/.zbxctl/config.json)
    pub fn new() -> Self {
        Self {
            path: Self::default_path(),
        }
    }

    /// Create a store with a custom settings path
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(settings_config::DIR_NAME)
            .join(settings_config::FILE_NAME)
    }

    /// Load the settings file.
    /// Returns Default if the file doesn't exist, errors on corrupt JSON.
    pub fn load(&self) -> Result<SettingsFile> {
        if !self.path.exists() {
            debug!("No settings file at {}", self.path.display());
            return Ok(SettingsFile::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            ZbxError::Config(format!(
                "Failed to read settings file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        debug!("Loaded settings file {}", self.path.display());
        serde_json::from_str(&content).map_err(|e| {
            ZbxError::Config(format!(
                "Failed to parse settings file {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

/// Values given on the command line (or through their environment variables)
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub verify_tls: bool,
    pub timeout_secs: Option<u64>,
}

/// Fully resolved connection settings
#[derive(Clone)]
pub struct ConnectionSettings {
    pub url: String,
    pub username: String,
    pub password: String,
    pub verify_tls: bool,
    pub timeout: Duration,
}

impl std::fmt::Debug for ConnectionSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionSettings")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("verify_tls", &self.verify_tls)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ConnectionSettings {
    /// Resolve settings with fallback:
    /// 1. CLI argument or its environment variable
    /// 2. Settings file
    /// 3. Built-in default (username and timeout only)
    ///
    /// A missing password is prompted for when `interactive` is set and
    /// stdin is a terminal.
    pub fn resolve(cli: &CliOverrides, file: &SettingsFile, interactive: bool) -> Result<Self> {
        let url = cli
            .url
            .clone()
            .or_else(|| file.url.clone())
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| {
                ZbxError::Config(format!(
                    "No Zabbix URL given: use --url, {} or the settings file",
                    settings_config::URL_ENV_VAR
                ))
            })?;

        let username = cli
            .username
            .clone()
            .or_else(|| file.username.clone())
            .unwrap_or_else(|| defaults::USERNAME.to_string());

        let password = match cli.password.clone().or_else(|| file.password.clone()) {
            Some(password) => password,
            None if interactive && std::io::stdin().is_terminal() => {
                prompt_password(&username)?
            }
            None => {
                return Err(ZbxError::Config(format!(
                    "No password given: use --password, {} or the settings file",
                    settings_config::PASSWORD_ENV_VAR
                )))
            }
        };

        let timeout_secs = cli
            .timeout_secs
            .or(file.timeout_secs)
            .unwrap_or(api::TIMEOUT_SECS);

        Ok(Self {
            url,
            username,
            password,
            verify_tls: cli.verify_tls || file.verify_tls.unwrap_or(false),
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            timeout: self.timeout,
            verify_tls: self.verify_tls,
        }
    }
}

fn prompt_password(username: &str) -> Result<String> {
    dialoguer::Password::new()
        .with_prompt(format!("Zabbix password for '{}'", username))
        .interact()
        .map_err(|e| ZbxError::Config(format!("Failed to read password: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn cli_with_password() -> CliOverrides {
        CliOverrides {
            url: Some("https://zabbix.example.com".to_string()),
            password: Some("zabbix".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::with_path(dir.path().join("config.json"));
        assert_eq!(store.load().unwrap(), SettingsFile::default());
    }

    #[test]
    fn test_load_corrupt_json_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not valid json!!!").unwrap();
        let err = SettingsStore::with_path(path).load().unwrap_err();
        assert!(err.to_string().contains("Failed to parse settings file"));
    }

    #[test]
    fn test_load_valid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"url": "https://zbx.local", "username": "provisioner", "verify_tls": true}"#,
        )
        .unwrap();
        let file = SettingsStore::with_path(path).load().unwrap();
        assert_eq!(file.url.as_deref(), Some("https://zbx.local"));
        assert_eq!(file.username.as_deref(), Some("provisioner"));
        assert_eq!(file.verify_tls, Some(true));
        assert!(file.password.is_none());
    }

    #[test]
    fn test_resolve_defaults() {
        let settings =
            ConnectionSettings::resolve(&cli_with_password(), &SettingsFile::default(), false)
                .unwrap();
        assert_eq!(settings.username, "Admin");
        assert_eq!(settings.timeout, Duration::from_secs(30));
        assert!(!settings.verify_tls);
    }

    #[test]
    fn test_cli_wins_over_file() {
        let file = SettingsFile {
            url: Some("https://from-file".to_string()),
            username: Some("file-user".to_string()),
            password: Some("file-pass".to_string()),
            verify_tls: Some(false),
            timeout_secs: Some(60),
        };
        let cli = CliOverrides {
            username: Some("cli-user".to_string()),
            verify_tls: true,
            timeout_secs: Some(5),
            ..cli_with_password()
        };
        let settings = ConnectionSettings::resolve(&cli, &file, false).unwrap();
        assert_eq!(settings.url, "https://zabbix.example.com");
        assert_eq!(settings.username, "cli-user");
        assert_eq!(settings.password, "zabbix");
        assert!(settings.verify_tls);
        assert_eq!(settings.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_file_fills_gaps() {
        let file = SettingsFile {
            url: Some("https://from-file".to_string()),
            password: Some("file-pass".to_string()),
            verify_tls: Some(true),
            ..Default::default()
        };
        let settings = ConnectionSettings::resolve(&CliOverrides::default(), &file, false).unwrap();
        assert_eq!(settings.url, "https://from-file");
        assert_eq!(settings.password, "file-pass");
        assert!(settings.client_options().verify_tls);
    }

    #[test]
    fn test_missing_url_errors() {
        let cli = CliOverrides {
            url: None,
            ..cli_with_password()
        };
        let err = ConnectionSettings::resolve(&cli, &SettingsFile::default(), false).unwrap_err();
        assert!(err.to_string().contains("ZABBIX_URL"));
    }

    #[test]
    fn test_missing_password_non_interactive_errors() {
        let cli = CliOverrides {
            password: None,
            ..cli_with_password()
        };
        let err = ConnectionSettings::resolve(&cli, &SettingsFile::default(), false).unwrap_err();
        assert!(err.to_string().contains("ZABBIX_PASSWORD"));
    }

    #[test]
    fn test_debug_redacts_password() {
        let cli = CliOverrides {
            password: Some("s3cr3t-pass".to_string()),
            ..cli_with_password()
        };
        let settings = ConnectionSettings::resolve(&cli, &SettingsFile::default(), false).unwrap();
        let debug = format!("{:?}", settings);
        assert!(!debug.contains("s3cr3t-pass"));
        assert!(debug.contains("<redacted>"));
    }
}
