/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

/// Accepted secret code lengths
pub const SECRET_CODE_LENGTHS: RangeInclusive<usize> = 4..=64;

/// Config file read when no explicit path is given
pub const DEFAULT_CONFIG_FILE: &str = "melody.toml";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_accounts")]
    pub accounts: AccountSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Attach a permissive CORS layer
    #[serde(default = "default_cors")]
    pub cors: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AccountSettings {
    #[serde(default = "default_secret_code_length")]
    pub secret_code_length: usize,
}

impl ServerConfig {
    /// Load configuration from defaults, an optional file and the environment
    ///
    /// An explicit `path` must exist. Without one, `melody.toml` in the
    /// working directory is used if present. Environment variables prefixed
    /// `MELODY_` override both, with `__` between section and key
    /// (`MELODY_SERVER__PORT=9000`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("MELODY")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(ServerError::Config("Port must be non-zero".to_string()));
        }

        self.server
            .host
            .parse::<IpAddr>()
            .map_err(|e| ServerError::Config(format!("Invalid host {:?}: {}", self.server.host, e)))?;

        if !SECRET_CODE_LENGTHS.contains(&self.accounts.secret_code_length) {
            return Err(ServerError::Config(format!(
                "Secret code length must be between {} and {}, got {}",
                SECRET_CODE_LENGTHS.start(),
                SECRET_CODE_LENGTHS.end(),
                self.accounts.secret_code_length
            )));
        }

        Ok(())
    }

    /// Address to listen on
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let host = self
            .server
            .host
            .parse::<IpAddr>()
            .map_err(|e| ServerError::Config(e.to_string()))?;
        Ok(SocketAddr::from((host, self.server.port)))
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ServerError::Config(e.to_string()))
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
        cors: default_cors(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cors() -> bool {
    true
}

fn default_accounts() -> AccountSettings {
    AccountSettings {
        secret_code_length: default_secret_code_length(),
    }
}

fn default_secret_code_length() -> usize {
    melody_core::SecretCode::DEFAULT_LENGTH
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            accounts: default_accounts(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        let config = ServerConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert!(config.server.cors);
        assert_eq!(config.accounts.secret_code_length, 8);
        assert!(config.validate().is_ok());
        assert_eq!(config.socket_addr().unwrap().port(), 8080);
    }

    #[test]
    fn file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[server]\nport = 9090\n\n[accounts]\nsecret_code_length = 12").unwrap();

        let config = ServerConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.accounts.secret_code_length, 12);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let result = ServerConfig::load(Some(Path::new("/definitely/not/here.toml")));
        assert!(matches!(result, Err(ServerError::Config(_))));
    }

    #[test]
    fn validate_rejects_bad_values() {
        let mut config = ServerConfig::default();
        config.server.port = 0;
        assert!(config.validate().is_err());

        let mut config = ServerConfig::default();
        config.server.host = "not-an-ip".to_string();
        assert!(config.validate().is_err());

        let mut config = ServerConfig::default();
        config.accounts.secret_code_length = 2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn toml_round_trip_keeps_values() {
        let mut config = ServerConfig::default();
        config.server.port = 7000;
        let rendered = config.to_toml().unwrap();
        assert!(rendered.contains("port = 7000"));

        let parsed: ServerConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }
}
