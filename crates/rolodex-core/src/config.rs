//! Rolodex configuration.
//!
//! Configuration is a TOML file deserialized into [`RolodexConfig`]. Every
//! section and field has a default, so a partial file (or no file at all)
//! is valid.
//!
//! Path resolution, in order:
//! 1. an explicit path (`--config`, or `ROLODEX_CONFIG` via the CLI);
//! 2. [`DEFAULT_CONFIG_FILE`] in the working directory, if it exists;
//! 3. built-in defaults.
//!
//! A missing explicit file is an error. A missing default file is not.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// File name looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "rolodex.toml";

/// Top-level configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RolodexConfig {
    /// Insert the sample contacts when the server starts.
    pub seed_on_startup: bool,
    /// HTTP listener settings.
    pub server: ServerConfig,
    /// SQLite settings.
    pub database: DatabaseConfig,
    /// Session cookie settings.
    pub session: SessionConfig,
    /// Log filter settings.
    pub logging: LoggingConfig,
}

impl Default for RolodexConfig {
    fn default() -> Self {
        Self {
            seed_on_startup: true,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            session: SessionConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// HTTP listener settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

impl ServerConfig {
    /// `host:port` suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// SQLite settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database file, created if missing.
    pub path: PathBuf,
    /// Upper bound on pooled connections.
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("simple.db"),
            max_connections: 5,
        }
    }
}

/// Session cookie settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Key material used to sign session cookies.
    pub secret_key: String,
    /// Name of the session cookie.
    pub cookie_name: String,
    /// Session lifetime. `None` means a browser-session cookie.
    pub lifetime_secs: Option<u64>,
    /// Add the `Secure` attribute to the cookie.
    pub secure: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret_key: "thisIsASecret".to_string(),
            cookie_name: "rolodex_session".to_string(),
            lifetime_secs: None,
            secure: false,
        }
    }
}

/// Log filter settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info,rolodex=debug".to_string(),
        }
    }
}

impl RolodexConfig {
    /// Project name used in messages and paths.
    pub fn project_name() -> &'static str {
        "rolodex"
    }

    /// Path of the config file that would be used for `explicit`.
    pub fn resolve_config_path(explicit: Option<&str>) -> PathBuf {
        match explicit {
            Some(path) => PathBuf::from(path),
            None => PathBuf::from(DEFAULT_CONFIG_FILE),
        }
    }

    /// Load configuration following the resolution rules in the module docs.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        let path = Self::resolve_config_path(explicit);
        if !path.exists() {
            if explicit.is_some() {
                return Err(Error::config(format!(
                    "Config file does not exist at {}",
                    path.display()
                )));
            }
            tracing::debug!("No {} found, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::from_file(&path)
    }

    /// Load and validate a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let config = Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| Error::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Reject configurations the server cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.session.secret_key.is_empty() {
            return Err(Error::config("session.secret_key must not be empty"));
        }
        if self.session.cookie_name.is_empty() {
            return Err(Error::config("session.cookie_name must not be empty"));
        }
        if self.database.max_connections == 0 {
            return Err(Error::config("database.max_connections must be at least 1"));
        }
        Ok(())
    }
}
