//! Process configuration read from environment variables.

use reportdesk_core::{default_log_level, parse_log_level, LogTarget};
use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB_PATH: &str = "./db/db.sqlite3";
pub const DEFAULT_API_TOKEN: &str = "Password123";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub db_path: PathBuf,
    pub api_token: String,
    pub log_level: &'static str,
    pub log_target: LogTarget,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidPort(String),
    InvalidBindAddr(String),
    EmptyApiToken,
    EmptyDbPath,
    InvalidLogLevel(String),
    InvalidLogDir(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPort(value) => write!(f, "PORT is not a valid port: `{value}`"),
            Self::InvalidBindAddr(value) => {
                write!(f, "REPORTDESK_BIND is not a socket address: `{value}`")
            }
            Self::EmptyApiToken => write!(f, "REPORTDESK_API_TOKEN cannot be empty"),
            Self::EmptyDbPath => write!(f, "REPORTDESK_DB_PATH cannot be empty"),
            Self::InvalidLogLevel(message) => write!(f, "REPORTDESK_LOG_LEVEL: {message}"),
            Self::InvalidLogDir(message) => write!(f, "REPORTDESK_LOG_DIR: {message}"),
        }
    }
}

impl Error for ConfigError {}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any name-to-value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = match lookup("REPORTDESK_BIND") {
            Some(raw) => raw
                .trim()
                .parse::<SocketAddr>()
                .map_err(|_| ConfigError::InvalidBindAddr(raw.clone()))?,
            None => {
                let port = match lookup("PORT") {
                    Some(raw) => raw
                        .trim()
                        .parse::<u16>()
                        .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
                    None => DEFAULT_PORT,
                };
                SocketAddr::from(([0, 0, 0, 0], port))
            }
        };

        let db_path = lookup("REPORTDESK_DB_PATH").unwrap_or_else(|| DEFAULT_DB_PATH.to_string());
        if db_path.trim().is_empty() {
            return Err(ConfigError::EmptyDbPath);
        }

        let api_token =
            lookup("REPORTDESK_API_TOKEN").unwrap_or_else(|| DEFAULT_API_TOKEN.to_string());
        if api_token.is_empty() {
            return Err(ConfigError::EmptyApiToken);
        }

        let log_level = match lookup("REPORTDESK_LOG_LEVEL") {
            Some(raw) => parse_log_level(&raw).map_err(ConfigError::InvalidLogLevel)?,
            None => default_log_level(),
        };

        let log_target = match lookup("REPORTDESK_LOG_DIR") {
            Some(raw) => LogTarget::directory(&raw).map_err(ConfigError::InvalidLogDir)?,
            None => LogTarget::Stderr,
        };

        Ok(Self {
            bind_addr,
            db_path: PathBuf::from(db_path),
            api_token,
            log_level,
            log_target,
        })
    }

    pub fn uses_default_token(&self) -> bool {
        self.api_token == DEFAULT_API_TOKEN
    }
}
