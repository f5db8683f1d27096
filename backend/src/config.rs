//! # Configuration
//!
//! Process configuration is read once at startup from environment variables.
//! Every setting has a default so the server runs with no environment at all.

use anyhow::{Context, Result};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATABASE_URL: &str = "sqlite:todo.db";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_STATIC_DIR: &str = "static";

/// Runtime settings for the todo server
#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub database_url: String,
    pub max_connections: u32,
    /// Directory containing `index.html`
    pub static_dir: PathBuf,
    /// Origin allowed by the CORS layer; no CORS layer when unset
    pub cors_origin: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            cors_origin: None,
        }
    }
}

impl Config {
    /// Build the configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = match lookup("HOST") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("HOST is not a valid IP address: {raw}"))?,
            None => defaults.host,
        };

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {raw}"))?,
            None => defaults.port,
        };

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => {
                let value: u32 = raw.parse().with_context(|| {
                    format!("DATABASE_MAX_CONNECTIONS is not a valid number: {raw}")
                })?;
                anyhow::ensure!(value > 0, "DATABASE_MAX_CONNECTIONS must be at least 1");
                value
            }
            None => defaults.max_connections,
        };

        Ok(Self {
            host,
            port,
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            max_connections,
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            cors_origin: lookup("CORS_ORIGIN").filter(|origin| !origin.trim().is_empty()),
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn index_file(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }
}
