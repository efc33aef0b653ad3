//! Application configuration

use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::infrastructure::snapshot::SnapshotSource;

/// Deployment environment, from `APP_ENVIRONMENT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
    Other(String),
}

impl Environment {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Self::Development,
            "production" | "prod" => Self::Production,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Other(name) => name,
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 5;

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Interface to bind the HTTP listener on
    pub server_host: String,
    /// HTTP listener port
    pub server_port: u16,
    /// Upper bound on handling one request; `None` disables the limit
    pub request_timeout: Option<Duration>,

    pub environment: Environment,

    /// Directory holding an external snapshot; the embedded one is used when unset
    pub snapshot_dir: Option<PathBuf>,

    /// CORS allowed origins (comma-separated, or "*" for any). Empty disables CORS.
    pub cors_allowed_origins: Vec<String>,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let (server_host, server_port) = match var("SERVER_ADDR") {
            Some(addr) => split_server_addr(&addr)?,
            None => (
                var("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                var("SERVER_PORT")
                    .or_else(|| var("PORT"))
                    .unwrap_or_else(|| "8080".to_string())
                    .trim()
                    .parse()
                    .context("SERVER_PORT must be a valid port number")?,
            ),
        };

        let config = Self {
            server_host,
            server_port,
            request_timeout: request_timeout(var("SERVER_READ_HEADER_TIMEOUT").as_deref()),
            environment: Environment::from_name(
                &var("APP_ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
            ),
            snapshot_dir: var("CATALOG_SNAPSHOT_DIR").map(PathBuf::from),
            cors_allowed_origins: var("CORS_ALLOWED_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
        };

        config.validate().context("invalid configuration")?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.server_host.trim().is_empty() {
            bail!("server host is required");
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self.server_host.parse().with_context(|| {
            format!(
                "SERVER_HOST `{}` is not a valid listen address",
                self.server_host
            )
        })?;
        Ok(SocketAddr::new(ip, self.server_port))
    }

    pub fn snapshot_source(&self) -> SnapshotSource {
        match &self.snapshot_dir {
            Some(dir) => SnapshotSource::Directory(dir.clone()),
            None => SnapshotSource::Embedded,
        }
    }
}

/// Splits `host:port`. An empty host (`:8080`) listens on every interface.
fn split_server_addr(addr: &str) -> Result<(String, u16)> {
    let addr = addr.trim();
    let (host, port) = addr
        .rsplit_once(':')
        .with_context(|| format!("SERVER_ADDR `{addr}` must be host:port"))?;
    let port = port
        .parse()
        .with_context(|| format!("SERVER_ADDR `{addr}` has an invalid port"))?;
    let host = match host.trim_start_matches('[').trim_end_matches(']') {
        "" => "0.0.0.0",
        host => host,
    };
    Ok((host.to_string(), port))
}

/// Seconds from the environment. Unparseable values keep the default; zero disables.
fn request_timeout(raw: Option<&str>) -> Option<Duration> {
    let secs = match raw.map(str::trim) {
        None => DEFAULT_REQUEST_TIMEOUT_SECS,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(
                value = raw,
                default = DEFAULT_REQUEST_TIMEOUT_SECS,
                "Ignoring invalid SERVER_READ_HEADER_TIMEOUT"
            );
            DEFAULT_REQUEST_TIMEOUT_SECS
        }),
    };
    (secs > 0).then_some(Duration::from_secs(secs))
}
