//! Layered application configuration.
//!
//! Precedence: defaults -> YAML file (`--config`) -> environment
//! (`SCI_CALC__*`, `__` separates nesting levels) -> CLI overrides.

use std::net::{SocketAddr, ToSocketAddrs};
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use calculator::{ServerOptions, ServiceConfig};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

pub const ENV_PREFIX: &str = "SCI_CALC__";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub calculator: CalculatorConfig,
    pub logging: LoggingConfig,
}

/// HTTP transport settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Host name or IP address to bind.
    pub host: String,

    pub port: u16,

    /// Per-request timeout, e.g. `30s`.
    #[serde(with = "humantime_serde")]
    pub request_timeout: Duration,

    /// Largest accepted request body.
    pub body_limit_bytes: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: 8080,
            request_timeout: Duration::from_secs(30),
            body_limit_bytes: 64 * 1024,
        }
    }
}

/// Limits shared by the menu, one-shot evaluation and the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Largest accepted factorial input; `null` disables the limit.
    pub max_factorial_input: Option<u64>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            max_factorial_input: Some(10_000),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `calculator=debug,warn`.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_owned(),
            format: LogFormat::Text,
        }
    }
}

/// Values supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub verbose: u8,
}

impl AppConfig {
    /// Load configuration from defaults, an optional YAML file and the environment.
    ///
    /// # Errors
    /// Returns an error if `path` is given but is not a file, or if any layer
    /// fails to parse.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            if !path.is_file() {
                bail!("config file does not exist: {}", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }

        Self::extract(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    fn extract(figment: Figment) -> Result<Self> {
        figment
            .extract()
            .map_err(|e| anyhow::anyhow!("failed to parse configuration: {e}"))
    }

    pub fn apply_cli_overrides(&mut self, cli: &CliOverrides) {
        if let Some(host) = &cli.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = cli.port {
            self.server.port = port;
        }
        let level = match cli.verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        };
        if let Some(level) = level {
            level.clone_into(&mut self.logging.level);
        }
    }

    /// Resolve `server.host` and `server.port` into a socket address.
    ///
    /// # Errors
    /// Returns an error if the host does not resolve.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let ServerConfig { host, port, .. } = &self.server;
        (host.as_str(), *port)
            .to_socket_addrs()
            .with_context(|| format!("invalid bind address '{host}:{port}'"))?
            .next()
            .with_context(|| format!("bind address '{host}:{port}' did not resolve"))
    }

    /// # Errors
    /// Returns an error if the bind address is invalid.
    pub fn server_options(&self) -> Result<ServerOptions> {
        Ok(ServerOptions {
            bind_addr: self.bind_addr()?,
            request_timeout: self.server.request_timeout,
            body_limit_bytes: self.server.body_limit_bytes,
        })
    }

    #[must_use]
    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            max_factorial_input: self.calculator.max_factorial_input,
        }
    }

    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize configuration")
    }
}

/// Serde support for `Duration` as humantime strings (`30s`, `1m 30s`).
mod humantime_serde {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer, de};

    #[allow(clippy::trivially_copy_pass_by_ref)] // serde requires &T signature
    pub fn serialize<S>(d: &Duration, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(&humantime::format_duration(*d).to_string())
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(d)?;
        humantime::parse_duration(&s).map_err(de::Error::custom)
    }
}
