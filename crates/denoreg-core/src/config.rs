use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Port used when neither the config file, `PORT`, nor the CLI set one.
pub const DEFAULT_PORT: u16 = 8088;

/// Where browsers hitting `/` are sent.
pub const DEFAULT_HOMEPAGE: &str = "https://github.com/axetroy/deno_registry";

/// Upstream fetch limits (optional `[fetch]` section in config.toml).
/// Keys missing from the section keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Seconds allowed for the TCP/TLS connect to the hosting provider.
    pub connect_timeout_secs: u64,
    /// Seconds allowed for the whole upstream transfer (0 = no limit).
    pub timeout_secs: u64,
    /// Maximum redirects followed upstream.
    pub max_redirections: u32,
    /// Largest upstream body relayed, in bytes (0 = no limit). The body is
    /// held in memory until the transfer completes.
    pub max_body_bytes: u64,
}

/// 64 MiB.
pub const DEFAULT_MAX_BODY_BYTES: u64 = 64 * 1024 * 1024;

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 60,
            max_redirections: 10,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

/// Global configuration loaded from `~/.config/denoreg/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Interface to bind; all interfaces by default.
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Redirect target for browsers requesting `/`.
    #[serde(default = "default_homepage")]
    pub homepage: String,
    /// Legacy package dataset (JSON). The bundled dataset is used when unset.
    #[serde(default)]
    pub database: Option<PathBuf>,
    #[serde(default)]
    pub fetch: FetchConfig,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_bind() -> String {
    "0.0.0.0".to_string()
}

fn default_homepage() -> String {
    DEFAULT_HOMEPAGE.to_string()
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind: default_bind(),
            homepage: default_homepage(),
            database: None,
            fetch: FetchConfig::default(),
        }
    }
}

impl RegistryConfig {
    /// Applies `PORT` from the environment, if set.
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_port_var(std::env::var("PORT").ok().as_deref())
    }

    fn apply_port_var(&mut self, value: Option<&str>) -> Result<()> {
        if let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) {
            self.port = raw
                .parse()
                .with_context(|| format!("invalid PORT value: {raw}"))?;
        }
        Ok(())
    }

    /// `bind:port` for the listener.
    pub fn listen_addr(&self) -> String {
        if self.bind.contains(':') && !self.bind.starts_with('[') {
            format!("[{}]:{}", self.bind, self.port)
        } else {
            format!("{}:{}", self.bind, self.port)
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("denoreg")?;
    Ok(xdg_dirs.get_config_home().join("denoreg").join("config.toml"))
}

/// Load configuration from the default path; defaults when the file does not exist.
pub fn load() -> Result<RegistryConfig> {
    let path = config_path()?;
    load_from(&path)
}

pub fn load_from(path: &Path) -> Result<RegistryConfig> {
    if !path.exists() {
        tracing::debug!("no config at {}, using defaults", path.display());
        return Ok(RegistryConfig::default());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: RegistryConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
