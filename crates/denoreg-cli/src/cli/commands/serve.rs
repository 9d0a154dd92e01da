//! `denoreg serve` – run the HTTP redirector.

use anyhow::Result;
use denoreg_core::config::RegistryConfig;
use denoreg_core::legacy::LegacyDatabase;
use denoreg_core::provider::ProviderRegistry;
use denoreg_core::{server, Resolver};
use std::path::PathBuf;

/// Command-line values that take precedence over config file and environment.
#[derive(Debug, Default)]
pub struct ServeOverrides {
    pub port: Option<u16>,
    pub bind: Option<String>,
    pub database: Option<PathBuf>,
}

impl ServeOverrides {
    pub fn apply(self, mut cfg: RegistryConfig) -> RegistryConfig {
        if let Some(port) = self.port {
            cfg.port = port;
        }
        if let Some(bind) = self.bind {
            cfg.bind = bind;
        }
        if self.database.is_some() {
            cfg.database = self.database;
        }
        cfg
    }
}

pub async fn run_serve(cfg: RegistryConfig) -> Result<()> {
    let legacy = LegacyDatabase::load_or_bundled(cfg.database.as_deref())?;
    let providers = ProviderRegistry::builtin();
    tracing::info!(
        "serving {} provider(s), {} legacy package(s)",
        providers.len(),
        legacy.len()
    );
    server::run(&cfg, Resolver::new(providers, legacy)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_win_over_config() {
        let cfg = ServeOverrides {
            port: Some(9999),
            bind: Some("127.0.0.1".to_string()),
            database: Some(PathBuf::from("/tmp/db.json")),
        }
        .apply(RegistryConfig::default());
        assert_eq!(cfg.port, 9999);
        assert_eq!(cfg.bind, "127.0.0.1");
        assert_eq!(cfg.database.as_deref(), Some(std::path::Path::new("/tmp/db.json")));
    }

    #[test]
    fn empty_overrides_keep_config() {
        let mut base = RegistryConfig::default();
        base.port = 3000;
        base.database = Some(PathBuf::from("/srv/db.json"));
        let cfg = ServeOverrides::default().apply(base.clone());
        assert_eq!(cfg, base);
    }
}
