use config::{Config, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info};

pub mod pools;
pub mod validator;
pub mod watcher;

pub use pools::{DataPools, PoolOverride};

use crate::cli::Cli;
use crate::domain::Locale;

#[derive(Debug, Default, Deserialize, Serialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub generator: GeneratorSettings,
    #[serde(default)]
    pub pools: DataPools,
    #[serde(default)]
    pub rate_limit: Option<RateLimitConfig>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// Which contract `/api/contact` serves. Only one is active per process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorMode {
    /// Single contact drawn from the fixed value pools
    #[default]
    Pools,
    /// Locale-aware batch of contacts from the faker library
    Faker,
}

impl GeneratorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeneratorMode::Pools => "pools",
            GeneratorMode::Faker => "faker",
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize, Clone)]
pub struct GeneratorSettings {
    #[serde(default)]
    pub mode: GeneratorMode,
    /// Locale used by faker mode when the request does not name one
    #[serde(default)]
    pub default_locale: Locale,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RateLimitConfig {
    pub enabled: bool,
    pub requests_per_second: u32,
    pub burst_size: u32,
}

impl Settings {
    pub fn new() -> Result<Self, anyhow::Error> {
        Self::from_root(".")
    }

    /// Create settings from CLI arguments (includes config file and CLI overrides)
    pub fn new_with_cli(cli: &Cli) -> Result<Self, anyhow::Error> {
        let root = config_root(&cli.config);

        let s = Config::builder()
            .add_source(File::from(cli.config.clone()).required(false))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .build()?;

        let mut settings: Settings = s.try_deserialize()?;

        // CLI flags and their CONTACTGEN_* env vars win over the config file
        settings.apply_cli_overrides(cli);

        settings.load_pool_overrides(&root)?;
        settings.validate()?;

        Ok(settings)
    }

    /// Load `<root>/contactgen.{toml,yaml,json}` plus `<root>/config/pools/*`.
    pub fn from_root(root: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
        let root = root.as_ref();
        let config_path = root.join("contactgen");
        let s = Config::builder()
            .add_source(File::from(config_path).required(false))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .build()?;

        let mut settings: Settings = s.try_deserialize()?;

        settings.load_pool_overrides(root)?;
        settings.validate()?;

        Ok(settings)
    }

    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(host) = &cli.host {
            self.server.host = host.clone();
        }
        if let Some(port) = cli.port {
            self.server.port = port;
        }
        if let Some(mode) = cli.mode {
            self.generator.mode = mode;
        }
    }

    fn load_pool_overrides(&mut self, root: &Path) -> Result<(), anyhow::Error> {
        for patch in pools::load_overrides_from_dir(&pools_dir(root))? {
            self.pools.apply(patch);
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        validator::ConfigValidator::validate(self).map_err(|errors| {
            let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            anyhow::anyhow!(
                "Configuration validation failed:\n{}",
                error_messages.join("\n")
            )
        })
    }
}

/// Rebuild settings from the CLI's config file and swap them in.
///
/// On failure the current settings stay in place and the error is returned
/// after being logged. Blocks on the write lock, so call it from the watcher
/// thread rather than from async code.
pub fn reload(settings: &Arc<RwLock<Settings>>, cli: &Cli) -> Result<(), anyhow::Error> {
    match Settings::new_with_cli(cli) {
        Ok(new_settings) => {
            *settings.blocking_write() = new_settings;
            info!("Configuration reloaded successfully");
            Ok(())
        }
        Err(e) => {
            error!("Failed to reload configuration, keeping previous: {:#}", e);
            Err(e)
        }
    }
}

/// Directory the config file lives in; override files are resolved against it.
pub fn config_root(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

pub fn pools_dir(root: &Path) -> PathBuf {
    root.join("config").join("pools")
}
