use clap::Parser;
use std::path::PathBuf;

use crate::config::GeneratorMode;

/// Synthetic contact generator - HTTP API and single-page frontend
#[derive(Parser, Debug, Clone)]
#[command(name = "contactgen", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "CONTACTGEN_CONFIG", default_value = "contactgen.toml")]
    pub config: PathBuf,

    /// Server host address
    #[arg(long, env = "CONTACTGEN_HOST")]
    pub host: Option<String>,

    /// Server port
    #[arg(long, env = "CONTACTGEN_PORT")]
    pub port: Option<u16>,

    /// Which contact contract /api/contact exposes
    #[arg(long, env = "CONTACTGEN_MODE", value_enum)]
    pub mode: Option<GeneratorMode>,

    /// Log filter used when RUST_LOG is not set (e.g. "debug" or "contactgen=trace")
    #[arg(long, env = "CONTACTGEN_LOG_LEVEL", default_value = "contactgen=info,tower_http=info")]
    pub log_level: String,
}
