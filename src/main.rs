use clap::Parser;
use contactgen::adapters::health_handler::HealthHandler;
use contactgen::adapters::metrics_handler::MetricsCollector;
use contactgen::cli::Cli;
use contactgen::config::{self, watcher::ConfigWatcher, Settings};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --log-level
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let settings = Settings::new_with_cli(&cli)?;
    let host = settings.server.host.clone();
    let port = settings.server.port;

    info!(
        "Starting contact generator on {}:{} (mode: {})",
        host,
        port,
        settings.generator.mode.as_str()
    );

    // Wrap settings in Arc<RwLock> for live reload
    let settings = Arc::new(RwLock::new(settings));

    let settings_for_watcher = settings.clone();
    let cli_for_watcher = cli.clone();
    let root = config::config_root(&cli.config);
    let _watcher = ConfigWatcher::new(
        vec![cli.config.clone(), config::pools_dir(&root)],
        move || {
            // Already logged; the previous settings stay active
            let _ = config::reload(&settings_for_watcher, &cli_for_watcher);
        },
    )?;

    let health_handler = Arc::new(HealthHandler::new(settings.clone()));
    let metrics = Arc::new(MetricsCollector::new()?);

    let app = contactgen::create_app(settings, health_handler, metrics).await;

    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
