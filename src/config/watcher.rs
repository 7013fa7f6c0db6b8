use anyhow::Result;
use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::PathBuf;
use std::sync::mpsc::channel;
use std::time::Duration;
use tracing::{error, info, warn};

/// Watches the config file and the pool override directory.
///
/// The underlying watcher stops when this value is dropped, so keep it alive
/// for as long as reloads are wanted.
pub struct ConfigWatcher {
    _watcher: RecommendedWatcher,
    watched: Vec<PathBuf>,
}

impl ConfigWatcher {
    pub fn new<F>(paths: Vec<PathBuf>, on_change: F) -> Result<Self>
    where
        F: Fn() + Send + Sync + 'static,
    {
        let (tx, rx) = channel();

        let mut watcher = RecommendedWatcher::new(tx, Config::default())?;

        let mut watched = Vec::new();
        for path in paths {
            if path.exists() {
                watcher.watch(&path, RecursiveMode::Recursive)?;
                info!("Watching configuration path: {}", path.display());
                watched.push(path);
            } else {
                warn!("Configuration path does not exist, skipping: {}", path.display());
            }
        }

        std::thread::spawn(move || loop {
            match rx.recv() {
                Ok(Ok(_event)) => {
                    // Editors emit bursts of events for one save
                    std::thread::sleep(Duration::from_millis(100));
                    while rx.try_recv().is_ok() {}
                    info!("Configuration change detected, reloading...");
                    on_change();
                }
                Ok(Err(e)) => error!("Watch error: {:?}", e),
                Err(e) => {
                    error!("Watch channel error: {:?}", e);
                    break;
                }
            }
        });

        Ok(Self {
            _watcher: watcher,
            watched,
        })
    }

    /// Paths that existed at start-up and are being watched.
    pub fn watched(&self) -> &[PathBuf] {
        &self.watched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_paths_are_skipped() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let config_file = dir.path().join("contactgen.toml");
        std::fs::write(&config_file, "[server]\nhost = \"127.0.0.1\"\nport = 3000\n")?;

        let watcher = ConfigWatcher::new(
            vec![config_file.clone(), dir.path().join("config/pools")],
            || {},
        )?;
        assert_eq!(watcher.watched(), &[config_file]);
        Ok(())
    }
}
