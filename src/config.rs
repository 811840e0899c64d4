use crate::orbit::registry::{ColorToken, FeatureId, RingKind};
use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One configured feature shortcut. Entries without a ring are ignored,
/// which lets users park features in the file without showing them.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeatureConfig {
    pub ring: Option<RingKind>,
    pub id: FeatureId,
    pub title: Option<String>,
    pub short_label: Option<String>,
    pub description: Option<String>,
    pub angle: f64,
    pub color: Option<ColorToken>,
    #[serde(default)]
    pub active: bool,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub features: Vec<FeatureConfig>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
    #[error("Duplicate feature id in {ring} ring: {id}")]
    DuplicateId { ring: RingKind, id: FeatureId },
    #[error("Duplicate angle in {ring} ring: {angle}")]
    DuplicateAngle { ring: RingKind, angle: f64 },
}

pub fn get_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("io", "orbitdeck", "orbitdeck").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config() -> Result<Config, ConfigError> {
    let config_path = get_config_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(config::Environment::with_prefix("ORBITDECK"))
        .build()?;

    Ok(s.try_deserialize()?)
}

/// The rings shipped with the binary, used whenever no user config exists
/// or the user config fails to load.
pub fn default_config() -> Config {
    let built = config::Config::builder()
        .add_source(config::File::from_str(
            DEFAULT_CONFIG,
            config::FileFormat::Toml,
        ))
        .build()
        .and_then(config::Config::try_deserialize);

    match built {
        Ok(c) => c,
        Err(e) => {
            log::error!("Shipped default config failed to parse: {}", e);
            Config::default()
        }
    }
}

pub fn load_or_default() -> Config {
    match get_config_path() {
        Ok(path) if !path.exists() => return default_config(),
        _ => {}
    }

    match load_config() {
        Ok(c) => c,
        Err(e) => {
            log::error!("Failed to load config, using defaults: {}", e);
            default_config()
        }
    }
}

/// Materializes the shipped defaults on first run so users have a file to
/// edit. An existing file is left alone.
pub fn write_default_config() -> std::io::Result<std::path::PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    write_default_config_to(&path)?;
    Ok(path)
}

fn write_default_config_to(path: &std::path::Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(path, DEFAULT_CONFIG)?;
    }
    Ok(())
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

use crate::events::AppEvent;
use async_channel::Sender;

/// Watches the config file and emits [`AppEvent::ConfigReload`] on changes,
/// so the session can rebuild the feature registry without a restart.
pub async fn run_async_watcher(tx: Sender<AppEvent>) {
    let config_path = match get_config_path() {
        Ok(p) => p,
        Err(e) => {
            log::error!("Config watcher error: {}", e);
            return;
        }
    };
    let Some(config_dir) = config_path.parent().map(|p| p.to_path_buf()) else {
        return;
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return;
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {}", e);
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch config directory: {}", e);
        return;
    }

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                let meaningful_event = matches!(
                    event.kind,
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                );

                if meaningful_event
                    && event.paths.iter().any(|p| p == &config_path)
                    && tx.send(AppEvent::ConfigReload).await.is_err()
                {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}
