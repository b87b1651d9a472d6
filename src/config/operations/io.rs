use crate::config::types::{ConfigError, SliverhandConfig};
use crate::paths::PATH_SLIVERHAND;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::warn;

pub fn load_cfg() -> SliverhandConfig {
    load_cfg_from(&PATH_SLIVERHAND.join("settings.json"))
}

/// Defaults are returned when the file is missing or unreadable
pub fn load_cfg_from(path: &Path) -> SliverhandConfig {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(_) => return SliverhandConfig::default(),
    };

    match serde_json::from_reader::<_, SliverhandConfig>(BufReader::new(file)) {
        Ok(config) => config,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "invalid settings file, using defaults");
            SliverhandConfig::default()
        }
    }
}

pub fn save_cfg(config: &SliverhandConfig) -> Result<(), ConfigError> {
    save_cfg_to(config, &PATH_SLIVERHAND.join("settings.json"))
}

pub fn save_cfg_to(config: &SliverhandConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, config)?;
    Ok(())
}
