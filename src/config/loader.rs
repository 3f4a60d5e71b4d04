//! Config file loading
//!
//! The config file is optional; a missing file is the normal case and a
//! malformed one falls back to defaults with a logged warning, so startup
//! never fails on configuration.

use std::fs;
use std::path::{Path, PathBuf};

use super::types::Config;

/// Load the user configuration, if any
pub fn load() -> Config {
    match config_path() {
        Some(path) => load_from(&path),
        None => Config::default(),
    }
}

/// Platform config file location: `<config-dir>/vibes/config.toml`
fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("vibes").join("config.toml"))
}

fn load_from(path: &Path) -> Config {
    let Ok(text) = fs::read_to_string(path) else {
        return Config::default();
    };

    match toml::from_str(&text) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring malformed config {}: {}", path.display(), e);
            Config::default()
        }
    }
}
