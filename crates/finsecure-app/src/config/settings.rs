//! Settings loading and backend address resolution

use std::path::{Path, PathBuf};

use finsecure_api::DEFAULT_BASE_URL;
use finsecure_core::prelude::*;

use super::types::Settings;

const CONFIG_DIR: &str = "finsecure";
const CONFIG_FILENAME: &str = "config.toml";

/// Environment variable overriding the configured backend address
pub const API_URL_ENV: &str = "FINSECURE_API_URL";

/// `<config_dir>/finsecure/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `path`.
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(path: &Path) -> Settings {
    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Settings::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            Settings::default()
        }
    }
}

/// Pick the backend address: CLI flag, then environment, then config file,
/// then the built-in default. Blank values are skipped and trailing slashes
/// stripped.
pub fn resolve_base_url(cli: Option<&str>, env: Option<&str>, settings: &Settings) -> String {
    let chosen = [cli, env, settings.api.base_url.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|url| !url.is_empty())
        .unwrap_or(DEFAULT_BASE_URL);
    chosen.trim_end_matches('/').to_string()
}
