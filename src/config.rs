use log::error;
use serde::Deserialize;
use std::env;

const CONFIG_PATH_ENV: &str = "FLATSHOW_CONFIG";

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
    pub bind_address: String,
    /// Path of the building model the 3D viewer tries to load. When the
    /// file is missing the scene falls back to placeholder geometry.
    pub building_model_path: String,
    pub static_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_address: "127.0.0.1:3000".to_string(),
            building_model_path: "static/models/commercial-office-building.glb".to_string(),
            static_dir: "static".to_string(),
        }
    }
}

/// Reads the TOML config pointed at by FLATSHOW_CONFIG, or falls back to
/// defaults when the variable is unset. A set-but-unreadable config is a
/// startup failure, not something to silently paper over.
pub fn read_config() -> Config {
    match env::var(CONFIG_PATH_ENV) {
        Ok(path) => std::fs::read(&path)
            .map_err(|e| e.to_string())
            .and_then(|bytes| toml::from_slice(&bytes).map_err(|e| e.to_string()))
            .unwrap_or_else(|err| {
                error!("failed to read config from {path}: {err}");
                std::process::exit(1);
            }),
        Err(_) => Config::default(),
    }
}
