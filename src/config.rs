// src/config.rs
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Persisted user settings. The dataset itself is compiled in, so the
/// only setting is an optional custom log file location.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub log_file_path: Option<String>,
}

impl Config {
    /// Loads the config from the platform config directory.
    ///
    /// A missing file is not an error; defaults are returned so first runs
    /// work without any setup step.
    pub fn load() -> Result<Self, AppError> {
        let config_path = Config::get_config_path();

        if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path)
        } else {
            Ok(Config::default())
        }
    }

    /// Loads configuration from a specific file path.
    pub fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves the config, creating the config directory if needed.
    pub fn save(&self) -> Result<(), AppError> {
        self.save_to_path(&Config::get_config_path())
    }

    /// Saves configuration to a specific file path.
    pub fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Invalid config path: {path}"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(content.as_bytes())?;

        Ok(())
    }

    /// Returns the platform-specific path for the config file.
    ///
    /// # Notes
    /// - Uses platform-specific config directory (e.g., ~/.config on Linux)
    /// - Falls back to current directory if config directory is unavailable
    pub fn get_config_path() -> String {
        dirs::config_dir()
            .unwrap_or_else(|| Path::new(".").to_path_buf())
            .join("mlb_teletext")
            .join("config.toml")
            .to_string_lossy()
            .to_string()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        dirs::config_dir()
            .unwrap_or_else(|| Path::new(".").to_path_buf())
            .join("mlb_teletext")
            .join("logs")
            .to_string_lossy()
            .to_string()
    }

    pub fn display() -> Result<(), AppError> {
        let config_path = Config::get_config_path();

        if Path::new(&config_path).exists() {
            let config = Config::load()?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("Log File:");
            match config.log_file_path {
                Some(path) => println!("{path}"),
                None => println!("(default location)"),
            }
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
        }

        Ok(())
    }
}
