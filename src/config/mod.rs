use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;

/// User preferences for rendering. Scheduling rules are not configurable;
/// they live in [`defaults`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,
    #[serde(default = "default_day_column_width")]
    pub day_column_width: f64,
    #[serde(default = "default_slot_column_width")]
    pub slot_column_width: f64,
    #[serde(default = "default_show_gaps")]
    pub show_gaps: bool,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

/// Keys a complete config file is expected to carry.
const CONFIG_FIELDS: [&str; 5] = [
    "sheet_name",
    "day_column_width",
    "slot_column_width",
    "show_gaps",
    "separator_char",
];

fn default_sheet_name() -> String {
    "Weekly Schedule".to_string()
}
fn default_day_column_width() -> f64 {
    15.0
}
fn default_slot_column_width() -> f64 {
    20.0
}
fn default_show_gaps() -> bool {
    true
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet_name: default_sheet_name(),
            day_column_width: default_day_column_width(),
            slot_column_width: default_slot_column_width(),
            show_gaps: default_show_gaps(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".chronosync")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("chronosync.conf")
    }

    /// Load configuration from `path` (or the standard location), falling
    /// back to defaults when the file does not exist.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)
    }

    /// Write the configuration as YAML, creating parent directories.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|_| AppError::ConfigSave)?;
        }
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)
    }

    /// List the known keys absent from the config file at `path`.
    pub fn missing_fields(path: &Path) -> AppResult<Vec<&'static str>> {
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let value: serde_yaml::Value = serde_yaml::from_str(&content)?;

        let mapping = value
            .as_mapping()
            .ok_or_else(|| AppError::Config("config file is not a YAML mapping".into()))?;

        Ok(CONFIG_FIELDS
            .iter()
            .copied()
            .filter(|key| !mapping.contains_key(*key))
            .collect())
    }
}
