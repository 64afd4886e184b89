use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use refresh_controller::RefreshConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::logging::LogDestination;

pub const CONFIG_FILENAME: &str = "refresh_demo.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("invalid config value: {0}")]
    Invalid(&'static str),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub item_height: f32,
    pub header_height: f32,
    pub footer_height: f32,
    pub initial_items: usize,
    pub page_size: usize,
    /// Simulated duration of a refresh or load-more request.
    pub load_delay_ms: u64,
    pub frame_interval_ms: u64,
    /// Frames an ease-in padding animation takes to complete.
    pub animation_frames: u32,
    pub log_destination: LogDestination,
    pub verbose: bool,
    pub refresh: RefreshConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            viewport_width: 375.0,
            viewport_height: 667.0,
            item_height: 120.0,
            header_height: 60.0,
            footer_height: 60.0,
            initial_items: 10,
            page_size: 10,
            load_delay_ms: 2000,
            frame_interval_ms: 16,
            animation_frames: 12,
            log_destination: LogDestination::Terminal,
            verbose: false,
            refresh: RefreshConfig::default(),
        }
    }
}

impl DemoConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.viewport_width <= 0.0 || self.viewport_height <= 0.0 {
            return Err(ConfigError::Invalid("viewport must have a positive size"));
        }
        if self.item_height <= 0.0 {
            return Err(ConfigError::Invalid("item_height must be positive"));
        }
        if self.header_height < 0.0 || self.footer_height < 0.0 {
            return Err(ConfigError::Invalid("sentinel heights must not be negative"));
        }
        if self.page_size == 0 {
            return Err(ConfigError::Invalid("page_size must be at least 1"));
        }
        Ok(())
    }
}

/// Loads the demo config from `path`. A missing file yields the defaults.
pub fn load(path: &Path) -> Result<DemoConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(DemoConfig::default()),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let config: DemoConfig = ron::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load(&temp.path().join(CONFIG_FILENAME)).unwrap();
        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn partial_file_overrides_selected_fields() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(
            &path,
            "(load_delay_ms: 50, log_destination: Both, refresh: (rest_distance: 8.0))",
        )
        .unwrap();

        let config = load(&path).unwrap();
        assert_eq!(config.load_delay_ms, 50);
        assert_eq!(config.log_destination, LogDestination::Both);
        assert_eq!(config.refresh.rest_distance, 8.0);
        assert!(config.refresh.animate_padding);
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(&path, "(load_delay_ms: \"soon\")").unwrap();

        assert!(matches!(load(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(&path, "(page_size: 0)").unwrap();

        assert!(matches!(load(&path), Err(ConfigError::Invalid(_))));
    }
}
