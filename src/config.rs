//! Driver configuration.
//!
//! Loaded from YAML, every field optional, defaults matching the reference
//! setup (a 120 x 120 grid stepped every 100 ms).

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::patterns::Pattern;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of grid rows
    pub rows: usize,
    /// Number of grid columns
    pub cols: usize,
    /// Minimum time between two generations, in milliseconds
    pub interval_ms: u64,
    /// Display units per cell, used to map pointer positions to cells
    pub cell_size: u32,
    /// Whether the simulation starts running instead of paused
    pub start_running: bool,
    /// Name of a seed pattern placed at the center of the grid
    pub pattern: Option<String>,
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: 120,
            cols: 120,
            interval_ms: 100,
            cell_size: 10,
            start_running: false,
            pattern: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(Error::Config(format!(
                "grid dimensions must be positive, got {} x {}",
                self.rows, self.cols
            )));
        }
        if self.interval_ms == 0 {
            return Err(Error::Config("interval_ms must be > 0".to_string()));
        }
        if self.cell_size == 0 {
            return Err(Error::Config("cell_size must be > 0".to_string()));
        }
        if let Some(name) = &self.pattern {
            if Pattern::by_name(name).is_none() {
                return Err(Error::Config(format!("unknown pattern '{}'", name)));
            }
        }
        Ok(())
    }
}
