//! Configuration for the editor, generator, and scatter tuning.
//!
//! Supports YAML configuration files with sensible defaults.

use crate::cell::CellState;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub editing: EditingConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub scatter: ScatterConfig,
}

/// Editing grid dimensions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of grid columns
    pub cols: usize,
    /// Number of grid rows
    pub rows: usize,
}

/// Interactive editing behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditingConfig {
    /// Cell state a fresh organism's anchor starts with
    pub default_state: CellState,
}

/// Random organism generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Fixed seed for reproducible generation; random when absent
    pub seed: Option<u64>,
    /// Growth attempts per generated body
    pub growth_attempts: usize,
    /// Body radius cap as a fraction of the host grid's half-extent
    pub max_body_radius_frac: f32,
}

/// Bulk placement into a target environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScatterConfig {
    /// Edge-avoidance margin, in target grid cells
    pub margin: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            editing: EditingConfig::default(),
            generator: GeneratorConfig::default(),
            scatter: ScatterConfig::default(),
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { cols: 15, rows: 15 }
    }
}

impl Default for EditingConfig {
    fn default() -> Self {
        Self {
            default_state: CellState::Mouth,
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            growth_attempts: 12,
            max_body_radius_frac: 0.8,
        }
    }
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self { margin: 8 }
    }
}

impl EditorConfig {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: EditorConfig = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.grid.cols == 0 || self.grid.cols > 255 {
            return Err("grid cols must be between 1 and 255".to_string());
        }
        if self.grid.rows == 0 || self.grid.rows > 255 {
            return Err("grid rows must be between 1 and 255".to_string());
        }
        if self.generator.growth_attempts > 1024 {
            return Err("growth_attempts cannot exceed 1024".to_string());
        }
        if self.generator.max_body_radius_frac <= 0.0 || self.generator.max_body_radius_frac > 1.0 {
            return Err("max_body_radius_frac must be in (0, 1]".to_string());
        }
        Ok(())
    }
}

/// Errors that can occur while loading or saving configuration
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_yaml::Error),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Parse(e) => write!(f, "Parse error: {}", e),
            Self::Invalid(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Parse(e)
    }
}

impl From<String> for ConfigError {
    fn from(msg: String) -> Self {
        Self::Invalid(msg)
    }
}
