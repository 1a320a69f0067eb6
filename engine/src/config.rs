//! Configuration types for the engine

use crate::core::coordinates::RecenterBounds;
use crate::core::entity::LayerMask;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Errors raised while loading or validating configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Static configuration for the recenter controller
///
/// Loaded once; the controller never reconfigures itself at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecenterConfig {
    /// Bound the tracked objects are expected to stay within
    pub bounds: RecenterBounds,
    /// Layers participating in the boundary test
    pub layer_mask: LayerMask,
    /// Ticks between shift cycles
    pub interval: u32,
}

impl Default for RecenterConfig {
    fn default() -> Self {
        Self {
            bounds: RecenterBounds::new(10_000.0, 10_000.0),
            layer_mask: LayerMask::ALL,
            interval: 60,
        }
    }
}

impl RecenterConfig {
    /// Load and validate a configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(&path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        debug!(path = ?path.as_ref(), "Loaded recenter configuration");
        Ok(config)
    }

    /// Check that the configuration is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.bounds.width > 0.0) || !self.bounds.width.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "bound width must be a positive finite number, got {}",
                self.bounds.width
            )));
        }
        if !(self.bounds.depth > 0.0) || !self.bounds.depth.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "bound depth must be a positive finite number, got {}",
                self.bounds.depth
            )));
        }
        if self.interval == 0 {
            return Err(ConfigError::Invalid(
                "interval must be at least one tick".to_string(),
            ));
        }
        Ok(())
    }
}
