//! Engine configuration
//!
//! ```toml
//! # prune.toml
//! max_cascade_depth = 128
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::{PruneError, Result};

/// Default bound on how many ancestors one removal may cascade through
pub const DEFAULT_MAX_CASCADE_DEPTH: usize = 256;

/// Tunables for the removal engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Cascade steps allowed before a removal is aborted
    pub max_cascade_depth: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_cascade_depth: DEFAULT_MAX_CASCADE_DEPTH,
        }
    }
}

impl EngineConfig {
    /// Parse a TOML document; missing keys take their defaults
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` for malformed TOML, unknown keys or a zero
    /// cascade depth.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(s).map_err(|e| PruneError::InvalidConfig {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// `Io` if the file cannot be read, otherwise as [`EngineConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    fn validate(&self) -> Result<()> {
        if self.max_cascade_depth == 0 {
            return Err(PruneError::InvalidConfig {
                reason: "max_cascade_depth must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
