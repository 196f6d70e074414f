//! Door configuration parameters.
//!
//! Values can be loaded from a JSON document; anything loaded is
//! validated before use.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Per-door configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoorConfig {
    /// Human-readable label carried into log lines.
    pub label: String,
    /// Seconds the door may stay open after `unlock` (must be positive).
    pub timeout_secs: u32,
}

impl Default for DoorConfig {
    fn default() -> Self {
        Self {
            label: "door".into(),
            timeout_secs: 5,
        }
    }
}

impl DoorConfig {
    /// Reject values the door cannot run with.  Never clamps.
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(Error::Config("timeout_secs must be positive"));
        }
        if self.label.trim().is_empty() {
            return Err(Error::Config("label must not be empty"));
        }
        Ok(())
    }

    /// Parse and validate a JSON document.  Missing fields take defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(text).map_err(|_| Error::Config("malformed JSON"))?;
        config.validate()?;
        Ok(config)
    }
}
