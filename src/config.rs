//! Plugin configuration.
//!
//! [`InkConfig`] is plain serde data loaded from TOML. Every key is optional;
//! missing keys take the defaults below.
//!
//! ```toml
//! method_channel = "sheetshow/ink"
//! event_channel = "sheetshow/ink/events"
//! subclass_id = 1001
//! pressure_max = 1024.0
//! ```
//!
//! `pressure_max` is the divisor used to normalize raw pen pressure. Pens that
//! report a different maximum will produce values outside `[0, 1]` unless this
//! is set to match them.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default request/response channel name.
pub const DEFAULT_METHOD_CHANNEL: &str = "sheetshow/ink";
/// Default event stream channel name.
pub const DEFAULT_EVENT_CHANNEL: &str = "sheetshow/ink/events";
/// Default subclass id used with `SetWindowSubclass`.
pub const DEFAULT_SUBCLASS_ID: usize = 1001;
/// Historical raw pressure maximum of Windows pen digitizers.
pub const DEFAULT_PRESSURE_MAX: f64 = 1024.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InkConfig {
    /// Name of the request/response channel.
    pub method_channel: String,
    /// Name of the event stream channel.
    pub event_channel: String,
    /// Subclass id; must be unique per window among subclasses sharing our callback.
    pub subclass_id: usize,
    /// Raw pressure value that maps to `1.0`.
    pub pressure_max: f64,
}

impl Default for InkConfig {
    fn default() -> Self {
        Self {
            method_channel: DEFAULT_METHOD_CHANNEL.to_string(),
            event_channel: DEFAULT_EVENT_CHANNEL.to_string(),
            subclass_id: DEFAULT_SUBCLASS_ID,
            pressure_max: DEFAULT_PRESSURE_MAX,
        }
    }
}

impl InkConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: InkConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("loaded ink config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.pressure_max.is_finite() || self.pressure_max <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "pressure_max must be a positive number, got {}",
                self.pressure_max
            )));
        }
        if self.method_channel.is_empty() || self.event_channel.is_empty() {
            return Err(ConfigError::Invalid("channel names must not be empty".into()));
        }
        Ok(())
    }
}
