//! Process-wide capture configuration

use super::MAX_DEPTH;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable that switches capture off (`0`, `false`, `off`, `no`)
pub const ENV_CAPTURE: &str = "CRYYPT_ERRORS_CAPTURE";

/// Environment variable overriding the captured depth
pub const ENV_MAX_DEPTH: &str = "CRYYPT_ERRORS_MAX_DEPTH";

static CONFIG: OnceCell<CaptureConfig> = OnceCell::new();

/// Capture settings shared by every `*_with_path` constructor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Capture call paths at all
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Maximum captured entries, `1..=MAX_DEPTH`
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

fn default_enabled() -> bool {
    true
}

fn default_max_depth() -> usize {
    MAX_DEPTH
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            max_depth: default_max_depth(),
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A configuration is already active for this process
    #[error("capture configuration is already installed")]
    AlreadyConfigured,

    /// Depth outside `1..=MAX_DEPTH`
    #[error("max_depth must be between 1 and {max}, got {got}")]
    InvalidMaxDepth {
        /// Requested depth
        got: usize,
        /// Largest accepted depth
        max: usize,
    },
}

impl CaptureConfig {
    /// Load from `CRYYPT_ERRORS_CAPTURE` and `CRYYPT_ERRORS_MAX_DEPTH`.
    ///
    /// Unset variables keep their defaults; unusable values are logged and
    /// ignored.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`CaptureConfig::from_env`] with a custom variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_CAPTURE) {
            match raw.trim().to_ascii_lowercase().as_str() {
                "0" | "false" | "off" | "no" => config.enabled = false,
                "1" | "true" | "on" | "yes" | "" => config.enabled = true,
                other => tracing::warn!(
                    variable = ENV_CAPTURE,
                    value = other,
                    "Unrecognised capture switch, keeping default"
                ),
            }
        }

        if let Some(raw) = lookup(ENV_MAX_DEPTH) {
            match raw.trim().parse::<usize>() {
                Ok(depth) if (1..=MAX_DEPTH).contains(&depth) => config.max_depth = depth,
                _ => tracing::warn!(
                    variable = ENV_MAX_DEPTH,
                    value = %raw,
                    max = MAX_DEPTH,
                    "Unusable capture depth, keeping default"
                ),
            }
        }

        config
    }

    /// Check the depth bound
    pub fn validate(&self) -> Result<(), ConfigError> {
        if (1..=MAX_DEPTH).contains(&self.max_depth) {
            Ok(())
        } else {
            Err(ConfigError::InvalidMaxDepth {
                got: self.max_depth,
                max: MAX_DEPTH,
            })
        }
    }
}

/// Install `config` for the rest of the process.
///
/// Fails if a configuration is already active, including one loaded from the
/// environment by an earlier capture.
pub fn configure(config: CaptureConfig) -> Result<(), ConfigError> {
    config.validate()?;
    CONFIG
        .set(config)
        .map_err(|_| ConfigError::AlreadyConfigured)?;
    tracing::debug!(
        enabled = config.enabled,
        max_depth = config.max_depth,
        "Capture configured"
    );
    Ok(())
}

/// Active configuration, loaded from the environment on first use
pub fn capture_config() -> &'static CaptureConfig {
    CONFIG.get_or_init(CaptureConfig::from_env)
}
