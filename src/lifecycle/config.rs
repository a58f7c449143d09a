//! Runtime configuration.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `DISH_ORDERS_BUFFER_SIZE` | `32` | Channel capacity of each resource actor |

use thiserror::Error;

pub const BUFFER_SIZE_VAR: &str = "DISH_ORDERS_BUFFER_SIZE";
pub const DEFAULT_BUFFER_SIZE: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?} ({reason})")]
    InvalidEnvVar {
        var: &'static str,
        value: String,
        reason: &'static str,
    },
}

impl ConfigError {
    fn invalid_env_var(var: &'static str, value: impl Into<String>, reason: &'static str) -> Self {
        ConfigError::InvalidEnvVar {
            var,
            value: value.into(),
            reason,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemConfig {
    pub buffer_size: usize,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl SystemConfig {
    /// Reads overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads overrides through `lookup`; unset variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(raw) = lookup(BUFFER_SIZE_VAR) {
            let buffer_size = raw.trim().parse::<usize>().map_err(|_| {
                ConfigError::invalid_env_var(BUFFER_SIZE_VAR, raw.as_str(), "expected a positive integer")
            })?;
            if buffer_size == 0 {
                return Err(ConfigError::invalid_env_var(
                    BUFFER_SIZE_VAR,
                    raw,
                    "must be greater than 0",
                ));
            }
            config.buffer_size = buffer_size;
        }
        Ok(config)
    }
}
