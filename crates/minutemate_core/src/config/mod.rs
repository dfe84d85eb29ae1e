//! Extraction configuration.
//!
//! # Responsibility
//! - Carry tunables for the extractor with safe defaults.
//! - Load overrides from the process environment.
//!
//! # Invariants
//! - `max_items` is always within `1..=MAX_ACTION_ITEMS` after normalization.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Hard upper bound on extracted items per call.
pub const MAX_ACTION_ITEMS: usize = 6;
/// Environment variable overriding [`ExtractorConfig::max_items`].
pub const MAX_ITEMS_ENV: &str = "MINUTEMATE_MAX_ITEMS";

/// Configuration-layer error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `MINUTEMATE_MAX_ITEMS` is set but not an unsigned integer.
    InvalidMaxItems(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMaxItems(value) => write!(
                f,
                "invalid {MAX_ITEMS_ENV} `{value}`; expected an integer in 1..={MAX_ACTION_ITEMS}"
            ),
        }
    }
}

impl Error for ConfigError {}

/// Extractor tunables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Maximum number of items kept, first matches win.
    pub max_items: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_items: MAX_ACTION_ITEMS,
        }
    }
}

impl ExtractorConfig {
    /// Creates a config with a normalized item limit.
    pub fn with_max_items(max_items: Option<usize>) -> Self {
        Self {
            max_items: normalize_max_items(max_items),
        }
    }

    /// Loads config from `MINUTEMATE_MAX_ITEMS`, falling back to defaults.
    ///
    /// # Errors
    /// - Returns [`ConfigError::InvalidMaxItems`] when the variable is not numeric.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_value(std::env::var(MAX_ITEMS_ENV).ok().as_deref())
    }

    fn from_env_value(raw: Option<&str>) -> Result<Self, ConfigError> {
        let Some(raw) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
            return Ok(Self::default());
        };
        let parsed = raw
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidMaxItems(raw.to_string()))?;
        Ok(Self::with_max_items(Some(parsed)))
    }
}

/// Normalizes a requested item limit.
///
/// - `None` or `Some(0)` -> default
/// - values above [`MAX_ACTION_ITEMS`] -> clamped
pub fn normalize_max_items(max_items: Option<usize>) -> usize {
    match max_items {
        Some(0) | None => MAX_ACTION_ITEMS,
        Some(value) if value > MAX_ACTION_ITEMS => MAX_ACTION_ITEMS,
        Some(value) => value,
    }
}
