use quadratic_core::constraint::{Constrained, NonNegative};
use thiserror::Error;

/// Configuration for the quadratic solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawConfig", into = "RawConfig")
)]
pub struct Config {
    precision: Constrained<i32, NonNegative>,
}

/// Errors that can occur when validating a solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("precision must be an integer greater or equal to zero, got {precision}")]
    NegativePrecision { precision: i32 },
}

impl Config {
    /// Number of decimal places used when no precision is given.
    pub const DEFAULT_PRECISION: i32 = 2;

    /// Creates a new config rounding roots to `precision` decimal places.
    ///
    /// # Errors
    ///
    /// Returns an error if `precision` is negative.
    pub fn new(precision: i32) -> Result<Self, ConfigError> {
        let precision = NonNegative::new(precision)
            .map_err(|_| ConfigError::NegativePrecision { precision })?;

        Ok(Self { precision })
    }

    /// Returns the number of decimal places roots are rounded to.
    #[must_use]
    pub fn precision(&self) -> i32 {
        *self.precision.as_ref()
    }
}

impl Default for Config {
    fn default() -> Self {
        // Known-good value, unwrap is safe
        Self::new(Self::DEFAULT_PRECISION).unwrap()
    }
}

#[cfg(feature = "serde-derive")]
#[derive(Clone, Copy, serde::Serialize, serde::Deserialize)]
struct RawConfig {
    #[serde(default = "default_precision")]
    precision: i32,
}

#[cfg(feature = "serde-derive")]
fn default_precision() -> i32 {
    Config::DEFAULT_PRECISION
}

#[cfg(feature = "serde-derive")]
impl TryFrom<RawConfig> for Config {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        Self::new(raw.precision)
    }
}

#[cfg(feature = "serde-derive")]
impl From<Config> for RawConfig {
    fn from(config: Config) -> Self {
        Self {
            precision: config.precision(),
        }
    }
}
