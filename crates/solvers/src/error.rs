use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur when configuring or querying a solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid precision: {0}")]
    InvalidPrecision(#[from] ConfigError),

    #[error("equation has not been solved yet")]
    NotSolved,
}
