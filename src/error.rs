//! Errors raised at the configuration boundary.
//!
//! Kernels and instructions never return errors: a violated precondition
//! there is a bug and panics. Only loading and validating configuration can
//! fail in a way the caller is expected to handle.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("lane width {0} is not a positive power of two")]
    InvalidWidth(usize),
    #[error("lane width {0} is not one of the supported widths")]
    UnsupportedWidth(usize),
    #[error("element_count must be greater than zero")]
    EmptyInput,
    #[error("value_range {0} must be finite and at most half of f32::MAX")]
    InvalidValueRange(f32),
    #[error("sum_tolerance {0} must be finite and non-negative")]
    InvalidSumTolerance(f32),
}
