// src/config.rs

//! Configuration for the kernel driver.
//!
//! Settings are deserialized from a JSON file whose path is given by the
//! `LANESIM_CONFIG` environment variable. Every field has a default, so a
//! partial file (or no variable at all) is valid. A file that is named but
//! cannot be read or parsed is a fatal error, never a silent fallback.

use crate::backend::LaneWidth;
use crate::error::ConfigError;
use log::info;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::Path;

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "LANESIM_CONFIG";

/// Process-wide configuration, loaded on first use.
///
/// Holds the load error when `LANESIM_CONFIG` names a file that cannot be
/// read or parsed; the binary treats that as fatal.
pub static CONFIG: Lazy<Result<Config, ConfigError>> = Lazy::new(Config::from_env);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Lanes per vector instruction. Must be a power of two.
    pub lane_width: usize,
    /// Length of the generated input arrays.
    /// The default is deliberately not a multiple of any supported width
    /// greater than one, so the tail path is always exercised.
    pub element_count: usize,
    /// Seed for input generation.
    pub seed: u64,
    /// Inputs are drawn from `[-value_range, value_range]`.
    pub value_range: f32,
    /// Exponents are drawn from `0..=max_exponent`.
    pub max_exponent: i32,
    /// Relative tolerance for comparing vector and serial sums.
    pub sum_tolerance: f32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            lane_width: 4,
            element_count: 1027,
            seed: 418,
            value_range: 3.0,
            max_exponent: 10,
            sum_tolerance: 1e-3,
        }
    }
}

impl Config {
    /// Reads a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Loads from the file named by `LANESIM_CONFIG`, or returns defaults
    /// if the variable is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_optional_path(std::env::var_os(CONFIG_ENV_VAR))
    }

    /// Loads `path` if given; defaults otherwise. Load errors propagate.
    pub fn from_optional_path(path: Option<OsString>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => {
                info!("Loading configuration from {:?}", path);
                Self::load(path)
            }
            None => {
                info!("{CONFIG_ENV_VAR} not set; using default configuration.");
                Ok(Self::default())
            }
        }
    }

    /// Checks the settings and returns the validated lane width.
    pub fn validate(&self) -> Result<LaneWidth, ConfigError> {
        let width = LaneWidth::new(self.lane_width)?;
        if self.element_count == 0 {
            return Err(ConfigError::EmptyInput);
        }
        // Inputs are drawn from [-range, range]; the span must stay finite.
        if !self.value_range.is_finite() || self.value_range.abs() > f32::MAX / 2.0 {
            return Err(ConfigError::InvalidValueRange(self.value_range));
        }
        if !self.sum_tolerance.is_finite() || self.sum_tolerance < 0.0 {
            return Err(ConfigError::InvalidSumTolerance(self.sum_tolerance));
        }
        Ok(width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = Config::from_json(r#"{ "lane_width": 8, "seed": 7 }"#).unwrap();
        assert_eq!(config.lane_width, 8);
        assert_eq!(config.seed, 7);
        assert_eq!(config.element_count, Config::default().element_count);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            Config::from_json("{ lane_width: "),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn validate_rejects_bad_width_and_empty_input() {
        let bad_width = Config {
            lane_width: 6,
            ..Config::default()
        };
        assert!(matches!(
            bad_width.validate(),
            Err(ConfigError::InvalidWidth(6))
        ));

        let empty = Config {
            element_count: 0,
            ..Config::default()
        };
        assert!(matches!(empty.validate(), Err(ConfigError::EmptyInput)));

        assert_eq!(Config::default().validate().unwrap().get(), 4);
    }

    #[test]
    fn non_positive_or_non_numeric_width_fails_to_parse() {
        for text in [
            r#"{ "lane_width": -4 }"#,
            r#"{ "lane_width": "four" }"#,
            r#"{ "lane_width": 2.5 }"#,
        ] {
            assert!(
                matches!(Config::from_json(text), Err(ConfigError::Parse(_))),
                "{text} should be rejected"
            );
        }
    }

    #[test]
    fn named_file_with_bad_width_is_an_error_not_defaults() {
        let path = std::env::temp_dir().join(format!(
            "lanesim-bad-width-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{ "lane_width": -4 }"#).unwrap();
        let loaded = Config::from_optional_path(Some(path.clone().into_os_string()));
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(loaded, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn unset_path_uses_defaults() {
        assert_eq!(Config::from_optional_path(None).unwrap(), Config::default());
    }

    #[test]
    fn validate_rejects_unusable_value_range() {
        let overflowed = Config::from_json(r#"{ "value_range": 1e39 }"#).unwrap();
        assert!(overflowed.value_range.is_infinite());
        assert!(matches!(
            overflowed.validate(),
            Err(ConfigError::InvalidValueRange(_))
        ));

        for range in [f32::NAN, f32::MAX, -f32::MAX] {
            let config = Config {
                value_range: range,
                ..Config::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidValueRange(_))
            ));
        }

        let negative = Config {
            value_range: -2.0,
            ..Config::default()
        };
        assert!(negative.validate().is_ok());
    }

    #[test]
    fn validate_rejects_negative_or_nan_sum_tolerance() {
        for tolerance in [-1e-3, f32::NAN, f32::INFINITY] {
            let config = Config {
                sum_tolerance: tolerance,
                ..Config::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidSumTolerance(_))
            ));
        }
        let exact = Config {
            sum_tolerance: 0.0,
            ..Config::default()
        };
        assert!(exact.validate().is_ok());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            Config::load("/nonexistent/lanesim.json"),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn serializes_back_to_equal_config() {
        let config = Config::default();
        let text = serde_json::to_string(&config).unwrap();
        assert_eq!(Config::from_json(&text).unwrap(), config);
    }
}
