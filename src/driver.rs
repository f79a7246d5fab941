//! Differential harness: runs every vector kernel beside its serial twin on
//! the same generated inputs and reports whether they agree.

use crate::config::Config;
use crate::error::ConfigError;
use crate::kernels::*;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Result of checking one kernel against its oracle.
#[derive(Debug, Clone, PartialEq)]
pub struct KernelOutcome {
    pub name: &'static str,
    pub passed: bool,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SuiteReport {
    pub lane_width: usize,
    pub element_count: usize,
    pub outcomes: Vec<KernelOutcome>,
}

impl SuiteReport {
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }
}

/// Inputs shared by all three kernels.
#[derive(Debug, Clone)]
pub struct Inputs {
    pub values: Vec<f32>,
    pub exponents: Vec<i32>,
}

impl Inputs {
    pub fn generate(config: &Config) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let range = config.value_range.abs();
        let max_exponent = config.max_exponent.max(0);
        let n = config.element_count;

        let values = (0..n)
            .map(|_| {
                if range == 0.0 {
                    0.0
                } else {
                    rng.gen_range(-range..=range)
                }
            })
            .collect();
        let exponents = (0..n).map(|_| rng.gen_range(0..=max_exponent)).collect();
        Self { values, exponents }
    }
}

/// Runs the whole suite at width `W`.
pub fn run_suite<const W: usize>(config: &Config) -> SuiteReport {
    let inputs = Inputs::generate(config);
    info!(
        "Running kernel suite: width={W} elements={} seed={}",
        inputs.values.len(),
        config.seed
    );

    let outcomes = vec![
        check_abs::<W>(&inputs),
        check_clamped_exp::<W>(&inputs),
        check_sum::<W>(&inputs, config.sum_tolerance),
    ];

    SuiteReport {
        lane_width: W,
        element_count: inputs.values.len(),
        outcomes,
    }
}

/// Validates `config` and dispatches to the matching monomorphized suite.
pub fn run_configured(config: &Config) -> Result<SuiteReport, ConfigError> {
    let width = config.validate()?;
    debug!("Dispatching suite for lane width {}", width.get());
    let report = match width.get() {
        1 => run_suite::<1>(config),
        2 => run_suite::<2>(config),
        4 => run_suite::<4>(config),
        8 => run_suite::<8>(config),
        16 => run_suite::<16>(config),
        32 => run_suite::<32>(config),
        other => return Err(ConfigError::UnsupportedWidth(other)),
    };
    Ok(report)
}

fn first_mismatch(vector: &[f32], serial: &[f32]) -> Option<usize> {
    vector
        .iter()
        .zip(serial)
        .position(|(v, s)| v.to_bits() != s.to_bits())
}

fn compare_elementwise(name: &'static str, vector: &[f32], serial: &[f32]) -> KernelOutcome {
    match first_mismatch(vector, serial) {
        None => KernelOutcome {
            name,
            passed: true,
            detail: format!("{} elements match", vector.len()),
        },
        Some(i) => {
            warn!(
                "{name}: mismatch at index {i}: vector={} serial={}",
                vector[i], serial[i]
            );
            KernelOutcome {
                name,
                passed: false,
                detail: format!(
                    "index {i}: vector={} serial={}",
                    vector[i], serial[i]
                ),
            }
        }
    }
}

fn check_abs<const W: usize>(inputs: &Inputs) -> KernelOutcome {
    let n = inputs.values.len();
    let mut vector = vec![0.0; n];
    let mut serial = vec![0.0; n];
    abs_vector::<W>(&inputs.values, &mut vector);
    abs_serial(&inputs.values, &mut serial);
    compare_elementwise("abs", &vector, &serial)
}

fn check_clamped_exp<const W: usize>(inputs: &Inputs) -> KernelOutcome {
    let n = inputs.values.len();
    let mut vector = vec![0.0; n];
    let mut serial = vec![0.0; n];
    clamped_exp_vector::<W>(&inputs.values, &inputs.exponents, &mut vector);
    clamped_exp_serial(&inputs.values, &inputs.exponents, &mut serial);
    compare_elementwise("clamped_exp", &vector, &serial)
}

/// True when `a` and `b` agree within `tolerance` relative to `magnitude`,
/// the sum of absolute values of the inputs. Accumulation error grows with
/// that quantity, not with the (possibly cancelling) result.
pub fn sums_agree(a: f32, b: f32, tolerance: f32, magnitude: f32) -> bool {
    (a - b).abs() <= tolerance * magnitude.max(1.0)
}

fn check_sum<const W: usize>(inputs: &Inputs, tolerance: f32) -> KernelOutcome {
    let vector = array_sum_vector::<W>(&inputs.values);
    let serial = array_sum_serial(&inputs.values);
    let magnitude: f32 = inputs.values.iter().map(|v| v.abs()).sum();
    let passed = sums_agree(vector, serial, tolerance, magnitude);
    if !passed {
        warn!("array_sum: vector={vector} serial={serial} tolerance={tolerance}");
    }
    KernelOutcome {
        name: "array_sum",
        passed,
        detail: format!("vector={vector} serial={serial}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn default_config_passes_at_every_width() {
        for width in crate::backend::SUPPORTED_WIDTHS {
            let config = Config {
                lane_width: width,
                ..Config::default()
            };
            let report = run_configured(&config).unwrap();
            assert_eq!(report.lane_width, width);
            assert_eq!(report.outcomes.len(), 3);
            assert!(report.all_passed(), "{report:?}");
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let config = Config::default();
        let a = Inputs::generate(&config);
        let b = Inputs::generate(&config);
        assert_eq!(a.values, b.values);
        assert_eq!(a.exponents, b.exponents);
        assert!(a.exponents.iter().all(|&e| (0..=10).contains(&e)));
    }

    #[test]
    fn invalid_width_is_rejected_before_running() {
        let config = Config {
            lane_width: 5,
            ..Config::default()
        };
        assert!(matches!(
            run_configured(&config),
            Err(ConfigError::InvalidWidth(5))
        ));
    }

    #[test]
    fn infinite_value_range_is_rejected_before_generating() {
        let config = Config::from_json(r#"{ "value_range": 1e39 }"#).unwrap();
        assert!(matches!(
            run_configured(&config),
            Err(ConfigError::InvalidValueRange(_))
        ));
    }

    #[test]
    fn mismatch_is_reported_with_index() {
        let outcome = compare_elementwise("x", &[1.0, 2.0, 3.0], &[1.0, 2.5, 3.0]);
        assert!(!outcome.passed);
        assert!(outcome.detail.starts_with("index 1"));
    }

    #[test]
    fn sum_tolerance_is_relative() {
        assert!(sums_agree(1000.0, 1000.5, 1e-3, 1000.0));
        assert!(!sums_agree(1000.0, 1002.0, 1e-3, 1000.0));
        assert!(sums_agree(0.0, 0.5, 1e-3, 1000.0));
        assert!(!sums_agree(0.0, 0.5, 1e-3, 0.0));
    }
}
