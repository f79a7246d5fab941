//! Scalar reference kernels.

use super::CLAMP_CEILING;

/// `output[i] = |values[i]|`, branching on the sign as the vector form masks on it.
pub fn abs_serial(values: &[f32], output: &mut [f32]) {
    assert!(output.len() >= values.len(), "abs: output shorter than input");
    for (out, &x) in output.iter_mut().zip(values) {
        *out = if x < 0.0 { -x } else { x };
    }
}

/// `values[i]` raised to `exponents[i]` by repeated squaring, capped at
/// [`CLAMP_CEILING`]. Exponents of zero or below give 1.0.
pub fn clamped_exp_serial(values: &[f32], exponents: &[i32], output: &mut [f32]) {
    let n = values.len();
    assert!(exponents.len() >= n, "clamped_exp: exponents shorter than values");
    assert!(output.len() >= n, "clamped_exp: output shorter than values");

    for i in 0..n {
        let mut xpower = values[i];
        let mut y = exponents[i];
        let mut result = 1.0f32;
        while y > 0 {
            if y & 1 != 0 {
                result *= xpower;
            }
            xpower *= xpower;
            y >>= 1;
        }
        if result > CLAMP_CEILING {
            result = CLAMP_CEILING;
        }
        output[i] = result;
    }
}

/// Left-to-right scalar sum of `values`.
pub fn array_sum_serial(values: &[f32]) -> f32 {
    let mut sum = 0.0f32;
    for &x in values {
        sum += x;
    }
    sum
}
