//! Element-wise absolute value.

use super::chunk_count;
use crate::intrin::*;
use crate::mask::Mask;
use crate::vector::FloatVec;
use log::{debug, trace};

/// Vector form of [`abs_serial`](super::abs_serial).
///
/// The negative lanes are computed as `0 - x`; the remaining lanes of the
/// chunk are then filled by a masked load of the original values into the
/// same result vector, so the load acts as the "else" branch of the select.
pub fn abs_vector<const W: usize>(values: &[f32], output: &mut [f32]) {
    let n = values.len();
    assert!(output.len() >= n, "abs: output shorter than input");
    debug!("abs_vector: n={n} width={W} chunks={}", chunk_count(n, W));

    let zero = splat_float::<W>(0.0);

    for i in (0..n).step_by(W) {
        let chunk = Mask::<W>::for_chunk(i, n);
        let src = &values[i..];

        let mut x = zero;
        load_float(&mut x, src, chunk);

        let is_negative = compare_lt_float(x, zero, chunk);
        let mut result: FloatVec<W> = zero;
        sub_float(&mut result, zero, x, is_negative);

        let not_negative = mask_and(mask_not(is_negative), chunk);
        load_float(&mut result, src, not_negative);

        store_float(&mut output[i..], result, chunk);
        trace!("abs_vector: chunk@{i} negatives={}", count_active(is_negative));
    }
}
