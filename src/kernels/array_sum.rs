//! Array sum reduction.

use super::chunk_count;
use crate::intrin::*;
use crate::mask::Mask;
use log::debug;

/// Vector form of [`array_sum_serial`](super::array_sum_serial).
///
/// Chunks are added lane-wise into one accumulator vector; the horizontal
/// reduction runs once, after the loop. A tail chunk is merged into a zero
/// vector so its inactive lanes contribute nothing.
pub fn array_sum_vector<const W: usize>(values: &[f32]) -> f32 {
    let n = values.len();
    debug!("array_sum_vector: n={n} width={W} chunks={}", chunk_count(n, W));

    let zero = splat_float::<W>(0.0);
    let all = mask_all_ones::<W>();
    let mut acc = zero;

    for i in (0..n).step_by(W) {
        let chunk = Mask::<W>::for_chunk(i, n);
        let mut x = zero;
        load_float(&mut x, &values[i..], chunk);
        let prev = acc;
        add_float(&mut acc, prev, x, all);
    }

    horizontal_sum(acc)
}
