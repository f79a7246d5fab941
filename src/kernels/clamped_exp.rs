//! Clamped integer power by repeated squaring.

use super::{chunk_count, CLAMP_CEILING};
use crate::intrin::*;
use crate::mask::Mask;
use log::{debug, trace};

/// Vector form of [`clamped_exp_serial`](super::clamped_exp_serial).
///
/// Each chunk carries an active set, seeded from `y > 0`, that only ever
/// shrinks. Lanes leave it once their exponent reaches zero and are never
/// mutated again, so lanes needing fewer squarings are not disturbed by
/// lanes still iterating. The chunk loop ends when the set is empty.
pub fn clamped_exp_vector<const W: usize>(values: &[f32], exponents: &[i32], output: &mut [f32]) {
    let n = values.len();
    assert!(exponents.len() >= n, "clamped_exp: exponents shorter than values");
    assert!(output.len() >= n, "clamped_exp: output shorter than values");
    debug!(
        "clamped_exp_vector: n={n} width={W} chunks={}",
        chunk_count(n, W)
    );

    let ones = splat_float::<W>(1.0);
    let int_ones = splat_int::<W>(1);
    let int_zeros = splat_int::<W>(0);
    let ceiling = splat_float::<W>(CLAMP_CEILING);

    for i in (0..n).step_by(W) {
        let chunk = Mask::<W>::for_chunk(i, n);

        let mut x = splat_float::<W>(0.0);
        let mut y = int_zeros;
        load_float(&mut x, &values[i..], chunk);
        load_int(&mut y, &exponents[i..], chunk);

        let mut result = ones;
        let mut xpower = x;
        let mut active = compare_gt_int(y, int_zeros, chunk);
        let mut rounds = 0usize;

        while count_active(active) > 0 {
            let mut low_bit = int_zeros;
            bitand_int(&mut low_bit, y, int_ones, active);
            let odd = mask_and(compare_gt_int(low_bit, int_zeros, chunk), active);

            let (prev_result, prev_xpower, prev_y) = (result, xpower, y);
            mult_float(&mut result, prev_result, prev_xpower, odd);
            mult_float(&mut xpower, prev_xpower, prev_xpower, active);
            shiftright_int(&mut y, prev_y, int_ones, active);

            active = compare_gt_int(y, int_zeros, chunk);
            rounds += 1;
            trace!(
                "clamped_exp_vector: chunk@{i} round {rounds} active={}",
                count_active(active)
            );
        }

        let over = compare_gt_float(result, ceiling, chunk);
        set_float(&mut result, CLAMP_CEILING, over);

        store_float(&mut output[i..], result, chunk);
    }
}
