//! Masked numeric kernels written against the lane instruction set.
//!
//! Each kernel walks its input in chunks of `W` elements. The chunk mask is
//! full for every chunk except possibly the last, where it covers only the
//! remaining elements, so any `N` is accepted and no lane ever reads or writes
//! past the end of a buffer.
//!
//! `serial` holds the scalar twins used as correctness oracles.

mod abs;
mod array_sum;
mod clamped_exp;
pub mod serial;

pub use abs::abs_vector;
pub use array_sum::array_sum_vector;
pub use clamped_exp::clamped_exp_vector;
pub use serial::{abs_serial, array_sum_serial, clamped_exp_serial};

/// Upper bound applied to every clamped-exponent result.
pub const CLAMP_CEILING: f32 = 4.18;

/// Number of chunks needed to cover `len` elements at width `w`.
#[inline]
pub(crate) fn chunk_count(len: usize, w: usize) -> usize {
    len.div_ceil(w)
}
