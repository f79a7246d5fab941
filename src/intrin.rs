//! The lane instruction set.
//!
//! Each function models one vector instruction. Arithmetic, load, set and
//! move instructions write only the lanes selected by their mask; every other
//! destination lane keeps its prior value. Comparisons return a fresh mask
//! that is false outside the eligible lanes. Nothing here touches state other
//! than its explicit destination.
//!
//! The names mirror the serial code they replace, so a branchy loop can be
//! rewritten one statement at a time:
//!
//! ```
//! use lanesim::intrin::*;
//!
//! let zero = splat_float::<4>(0.0);
//! let all = mask_all_ones::<4>();
//! let mut x = zero;
//! load_float(&mut x, &[-1.0, 2.0, -3.0, 4.0], all);      // x = values[i]
//! let neg = compare_lt_float(x, zero, all);              // if (x < 0)
//! let mut result = zero;
//! sub_float(&mut result, zero, x, neg);                  //   r = -x
//! load_float(&mut result, &[-1.0, 2.0, -3.0, 4.0], mask_not(neg)); // else r = x
//! let mut out = [0.0; 4];
//! store_float(&mut out, result, all);
//! assert_eq!(out, [1.0, 2.0, 3.0, 4.0]);
//! ```

use crate::mask::Mask;
use crate::vector::{FloatVec, IntVec};

// ============================================================================
// Broadcast
// ============================================================================

#[inline]
pub fn splat_float<const W: usize>(x: f32) -> FloatVec<W> {
    FloatVec::splat(x)
}

#[inline]
pub fn splat_int<const W: usize>(x: i32) -> IntVec<W> {
    IntVec::splat(x)
}

/// Masked broadcast: active lanes of `dst` become `value`.
#[inline]
pub fn set_float<const W: usize>(dst: &mut FloatVec<W>, value: f32, mask: Mask<W>) {
    dst.map_masked(*dst, mask, |_| value);
}

/// Masked broadcast: active lanes of `dst` become `value`.
#[inline]
pub fn set_int<const W: usize>(dst: &mut IntVec<W>, value: i32, mask: Mask<W>) {
    dst.map_masked(*dst, mask, |_| value);
}

/// Masked copy of `src` into `dst`.
#[inline]
pub fn move_float<const W: usize>(dst: &mut FloatVec<W>, src: FloatVec<W>, mask: Mask<W>) {
    dst.map_masked(src, mask, |x| x);
}

/// Masked copy of `src` into `dst`.
#[inline]
pub fn move_int<const W: usize>(dst: &mut IntVec<W>, src: IntVec<W>, mask: Mask<W>) {
    dst.map_masked(src, mask, |x| x);
}

// ============================================================================
// Memory
// ============================================================================

/// Merge `src[i]` into `dst` for each active lane `i`.
///
/// `dst` must already hold the values wanted in the inactive lanes, which is
/// what lets a masked load act as the "else" half of a selective merge.
/// Active lanes must lie inside `src`.
#[inline]
pub fn load_float<const W: usize>(dst: &mut FloatVec<W>, src: &[f32], mask: Mask<W>) {
    dst.merge_load(src, mask);
}

/// Integer twin of [`load_float`].
#[inline]
pub fn load_int<const W: usize>(dst: &mut IntVec<W>, src: &[i32], mask: Mask<W>) {
    dst.merge_load(src, mask);
}

/// Write `vec[i]` to `dst[i]` for each active lane; other cells are untouched.
#[inline]
pub fn store_float<const W: usize>(dst: &mut [f32], vec: FloatVec<W>, mask: Mask<W>) {
    vec.store_masked(dst, mask);
}

/// Integer twin of [`store_float`].
#[inline]
pub fn store_int<const W: usize>(dst: &mut [i32], vec: IntVec<W>, mask: Mask<W>) {
    vec.store_masked(dst, mask);
}

// ============================================================================
// Arithmetic
// ============================================================================

macro_rules! masked_binary {
    ($(#[$doc:meta])* $name:ident, $vec:ident, |$a:ident, $b:ident| $body:expr) => {
        $(#[$doc])*
        #[inline]
        pub fn $name<const W: usize>(dst: &mut $vec<W>, a: $vec<W>, b: $vec<W>, mask: Mask<W>) {
            dst.zip_masked(a, b, mask, |$a, $b| $body);
        }
    };
}

masked_binary!(add_float, FloatVec, |a, b| a + b);
masked_binary!(sub_float, FloatVec, |a, b| a - b);
masked_binary!(mult_float, FloatVec, |a, b| a * b);
masked_binary!(div_float, FloatVec, |a, b| a / b);

// Integer arithmetic wraps, as hardware lanes do.
masked_binary!(add_int, IntVec, |a, b| a.wrapping_add(b));
masked_binary!(sub_int, IntVec, |a, b| a.wrapping_sub(b));
masked_binary!(mult_int, IntVec, |a, b| a.wrapping_mul(b));

masked_binary!(bitand_int, IntVec, |a, b| a & b);
masked_binary!(
    /// Logical right shift of `a` by `b`, shift count taken modulo 32.
    shiftright_int,
    IntVec,
    |a, b| ((a as u32) >> ((b as u32) & 31)) as i32
);

/// Masked absolute value.
#[inline]
pub fn abs_float<const W: usize>(dst: &mut FloatVec<W>, a: FloatVec<W>, mask: Mask<W>) {
    dst.map_masked(a, mask, f32::abs);
}

// ============================================================================
// Comparison
// ============================================================================

macro_rules! masked_compare {
    ($name:ident, $vec:ident, $op:tt) => {
        /// Lanes where `active` is set and the comparison holds.
        #[inline]
        pub fn $name<const W: usize>(a: $vec<W>, b: $vec<W>, active: Mask<W>) -> Mask<W> {
            a.compare(b, active, |x, y| x $op y)
        }
    };
}

masked_compare!(compare_lt_float, FloatVec, <);
masked_compare!(compare_gt_float, FloatVec, >);
masked_compare!(compare_eq_float, FloatVec, ==);
masked_compare!(compare_lt_int, IntVec, <);
masked_compare!(compare_gt_int, IntVec, >);
masked_compare!(compare_eq_int, IntVec, ==);

// ============================================================================
// Masks
// ============================================================================

#[inline]
pub fn mask_all_ones<const W: usize>() -> Mask<W> {
    Mask::all_ones()
}

/// First `k` lanes active. Panics if `k > W`.
#[inline]
pub fn mask_first<const W: usize>(k: usize) -> Mask<W> {
    Mask::first(k)
}

#[inline]
pub fn mask_all_zeros<const W: usize>() -> Mask<W> {
    Mask::all_false()
}

#[inline]
pub fn mask_not<const W: usize>(m: Mask<W>) -> Mask<W> {
    !m
}

#[inline]
pub fn mask_and<const W: usize>(a: Mask<W>, b: Mask<W>) -> Mask<W> {
    a & b
}

#[inline]
pub fn mask_or<const W: usize>(a: Mask<W>, b: Mask<W>) -> Mask<W> {
    a | b
}

/// Number of active lanes.
#[inline]
pub fn count_active<const W: usize>(m: Mask<W>) -> usize {
    m.count()
}

// ============================================================================
// Cross-lane
// ============================================================================

/// Pairwise add: lanes `2k` and `2k + 1` both become `src[2k] + src[2k + 1]`.
#[inline]
pub fn hadd_float<const W: usize>(dst: &mut FloatVec<W>, src: FloatVec<W>) {
    assert!(W >= 2, "hadd needs at least two lanes");
    *dst = FloatVec::from_fn(|i| {
        let pair = i & !1;
        src[pair] + src[pair + 1]
    });
}

/// Even-indexed lanes of `src` followed by its odd-indexed lanes.
#[inline]
pub fn interleave_float<const W: usize>(dst: &mut FloatVec<W>, src: FloatVec<W>) {
    if W == 1 {
        *dst = src;
        return;
    }
    let half = W / 2;
    *dst = FloatVec::from_fn(|i| {
        if i < half {
            src[2 * i]
        } else {
            src[2 * (i - half) + 1]
        }
    });
}

/// Sum of all lanes, in log2(W) pairwise rounds.
pub fn horizontal_sum<const W: usize>(vec: FloatVec<W>) -> f32 {
    let mut acc = vec;
    let mut width = 1;
    while width < W {
        let mut paired = acc;
        hadd_float(&mut paired, acc);
        interleave_float(&mut acc, paired);
        width <<= 1;
    }
    acc[0]
}
