//! Fixed-width lane vectors and their masked element-wise primitives.
//!
//! Every primitive here follows one contract: a lane whose mask bit is false
//! is neither read from a source buffer nor written to a destination, and
//! the destination lane keeps whatever value it held before the call.

use crate::backend::{LaneElement, WidthCheck};
use crate::mask::Mask;
use core::ops::Index;

/// `W` scalars of type `T`, lane-indexed `0..W`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Lanes<T: LaneElement, const W: usize>([T; W]);

/// Float lanes.
pub type FloatVec<const W: usize> = Lanes<f32, W>;

/// Integer lanes.
pub type IntVec<const W: usize> = Lanes<i32, W>;

impl<T: LaneElement, const W: usize> Lanes<T, W> {
    #[inline]
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        let () = WidthCheck::<W>::OK;
        Self(core::array::from_fn(f))
    }

    #[inline]
    pub fn from_array(lanes: [T; W]) -> Self {
        let () = WidthCheck::<W>::OK;
        Self(lanes)
    }

    /// Broadcast `val` into every lane.
    #[inline]
    pub fn splat(val: T) -> Self {
        Self::from_array([val; W])
    }

    #[inline]
    pub fn zero() -> Self {
        Self::splat(T::ZERO)
    }

    #[inline]
    pub fn to_array(self) -> [T; W] {
        self.0
    }

    /// Merge `src[i]` into lane `i` for every active lane.
    ///
    /// Panics if an active lane falls outside `src`; inactive lanes may
    /// point past the end.
    #[inline]
    pub fn merge_load(&mut self, src: &[T], mask: Mask<W>) {
        for lane in mask.active_lanes() {
            assert!(
                lane < src.len(),
                "masked load: active lane {lane} is outside a buffer of {} elements",
                src.len()
            );
            self.0[lane] = src[lane];
        }
    }

    /// Write lane `i` to `dst[i]` for every active lane.
    ///
    /// Inactive cells of `dst` are left untouched. Panics if an active lane
    /// falls outside `dst`.
    #[inline]
    pub fn store_masked(&self, dst: &mut [T], mask: Mask<W>) {
        for lane in mask.active_lanes() {
            assert!(
                lane < dst.len(),
                "masked store: active lane {lane} is outside a buffer of {} elements",
                dst.len()
            );
            dst[lane] = self.0[lane];
        }
    }

    /// `self[i] = f(a[i], b[i])` for every active lane.
    #[inline]
    pub fn zip_masked(&mut self, a: Self, b: Self, mask: Mask<W>, f: impl Fn(T, T) -> T) {
        for lane in mask.active_lanes() {
            self.0[lane] = f(a.0[lane], b.0[lane]);
        }
    }

    /// `self[i] = f(a[i])` for every active lane.
    #[inline]
    pub fn map_masked(&mut self, a: Self, mask: Mask<W>, f: impl Fn(T) -> T) {
        for lane in mask.active_lanes() {
            self.0[lane] = f(a.0[lane]);
        }
    }

    /// Lane-wise predicate, restricted to `active`.
    ///
    /// Lanes outside `active` are false in the result no matter what the
    /// predicate says about them.
    #[inline]
    pub fn compare(self, other: Self, active: Mask<W>, pred: impl Fn(T, T) -> bool) -> Mask<W> {
        Mask::from_fn(|i| active[i] && pred(self.0[i], other.0[i]))
    }
}

impl<T: LaneElement, const W: usize> Default for Lanes<T, W> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: LaneElement, const W: usize> Index<usize> for Lanes<T, W> {
    type Output = T;
    #[inline]
    fn index(&self, lane: usize) -> &T {
        &self.0[lane]
    }
}
