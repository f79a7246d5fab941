//! # Lane Masks
//!
//! `Mask<W>` is a per-lane predicate: lane `i` is true when the next
//! instruction may read, write or mutate lane `i`.
//!
//! Masks are plain values. Composing two masks (`&`, `|`, `!`) produces a new
//! mask and never touches its operands, so a chunk mask can be reused freely
//! while narrower masks are derived from it.
//!
//! ## Usage
//!
//! ```
//! use lanesim::Mask;
//!
//! let chunk = Mask::<4>::first(3);      // tail chunk: lanes 0..3 active
//! let even = Mask::<4>::from_fn(|i| i % 2 == 0);
//! let both = chunk & even;
//! assert_eq!(both.count(), 2);
//! assert_eq!((!chunk).count(), 1);
//! ```

use crate::backend::WidthCheck;
use core::fmt;
use core::ops::{BitAnd, BitOr, Index, Not};

/// A fixed-width vector of lane predicates.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Mask<const W: usize>([bool; W]);

impl<const W: usize> Mask<W> {
    /// Builds a mask from a per-lane predicate.
    #[inline]
    pub fn from_fn(f: impl FnMut(usize) -> bool) -> Self {
        let () = WidthCheck::<W>::OK;
        Self(core::array::from_fn(f))
    }

    /// Wraps an existing array of predicates.
    #[inline]
    pub fn from_array(lanes: [bool; W]) -> Self {
        let () = WidthCheck::<W>::OK;
        Self(lanes)
    }

    /// All lanes active.
    #[inline]
    pub fn all_ones() -> Self {
        Self::from_array([true; W])
    }

    /// No lane active.
    #[inline]
    pub fn all_false() -> Self {
        Self::from_array([false; W])
    }

    /// The first `k` lanes active, the rest inactive.
    ///
    /// This is the tail mask for a final chunk holding fewer than `W`
    /// elements. Panics if `k > W`.
    #[inline]
    pub fn first(k: usize) -> Self {
        assert!(k <= W, "first({k}) exceeds lane width {W}");
        Self::from_fn(|i| i < k)
    }

    /// Chunk mask for the window starting at `offset` of an array of `len`
    /// elements: full when at least `W` elements remain, partial otherwise.
    #[inline]
    pub fn for_chunk(offset: usize, len: usize) -> Self {
        let remaining = len.saturating_sub(offset);
        if remaining >= W {
            Self::all_ones()
        } else {
            Self::first(remaining)
        }
    }

    /// Population count: the number of active lanes.
    #[inline]
    pub fn count(&self) -> usize {
        self.0.iter().filter(|&&on| on).count()
    }

    /// Check if any lane is active.
    #[inline]
    pub fn any(&self) -> bool {
        self.0.iter().any(|&on| on)
    }

    /// Check if all lanes are active.
    #[inline]
    pub fn all(&self) -> bool {
        self.0.iter().all(|&on| on)
    }

    /// Check if no lane is active.
    #[inline]
    pub fn none(&self) -> bool {
        !self.any()
    }

    /// Indices of the active lanes, ascending.
    pub fn active_lanes(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, &on)| on.then_some(i))
    }

    #[inline]
    pub fn to_array(self) -> [bool; W] {
        self.0
    }
}

impl<const W: usize> Default for Mask<W> {
    fn default() -> Self {
        Self::all_false()
    }
}

impl<const W: usize> Index<usize> for Mask<W> {
    type Output = bool;
    #[inline]
    fn index(&self, lane: usize) -> &bool {
        &self.0[lane]
    }
}

impl<const W: usize> fmt::Debug for Mask<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mask[")?;
        for &on in &self.0 {
            f.write_str(if on { "1" } else { "0" })?;
        }
        write!(f, "]")
    }
}

// ============================================================================
// Boolean Operations
// ============================================================================

impl<const W: usize> BitAnd for Mask<W> {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self::from_fn(|i| self.0[i] && rhs.0[i])
    }
}

impl<const W: usize> BitOr for Mask<W> {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self::from_fn(|i| self.0[i] || rhs.0[i])
    }
}

impl<const W: usize> Not for Mask<W> {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self::from_fn(|i| !self.0[i])
    }
}
