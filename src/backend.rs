//! Lane element types and lane-width validation.

use crate::error::ConfigError;
use core::fmt::Debug;

/// A scalar type that may occupy one lane of a vector.
///
/// Only the two element kinds the instruction set knows about implement this:
/// `f32` for float lanes and `i32` for integer lanes.
pub trait LaneElement: 'static + Copy + Clone + Debug + Default + PartialEq + PartialOrd {
    /// The additive identity, used to seed accumulators and zero vectors.
    const ZERO: Self;
    /// The multiplicative identity.
    const ONE: Self;
}

impl LaneElement for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
}

impl LaneElement for i32 {
    const ZERO: Self = 0;
    const ONE: Self = 1;
}

/// Compile-time width guard shared by every vector and mask type.
///
/// Referencing `WidthCheck::<W>::OK` forces the assertion to be evaluated when
/// the surrounding generic is monomorphized, so an invalid width never builds.
pub(crate) struct WidthCheck<const W: usize>;

impl<const W: usize> WidthCheck<W> {
    pub(crate) const OK: () = assert!(
        W > 0 && W.is_power_of_two(),
        "lane width must be a positive power of two"
    );
}

/// Widths the driver knows how to dispatch to a monomorphized kernel.
pub const SUPPORTED_WIDTHS: [usize; 6] = [1, 2, 4, 8, 16, 32];

/// A lane width chosen at runtime (from configuration) and validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneWidth(usize);

impl LaneWidth {
    /// Validates `width`: it must be a positive power of two the driver supports.
    pub fn new(width: usize) -> Result<Self, ConfigError> {
        if width == 0 || !width.is_power_of_two() {
            return Err(ConfigError::InvalidWidth(width));
        }
        if !SUPPORTED_WIDTHS.contains(&width) {
            return Err(ConfigError::UnsupportedWidth(width));
        }
        Ok(Self(width))
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}
