//! # lanesim
//!
//! A software model of a fixed-width, predicated SIMD unit, plus numeric
//! kernels written against it.
//!
//! ## Layers
//!
//! - **Lane engine** ([`vector`], [`mask`], [`intrin`]): `W`-lane float and
//!   integer vectors, per-lane masks, and an instruction set in which every
//!   load, store and arithmetic op writes only the lanes its mask selects.
//! - **Kernels** ([`kernels`]): absolute value, clamped integer power and
//!   array sum, expressed purely as masked instructions, each paired with a
//!   scalar twin for differential checking.
//!
//! The lane width is a const generic on every type and kernel. A width that
//! is zero or not a power of two fails to build.

pub mod backend;
pub mod config;
pub mod driver;
pub mod error;
pub mod intrin;
pub mod kernels;
pub mod mask;
pub mod vector;

pub use backend::{LaneElement, LaneWidth};
pub use error::ConfigError;
pub use mask::Mask;
pub use vector::{FloatVec, IntVec, Lanes};
