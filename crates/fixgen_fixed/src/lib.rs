//! Minimal-width fixed-point modeling.
//!
//! This crate answers one question for the code generator: how many bits does
//! a value need at a given resolution? It provides the bit-width rules for
//! unsigned and two's-complement integers, scaling between real values and
//! fixed-point integers, exact binary encoding, and [`derive_format`], which
//! combines them into a minimal [`FixedFormat`].

#![warn(missing_docs)]

pub mod binary;
pub mod bits;
pub mod error;
pub mod fixed;
pub mod format;

pub use binary::{decode, encode};
pub use bits::{minimal_bits, BitWidth, Signedness};
pub use error::FixedError;
pub use fixed::{point_to_resolution, resolution_to_point, scale, unscale, RoundMode};
pub use format::{derive_format, FixedFormat};
