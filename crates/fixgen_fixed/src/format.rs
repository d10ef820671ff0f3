//! Fixed-point format descriptors and their synthesis from a target value.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::binary::encode;
use crate::bits::{BitWidth, Signedness};
use crate::error::FixedError;
use crate::fixed::{point_to_resolution, resolution_to_point, scale, unscale, RoundMode};

/// A fixed-point number format: total width, fractional bits, and encoding.
///
/// `point` may be negative, in which case each step of the stored integer is
/// worth more than one. When produced by [`derive_format`], `width` is the
/// narrowest width that holds the scaled target value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FixedFormat {
    /// Total number of bits.
    pub width: u32,
    /// Number of fractional bits.
    pub point: i32,
    /// Integer encoding of the stored value.
    pub signedness: Signedness,
}

impl FixedFormat {
    /// Creates a format from its parts.
    pub fn new(width: u32, point: i32, signedness: Signedness) -> Self {
        Self {
            width,
            point,
            signedness,
        }
    }

    /// Returns true if the stored integer is two's complement.
    pub fn is_signed(&self) -> bool {
        self.signedness.is_signed()
    }

    /// Smallest non-zero step, `2^-point`.
    pub fn resolution(&self) -> f64 {
        point_to_resolution(self.point)
    }

    /// The integer width and encoding underneath this format.
    pub fn bit_width(&self) -> BitWidth {
        BitWidth::new(self.width, self.signedness)
    }

    /// Smallest storable integer.
    pub fn min(&self) -> i128 {
        self.bit_width().min()
    }

    /// Largest storable integer.
    pub fn max(&self) -> i128 {
        self.bit_width().max()
    }

    /// Scales a real value to this format's integer without range checking.
    pub fn to_fixed(&self, value: f64, mode: RoundMode) -> Result<i64, FixedError> {
        scale(value, self.point, mode)
    }

    /// Real value represented by a stored integer.
    pub fn to_real(&self, fixed: i64) -> f64 {
        unscale(fixed, self.point)
    }

    /// Rounds `value` to this format and renders it as a bit string.
    pub fn encode_real(&self, value: f64) -> Result<String, FixedError> {
        let fixed = self.to_fixed(value, RoundMode::Round)?;
        encode(fixed, self.width, self.signedness)
    }
}

impl fmt::Display for FixedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}-bit, {} fractional", self.signedness, self.width, self.point)
    }
}

/// Derives the narrowest format that stores `value` at `resolution` or finer.
///
/// The point is chosen so that `2^-point <= resolution`, the value is scaled
/// with round-to-nearest, and the width is the minimal width of that integer.
pub fn derive_format(
    value: f64,
    resolution: f64,
    signedness: Signedness,
) -> Result<FixedFormat, FixedError> {
    let point = resolution_to_point(resolution)?;
    let scaled = scale(value, point, RoundMode::Round)?;
    let width = signedness.minimal_bits(scaled)?;
    let format = FixedFormat::new(width, point, signedness);
    tracing::debug!(value, resolution, scaled, %format, "derived fixed-point format");
    Ok(format)
}
