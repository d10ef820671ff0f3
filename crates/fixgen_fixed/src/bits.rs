//! Signedness rules and minimal bit-width calculation.
//!
//! [`Signedness`] is the closed set of integer encodings a format can use. Each
//! variant knows its own minimal-width rule and representable range, so callers
//! carry a flag instead of picking between parallel signed/unsigned types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::FixedError;

/// Integer encoding of a fixed-width binary value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signedness {
    /// Plain binary, range `[0, 2^n - 1]`.
    Unsigned,
    /// Two's complement, range `[-2^(n-1), 2^(n-1) - 1]`.
    Signed,
}

impl Signedness {
    /// Maps a boolean `signed` flag to the matching encoding.
    pub fn from_signed(signed: bool) -> Self {
        if signed {
            Signedness::Signed
        } else {
            Signedness::Unsigned
        }
    }

    /// Returns true for two's complement.
    pub fn is_signed(self) -> bool {
        self == Signedness::Signed
    }

    /// Returns the minimum number of bits that represent `value` exactly.
    ///
    /// Unsigned widths are only defined for non-negative values. Zero needs one
    /// bit under either encoding.
    pub fn minimal_bits(self, value: i64) -> Result<u32, FixedError> {
        match self {
            Signedness::Unsigned => {
                if value < 0 {
                    return Err(FixedError::Domain { value });
                }
                Ok(bit_length(value as u64).max(1))
            }
            // 1 + ceil(log2(-v)) for negatives, 1 + ceil(log2(v + 1)) otherwise.
            // Both collapse to one sign bit plus the bit length of v ^ (v >> 63).
            Signedness::Signed => Ok(1 + bit_length((value ^ (value >> 63)) as u64)),
        }
    }

    /// Smallest value representable in `width` bits.
    ///
    /// Saturates at the `i128` bounds for widths above 127.
    pub fn min(self, width: u32) -> i128 {
        match self {
            Signedness::Unsigned => 0,
            Signedness::Signed => {
                if width == 0 {
                    0
                } else {
                    -pow2(width - 1)
                }
            }
        }
    }

    /// Largest value representable in `width` bits.
    ///
    /// Saturates at the `i128` bounds for widths above 127.
    pub fn max(self, width: u32) -> i128 {
        match self {
            Signedness::Unsigned => pow2(width) - 1,
            Signedness::Signed => {
                if width == 0 {
                    -1
                } else {
                    pow2(width - 1) - 1
                }
            }
        }
    }

    /// Returns true if `value` lies within the `width`-bit range.
    pub fn fits(self, value: i64, width: u32) -> bool {
        let v = i128::from(value);
        width > 0 && v >= self.min(width) && v <= self.max(width)
    }
}

impl fmt::Display for Signedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signedness::Unsigned => write!(f, "unsigned"),
            Signedness::Signed => write!(f, "signed"),
        }
    }
}

/// Returns the minimal width of `value` under the given signedness.
///
/// Free-function form of [`Signedness::minimal_bits`].
pub fn minimal_bits(value: i64, signedness: Signedness) -> Result<u32, FixedError> {
    signedness.minimal_bits(value)
}

/// A concrete bit width paired with its encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BitWidth {
    /// Number of bits.
    pub width: u32,
    /// Encoding of those bits.
    pub signedness: Signedness,
}

impl BitWidth {
    /// Creates a bit width.
    pub fn new(width: u32, signedness: Signedness) -> Self {
        Self { width, signedness }
    }

    /// Returns the narrowest width that holds `value` exactly.
    pub fn minimal(value: i64, signedness: Signedness) -> Result<Self, FixedError> {
        Ok(Self::new(signedness.minimal_bits(value)?, signedness))
    }

    /// Smallest representable value.
    pub fn min(&self) -> i128 {
        self.signedness.min(self.width)
    }

    /// Largest representable value.
    pub fn max(&self) -> i128 {
        self.signedness.max(self.width)
    }

    /// Returns true if `value` is representable.
    pub fn fits(&self, value: i64) -> bool {
        self.signedness.fits(value, self.width)
    }
}

impl fmt::Display for BitWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}-bit", self.signedness, self.width)
    }
}

/// Number of significant bits in `v` (zero for zero).
fn bit_length(v: u64) -> u32 {
    u64::BITS - v.leading_zeros()
}

/// `2^exp`, saturating at `i128::MAX`.
fn pow2(exp: u32) -> i128 {
    if exp >= 127 {
        i128::MAX
    } else {
        1i128 << exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsigned_small_values() {
        assert_eq!(minimal_bits(1, Signedness::Unsigned).unwrap(), 1);
        assert_eq!(minimal_bits(2, Signedness::Unsigned).unwrap(), 2);
        assert_eq!(minimal_bits(3, Signedness::Unsigned).unwrap(), 2);
        assert_eq!(minimal_bits(4, Signedness::Unsigned).unwrap(), 3);
        assert_eq!(minimal_bits(255, Signedness::Unsigned).unwrap(), 8);
        assert_eq!(minimal_bits(256, Signedness::Unsigned).unwrap(), 9);
    }

    #[test]
    fn unsigned_zero_is_one_bit() {
        assert_eq!(minimal_bits(0, Signedness::Unsigned).unwrap(), 1);
    }

    #[test]
    fn unsigned_negative_is_domain_error() {
        let err = minimal_bits(-1, Signedness::Unsigned).unwrap_err();
        assert_eq!(err, FixedError::Domain { value: -1 });
    }

    #[test]
    fn unsigned_extremes() {
        assert_eq!(minimal_bits(i64::MAX, Signedness::Unsigned).unwrap(), 63);
    }

    #[test]
    fn signed_non_negative() {
        assert_eq!(minimal_bits(0, Signedness::Signed).unwrap(), 1);
        assert_eq!(minimal_bits(1, Signedness::Signed).unwrap(), 2);
        assert_eq!(minimal_bits(3, Signedness::Signed).unwrap(), 3);
        assert_eq!(minimal_bits(4, Signedness::Signed).unwrap(), 4);
        assert_eq!(minimal_bits(127, Signedness::Signed).unwrap(), 8);
        assert_eq!(minimal_bits(128, Signedness::Signed).unwrap(), 9);
    }

    #[test]
    fn signed_negative() {
        assert_eq!(minimal_bits(-1, Signedness::Signed).unwrap(), 1);
        assert_eq!(minimal_bits(-2, Signedness::Signed).unwrap(), 2);
        assert_eq!(minimal_bits(-5, Signedness::Signed).unwrap(), 4);
        assert_eq!(minimal_bits(-8, Signedness::Signed).unwrap(), 4);
        assert_eq!(minimal_bits(-128, Signedness::Signed).unwrap(), 8);
        assert_eq!(minimal_bits(-129, Signedness::Signed).unwrap(), 9);
    }

    #[test]
    fn signed_extremes() {
        assert_eq!(minimal_bits(i64::MIN, Signedness::Signed).unwrap(), 64);
        assert_eq!(minimal_bits(i64::MAX, Signedness::Signed).unwrap(), 64);
    }

    #[test]
    fn ranges() {
        let u = BitWidth::new(4, Signedness::Unsigned);
        assert_eq!((u.min(), u.max()), (0, 15));
        let s = BitWidth::new(4, Signedness::Signed);
        assert_eq!((s.min(), s.max()), (-8, 7));
    }

    #[test]
    fn wide_ranges_saturate() {
        let u = BitWidth::new(200, Signedness::Unsigned);
        assert_eq!(u.max(), i128::MAX - 1);
        let s = BitWidth::new(64, Signedness::Signed);
        assert_eq!(s.min(), i128::from(i64::MIN));
        assert_eq!(s.max(), i128::from(i64::MAX));
    }

    #[test]
    fn fits_checks_range() {
        let s = BitWidth::new(4, Signedness::Signed);
        assert!(s.fits(-8));
        assert!(s.fits(7));
        assert!(!s.fits(8));
        assert!(!s.fits(-9));
        assert!(!Signedness::Signed.fits(0, 0));
        assert!(Signedness::Unsigned.fits(i64::MAX, 64));
    }

    #[test]
    fn minimal_width_display() {
        let w = BitWidth::minimal(-5, Signedness::Signed).unwrap();
        assert_eq!(w.to_string(), "signed 4-bit");
    }

    #[test]
    fn signedness_serde() {
        let json = serde_json::to_string(&Signedness::Signed).unwrap();
        assert_eq!(json, "\"signed\"");
        let back: Signedness = serde_json::from_str("\"unsigned\"").unwrap();
        assert_eq!(back, Signedness::Unsigned);
    }
}
