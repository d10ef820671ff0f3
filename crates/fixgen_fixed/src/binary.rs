//! Exact fixed-width binary encoding of integers.

use crate::bits::{BitWidth, Signedness};
use crate::error::FixedError;

/// Renders `value` as exactly `width` binary digits, most significant first.
///
/// Negative values are written in two's complement (`value + 2^width`). Fails
/// with [`FixedError::Overflow`] if `value` is outside the range of the
/// requested width and signedness, including any request for zero bits.
pub fn encode(value: i64, width: u32, signedness: Signedness) -> Result<String, FixedError> {
    if !signedness.fits(value, width) {
        return Err(FixedError::Overflow {
            value,
            width,
            signedness,
        });
    }
    // Arithmetic shifts sign-extend, so bits above 63 repeat the top bit.
    let bits = (0..width)
        .rev()
        .map(|i| if (value >> i.min(63)) & 1 == 1 { '1' } else { '0' })
        .collect();
    Ok(bits)
}

/// Decodes a bit string produced by [`encode`] back to its integer.
pub fn decode(bits: &str, signedness: Signedness) -> Result<i64, FixedError> {
    let invalid = || FixedError::InvalidBits(bits.to_string());
    let mut digits = bits.chars().map(|c| match c {
        '0' => Ok(0i64),
        '1' => Ok(1i64),
        _ => Err(invalid()),
    });

    let first = digits.next().ok_or_else(invalid)??;
    let mut acc = match signedness {
        Signedness::Unsigned => first,
        Signedness::Signed => -first,
    };
    for digit in digits {
        let digit = digit?;
        acc = acc
            .checked_mul(2)
            .and_then(|a| a.checked_add(digit))
            .ok_or_else(|| FixedError::DecodeRange(bits.to_string()))?;
    }
    Ok(acc)
}

impl BitWidth {
    /// Encodes `value` at this width. See [`encode`].
    pub fn encode(&self, value: i64) -> Result<String, FixedError> {
        encode(value, self.width, self.signedness)
    }

    /// Decodes a bit string under this width's signedness. See [`decode`].
    pub fn decode(&self, bits: &str) -> Result<i64, FixedError> {
        decode(bits, self.signedness)
    }
}
