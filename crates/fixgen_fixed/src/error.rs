//! Error types for bit-width, scaling, and encoding operations.

use crate::bits::Signedness;

/// Errors raised by the numeric core.
///
/// Every variant carries the offending input so a failed generation step can
/// be diagnosed without re-running it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FixedError {
    /// A bit width was requested for a value outside the calculator's domain.
    #[error("value {value} has no unsigned representation")]
    Domain {
        /// The rejected value.
        value: i64,
    },

    /// A rounding mode string did not name a known mode.
    #[error("invalid rounding mode '{0}' (expected round, ceil or floor)")]
    InvalidMode(String),

    /// An integer does not fit in the requested width.
    #[error("value {value} cannot be represented as {signedness} {width}-bit")]
    Overflow {
        /// The integer that was being encoded.
        value: i64,
        /// The requested bit width.
        width: u32,
        /// The requested signedness.
        signedness: Signedness,
    },

    /// A resolution that is not a finite positive number.
    #[error("invalid resolution {0} (must be finite and greater than zero)")]
    InvalidResolution(f64),

    /// Scaling a real value produced something that is not a 64-bit integer.
    #[error("value {value} scaled by 2^{point} is not representable as a 64-bit integer")]
    ScaledOutOfRange {
        /// The real value before scaling.
        value: f64,
        /// The fractional-bit count used for scaling.
        point: i32,
    },

    /// A bit string contained something other than `0` and `1`.
    #[error("invalid bit string '{0}'")]
    InvalidBits(String),

    /// A bit string decodes to a value outside the 64-bit integer range.
    #[error("bit string '{0}' does not fit in a 64-bit integer")]
    DecodeRange(String),
}
