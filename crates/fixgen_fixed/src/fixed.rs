//! Fixed-point scaling between real values and integers.
//!
//! A fixed-point position `point` is the number of fractional bits. The
//! resolution of a format is `2^-point`; a real value `x` is stored as the
//! integer nearest to `x / resolution` under a chosen [`RoundMode`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FixedError;

/// Exclusive upper bound of `i64` as an `f64` (`2^63`).
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Policy for turning a scaled real value into an integer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundMode {
    /// Nearest integer, ties to even.
    #[default]
    Round,
    /// Toward positive infinity.
    Ceil,
    /// Toward negative infinity.
    Floor,
}

impl RoundMode {
    /// Applies the rounding policy.
    pub fn apply(self, x: f64) -> f64 {
        match self {
            RoundMode::Round => x.round_ties_even(),
            RoundMode::Ceil => x.ceil(),
            RoundMode::Floor => x.floor(),
        }
    }

    /// Lowercase name as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            RoundMode::Round => "round",
            RoundMode::Ceil => "ceil",
            RoundMode::Floor => "floor",
        }
    }
}

impl fmt::Display for RoundMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoundMode {
    type Err = FixedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "round" => Ok(RoundMode::Round),
            "ceil" => Ok(RoundMode::Ceil),
            "floor" => Ok(RoundMode::Floor),
            _ => Err(FixedError::InvalidMode(s.to_string())),
        }
    }
}

/// Returns the smallest non-zero step of a format with `point` fractional bits.
pub fn point_to_resolution(point: i32) -> f64 {
    0.5f64.powi(point)
}

/// Returns the fewest fractional bits whose resolution is at least as fine as `res`.
pub fn resolution_to_point(res: f64) -> Result<i32, FixedError> {
    if !res.is_finite() || res <= 0.0 {
        return Err(FixedError::InvalidResolution(res));
    }
    Ok((-res.log2()).ceil() as i32)
}

/// Scales `value` by `2^point` and rounds it to an integer.
pub fn scale(value: f64, point: i32, mode: RoundMode) -> Result<i64, FixedError> {
    let scaled = mode.apply(value / point_to_resolution(point));
    if !scaled.is_finite() || scaled < -I64_LIMIT || scaled >= I64_LIMIT {
        return Err(FixedError::ScaledOutOfRange { value, point });
    }
    Ok(scaled as i64)
}

/// Maps a scaled integer back to the real value it stands for.
pub fn unscale(fixed: i64, point: i32) -> f64 {
    fixed as f64 * point_to_resolution(point)
}
