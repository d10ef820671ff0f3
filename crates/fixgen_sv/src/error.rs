//! Error types for literal formatting and package assembly.

use std::io;

use crate::literal::LiteralKind;

/// Errors that can occur while rendering declarations or writing a package.
#[derive(Debug, thiserror::Error)]
pub enum SvError {
    /// A literal kind string did not name a known kind.
    #[error("invalid literal kind '{0}' (expected int, longint, string or float)")]
    InvalidKind(String),

    /// A scalar cannot be rendered under the requested kind.
    #[error("cannot render {type_name} value {value} under kind {kind}")]
    UnsupportedType {
        /// The requested literal kind.
        kind: LiteralKind,
        /// Type of the offending scalar.
        type_name: &'static str,
        /// The offending scalar, as written in the source data.
        value: String,
    },

    /// A NaN or infinite real has no literal form.
    #[error("non-finite value {0} has no real literal")]
    NonFinite(f64),

    /// Elements of a nested array have different shapes.
    #[error("ragged array: element has dimensions '{found}', expected '{expected}'")]
    DimensionMismatch {
        /// Dimensions of the first element.
        expected: String,
        /// Dimensions of the first element that differs.
        found: String,
    },

    /// An array with no elements has no dimension to declare.
    #[error("empty arrays cannot be declared")]
    EmptyArray,

    /// A declaration with this name is already in the package.
    #[error("duplicate declaration '{0}'")]
    DuplicateName(String),

    /// A typedef was declared with zero bits.
    #[error("typedef '{0}' must be at least one bit wide")]
    ZeroWidth(String),

    /// The package could not be written.
    #[error("failed to write package: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_kind_display() {
        let e = SvError::InvalidKind("bit".into());
        assert_eq!(
            e.to_string(),
            "invalid literal kind 'bit' (expected int, longint, string or float)"
        );
    }

    #[test]
    fn unsupported_type_display() {
        let e = SvError::UnsupportedType {
            kind: LiteralKind::Int,
            type_name: "string",
            value: "\"abc\"".into(),
        };
        assert_eq!(
            e.to_string(),
            "cannot render string value \"abc\" under kind int"
        );
    }

    #[test]
    fn non_finite_display() {
        let e = SvError::NonFinite(f64::INFINITY);
        assert_eq!(e.to_string(), "non-finite value inf has no real literal");
    }

    #[test]
    fn dimension_mismatch_display() {
        let e = SvError::DimensionMismatch {
            expected: "[3]".into(),
            found: "[2]".into(),
        };
        assert_eq!(
            e.to_string(),
            "ragged array: element has dimensions '[2]', expected '[3]'"
        );
    }

    #[test]
    fn duplicate_name_display() {
        let e = SvError::DuplicateName("TOTAL".into());
        assert_eq!(e.to_string(), "duplicate declaration 'TOTAL'");
    }

    #[test]
    fn zero_width_display() {
        let e = SvError::ZeroWidth("BUS_T".into());
        assert_eq!(e.to_string(), "typedef 'BUS_T' must be at least one bit wide");
    }

    #[test]
    fn io_display() {
        let e = SvError::Io(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert!(e.to_string().starts_with("failed to write package:"));
    }
}
