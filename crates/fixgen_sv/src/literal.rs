//! SystemVerilog literal rendering and array-shape inference.
//!
//! A [`Literal`] is either a single [`Scalar`] or an array of literals. The
//! caller builds it up front, so rendering and dimension inference are plain
//! structural recursion. Arrays render as assignment patterns (`'{a, b}`) and
//! declare their shape as unpacked dimensions (`[2][3]`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SvError;

/// Data type keyword a literal is rendered under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiteralKind {
    /// 32-bit integer, decimal.
    Int,
    /// 64-bit integer, decimal.
    LongInt,
    /// Quoted string.
    String,
    /// Real number in scientific notation.
    Float,
}

impl LiteralKind {
    /// Keyword as written in a declaration.
    pub fn as_str(self) -> &'static str {
        match self {
            LiteralKind::Int => "int",
            LiteralKind::LongInt => "longint",
            LiteralKind::String => "string",
            LiteralKind::Float => "float",
        }
    }
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LiteralKind {
    type Err = SvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "int" => Ok(LiteralKind::Int),
            "longint" => Ok(LiteralKind::LongInt),
            "string" => Ok(LiteralKind::String),
            "float" => Ok(LiteralKind::Float),
            _ => Err(SvError::InvalidKind(s.to_string())),
        }
    }
}

/// A single constant value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Integer value.
    Int(i64),
    /// Real value.
    Float(f64),
    /// Text value.
    Str(String),
}

impl Scalar {
    /// Name of the scalar's type, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Scalar::Int(_) => "integer",
            Scalar::Float(_) => "float",
            Scalar::Str(_) => "string",
        }
    }

    /// Renders the scalar under `kind`, or under its own type when `kind` is `None`.
    pub fn render(&self, kind: Option<LiteralKind>) -> Result<String, SvError> {
        match (kind, self) {
            (Some(LiteralKind::Int | LiteralKind::LongInt) | None, Scalar::Int(v)) => {
                Ok(v.to_string())
            }
            (Some(LiteralKind::Float) | None, Scalar::Float(v)) => format_scientific(*v),
            (Some(LiteralKind::Float), Scalar::Int(v)) => format_scientific(*v as f64),
            (Some(LiteralKind::String) | None, Scalar::Str(s)) => Ok(quote(s)),
            (Some(LiteralKind::String), Scalar::Int(v)) => Ok(quote(&v.to_string())),
            (Some(LiteralKind::String), Scalar::Float(v)) => Ok(quote(&format!("{v:?}"))),
            (Some(kind), other) => Err(SvError::UnsupportedType {
                kind,
                type_name: other.type_name(),
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(v) => write!(f, "{v}"),
            Scalar::Float(v) => write!(f, "{v:?}"),
            Scalar::Str(s) => write!(f, "{s:?}"),
        }
    }
}

/// A constant value: a scalar or an arbitrarily nested array of scalars.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    /// A single value.
    Scalar(Scalar),
    /// An ordered sequence of values.
    Array(Vec<Literal>),
}

impl Literal {
    /// Returns true for arrays.
    pub fn is_array(&self) -> bool {
        matches!(self, Literal::Array(_))
    }
}

impl From<Scalar> for Literal {
    fn from(s: Scalar) -> Self {
        Literal::Scalar(s)
    }
}

impl From<i64> for Literal {
    fn from(v: i64) -> Self {
        Literal::Scalar(Scalar::Int(v))
    }
}

impl From<i32> for Literal {
    fn from(v: i32) -> Self {
        Literal::Scalar(Scalar::Int(i64::from(v)))
    }
}

impl From<f64> for Literal {
    fn from(v: f64) -> Self {
        Literal::Scalar(Scalar::Float(v))
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::Scalar(Scalar::Str(s.to_string()))
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Literal::Scalar(Scalar::Str(s))
    }
}

impl<T: Into<Literal>> From<Vec<T>> for Literal {
    fn from(items: Vec<T>) -> Self {
        Literal::Array(items.into_iter().map(Into::into).collect())
    }
}

/// Renders a literal, recursing into arrays as `'{e1, e2, ...}`.
pub fn format_literal(value: &Literal, kind: Option<LiteralKind>) -> Result<String, SvError> {
    match value {
        Literal::Scalar(s) => s.render(kind),
        Literal::Array(items) => {
            let parts = items
                .iter()
                .map(|item| format_literal(item, kind))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(format!("'{{{}}}", parts.join(", ")))
        }
    }
}

/// Returns the unpacked dimensions of a literal, e.g. `[2][3]`.
///
/// Scalars have no dimensions. Every element of an array must have the same
/// shape, and arrays must not be empty.
pub fn infer_array_dims(value: &Literal) -> Result<String, SvError> {
    let items = match value {
        Literal::Scalar(_) => return Ok(String::new()),
        Literal::Array(items) => items,
    };
    let (first, rest) = items.split_first().ok_or(SvError::EmptyArray)?;
    let expected = infer_array_dims(first)?;
    for item in rest {
        let found = infer_array_dims(item)?;
        if found != expected {
            return Err(SvError::DimensionMismatch { expected, found });
        }
    }
    Ok(format!("[{}]{}", items.len(), expected))
}

/// C `%e` layout: `d.dddddde±XX`. NaN and infinities are rejected.
fn format_scientific(v: f64) -> Result<String, SvError> {
    if !v.is_finite() {
        return Err(SvError::NonFinite(v));
    }
    let s = format!("{v:.6e}");
    Ok(match s.split_once('e') {
        Some((mantissa, exp)) => {
            let exp: i32 = exp.parse().unwrap_or_default();
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
        }
        None => s,
    })
}

/// Quotes a string, escaping characters that would end or break the literal.
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if c.is_ascii_control() => out.push_str(&format!("\\{:03o}", c as u32)),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parse_case_insensitive() {
        assert_eq!("INT".parse::<LiteralKind>().unwrap(), LiteralKind::Int);
        assert_eq!("LongInt".parse::<LiteralKind>().unwrap(), LiteralKind::LongInt);
        assert_eq!("string".parse::<LiteralKind>().unwrap(), LiteralKind::String);
        assert_eq!("Float".parse::<LiteralKind>().unwrap(), LiteralKind::Float);
    }

    #[test]
    fn kind_parse_invalid() {
        let err = "bit".parse::<LiteralKind>().unwrap_err();
        assert!(matches!(err, SvError::InvalidKind(ref k) if k == "bit"));
    }

    #[test]
    fn int_scalars() {
        let lit = Literal::from(123);
        assert_eq!(format_literal(&lit, Some(LiteralKind::Int)).unwrap(), "123");
        assert_eq!(format_literal(&lit, Some(LiteralKind::LongInt)).unwrap(), "123");
        assert_eq!(format_literal(&Literal::from(-7i64), None).unwrap(), "-7");
    }

    #[test]
    fn string_scalars() {
        let lit = Literal::from("abc");
        assert_eq!(format_literal(&lit, Some(LiteralKind::String)).unwrap(), "\"abc\"");
        assert_eq!(format_literal(&lit, None).unwrap(), "\"abc\"");
        assert_eq!(
            format_literal(&Literal::from(42), Some(LiteralKind::String)).unwrap(),
            "\"42\""
        );
    }

    #[test]
    fn string_escaping() {
        let lit = Literal::from("say \"hi\"\\\n");
        assert_eq!(
            format_literal(&lit, Some(LiteralKind::String)).unwrap(),
            r#""say \"hi\"\\\n""#
        );
    }

    #[test]
    fn control_characters_are_escaped() {
        let lit = Literal::from("a\rb\0c\x1b");
        let text = format_literal(&lit, Some(LiteralKind::String)).unwrap();
        assert_eq!(text, r#""a\rb\000c\033""#);
        assert!(!text.chars().any(|c| c.is_control()));
    }

    #[test]
    fn float_scalars() {
        let f = |v: f64| format_literal(&Literal::from(v), Some(LiteralKind::Float)).unwrap();
        assert_eq!(f(1.23), "1.230000e+00");
        assert_eq!(f(-0.456), "-4.560000e-01");
        assert_eq!(f(0.0), "0.000000e+00");
        assert_eq!(f(12345.678), "1.234568e+04");
        assert_eq!(f(1e-100), "1.000000e-100");
    }

    #[test]
    fn non_finite_floats_are_rejected() {
        for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = format_literal(&Literal::from(v), Some(LiteralKind::Float)).unwrap_err();
            assert!(matches!(err, SvError::NonFinite(_)));
            assert!(format_literal(&Literal::from(v), None).is_err());
        }
        let lit = Literal::from(vec![1.0, f64::INFINITY]);
        assert!(matches!(
            format_literal(&lit, Some(LiteralKind::Float)),
            Err(SvError::NonFinite(_))
        ));
    }

    #[test]
    fn int_as_float() {
        let lit = Literal::from(5);
        assert_eq!(
            format_literal(&lit, Some(LiteralKind::Float)).unwrap(),
            "5.000000e+00"
        );
    }

    #[test]
    fn unsupported_combinations() {
        let err = format_literal(&Literal::from("abc"), Some(LiteralKind::Int)).unwrap_err();
        assert!(matches!(
            err,
            SvError::UnsupportedType {
                kind: LiteralKind::Int,
                type_name: "string",
                ..
            }
        ));
        let err = format_literal(&Literal::from(1.5), Some(LiteralKind::LongInt)).unwrap_err();
        assert!(matches!(err, SvError::UnsupportedType { type_name: "float", .. }));
        assert!(format_literal(&Literal::from("x"), Some(LiteralKind::Float)).is_err());
    }

    #[test]
    fn flat_array() {
        let lit = Literal::from(vec![1, 2, 3]);
        assert_eq!(
            format_literal(&lit, Some(LiteralKind::Int)).unwrap(),
            "'{1, 2, 3}"
        );
    }

    #[test]
    fn nested_array() {
        let lit = Literal::from(vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(
            format_literal(&lit, Some(LiteralKind::Int)).unwrap(),
            "'{'{1, 2}, '{3, 4}}"
        );
    }

    #[test]
    fn array_error_propagates() {
        let lit = Literal::Array(vec![Literal::from(1), Literal::from("two")]);
        assert!(format_literal(&lit, Some(LiteralKind::Int)).is_err());
    }

    #[test]
    fn dims_of_scalar_is_empty() {
        assert_eq!(infer_array_dims(&Literal::from(1)).unwrap(), "");
    }

    #[test]
    fn dims_uniform() {
        let lit = Literal::from(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        assert_eq!(infer_array_dims(&lit).unwrap(), "[2][3]");
        let lit = Literal::from(vec![1, 2, 3, 4]);
        assert_eq!(infer_array_dims(&lit).unwrap(), "[4]");
    }

    #[test]
    fn dims_ragged() {
        let lit = Literal::from(vec![vec![1, 2, 3], vec![4, 5]]);
        let err = infer_array_dims(&lit).unwrap_err();
        assert!(matches!(
            err,
            SvError::DimensionMismatch { ref expected, ref found }
                if expected == "[3]" && found == "[2]"
        ));
    }

    #[test]
    fn dims_mixed_depth() {
        let lit = Literal::Array(vec![Literal::from(vec![1, 2]), Literal::from(3)]);
        assert!(matches!(
            infer_array_dims(&lit),
            Err(SvError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn dims_empty() {
        let lit = Literal::Array(Vec::new());
        assert!(matches!(infer_array_dims(&lit), Err(SvError::EmptyArray)));
    }

    #[test]
    fn literal_deserializes_untagged() {
        let lit: Literal = serde_json::from_str("[[1, 2], [3, 4]]").unwrap();
        assert_eq!(lit, Literal::from(vec![vec![1, 2], vec![3, 4]]));
        let lit: Literal = serde_json::from_str("1.5").unwrap();
        assert_eq!(lit, Literal::from(1.5));
        let lit: Literal = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(lit, Literal::from("abc"));
    }

    #[test]
    fn kind_serde() {
        let kind: LiteralKind = serde_json::from_str("\"longint\"").unwrap();
        assert_eq!(kind, LiteralKind::LongInt);
    }
}
