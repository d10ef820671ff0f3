//! Manifest types deserialized from `fixgen.toml`.

use fixgen_fixed::Signedness;
use fixgen_sv::{Literal, LiteralKind, DEFAULT_PACKAGE_NAME, DEFAULT_TYPEDEF_KIND};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};

/// The top-level generation manifest parsed from `fixgen.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Manifest {
    /// Package name and output location.
    #[serde(default)]
    pub package: PackageMeta,
    /// Declarations to register, in emission order (`[[item]]` tables).
    #[serde(default, rename = "item")]
    pub items: Vec<ItemSpec>,
}

/// The `[package]` table.
#[derive(Debug, Deserialize)]
pub struct PackageMeta {
    /// SystemVerilog package name.
    #[serde(default = "default_package_name")]
    pub name: String,
    /// Output file, relative to the manifest directory. Defaults to `<name>.sv`.
    #[serde(default)]
    pub output: Option<String>,
}

impl Default for PackageMeta {
    fn default() -> Self {
        Self {
            name: default_package_name(),
            output: None,
        }
    }
}

/// One `[[item]]` entry, selected by its `type` key.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ItemSpec {
    /// A fixed-point format derived from a value and resolution.
    Format(FormatSpec),
    /// A `parameter` constant.
    Constant(ConstantSpec),
    /// A packed-vector `typedef`.
    Typedef(TypedefSpec),
}

impl ItemSpec {
    /// The name (or, for formats, the prefix) identifying this item.
    pub fn label(&self) -> &str {
        match self {
            ItemSpec::Format(f) => &f.prefix,
            ItemSpec::Constant(c) => &c.name,
            ItemSpec::Typedef(t) => &t.name,
        }
    }
}

/// `type = "format"`: registers `<PREFIX>_WIDTH`, `<PREFIX>_POINT`, `<PREFIX>_FORMAT`.
#[derive(Debug, Deserialize)]
pub struct FormatSpec {
    /// Name prefix, upper-cased on emission.
    pub prefix: String,
    /// Largest-magnitude value the format must hold.
    pub value: f64,
    /// Required resolution; the derived format is at least this fine.
    pub resolution: f64,
    /// Two's complement (default) or unsigned.
    #[serde(default = "default_signed")]
    pub signed: bool,
}

impl FormatSpec {
    /// Encoding selected by the `signed` flag.
    pub fn signedness(&self) -> Signedness {
        Signedness::from_signed(self.signed)
    }
}

/// `type = "constant"`: a `parameter` with a scalar or nested-array value.
#[derive(Debug, Deserialize)]
pub struct ConstantSpec {
    /// Parameter name.
    pub name: String,
    /// Scalar or (nested) array value.
    pub value: Literal,
    /// Type keyword, matched case-insensitively. Omitted when absent.
    #[serde(default, deserialize_with = "deserialize_kind")]
    pub kind: Option<LiteralKind>,
}

/// `type = "typedef"`: a packed bit-vector type.
#[derive(Debug, Deserialize)]
pub struct TypedefSpec {
    /// Type name.
    pub name: String,
    /// Number of bits.
    pub width: u32,
    /// Whether the vector is `signed`.
    #[serde(default)]
    pub signed: bool,
    /// Storage keyword.
    #[serde(default = "default_typedef_kind")]
    pub kind: String,
}

fn default_package_name() -> String {
    DEFAULT_PACKAGE_NAME.to_string()
}

fn default_typedef_kind() -> String {
    DEFAULT_TYPEDEF_KIND.to_string()
}

fn default_signed() -> bool {
    true
}

/// Deserializes a literal kind with the same case-insensitive rules as
/// [`LiteralKind::from_str`](std::str::FromStr).
fn deserialize_kind<'de, D>(deserializer: D) -> Result<Option<LiteralKind>, D::Error>
where
    D: Deserializer<'de>,
{
    struct KindVisitor;

    impl<'de> Visitor<'de> for KindVisitor {
        type Value = Option<LiteralKind>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            formatter.write_str("one of \"int\", \"longint\", \"string\", \"float\"")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            v.parse().map(Some).map_err(E::custom)
        }
    }

    deserializer.deserialize_str(KindVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_manifest_from_str;

    #[test]
    fn kind_is_case_insensitive() {
        let toml = r#"
[[item]]
type = "constant"
name = "A"
value = 1
kind = "LongInt"
"#;
        let manifest = load_manifest_from_str(toml).unwrap();
        match &manifest.items[0] {
            ItemSpec::Constant(c) => assert_eq!(c.kind, Some(LiteralKind::LongInt)),
            other => panic!("expected constant, got {other:?}"),
        }
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let toml = r#"
[[item]]
type = "constant"
name = "A"
value = 1
kind = "bit"
"#;
        let err = load_manifest_from_str(toml).unwrap_err();
        assert!(err.to_string().contains("invalid literal kind 'bit'"));
    }

    #[test]
    fn format_defaults_to_signed() {
        let toml = r#"
[[item]]
type = "format"
prefix = "adc"
value = 1.5
resolution = 0.01
"#;
        let manifest = load_manifest_from_str(toml).unwrap();
        match &manifest.items[0] {
            ItemSpec::Format(f) => {
                assert!(f.signed);
                assert_eq!(f.signedness(), Signedness::Signed);
            }
            other => panic!("expected format, got {other:?}"),
        }
    }

    #[test]
    fn integer_format_value_is_accepted() {
        let toml = r#"
[[item]]
type = "format"
prefix = "count"
value = 1000
resolution = 1
signed = false
"#;
        let manifest = load_manifest_from_str(toml).unwrap();
        match &manifest.items[0] {
            ItemSpec::Format(f) => {
                assert_eq!(f.value, 1000.0);
                assert_eq!(f.resolution, 1.0);
            }
            other => panic!("expected format, got {other:?}"),
        }
    }

    #[test]
    fn typedef_defaults() {
        let toml = r#"
[[item]]
type = "typedef"
name = "BYTE_T"
width = 8
"#;
        let manifest = load_manifest_from_str(toml).unwrap();
        match &manifest.items[0] {
            ItemSpec::Typedef(t) => {
                assert!(!t.signed);
                assert_eq!(t.kind, "logic");
            }
            other => panic!("expected typedef, got {other:?}"),
        }
    }

    #[test]
    fn nested_array_value() {
        let toml = r#"
[[item]]
type = "constant"
name = "M"
value = [[1, 2], [3, 4]]
"#;
        let manifest = load_manifest_from_str(toml).unwrap();
        match &manifest.items[0] {
            ItemSpec::Constant(c) => {
                assert_eq!(c.value, Literal::from(vec![vec![1, 2], vec![3, 4]]));
                assert!(c.kind.is_none());
            }
            other => panic!("expected constant, got {other:?}"),
        }
    }

    #[test]
    fn unknown_item_type_is_rejected() {
        let toml = r#"
[[item]]
type = "module"
name = "top"
"#;
        assert!(load_manifest_from_str(toml).is_err());
    }

    #[test]
    fn item_labels() {
        let toml = r#"
[[item]]
type = "format"
prefix = "x"
value = 1.0
resolution = 0.5

[[item]]
type = "typedef"
name = "T"
width = 1
"#;
        let manifest = load_manifest_from_str(toml).unwrap();
        let labels: Vec<&str> = manifest.items.iter().map(ItemSpec::label).collect();
        assert_eq!(labels, ["x", "T"]);
    }
}
