//! Package-level declarations: parameters and packed-vector typedefs.

use crate::error::SvError;
use crate::literal::{format_literal, infer_array_dims, Literal, LiteralKind};

/// Storage keyword used by typedefs unless overridden.
pub const DEFAULT_TYPEDEF_KIND: &str = "logic";

/// A `parameter` declaration holding a constant value.
#[derive(Clone, Debug, PartialEq)]
pub struct Constant {
    name: String,
    value: Literal,
    kind: Option<LiteralKind>,
}

impl Constant {
    /// Creates a parameter. With `kind == None` the type keyword is omitted and
    /// each scalar renders according to its own type.
    pub fn new(name: impl Into<String>, value: impl Into<Literal>, kind: Option<LiteralKind>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            kind,
        }
    }

    /// Parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameter value.
    pub fn value(&self) -> &Literal {
        &self.value
    }

    /// Declared type keyword, if any.
    pub fn kind(&self) -> Option<LiteralKind> {
        self.kind
    }

    /// Renders `parameter [kind] NAME [dims] = literal`, without the semicolon.
    pub fn render(&self) -> Result<String, SvError> {
        let mut parts = vec!["parameter".to_string()];
        if let Some(kind) = self.kind {
            parts.push(kind.to_string());
        }
        parts.push(self.name.clone());
        if self.value.is_array() {
            parts.push(infer_array_dims(&self.value)?);
        }
        parts.push("=".to_string());
        parts.push(format_literal(&self.value, self.kind)?);
        Ok(parts.join(" "))
    }
}

/// A `typedef` of a packed bit vector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typedef {
    name: String,
    width: u32,
    signed: bool,
    kind: String,
}

impl Typedef {
    /// Creates a `logic` vector typedef.
    pub fn new(name: impl Into<String>, width: u32, signed: bool) -> Self {
        Self {
            name: name.into(),
            width,
            signed,
            kind: DEFAULT_TYPEDEF_KIND.to_string(),
        }
    }

    /// Replaces the storage keyword (`logic`, `bit`, `reg`, ...).
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of bits.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Whether the vector is declared `signed`.
    pub fn is_signed(&self) -> bool {
        self.signed
    }

    /// Storage keyword.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Renders `typedef kind [signed] [W-1:0] NAME`, without the semicolon.
    pub fn render(&self) -> Result<String, SvError> {
        if self.width == 0 {
            return Err(SvError::ZeroWidth(self.name.clone()));
        }
        let mut parts = vec!["typedef".to_string(), self.kind.clone()];
        if self.signed {
            parts.push("signed".to_string());
        }
        parts.push(format!("[{}:0]", self.width - 1));
        parts.push(self.name.clone());
        Ok(parts.join(" "))
    }
}

/// Any declaration a package can hold.
#[derive(Clone, Debug, PartialEq)]
pub enum Declaration {
    /// A `parameter`.
    Constant(Constant),
    /// A `typedef`.
    Typedef(Typedef),
}

impl Declaration {
    /// Declared name, unique within a package.
    pub fn name(&self) -> &str {
        match self {
            Declaration::Constant(c) => c.name(),
            Declaration::Typedef(t) => t.name(),
        }
    }

    /// Renders one package line, without indentation or semicolon.
    pub fn render(&self) -> Result<String, SvError> {
        match self {
            Declaration::Constant(c) => c.render(),
            Declaration::Typedef(t) => t.render(),
        }
    }
}

impl From<Constant> for Declaration {
    fn from(c: Constant) -> Self {
        Declaration::Constant(c)
    }
}

impl From<Typedef> for Declaration {
    fn from(t: Typedef) -> Self {
        Declaration::Typedef(t)
    }
}
