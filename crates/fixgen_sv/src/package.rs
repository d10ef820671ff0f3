//! Ordered collections of declarations serialized as a SystemVerilog package.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use fixgen_fixed::FixedFormat;
use indexmap::IndexMap;

use crate::decl::{Constant, Declaration, Typedef};
use crate::error::SvError;
use crate::literal::LiteralKind;

/// Package name used when none is given.
pub const DEFAULT_PACKAGE_NAME: &str = "globals";

/// File extension of emitted packages.
pub const PACKAGE_EXTENSION: &str = "sv";

/// Indentation of declarations inside the package body.
const INDENT: &str = "    ";

/// A named SystemVerilog package under construction.
///
/// Declarations are keyed by name and emitted in insertion order. Names are
/// unique; a rejected [`add`](Package::add) leaves the package unchanged.
#[derive(Clone, Debug, PartialEq)]
pub struct Package {
    name: String,
    decls: IndexMap<String, Declaration>,
}

impl Default for Package {
    fn default() -> Self {
        Self::new(DEFAULT_PACKAGE_NAME)
    }
}

impl Package {
    /// Creates an empty package.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            decls: IndexMap::new(),
        }
    }

    /// Package name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of declarations.
    pub fn len(&self) -> usize {
        self.decls.len()
    }

    /// Returns true if nothing has been declared.
    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    /// Returns true if a declaration with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.decls.contains_key(name)
    }

    /// Looks up a declaration by name.
    pub fn get(&self, name: &str) -> Option<&Declaration> {
        self.decls.get(name)
    }

    /// Declarations in emission order.
    pub fn declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.decls.values()
    }

    /// Adds a declaration, rejecting names already in use.
    pub fn add(&mut self, decl: impl Into<Declaration>) -> Result<(), SvError> {
        let decl = decl.into();
        if self.contains(decl.name()) {
            return Err(SvError::DuplicateName(decl.name().to_string()));
        }
        tracing::debug!(package = %self.name, name = decl.name(), "added declaration");
        self.decls.insert(decl.name().to_string(), decl);
        Ok(())
    }

    /// Registers `<PREFIX>_WIDTH`, `<PREFIX>_POINT` and `<PREFIX>_FORMAT` for a format.
    ///
    /// The prefix is upper-cased. Either all three declarations are added or,
    /// if any name is taken, none are.
    pub fn add_fixed_format(&mut self, format: &FixedFormat, prefix: &str) -> Result<(), SvError> {
        let prefix = prefix.to_uppercase();
        let decls: [Declaration; 3] = [
            Constant::new(
                format!("{prefix}_WIDTH"),
                i64::from(format.width),
                Some(LiteralKind::Int),
            )
            .into(),
            Constant::new(
                format!("{prefix}_POINT"),
                i64::from(format.point),
                Some(LiteralKind::Int),
            )
            .into(),
            Typedef::new(format!("{prefix}_FORMAT"), format.width, format.is_signed()).into(),
        ];
        if let Some(taken) = decls.iter().find(|d| self.contains(d.name())) {
            return Err(SvError::DuplicateName(taken.name().to_string()));
        }
        for decl in decls {
            self.add(decl)?;
        }
        Ok(())
    }

    /// Renders the complete package text.
    ///
    /// Every declaration is rendered before anything is returned, so a failure
    /// in any of them yields no text at all.
    pub fn serialize(&self) -> Result<String, SvError> {
        let mut out = format!("package {};\n\n", self.name);
        for decl in self.decls.values() {
            out.push_str(INDENT);
            out.push_str(&decl.render()?);
            out.push_str(";\n");
        }
        out.push('\n');
        out.push_str(&format!("endpackage // {}\n", self.name));
        Ok(out)
    }

    /// File name used by [`persist`](Package::persist) when no path is given.
    pub fn default_file_name(&self) -> String {
        format!("{}.{PACKAGE_EXTENSION}", self.name)
    }

    /// Writes the serialized package to `writer`.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), SvError> {
        let text = self.serialize()?;
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Writes the package to `path`, or to `<name>.sv` in the working directory.
    ///
    /// The text is rendered before the file is created, so a rendering error
    /// leaves no file behind. Returns the path written.
    pub fn persist(&self, path: Option<&Path>) -> Result<PathBuf, SvError> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(self.default_file_name()));
        let text = self.serialize()?;
        let mut writer = BufWriter::new(File::create(&path)?);
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
        tracing::info!(
            package = %self.name,
            path = %path.display(),
            declarations = self.len(),
            "wrote package"
        );
        Ok(path)
    }
}
