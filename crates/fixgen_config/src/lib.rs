//! Parsing and validation of `fixgen.toml` generation manifests.
//!
//! A manifest names the package to emit and lists, in order, the fixed-point
//! formats, constants, and typedefs it contains. [`build_package`] turns a
//! validated [`Manifest`] into a [`fixgen_sv::Package`].

#![warn(missing_docs)]

pub mod assemble;
pub mod error;
pub mod loader;
pub mod types;

pub use assemble::{build_package, output_path};
pub use error::ConfigError;
pub use loader::{load_manifest, load_manifest_from_path, load_manifest_from_str, MANIFEST_FILE};
pub use types::*;
