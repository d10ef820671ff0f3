//! SystemVerilog package emission.
//!
//! Builds the text of a `package ... endpackage` block from constants, packed
//! typedefs, and fixed-point formats produced by [`fixgen_fixed`]:
//!
//! ```
//! use fixgen_fixed::{derive_format, Signedness};
//! use fixgen_sv::{Constant, LiteralKind, Package};
//!
//! let mut pkg = Package::default();
//! pkg.add(Constant::new("TOTAL", 456, Some(LiteralKind::Int))).unwrap();
//! let fmt = derive_format(1.23, 0.0001, Signedness::Signed).unwrap();
//! pkg.add_fixed_format(&fmt, "gain").unwrap();
//! assert!(pkg.serialize().unwrap().contains("typedef logic signed [15:0] GAIN_FORMAT;"));
//! ```

#![warn(missing_docs)]

pub mod decl;
pub mod error;
pub mod literal;
pub mod package;

pub use decl::{Constant, Declaration, Typedef, DEFAULT_TYPEDEF_KIND};
pub use error::SvError;
pub use literal::{format_literal, infer_array_dims, Literal, LiteralKind, Scalar};
pub use package::{Package, DEFAULT_PACKAGE_NAME, PACKAGE_EXTENSION};
