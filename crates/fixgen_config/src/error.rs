//! Error types for manifest loading, validation, and package assembly.

use fixgen_fixed::FixedError;
use fixgen_sv::SvError;

/// Errors that can occur when loading a `fixgen.toml` or building its package.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred while reading the manifest.
    #[error("failed to read manifest: {0}")]
    IoError(#[from] std::io::Error),

    /// The TOML content could not be parsed.
    #[error("failed to parse manifest: {0}")]
    ParseError(String),

    /// A required field is missing or empty.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// A manifest value failed validation.
    #[error("validation error: {0}")]
    ValidationError(String),

    /// A fixed-point format could not be derived.
    #[error("format error: {0}")]
    Format(#[from] FixedError),

    /// A declaration could not be registered or rendered.
    #[error("package error: {0}")]
    Package(#[from] SvError),
}
