//! Manifest file loading and validation.

use crate::error::ConfigError;
use crate::types::{ItemSpec, Manifest};
use std::path::Path;

/// Name of the manifest file looked up in a project directory.
pub const MANIFEST_FILE: &str = "fixgen.toml";

/// Loads and validates `<dir>/fixgen.toml`.
pub fn load_manifest(dir: &Path) -> Result<Manifest, ConfigError> {
    load_manifest_from_path(&dir.join(MANIFEST_FILE))
}

/// Loads and validates a manifest at an explicit path.
pub fn load_manifest_from_path(path: &Path) -> Result<Manifest, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), "loaded manifest");
    load_manifest_from_str(&content)
}

/// Parses and validates a manifest from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_manifest_from_str(content: &str) -> Result<Manifest, ConfigError> {
    let manifest: Manifest =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_manifest(&manifest)?;
    Ok(manifest)
}

/// Checks required names and numeric ranges before anything is generated.
fn validate_manifest(manifest: &Manifest) -> Result<(), ConfigError> {
    if manifest.package.name.trim().is_empty() {
        return Err(ConfigError::MissingField("package.name".to_string()));
    }
    for (i, item) in manifest.items.iter().enumerate() {
        if item.label().trim().is_empty() {
            let field = match item {
                ItemSpec::Format(_) => "prefix",
                ItemSpec::Constant(_) | ItemSpec::Typedef(_) => "name",
            };
            return Err(ConfigError::MissingField(format!("item[{i}].{field}")));
        }
        match item {
            ItemSpec::Format(f) => {
                if !f.resolution.is_finite() || f.resolution <= 0.0 {
                    return Err(ConfigError::ValidationError(format!(
                        "item[{i}] '{}': resolution must be a positive number, got {}",
                        f.prefix, f.resolution
                    )));
                }
                if !f.value.is_finite() {
                    return Err(ConfigError::ValidationError(format!(
                        "item[{i}] '{}': value must be finite",
                        f.prefix
                    )));
                }
            }
            ItemSpec::Typedef(t) if t.width == 0 => {
                return Err(ConfigError::ValidationError(format!(
                    "item[{i}] '{}': width must be at least 1",
                    t.name
                )));
            }
            ItemSpec::Typedef(_) | ItemSpec::Constant(_) => {}
        }
    }
    Ok(())
}
