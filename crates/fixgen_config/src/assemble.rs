//! Turning a validated manifest into a package.

use std::path::{Path, PathBuf};

use fixgen_fixed::derive_format;
use fixgen_sv::{Constant, Package, Typedef};

use crate::error::ConfigError;
use crate::types::{ItemSpec, Manifest};

/// Registers every manifest item, in order, into a new package.
///
/// Stops at the first item that fails; no partially built package escapes.
pub fn build_package(manifest: &Manifest) -> Result<Package, ConfigError> {
    let mut pkg = Package::new(manifest.package.name.as_str());
    for item in &manifest.items {
        match item {
            ItemSpec::Format(spec) => {
                let format = derive_format(spec.value, spec.resolution, spec.signedness())?;
                pkg.add_fixed_format(&format, &spec.prefix)?;
            }
            ItemSpec::Constant(spec) => {
                pkg.add(Constant::new(spec.name.as_str(), spec.value.clone(), spec.kind))?;
            }
            ItemSpec::Typedef(spec) => {
                pkg.add(
                    Typedef::new(spec.name.as_str(), spec.width, spec.signed)
                        .with_kind(spec.kind.as_str()),
                )?;
            }
        }
    }
    tracing::debug!(package = pkg.name(), declarations = pkg.len(), "assembled package");
    Ok(pkg)
}

/// Where the package from `manifest` should be written.
///
/// Relative `output` paths resolve against `base_dir` (the manifest's
/// directory); without one, the file is `<base_dir>/<name>.sv`.
pub fn output_path(manifest: &Manifest, base_dir: &Path) -> PathBuf {
    match &manifest.package.output {
        Some(output) => base_dir.join(output),
        None => base_dir.join(format!(
            "{}.{}",
            manifest.package.name,
            fixgen_sv::PACKAGE_EXTENSION
        )),
    }
}
