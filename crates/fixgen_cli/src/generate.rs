//! `fixgen generate` — emits the package described by a manifest.

use std::fs;
use std::path::{Path, PathBuf};

use fixgen_config::{build_package, load_manifest_from_path, output_path, MANIFEST_FILE};

use crate::{GenerateArgs, GlobalArgs};

/// Runs the `fixgen generate` command.
///
/// Loads the manifest (`--manifest`, or `fixgen.toml` in the current
/// directory), builds the package, and writes it to `--output`, the manifest's
/// `package.output`, or `<name>.sv` next to the manifest. Returns exit code 0
/// on success.
pub fn run(args: &GenerateArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let manifest_path = match &global.manifest {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir()?.join(MANIFEST_FILE),
    };
    let manifest = load_manifest_from_path(&manifest_path)?;
    let pkg = build_package(&manifest)?;

    if args.stdout {
        print!("{}", pkg.serialize()?);
        return Ok(0);
    }

    let base_dir = manifest_path.parent().unwrap_or(Path::new("."));
    let target = match &args.output {
        Some(out) => PathBuf::from(out),
        None => output_path(&manifest, base_dir),
    };
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let written = pkg.persist(Some(&target))?;

    if !global.quiet {
        eprintln!(
            "     Wrote {} ({} declarations)",
            written.display(),
            pkg.len()
        );
    }
    Ok(0)
}
