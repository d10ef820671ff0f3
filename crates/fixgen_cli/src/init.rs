//! `fixgen init` — manifest scaffolding command.
//!
//! Writes a template `fixgen.toml` with one example of each item type, either
//! into a new directory or into the current one.

use std::fs;
use std::path::{Path, PathBuf};

use fixgen_config::MANIFEST_FILE;

use crate::GlobalArgs;

/// Runs the `fixgen init` command.
///
/// If `name` is `Some`, creates a new directory with that name. Otherwise
/// writes into the current working directory. Never overwrites an existing
/// manifest. Returns exit code 0 on success.
pub fn run(name: Option<String>, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let dir = match &name {
        Some(n) => {
            let dir = PathBuf::from(n);
            if dir.exists() {
                return Err(format!("directory '{n}' already exists").into());
            }
            fs::create_dir_all(&dir)?;
            dir
        }
        None => std::env::current_dir()?,
    };

    let manifest_path = dir.join(MANIFEST_FILE);
    if manifest_path.exists() {
        return Err(format!("'{}' already exists", manifest_path.display()).into());
    }

    let package_name = package_name_for(&dir);
    fs::write(&manifest_path, template(&package_name))?;
    tracing::debug!(path = %manifest_path.display(), package = %package_name, "wrote manifest template");

    if !global.quiet {
        eprintln!("     Created {}", manifest_path.display());
    }
    Ok(0)
}

/// Derives a legal SystemVerilog package name from the directory name.
fn package_name_for(dir: &Path) -> String {
    let stem = dir
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("globals");
    let mut name: String = stem
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect();
    if !name.starts_with(|c: char| c.is_ascii_alphabetic()) {
        name.insert(0, 'p');
    }
    format!("{name}_pkg")
}

/// Template manifest contents.
fn template(package_name: &str) -> String {
    format!(
        r#"[package]
name = "{package_name}"

# Derives <PREFIX>_WIDTH, <PREFIX>_POINT and the <PREFIX>_FORMAT typedef.
[[item]]
type = "format"
prefix = "sample"
value = 1.23
resolution = 0.0001
signed = true

[[item]]
type = "constant"
name = "NUM_TAPS"
value = 4
kind = "int"

[[item]]
type = "constant"
name = "TAP_WEIGHTS"
value = [0.125, 0.375, 0.375, 0.125]
kind = "float"
"#
    )
}
