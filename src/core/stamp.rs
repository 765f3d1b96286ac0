//! Version stamping for packaging metadata.
//!
//! Pulls the quoted version from a package manifest under
//! `crates/<package>/` and substitutes it into that package's
//! `build/file_id.diz` template.

use crate::error::Result;
use crate::utils::{io, parser};
use std::path::{Path, PathBuf};

/// Placeholder token replaced in template files.
pub const PLACEHOLDER: &str = "#VERSION";

/// First double-quoted span on a line.
const QUOTED_VALUE: &str = r#""([^"]*)""#;

pub fn manifest_path(root: &Path, package_id: &str) -> PathBuf {
    root.join("crates").join(package_id).join("Cargo.toml")
}

pub fn template_path(root: &Path, package_id: &str) -> PathBuf {
    root.join("crates")
        .join(package_id)
        .join("build")
        .join("file_id.diz")
}

/// Extract the version from manifest content.
///
/// The first line starting with `version` wins, and the value is the first
/// double-quoted span on that line. No matching line (or a matching line
/// without a quoted span) yields the empty string; stamping then strips
/// the placeholder instead of failing.
pub fn extract_version(manifest: &str) -> String {
    manifest
        .lines()
        .find(|line| line.starts_with("version"))
        .and_then(|line| parser::extract_first(line, QUOTED_VALUE))
        .unwrap_or_default()
}

/// Replace every placeholder occurrence in the template.
pub fn render(template: &str, version: &str) -> String {
    template.replace(PLACEHOLDER, version)
}

/// Run the stamping pipeline rooted at `root`.
///
/// Reads the package manifest and template, writes the stamped template to
/// `output_path` (create or truncate) and returns the resolved version for
/// the caller to echo.
pub fn run_in(root: &Path, package_id: &str, output_path: &Path) -> Result<String> {
    let manifest = io::read_file(&manifest_path(root, package_id), "read manifest")?;
    let version = extract_version(&manifest);

    let template = io::read_file(&template_path(root, package_id), "read template")?;
    io::write_file(output_path, &render(&template, &version), "write stamped file")?;

    log_status!("stamp", "{}: stamped version '{}'", package_id, version);
    Ok(version)
}

/// Stamping rooted at the working directory, the layout release scripts
/// run from (a `crates/` directory at the repository root).
pub fn run(package_id: &str, output_path: &Path) -> Result<String> {
    run_in(Path::new("."), package_id, output_path)
}
