//! File I/O primitives with consistent error handling.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Read file contents with standardized error handling.
///
/// Wraps `fs::read_to_string` with consistent `Error::Io` formatting.
pub fn read_file(path: &Path, operation: &str) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(operation, path, e))
}

/// Write content to file, creating or truncating it.
///
/// This is a plain `fs::write`: the stamping contract is "truncate and
/// rewrite", with no temp-file/rename step, so a reader racing the
/// writer may observe a partial file.
pub fn write_file(path: &Path, content: &str, operation: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| Error::io(operation, path, e))
}
