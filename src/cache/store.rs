// Cache store for puzzle inputs.
// Writes fetched text once and never replaces an existing entry; reads entries back.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::Result;

/// Result of attempting to write a cache entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The entry did not exist and was written.
    Written,
    /// An entry was already present and was left untouched.
    AlreadyExists,
}

/// Write text to `path` unless a file is already there.
///
/// The content goes to a temp file in the same directory first and is then
/// moved into place without clobbering, so the final path only ever holds a
/// complete entry.
pub fn write_if_absent(path: &Path, text: &str) -> Result<WriteOutcome> {
    if path.exists() {
        return Ok(WriteOutcome::AlreadyExists);
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(text.as_bytes())?;
    file.as_file().sync_all()?;

    match file.persist_noclobber(path) {
        Ok(_) => Ok(WriteOutcome::Written),
        Err(e) if e.error.kind() == io::ErrorKind::AlreadyExists => {
            Ok(WriteOutcome::AlreadyExists)
        }
        Err(e) => Err(e.error.into()),
    }
}

/// Read raw text from the cache.
pub fn read_text(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path)?;
    Ok(Some(contents))
}

/// Read a cached input with Windows line endings folded to `\n`.
pub fn read_input(path: &Path) -> Result<Option<String>> {
    Ok(read_text(path)?.map(|text| text.replace("\r\n", "\n")))
}

/// Check if a cache entry exists.
pub fn exists(path: &Path) -> bool {
    path.exists()
}
