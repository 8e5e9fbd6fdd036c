//! Change-aware file writing.
//!
//! Downstream watchers key rebuilds off artifact mtimes, so an artifact
//! whose contents did not change must never be rewritten.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Write `contents` to `path` unless the file already holds identical bytes.
///
/// Parent directories are created as needed. Returns `true` when bytes hit
/// the disk, `false` when the existing file was already up to date.
pub fn write_if_changed(path: &Path, contents: &str) -> Result<bool> {
    if let Ok(existing) = fs::read(path)
        && blake3::hash(&existing) == blake3::hash(contents.as_bytes())
    {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_file_and_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("generated/manifest.js");

        let written = write_if_changed(&path, "export const pages = [];\n").unwrap();

        assert!(written);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "export const pages = [];\n"
        );
    }

    #[test]
    fn test_identical_contents_not_rewritten() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.js");

        assert!(write_if_changed(&path, "same").unwrap());
        assert!(!write_if_changed(&path, "same").unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "same");
    }

    #[test]
    fn test_changed_contents_rewritten() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.js");

        assert!(write_if_changed(&path, "before").unwrap());
        assert!(write_if_changed(&path, "after").unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "after");
    }
}
