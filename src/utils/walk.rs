//! Static asset walking.
//!
//! Lists every file under a directory as a relative, slash-joined path.
//! The result is sorted so the emitted pre-cache manifest is byte-stable
//! across runs and platforms.

use std::path::Path;

use jwalk::WalkDir;

/// List all files under `dir`, relative to it, in sorted order.
///
/// A missing or unreadable directory is treated as "no static files"
/// rather than a failure.
pub fn walk_files(dir: &Path) -> Vec<String> {
    if !dir.is_dir() {
        return Vec::new();
    }

    let mut files: Vec<String> = WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| {
            let path = e.path();
            let rel = path.strip_prefix(dir).ok()?;
            Some(
                rel.iter()
                    .map(|c| c.to_string_lossy().into_owned())
                    .collect::<Vec<_>>()
                    .join("/"),
            )
        })
        .collect();

    files.sort();
    files
}
