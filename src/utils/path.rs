//! Relative import path computation.
//!
//! Generated modules import their components relative to the directory
//! they are emitted into. The computation is purely lexical: no path on
//! disk is consulted, and the result always uses `/` separators because
//! it lands inside a JS import statement.

use std::path::{Component, Path};

/// Compute the import reference for `target` relative to `from_dir`.
///
/// Both paths must be rooted the same way (both workspace-relative or
/// both absolute). Mixed rootedness cannot be related lexically and
/// falls back to the slash-joined target.
///
/// # Example
/// ```
/// use std::path::Path;
/// use weft::utils::path::relative_import;
/// let import = relative_import(
///     Path::new(".weft/generated"),
///     Path::new("src/routes/index.svelte"),
/// );
/// assert_eq!(import, "../../src/routes/index.svelte");
/// ```
pub fn relative_import(from_dir: &Path, target: &Path) -> String {
    if from_dir.is_absolute() != target.is_absolute() {
        return slash_join(&lexical_components(target));
    }

    let from = lexical_components(from_dir);
    let to = lexical_components(target);

    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<String> = Vec::with_capacity(from.len() - common + to.len() - common);
    for _ in common..from.len() {
        parts.push("..".to_string());
    }
    parts.extend(to[common..].iter().cloned());

    if parts.is_empty() {
        ".".to_string()
    } else {
        slash_join(&parts)
    }
}

/// Resolve `.` and `..` lexically, keeping only normal components.
fn lexical_components(path: &Path) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for comp in path.components() {
        match comp {
            Component::Normal(s) => out.push(s.to_string_lossy().into_owned()),
            Component::ParentDir => {
                if out.last().is_some_and(|c| c != "..") {
                    out.pop();
                } else {
                    out.push("..".to_string());
                }
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }
    out
}

fn slash_join(parts: &[String]) -> String {
    parts.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_import_sibling_tree() {
        let import = relative_import(
            Path::new(".weft/generated"),
            Path::new("src/routes/index.svelte"),
        );
        assert_eq!(import, "../../src/routes/index.svelte");
    }

    #[test]
    fn test_relative_import_shared_prefix() {
        let import = relative_import(
            Path::new("app/build/generated"),
            Path::new("app/routes/about.svelte"),
        );
        assert_eq!(import, "../../routes/about.svelte");
    }

    #[test]
    fn test_relative_import_absolute_pair() {
        let import = relative_import(
            Path::new("/work/app/.weft/generated"),
            Path::new("/work/app/src/error.svelte"),
        );
        assert_eq!(import, "../../src/error.svelte");
    }

    #[test]
    fn test_relative_import_target_inside_dir() {
        let import = relative_import(Path::new("out"), Path::new("out/nested/mod.js"));
        assert_eq!(import, "nested/mod.js");
    }

    #[test]
    fn test_relative_import_same_dir() {
        assert_eq!(relative_import(Path::new("out"), Path::new("out")), ".");
    }

    #[test]
    fn test_relative_import_normalizes_dots() {
        let import = relative_import(
            Path::new("./build/./generated"),
            Path::new("./src/../src/app.svelte"),
        );
        assert_eq!(import, "../../src/app.svelte");
    }

    #[test]
    fn test_relative_import_mixed_rootedness_falls_back() {
        let import = relative_import(Path::new("/abs/out"), Path::new("src/app.svelte"));
        assert_eq!(import, "src/app.svelte");
    }

    #[test]
    fn test_relative_import_is_lexical() {
        // None of these paths exist; the computation must not care.
        let import = relative_import(
            Path::new("no/such/output/dir"),
            Path::new("no/such/component.svelte"),
        );
        assert_eq!(import, "../../component.svelte");
    }
}
