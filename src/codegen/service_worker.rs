//! Service-worker manifest renderer.
//!
//! Emits `service-worker.js`: the files an offline cache should
//! pre-fetch, the build's own client shell files, and one `{ pattern }`
//! record per page so the worker can recognize navigable URLs.

use std::path::Path;

use super::{GENERATED_BY, js_str};
use crate::manifest::ManifestData;
use crate::utils::walk_files;

/// Entry served to a navigation request that misses the cache.
const SW_INDEX: &str = "service-worker-index.html";

/// Files the worker pre-caches: the worker index first, then every
/// static asset in sorted walk order. A missing static directory
/// contributes no files.
pub fn precache_files(static_dir: &Path) -> Vec<String> {
    let mut files = vec![SW_INDEX.to_string()];
    files.extend(walk_files(static_dir));
    files
}

/// Render the `service-worker.js` module.
///
/// `timestamp_ms` is the build wall clock; it is the one deliberately
/// unstable value in the generated output.
pub fn render_service_worker(
    data: &ManifestData,
    files: &[String],
    client_files: &[String],
    timestamp_ms: u128,
) -> String {
    let mut out = String::with_capacity(2048);

    out.push_str("// ");
    out.push_str(GENERATED_BY);
    out.push('\n');
    out.push_str(&format!("export const timestamp = {timestamp_ms};\n\n"));

    render_path_array("files", files, &mut out);
    out.push_str("export { files as assets }; // legacy\n\n");

    render_path_array("shell", client_files, &mut out);
    out.push('\n');

    out.push_str("export const routes = [\n");
    let count = data.pages.len();
    for (i, page) in data.pages.iter().enumerate() {
        out.push_str("\t{ pattern: ");
        out.push_str(&page.pattern);
        out.push_str(" }");
        if i + 1 < count {
            out.push(',');
        }
        out.push('\n');
    }
    out.push_str("];\n");

    out
}

/// `export const {name} = [...]` of slash-prefixed, JSON-quoted paths.
fn render_path_array(name: &str, paths: &[String], out: &mut String) {
    if paths.is_empty() {
        out.push_str(&format!("export const {name} = [];\n"));
        return;
    }

    out.push_str(&format!("export const {name} = [\n"));
    let count = paths.len();
    for (i, path) in paths.iter().enumerate() {
        out.push('\t');
        out.push_str(&js_str(&format!("/{path}")));
        if i + 1 < count {
            out.push(',');
        }
        out.push('\n');
    }
    out.push_str("];\n");
}
