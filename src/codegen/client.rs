//! Routing manifest renderer.
//!
//! Serializes a compiled [`RouteManifest`] into the client's `manifest.js`
//! module: lazy component imports, per-page descriptors with their
//! parameter decoders, the ignored endpoint patterns, and the layout
//! re-export. Rendering is a pure function over the structure; identical
//! manifests yield byte-identical modules.

use std::path::Path;

use super::js_str;
use super::pages::RouteManifest;
use super::params::{ParamDecoder, ParamKind};
use crate::utils::relative_import;

/// Render the `manifest.js` module.
///
/// `layout` is the root layout reference, `dir` the directory the module
/// is emitted into (import paths are resolved relative to it).
pub fn render_route_manifest(manifest: &RouteManifest, layout: &str, dir: &Path) -> String {
    let mut out = String::with_capacity(4096);

    out.push_str("import * as layout from ");
    out.push_str(&js_str(&relative_import(dir, Path::new(layout))));
    out.push_str(";\n\n");

    render_components(manifest, dir, &mut out);

    out.push_str("const d = decodeURIComponent;\n");
    out.push_str("const empty = () => ({});\n\n");

    render_pages(manifest, &mut out);
    render_ignore(manifest, &mut out);

    out.push_str("export { layout };\n");
    out
}

/// The lazy-import table; position equals component index.
fn render_components(manifest: &RouteManifest, dir: &Path, out: &mut String) {
    if manifest.table.is_empty() {
        out.push_str("const components = [];\n\n");
        return;
    }

    out.push_str("const components = [\n");
    let count = manifest.table.len();
    for (i, entry) in manifest.table.entries().iter().enumerate() {
        out.push_str("\t() => import(");
        out.push_str(&js_str(&relative_import(dir, Path::new(entry))));
        out.push(')');
        if i + 1 < count {
            out.push(',');
        }
        out.push('\n');
    }
    out.push_str("];\n\n");
}

fn render_pages(manifest: &RouteManifest, out: &mut String) {
    if manifest.pages.is_empty() {
        out.push_str("export const pages = [];\n\n");
        return;
    }

    out.push_str("export const pages = [\n");
    let count = manifest.pages.len();
    for (i, page) in manifest.pages.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }

        out.push_str("\t{\n");
        if let Some(leaf) = &page.leaf {
            out.push_str("\t\t// ");
            out.push_str(leaf);
            out.push('\n');
        }
        out.push_str("\t\tpattern: ");
        out.push_str(&page.pattern);
        out.push_str(",\n");
        out.push_str("\t\tparams: ");
        out.push_str(&render_params(&page.decoder));
        out.push_str(",\n");

        let parts: Vec<String> = page
            .parts
            .iter()
            .map(|index| format!("components[{index}]"))
            .collect();
        out.push_str("\t\tparts: [");
        out.push_str(&parts.join(", "));
        out.push_str("]\n");

        out.push_str("\t}");
        if i + 1 < count {
            out.push(',');
        }
        out.push('\n');
    }
    out.push_str("];\n\n");
}

fn render_ignore(manifest: &RouteManifest, out: &mut String) {
    if manifest.ignored.is_empty() {
        out.push_str("export const ignore = [];\n\n");
        return;
    }

    out.push_str("export const ignore = [\n");
    let count = manifest.ignored.len();
    for (i, pattern) in manifest.ignored.iter().enumerate() {
        out.push('\t');
        out.push_str(pattern);
        if i + 1 < count {
            out.push(',');
        }
        out.push('\n');
    }
    out.push_str("];\n\n");
}

/// A page's parameter decoder as JS: the shared `empty` helper, or a
/// closure over the match array.
fn render_params(decoder: &ParamDecoder) -> String {
    if decoder.is_empty() {
        return "empty".to_string();
    }

    let fields: Vec<String> = decoder
        .bindings()
        .iter()
        .map(|binding| match binding.kind {
            ParamKind::Rest => format!(
                "{}: d(m[{}]).split('/').filter(Boolean)",
                binding.name, binding.group
            ),
            ParamKind::Scalar => format!("{}: d(m[{}])", binding.name, binding.group),
        })
        .collect();

    format!("(m) => ({{ {} }})", fields.join(", "))
}
