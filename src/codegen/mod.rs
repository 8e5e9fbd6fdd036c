//! Generated app scaffolding.
//!
//! Turns a [`ManifestData`] into the modules the client runtime boots
//! from:
//!
//! - **Routing manifest** (`generated/manifest.js`): URL patterns mapped
//!   to component chains and parameter decoders
//! - **Root template** (`generated/root.svelte`): the nested layout
//!   pyramid shared by every page
//! - **Service-worker manifest** (`service-worker.js`): files an offline
//!   cache should pre-fetch
//!
//! Compilation builds structured intermediates first ([`ComponentTable`],
//! [`RouteManifest`], [`Pyramid`]) and serializes them in a separate pass,
//! so structure and text can be tested independently. Everything is
//! recomputed from scratch per invocation; [`write_if_changed`] keeps
//! unchanged artifacts off the disk so downstream watchers stay quiet.

mod client;
mod pages;
mod params;
mod pyramid;
mod root;
mod service_worker;
mod table;

pub use pages::{PageDescriptor, RouteManifest};
pub use params::{ParamBinding, ParamDecoder, ParamKind, ParamValue};
pub use pyramid::{Level, Pyramid};
pub use service_worker::precache_files;
pub use table::ComponentTable;

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

use crate::config::GeneratorConfig;
use crate::manifest::ManifestData;
use crate::utils::write_if_changed;
use crate::{debug, log};

/// Banner embedded in every generated artifact.
const GENERATED_BY: &str = "This file is generated by weft - do not edit it!";

/// Generate the client routing manifest and the root template into
/// `{output}/generated`.
pub fn create_app(data: &ManifestData, config: &GeneratorConfig) -> Result<()> {
    let dir = config.generated_dir();

    let manifest = RouteManifest::compile(data)?;
    let pyramid = Pyramid::build(manifest.max_depth());

    let manifest_js = client::render_route_manifest(&manifest, &data.layout, &dir);
    let root_template = root::render_root_template(&pyramid, &data.error, &dir);

    persist(&dir.join("manifest.js"), &manifest_js, "manifest")?;
    persist(&dir.join("root.svelte"), &root_template, "template")?;

    Ok(())
}

/// Generate the offline pre-cache manifest at `{output}/service-worker.js`.
///
/// `client_files` are the build's own emitted shell files, relative to the
/// serving root.
pub fn create_serviceworker_manifest(
    data: &ManifestData,
    config: &GeneratorConfig,
    client_files: &[String],
) -> Result<()> {
    let files = service_worker::precache_files(&config.static_dir);
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);

    let code = service_worker::render_service_worker(data, &files, client_files, timestamp);
    persist(&config.service_worker_path(), &code, "sw")
}

/// Write an artifact through the change-aware writer, logging the outcome.
fn persist(path: &Path, contents: &str, kind: &str) -> Result<()> {
    let written = write_if_changed(path, contents)
        .with_context(|| format!("Failed to persist {}", path.display()))?;

    let name = path.file_name().unwrap_or_default().to_string_lossy();
    if written {
        log!(kind; "{name}");
    } else {
        debug!(kind; "{name} unchanged");
    }
    Ok(())
}

/// JSON-quote a string for embedding in generated JS.
fn js_str(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}
