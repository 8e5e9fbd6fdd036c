//! weft - build-time generator for client app scaffolding.
//!
//! Consumes a [`ManifestData`] describing an app's routes and emits the
//! generated modules the client runtime boots from: a routing manifest
//! mapping URL patterns to component chains and parameter decoders, a
//! root template nesting layout components by route depth, and a
//! service-worker manifest of files to pre-cache offline.
//!
//! The invoking build driver owns everything around this crate: route
//! collection, pattern compilation, bundling, configuration files and the
//! CLI. Identical manifest data always yields byte-identical routing
//! manifest and root template, so repeated builds never trigger spurious
//! downstream rebuilds.
//!
//! ```no_run
//! use weft::{GeneratorConfig, ManifestData, create_app};
//!
//! # fn main() -> anyhow::Result<()> {
//! let data = ManifestData::from_json_file("manifest.json".as_ref())?;
//! let config = GeneratorConfig::default();
//! create_app(&data, &config)?;
//! # Ok(())
//! # }
//! ```

pub mod codegen;
pub mod config;
pub mod logger;
pub mod manifest;
pub mod utils;

pub use codegen::{create_app, create_serviceworker_manifest};
pub use config::GeneratorConfig;
pub use manifest::{Endpoint, ManifestData, ManifestError, Page};
