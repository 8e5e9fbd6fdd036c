//! Generator configuration.
//!
//! The invoking build driver owns CLI flags and config-file parsing; this
//! crate only consumes a [`GeneratorConfig`] section, typically
//! deserialized from the driver's own config:
//!
//! ```json
//! {
//!     "output": ".weft",
//!     "static_dir": "static"
//! }
//! ```
//!
//! Missing fields fall back to their defaults, so a partial section is
//! always valid.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Output locations for the generated scaffolding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Build output root. Generated client modules land in
    /// `{output}/generated`, the service-worker manifest at
    /// `{output}/service-worker.js`.
    pub output: PathBuf,

    /// Static assets directory pre-cached by the service worker.
    /// A missing directory contributes no files.
    pub static_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(".weft"),
            static_dir: PathBuf::from("static"),
        }
    }
}

impl GeneratorConfig {
    /// Directory receiving the generated client modules.
    pub fn generated_dir(&self) -> PathBuf {
        self.output.join("generated")
    }

    /// Path of the service-worker manifest artifact.
    pub fn service_worker_path(&self) -> PathBuf {
        self.output.join("service-worker.js")
    }
}
