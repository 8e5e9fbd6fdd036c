//! Route manifest compilation: page descriptors and the ignore list.
//!
//! Builds the structured form of the routing manifest before any text is
//! emitted: the deduplicated component table, one descriptor per page and
//! the endpoint patterns the client router must leave to the server.

use anyhow::{Result, anyhow};
use rustc_hash::FxHashSet;

use super::params::ParamDecoder;
use super::table::ComponentTable;
use crate::manifest::ManifestData;

/// One compiled page: everything its emitted descriptor needs.
#[derive(Debug)]
pub struct PageDescriptor {
    /// Opaque pattern text, emitted verbatim.
    pub pattern: String,
    /// Innermost non-empty part, echoed as a comment above the descriptor.
    pub leaf: Option<String>,
    pub decoder: ParamDecoder,
    /// Component table indices, outermost first. Empty slots are dropped.
    pub parts: Vec<usize>,
}

/// Compiled routing manifest, the structured form of the client manifest
/// module.
#[derive(Debug)]
pub struct RouteManifest {
    pub table: ComponentTable,
    pub pages: Vec<PageDescriptor>,
    /// Endpoint patterns not shadowed by a page, in endpoint input order.
    pub ignored: Vec<String>,
}

impl RouteManifest {
    /// Compile the manifest into its structured form.
    ///
    /// Page and endpoint input order are preserved; component order comes
    /// from the table's first-seen indexing. A non-empty part missing from
    /// the component list is an upstream contract violation and fails
    /// compilation instead of miscompiling.
    pub fn compile(data: &ManifestData) -> Result<Self> {
        let table = ComponentTable::build(&data.components);

        let pages = data
            .pages
            .iter()
            .map(|page| {
                let parts = page
                    .truthy_parts()
                    .map(|part| {
                        table
                            .index_of(part)
                            .ok_or_else(|| anyhow!("component not in manifest: {part}"))
                    })
                    .collect::<Result<Vec<_>>>()?;

                Ok(PageDescriptor {
                    pattern: page.pattern.clone(),
                    leaf: page.leaf().map(str::to_string),
                    decoder: ParamDecoder::synthesize(&page.params),
                    parts,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        // Pages shadow endpoints with identical pattern text.
        let page_patterns: FxHashSet<&str> =
            data.pages.iter().map(|page| page.pattern.as_str()).collect();
        let ignored = data
            .endpoints
            .iter()
            .filter(|route| !page_patterns.contains(route.pattern.as_str()))
            .map(|route| route.pattern.clone())
            .collect();

        Ok(Self {
            table,
            pages,
            ignored,
        })
    }

    /// Deepest nesting level across all pages (level 0 = root layout).
    pub fn max_depth(&self) -> usize {
        self.pages
            .iter()
            .map(|page| page.parts.len())
            .max()
            .unwrap_or(1)
            .saturating_sub(1)
    }
}
