//! Component table with stable first-seen indexing.

use rustc_hash::FxHashMap;

/// Ordered, deduplicated table of component references.
///
/// The first occurrence of a reference in input order fixes its index;
/// later occurrences of an equal reference reuse it. Indices are never
/// compacted, so every page referencing the same component resolves to
/// the same slot. Iteration order is always the insertion order, never
/// map order: the emitted module must be byte-stable across runs.
#[derive(Debug, Default)]
pub struct ComponentTable {
    entries: Vec<String>,
    index: FxHashMap<String, usize>,
}

impl ComponentTable {
    /// Build the ordered table and its lookup mapping in a single pass.
    pub fn build<I, S>(references: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::default();
        for reference in references {
            let reference = reference.as_ref();
            if !table.index.contains_key(reference) {
                table
                    .index
                    .insert(reference.to_string(), table.entries.len());
                table.entries.push(reference.to_string());
            }
        }
        table
    }

    /// Table index of a reference, if it was ever seen.
    pub fn index_of(&self, reference: &str) -> Option<usize> {
        self.index.get(reference).copied()
    }

    /// Entries in insertion order; position equals index.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
