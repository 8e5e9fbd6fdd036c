//! Layout pyramid: the nested level structure of the root template.
//!
//! The pyramid is built once per app from the deepest page's nesting
//! depth and rendered into a single static template shared by every page.
//! Per-request variation comes entirely from which components and props
//! reach each level at render time, never from regenerating the tree.

/// One nesting level. `child` is the next-deeper level; the innermost
/// level has none and renders unconditionally.
#[derive(Debug, PartialEq, Eq)]
pub struct Level {
    pub index: usize,
    pub child: Option<Box<Level>>,
}

/// Fixed-depth nesting tree, level 0 (root layout shell) outermost.
///
/// Each level `k < max_depth` renders level `k + 1` inside itself only
/// when the active page supplies a component at that depth; the innermost
/// level renders unconditionally.
#[derive(Debug)]
pub struct Pyramid {
    root: Level,
}

impl Pyramid {
    /// Build the `max_depth + 1` level chain.
    pub fn build(max_depth: usize) -> Self {
        let mut node = Level {
            index: max_depth,
            child: None,
        };

        // Wrap inward-out, stopping at level 1.
        let mut level = max_depth;
        while level > 1 {
            level -= 1;
            node = Level {
                index: level,
                child: Some(Box::new(node)),
            };
        }

        // Level 0 is the outermost unconditional shell (the root layout).
        let root = if max_depth == 0 {
            node
        } else {
            Level {
                index: 0,
                child: Some(Box::new(node)),
            }
        };

        Self { root }
    }

    pub fn root(&self) -> &Level {
        &self.root
    }

    /// Number of levels, `max_depth + 1`.
    pub fn depth(&self) -> usize {
        let mut count = 1;
        let mut node = &self.root;
        while let Some(child) = &node.child {
            count += 1;
            node = child;
        }
        count
    }
}
