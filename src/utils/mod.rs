//! Path, walking and writing utilities.
//!
//! Pure functions plus the one place this crate touches the filesystem
//! for output ([`write::write_if_changed`]).

pub mod path;
pub mod walk;
pub mod write;

// Re-export commonly used functions (used by every generator)
pub use path::relative_import;
pub use walk::walk_files;
pub use write::write_if_changed;
