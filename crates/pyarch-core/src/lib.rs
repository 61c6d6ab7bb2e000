//! # pyarch-core - Core Domain Types
//!
//! Foundation crate for PyArchitect. Provides the generated-project model,
//! the flat-list to tree conversion, path classification, error handling,
//! and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing, icu_collator).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`GeneratedFile`] - One generated file (relative path + full text)
//! - [`ProjectStructure`] - The whole generation result
//! - [`download_file_name()`] - Final path segment used when saving a single file
//!
//! ### File Tree (`file_tree`)
//! - [`build_file_tree()`] - Flat file list to sorted forest (first write wins)
//! - [`build_file_tree_strict()`] - Same, but rejects duplicate or conflicting paths
//! - [`find_path_conflicts()`] - Report duplicate and file/directory collisions
//! - [`locale_compare()`] - Root-locale name ordering used by the sort
//! - [`normalize_path()`] - Drop empty segments the way tree paths do
//! - [`FileNode`], [`NodeKind`] - Tree node types
//!
//! ### Path Classification (`language`)
//! - [`classify()`] - Suffix-based content-type label
//! - [`Language`] - The closed set of labels
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum, one variant group per layer
//! - [`GenerationError`] - Failure taxonomy of one generation request
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use pyarch_core::prelude::*;
//! ```

pub mod error;
pub mod file_tree;
pub mod language;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all PyArchitect crates
pub mod prelude {
    pub use super::error::{Error, GenerationError, Result};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, GenerationError, Result};
pub use file_tree::{
    build_file_tree, build_file_tree_strict, count_files, find_in_forest, find_path_conflicts,
    locale_compare, normalize_path, FileNode, NodeKind, PathConflict,
};
pub use language::{classify, Language};
pub use types::{download_file_name, GeneratedFile, ProjectStructure, DOWNLOAD_FALLBACK_NAME};
