//! Leafkit Core: shared errors, zero-value selection, and path utilities.
//!
//! This crate provides the foundational pieces used across all leafkit
//! crates. It has no internal leafkit dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`values`]: Zero-value detection and default selection
//! - [`util`]: Path expansion, project-root discovery, path resolution

pub mod error;
pub mod util;
pub mod values;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use values::{IsZero, Lookup, first_non_zero, is_default, pick, pick_or_else};

// Convenience re-exports from util
pub use util::paths::{expand_path, expand_tilde, find_project_root, is_sub_path};
pub use util::resolver::PathResolver;
