//! Leafkit FS: file and directory helpers.
//!
//! Thin wrappers over `std::fs` with consistent, path-carrying errors
//! ([`leafkit_core::Error`]). Every function stands alone; nothing here holds
//! state between calls.
//!
//! # Modules
//!
//! - [`dir`]: directory existence, unique creation, recursive copy, listing
//! - [`file`]: file queries, copy/move, upward search, glob processing
//! - [`ops`]: raw read/write/append/delete with explicit modes
//! - [`symlink`]: symlink replacement
//! - [`decode`]: typed YAML/JSON loading
//! - [`naming`]: filesystem-safe names and MIME types
//! - [`wait`]: async polling for file appearance and release
//!
//! # Example
//!
//! ```no_run
//! use leafkit_fs::{copy_dir_preserve, create_unique_directory};
//!
//! let out = create_unique_directory("/tmp/builds", "run", 0)?;
//! copy_dir_preserve("templates", &out)?;
//! # Ok::<(), leafkit_core::Error>(())
//! ```

pub mod decode;
pub mod dir;
pub mod file;
pub mod naming;
pub mod ops;
pub mod symlink;
pub mod wait;

mod perms;

use std::time::Duration;

/// Permissions for directories created by this crate (Unix only).
pub const DEFAULT_DIR_MODE: u32 = 0o766;

/// Permissions for files created by this crate (Unix only).
pub const DEFAULT_FILE_MODE: u32 = 0o644;

/// Attempts made by [`create_unique_directory`] when the caller passes 0.
pub const MAX_UNIQUE_DIR_ATTEMPTS: usize = 1000;

/// Poll interval for the functions in [`wait`].
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

pub use decode::{json_from_file, yaml_from_file};
pub use dir::{
    ConflictPolicy, EntryListing, copy_dir, copy_dir_overwrite, copy_dir_preserve, copy_dir_with,
    create_unique_directory, delete_dir_contents, delete_dir_contents_except, dir_exists,
    is_empty_dir, list_directory, recreate_dirs, rename_dir,
};
pub use file::{
    copy_file, copy_file_or_dir, copy_unless_symlink, delete_file, destroy_file, file_exists,
    file_is_empty, file_size, filter_file_exists, first_file_exists, glob_all_files, ignore_file,
    load_bytes, move_file, rename_file, walk_file, walk_file_from,
};
pub use naming::{content_type, safe_name};
pub use symlink::recreate_symlink;
pub use wait::{PollConfig, wait_for_file_exists, wait_for_no_file_handlers};
