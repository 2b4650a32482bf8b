//! Raw file reads and writes with explicit creation modes.
//!
//! `mode` is applied only when the call creates the file, and only on Unix.
//! Use [`DEFAULT_FILE_MODE`](crate::DEFAULT_FILE_MODE) when there is no
//! reason to pick another.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use leafkit_core::{Error, Result};

use crate::perms::set_create_mode;

/// Read the whole file.
pub fn read(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    fs::read(path).map_err(|e| Error::io_with_path(e, path))
}

/// Replace the file's contents with `content`, creating it with `mode`.
pub fn write(path: impl AsRef<Path>, content: impl AsRef<[u8]>, mode: u32) -> Result<()> {
    let path = path.as_ref();
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    set_create_mode(&mut options, mode);
    write_with(path, &options, content.as_ref())
}

/// Add `content` to the end of the file, creating it with `mode`.
pub fn append(path: impl AsRef<Path>, content: impl AsRef<[u8]>, mode: u32) -> Result<()> {
    let path = path.as_ref();
    let mut options = OpenOptions::new();
    options.append(true).create(true);
    set_create_mode(&mut options, mode);
    write_with(path, &options, content.as_ref())
}

fn write_with(path: &Path, options: &OpenOptions, content: &[u8]) -> Result<()> {
    let mut file = options.open(path).map_err(|e| Error::io_with_path(e, path))?;
    file.write_all(content)
        .map_err(|e| Error::io_with_path(e, path))
}

/// Remove the file. Unlike [`delete_file`](crate::delete_file), a missing
/// file is an error.
pub fn delete(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    fs::remove_file(path).map_err(|e| Error::io_with_path(e, path))
}
