//! Symlink replacement.

use std::fs;
use std::io;
use std::path::Path;

use leafkit_core::{Error, Result};

/// Point `target` at `src`, replacing whatever is at `target` now.
///
/// An existing file, symlink (dangling or not) or empty directory at
/// `target` is removed first.
pub fn recreate_symlink(src: impl AsRef<Path>, target: impl AsRef<Path>) -> Result<()> {
    let (src, target) = (src.as_ref(), target.as_ref());

    match fs::symlink_metadata(target) {
        Ok(meta) => {
            let removed = if meta.is_dir() {
                fs::remove_dir(target)
            } else {
                fs::remove_file(target)
            };
            removed.map_err(|e| Error::io_with_path(e, target))?;
            log::debug!("Removed existing {}", target.display());
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(Error::io_with_path(e, target)),
    }

    create_symlink(src, target).map_err(|e| Error::io_with_path(e, target))
}

#[cfg(unix)]
fn create_symlink(src: &Path, target: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(src, target)
}

#[cfg(windows)]
fn create_symlink(src: &Path, target: &Path) -> io::Result<()> {
    use std::os::windows::fs::{symlink_dir, symlink_file};
    if src.is_dir() {
        symlink_dir(src, target)
    } else {
        symlink_file(src, target)
    }
}
