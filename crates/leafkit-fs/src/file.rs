//! File operations.

use std::env;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use leafkit_core::{Error, IsZero, Result};
use rand::RngCore;

use crate::dir::copy_dir;

/// Size of the file at `path` in bytes, or `None` if it cannot be read.
pub fn file_size(path: impl AsRef<Path>) -> Option<u64> {
    fs::metadata(path).ok().map(|meta| meta.len())
}

/// Returns `true` if something exists at `path` (symlinks are followed).
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

/// Returns `true` if the file at `path` has zero length.
pub fn file_is_empty(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    let meta = fs::metadata(path).map_err(|e| Error::io_with_path(e, path))?;
    Ok(meta.len() == 0)
}

/// Copy `src` to `dst`, flush it to disk, and give `dst` the permissions of
/// `src`.
///
/// An existing `dst` is truncated.
pub fn copy_file(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> Result<()> {
    let (src, dst) = (src.as_ref(), dst.as_ref());

    let mut input = File::open(src).map_err(|e| Error::io_with_path(e, src))?;
    let permissions = input
        .metadata()
        .map_err(|e| Error::io_with_path(e, src))?
        .permissions();
    let mut output = File::create(dst).map_err(|e| Error::io_with_path(e, dst))?;

    io::copy(&mut input, &mut output).map_err(|e| Error::io_with_path(e, dst))?;
    output.sync_all().map_err(|e| Error::io_with_path(e, dst))?;
    fs::set_permissions(dst, permissions).map_err(|e| Error::io_with_path(e, dst))
}

/// Copy `src` to `dst` unless `src` is a symbolic link.
///
/// Returns whether a copy happened.
pub fn copy_unless_symlink(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> Result<bool> {
    let src = src.as_ref();
    let meta = fs::symlink_metadata(src).map_err(|e| Error::io_with_path(e, src))?;
    if meta.file_type().is_symlink() {
        log::debug!("Not copying symlink {}", src.display());
        return Ok(false);
    }
    copy_file(src, dst)?;
    Ok(true)
}

/// Copy a file with [`copy_file`] or a directory with [`copy_dir`].
pub fn copy_file_or_dir(src: impl AsRef<Path>, dst: impl AsRef<Path>, force: bool) -> Result<()> {
    let src = src.as_ref();
    let meta = fs::metadata(src).map_err(|e| Error::io_with_path(e, src))?;
    if meta.is_dir() {
        copy_dir(src, dst, force)
    } else {
        copy_file(src, dst)
    }
}

/// Move a file, copying and deleting when `src` and `dst` are on different
/// filesystems.
pub fn move_file(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> Result<()> {
    let (src, dst) = (src.as_ref(), dst.as_ref());
    match fs::rename(src, dst) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            log::debug!(
                "{} and {} are on different devices; copying",
                src.display(),
                dst.display()
            );
            copy_file(src, dst)?;
            fs::remove_file(src).map_err(|e| Error::io_with_path(e, src))
        }
        Err(e) => Err(Error::io_with_path(e, src)),
    }
}

/// Copy `src` to `dst` and remove `src`. Does nothing when they are equal.
pub fn rename_file(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> Result<()> {
    let (src, dst) = (src.as_ref(), dst.as_ref());
    if src == dst {
        return Ok(());
    }
    copy_file(src, dst)?;
    fs::remove_file(src).map_err(|e| Error::io_with_path(e, src))
}

/// Look for `filename` in the current directory and up to `levels - 1` of
/// its parents.
pub fn walk_file(filename: &str, levels: usize) -> Option<PathBuf> {
    let cwd = env::current_dir().ok()?;
    walk_file_from(&cwd, filename, levels)
}

/// Look for `filename` in `start` and up to `levels - 1` of its parents.
///
/// Returns the full path of the first match.
pub fn walk_file_from(start: &Path, filename: &str, levels: usize) -> Option<PathBuf> {
    start
        .ancestors()
        .take(levels)
        .map(|dir| dir.join(filename))
        .find(|candidate| candidate.exists())
}

/// The first path in `paths` that exists.
pub fn first_file_exists<I, P>(paths: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    paths
        .into_iter()
        .find(|path| file_exists(path))
        .map(|path| path.as_ref().to_path_buf())
}

/// The paths in `paths` that exist, in their original order.
pub fn filter_file_exists<I, P>(paths: I) -> Vec<PathBuf>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    paths
        .into_iter()
        .filter(|path| file_exists(path))
        .map(|path| path.as_ref().to_path_buf())
        .collect()
}

/// Read `dir/name` into memory.
pub fn load_bytes(dir: impl AsRef<Path>, name: &str) -> Result<Vec<u8>> {
    let path = dir.as_ref().join(name);
    fs::read(&path).map_err(|e| Error::io_with_path(e, &path))
}

/// Delete the file at `path`. A file that is already gone is not an error.
///
/// The contents stay recoverable from disk; use [`destroy_file`] for
/// sensitive data.
///
/// # Errors
///
/// [`Error::Operation`] for an empty path, or the removal failure.
pub fn delete_file(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if path.is_zero() {
        return Err(Error::operation("cannot delete file: path is empty"));
    }
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(Error::io_with_path(e, path)),
    }
}

/// Overwrite the file at `path` with random bytes, then delete it.
pub fn destroy_file(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let meta = fs::metadata(path).map_err(|e| Error::io_with_path(e, path))?;
    let size = usize::try_from(meta.len())
        .map_err(|_| Error::operation(format!("{} is too large to destroy", path.display())))?;

    let mut noise = vec![0u8; size];
    rand::thread_rng().fill_bytes(&mut noise);

    let mut file = OpenOptions::new()
        .write(true)
        .open(path)
        .map_err(|e| Error::io_with_path(e, path))?;
    file.write_all(&noise)
        .and_then(|()| file.sync_all())
        .map_err(|e| Error::io_with_path(e, path))?;
    drop(file);

    log::debug!("Overwrote {size} bytes of {} before delete", path.display());
    delete_file(path)
}

/// Returns `true` if `path` matches any of the shell patterns in `ignores`.
///
/// Matching follows shell rules: `*` does not cross a `/`.
///
/// # Errors
///
/// [`Error::Pattern`] if a pattern is malformed.
pub fn ignore_file<S: AsRef<str>>(path: impl AsRef<Path>, ignores: &[S]) -> Result<bool> {
    let path = path.as_ref();
    let options = MatchOptions {
        require_literal_separator: true,
        ..MatchOptions::new()
    };
    for ignore in ignores {
        let ignore = ignore.as_ref();
        let pattern = Pattern::new(ignore).map_err(|e| {
            Error::pattern(format!(
                "'{ignore}' against path {}: {e}",
                path.display()
            ))
        })?;
        if pattern.matches_path_with(path, options) {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Expand `pattern` and call `f` on every file it matches.
///
/// A matched directory is expanded again as `<dir>/*`, so whole trees are
/// processed. When `basedir` is non-empty each match is joined onto it
/// before use.
///
/// # Errors
///
/// - [`Error::Pattern`] if the pattern is malformed.
/// - [`Error::Operation`] wrapping the path of a file `f` failed on.
pub fn glob_all_files<F>(basedir: impl AsRef<Path>, pattern: &str, mut f: F) -> Result<()>
where
    F: FnMut(&Path) -> Result<()>,
{
    glob_into(basedir.as_ref(), pattern, &mut f)
}

fn glob_into<F>(basedir: &Path, pattern: &str, f: &mut F) -> Result<()>
where
    F: FnMut(&Path) -> Result<()>,
{
    let matches = glob::glob(pattern)
        .map_err(|e| Error::pattern(format!("failed to evaluate '{pattern}': {e}")))?;

    for matched in matches {
        let name = matched.map_err(|e| {
            let path = e.path().to_path_buf();
            Error::io_with_path(io::Error::from(e), path)
        })?;
        let full_path = if basedir.is_zero() {
            name
        } else {
            basedir.join(name)
        };

        let meta = fs::metadata(&full_path).map_err(|e| Error::io_with_path(e, &full_path))?;
        if meta.is_dir() {
            let escaped = Pattern::escape(&full_path.to_string_lossy());
            glob_into(Path::new(""), &format!("{escaped}/*"), f)?;
        } else {
            f(&full_path).map_err(|e| {
                Error::operation(format!(
                    "failed processing file '{}': {e}",
                    full_path.display()
                ))
            })?;
        }
    }
    Ok(())
}
