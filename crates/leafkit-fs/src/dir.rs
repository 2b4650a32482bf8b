//! Directory operations.
//!
//! The three recursive copies ([`copy_dir`], [`copy_dir_preserve`],
//! [`copy_dir_overwrite`]) share one walker, [`copy_dir_with`], which differs
//! only in how it treats a file already present at the destination.
//! Symbolic links in the source tree are never followed or copied.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use leafkit_core::{Error, Result, first_non_zero};
use serde::Serialize;
use walkdir::WalkDir;

use crate::file::copy_file;
use crate::perms::{create_dir_all_with_mode, mode_bits, mode_string};
use crate::{DEFAULT_DIR_MODE, MAX_UNIQUE_DIR_ATTEMPTS};

/// What a recursive copy does with a file that already exists at the
/// destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConflictPolicy {
    /// Keep the destination file and skip the source file.
    Preserve,
    /// Replace the destination file with the source file.
    #[default]
    Overwrite,
}

/// Returns `true` if `path` exists and is a directory.
///
/// A missing path is `Ok(false)`; any other stat failure is an error.
pub fn dir_exists(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    match fs::metadata(path) {
        Ok(meta) => Ok(meta.is_dir()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::io_with_path(e, path)),
    }
}

/// Create `dir/name`, or `dir/name1`, `dir/name2`, ... if it is taken.
///
/// Parents are created as needed. A `max_attempts` of 0 means
/// [`MAX_UNIQUE_DIR_ATTEMPTS`].
///
/// # Errors
///
/// [`Error::Operation`] when every candidate name is taken, or an I/O error
/// if creating the chosen directory fails.
pub fn create_unique_directory(
    dir: impl AsRef<Path>,
    name: &str,
    max_attempts: usize,
) -> Result<PathBuf> {
    let dir = dir.as_ref();
    let attempts = first_non_zero([max_attempts, MAX_UNIQUE_DIR_ATTEMPTS]);

    for i in 0..attempts {
        let candidate = if i == 0 {
            dir.join(name)
        } else {
            dir.join(format!("{name}{i}"))
        };
        if fs::symlink_metadata(&candidate).is_ok() {
            continue;
        }
        create_dir_all_with_mode(&candidate, DEFAULT_DIR_MODE)
            .map_err(|e| Error::io_with_path(e, &candidate))?;
        log::debug!("Created unique directory {}", candidate.display());
        return Ok(candidate);
    }

    Err(Error::operation(format!(
        "could not create a unique directory in {} starting with '{name}' after {attempts} attempts",
        dir.display()
    )))
}

/// Recursively copy `src` into `dst`, which must not exist yet.
///
/// With `force`, an existing `dst` is removed first.
///
/// # Errors
///
/// - [`Error::NotADirectory`] if `src` is not a directory.
/// - [`Error::AlreadyExists`] if `dst` exists and `force` is false.
pub fn copy_dir(src: impl AsRef<Path>, dst: impl AsRef<Path>, force: bool) -> Result<()> {
    let (src, dst) = (src.as_ref(), dst.as_ref());
    ensure_source_dir(src)?;

    match fs::symlink_metadata(dst) {
        Ok(_) if force => {
            log::debug!("Removing existing {} before copy", dst.display());
            remove_entry(dst)?;
        }
        Ok(_) => return Err(Error::AlreadyExists(dst.to_path_buf())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(Error::io_with_path(e, dst)),
    }

    copy_dir_with(src, dst, ConflictPolicy::Overwrite)
}

/// Recursively copy `src` into `dst`, keeping any file already in `dst`.
pub fn copy_dir_preserve(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> Result<()> {
    copy_dir_with(src, dst, ConflictPolicy::Preserve)
}

/// Recursively copy `src` into `dst`, replacing files already in `dst`.
pub fn copy_dir_overwrite(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> Result<()> {
    copy_dir_with(src, dst, ConflictPolicy::Overwrite)
}

/// Recursive copy engine behind the `copy_dir*` functions.
///
/// Missing destination directories are created with the permissions of the
/// matching source directory. Symbolic links are skipped.
pub fn copy_dir_with(
    src: impl AsRef<Path>,
    dst: impl AsRef<Path>,
    policy: ConflictPolicy,
) -> Result<()> {
    let (src, dst) = (src.as_ref(), dst.as_ref());
    let meta = ensure_source_dir(src)?;
    copy_tree(src, dst, mode_bits(&meta), policy)
}

fn copy_tree(src: &Path, dst: &Path, mode: u32, policy: ConflictPolicy) -> Result<()> {
    create_dir_all_with_mode(dst, mode).map_err(|e| Error::io_with_path(e, dst))?;

    for entry in fs::read_dir(src).map_err(|e| Error::io_with_path(e, src))? {
        let entry = entry.map_err(|e| Error::io_with_path(e, src))?;
        let from = entry.path();
        let to = dst.join(entry.file_name());
        let file_type = entry
            .file_type()
            .map_err(|e| Error::io_with_path(e, &from))?;

        if file_type.is_symlink() {
            log::debug!("Skipping symlink {}", from.display());
        } else if file_type.is_dir() {
            let sub_meta = entry.metadata().map_err(|e| Error::io_with_path(e, &from))?;
            copy_tree(&from, &to, mode_bits(&sub_meta), policy)?;
        } else if policy == ConflictPolicy::Preserve && fs::symlink_metadata(&to).is_ok() {
            log::debug!("Keeping existing {}", to.display());
        } else {
            copy_file(&from, &to)?;
        }
    }
    Ok(())
}

fn ensure_source_dir(src: &Path) -> Result<fs::Metadata> {
    let meta = fs::metadata(src).map_err(|e| Error::io_with_path(e, src))?;
    if !meta.is_dir() {
        return Err(Error::NotADirectory(src.to_path_buf()));
    }
    Ok(meta)
}

/// Move a directory tree by copying it to `dst` and removing `src`.
pub fn rename_dir(src: impl AsRef<Path>, dst: impl AsRef<Path>, force: bool) -> Result<()> {
    let src = src.as_ref();
    copy_dir(src, dst, force)?;
    fs::remove_dir_all(src).map_err(|e| Error::io_with_path(e, src))
}

/// Remove every entry inside `dir`, leaving `dir` itself in place.
pub fn delete_dir_contents(dir: impl AsRef<Path>) -> Result<()> {
    remove_children(dir.as_ref(), |_| false)
}

/// Remove every entry inside `dir` except those whose path ends with `except`.
///
/// The suffix match is by whole components, so `except = "keep"` spares
/// `dir/keep` but not `dir/keeper`.
pub fn delete_dir_contents_except(dir: impl AsRef<Path>, except: impl AsRef<Path>) -> Result<()> {
    let except = except.as_ref();
    remove_children(dir.as_ref(), |child| child.ends_with(except))
}

fn remove_children<F>(dir: &Path, keep: F) -> Result<()>
where
    F: Fn(&Path) -> bool,
{
    for entry in fs::read_dir(dir).map_err(|e| Error::io_with_path(e, dir))? {
        let child = entry.map_err(|e| Error::io_with_path(e, dir))?.path();
        if keep(&child) {
            continue;
        }
        remove_entry(&child)?;
    }
    Ok(())
}

/// Remove a file, symlink, or whole directory tree.
pub(crate) fn remove_entry(path: &Path) -> Result<()> {
    let meta = fs::symlink_metadata(path).map_err(|e| Error::io_with_path(e, path))?;
    let removed = if meta.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    removed.map_err(|e| Error::io_with_path(e, path))
}

/// Delete and recreate each directory, leaving them empty.
pub fn recreate_dirs<I, P>(dirs: I) -> Result<()>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    for dir in dirs {
        let dir = dir.as_ref();
        match fs::remove_dir_all(dir) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(Error::io_with_path(e, dir)),
        }
        create_dir_all_with_mode(dir, DEFAULT_DIR_MODE).map_err(|e| Error::io_with_path(e, dir))?;
    }
    Ok(())
}

/// Returns `true` if the directory at `path` has no entries.
pub fn is_empty_dir(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    let mut entries = fs::read_dir(path).map_err(|e| Error::io_with_path(e, path))?;
    Ok(entries.next().is_none())
}

/// One line of a [`list_directory`] result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryListing {
    /// Full path of the entry.
    pub path: PathBuf,
    /// File name of the entry.
    pub name: String,
    /// `ls -l` style mode, e.g. `-rw-r--r--`.
    pub mode: String,
    /// Size in bytes.
    pub size: u64,
    /// Last modification time.
    pub modified: DateTime<Utc>,
}

impl fmt::Display for EntryListing {
    /// Renders as `<mode> <size> <RFC 822 mtime> <name>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.mode,
            self.size,
            self.modified.format("%d %b %y %H:%M %Z"),
            self.name
        )
    }
}

/// List the entries below `root`, sorted by name within each directory.
///
/// Only direct children are listed unless `recurse` is set. `root` itself is
/// not included.
///
/// # Errors
///
/// - [`Error::NotFound`] if `root` does not exist.
/// - [`Error::NotADirectory`] if `root` is not a directory.
pub fn list_directory(root: impl AsRef<Path>, recurse: bool) -> Result<Vec<EntryListing>> {
    let root = root.as_ref();
    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => return Err(Error::NotADirectory(root.to_path_buf())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(Error::not_found(root)),
        Err(e) => return Err(Error::io_with_path(e, root)),
    }

    let max_depth = if recurse { usize::MAX } else { 1 };
    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(max_depth)
        .sort_by_file_name();

    let mut listings = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            Error::io_with_path(io::Error::from(e), path)
        })?;
        let path = entry.path();
        let meta = entry
            .metadata()
            .map_err(|e| Error::io_with_path(io::Error::from(e), path))?;
        let modified = meta
            .modified()
            .map_err(|e| Error::io_with_path(e, path))?;

        listings.push(EntryListing {
            path: path.to_path_buf(),
            name: entry.file_name().to_string_lossy().into_owned(),
            mode: mode_string(&meta),
            size: meta.len(),
            modified: DateTime::<Utc>::from(modified),
        });
    }
    Ok(listings)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn sample_tree(root: &Path) {
        write(&root.join("a.txt"), "a");
        write(&root.join("sub/b.txt"), "b");
        write(&root.join("sub/deeper/c.txt"), "c");
    }

    // -------------------------------------------------------------------------
    // dir_exists / is_empty_dir tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_dir_exists() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("file");
        write(&file, "x");

        assert!(dir_exists(temp.path()).unwrap());
        assert!(!dir_exists(&file).unwrap());
        assert!(!dir_exists(temp.path().join("missing")).unwrap());
    }

    #[test]
    fn test_is_empty_dir() {
        let temp = TempDir::new().unwrap();
        assert!(is_empty_dir(temp.path()).unwrap());
        write(&temp.path().join(".hidden"), "");
        assert!(!is_empty_dir(temp.path()).unwrap());
        assert!(is_empty_dir(temp.path().join("missing")).is_err());
    }

    // -------------------------------------------------------------------------
    // create_unique_directory tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_create_unique_directory_sequence() {
        let temp = TempDir::new().unwrap();

        let first = create_unique_directory(temp.path(), "run", 0).unwrap();
        let second = create_unique_directory(temp.path(), "run", 0).unwrap();
        let third = create_unique_directory(temp.path(), "run", 0).unwrap();

        assert_eq!(first, temp.path().join("run"));
        assert_eq!(second, temp.path().join("run1"));
        assert_eq!(third, temp.path().join("run2"));
        assert!(third.is_dir());
    }

    #[test]
    fn test_create_unique_directory_creates_parents() {
        let temp = TempDir::new().unwrap();
        let created = create_unique_directory(temp.path().join("x/y"), "out", 3).unwrap();
        assert!(created.is_dir());
    }

    #[test]
    fn test_create_unique_directory_exhausted() {
        let temp = TempDir::new().unwrap();
        create_unique_directory(temp.path(), "n", 2).unwrap();
        create_unique_directory(temp.path(), "n", 2).unwrap();

        let err = create_unique_directory(temp.path(), "n", 2).unwrap_err();
        assert!(matches!(err, Error::Operation(_)));
        assert!(err.to_string().contains("after 2 attempts"));
    }

    // -------------------------------------------------------------------------
    // copy tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_copy_dir_copies_tree() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        let dst = temp.path().join("dst");
        sample_tree(&src);

        copy_dir(&src, &dst, false).unwrap();

        assert_eq!(fs::read_to_string(dst.join("a.txt")).unwrap(), "a");
        assert_eq!(fs::read_to_string(dst.join("sub/deeper/c.txt")).unwrap(), "c");
    }

    #[test]
    fn test_copy_dir_existing_destination() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        let dst = temp.path().join("dst");
        sample_tree(&src);
        write(&dst.join("stale.txt"), "old");

        let err = copy_dir(&src, &dst, false).unwrap_err();
        assert!(matches!(err, Error::AlreadyExists(_)));

        copy_dir(&src, &dst, true).unwrap();
        assert!(!dst.join("stale.txt").exists());
        assert!(dst.join("sub/b.txt").exists());
    }

    #[test]
    fn test_copy_dir_source_must_be_dir() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("file");
        write(&file, "x");

        let err = copy_dir(&file, temp.path().join("out"), false).unwrap_err();
        assert!(matches!(err, Error::NotADirectory(_)));
        assert!(copy_dir_preserve(&file, temp.path().join("out")).is_err());
        assert!(copy_dir_overwrite(&file, temp.path().join("out")).is_err());
    }

    #[test]
    fn test_copy_dir_preserve_keeps_existing() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        let dst = temp.path().join("dst");
        sample_tree(&src);
        write(&dst.join("a.txt"), "mine");

        copy_dir_preserve(&src, &dst).unwrap();

        assert_eq!(fs::read_to_string(dst.join("a.txt")).unwrap(), "mine");
        assert_eq!(fs::read_to_string(dst.join("sub/b.txt")).unwrap(), "b");
    }

    #[test]
    fn test_copy_dir_overwrite_replaces_existing() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        let dst = temp.path().join("dst");
        sample_tree(&src);
        write(&dst.join("a.txt"), "mine");
        write(&dst.join("extra.txt"), "kept");

        copy_dir_overwrite(&src, &dst).unwrap();

        assert_eq!(fs::read_to_string(dst.join("a.txt")).unwrap(), "a");
        assert_eq!(fs::read_to_string(dst.join("extra.txt")).unwrap(), "kept");
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_skips_symlinks() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        let dst = temp.path().join("dst");
        sample_tree(&src);
        std::os::unix::fs::symlink(src.join("a.txt"), src.join("link.txt")).unwrap();
        std::os::unix::fs::symlink(src.join("sub"), src.join("link-dir")).unwrap();

        copy_dir(&src, &dst, false).unwrap();

        assert!(dst.join("a.txt").exists());
        assert!(fs::symlink_metadata(dst.join("link.txt")).is_err());
        assert!(fs::symlink_metadata(dst.join("link-dir")).is_err());
    }

    #[test]
    fn test_rename_dir() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        let dst = temp.path().join("dst");
        sample_tree(&src);

        rename_dir(&src, &dst, false).unwrap();

        assert!(!src.exists());
        assert!(dst.join("sub/deeper/c.txt").exists());
    }

    // -------------------------------------------------------------------------
    // delete / recreate tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_delete_dir_contents() {
        let temp = TempDir::new().unwrap();
        sample_tree(temp.path());
        write(&temp.path().join(".dotfile"), "");

        delete_dir_contents(temp.path()).unwrap();

        assert!(temp.path().is_dir());
        assert!(is_empty_dir(temp.path()).unwrap());
    }

    #[test]
    fn test_delete_dir_contents_except() {
        let temp = TempDir::new().unwrap();
        sample_tree(temp.path());
        write(&temp.path().join("keeper/x"), "");

        delete_dir_contents_except(temp.path(), "sub").unwrap();

        assert!(temp.path().join("sub/b.txt").exists());
        assert!(!temp.path().join("a.txt").exists());
        assert!(!temp.path().join("keeper").exists());
    }

    #[test]
    fn test_recreate_dirs() {
        let temp = TempDir::new().unwrap();
        let existing = temp.path().join("existing");
        let fresh = temp.path().join("fresh/nested");
        write(&existing.join("file"), "x");

        recreate_dirs([&existing, &fresh]).unwrap();

        assert!(is_empty_dir(&existing).unwrap());
        assert!(fresh.is_dir());
    }

    // -------------------------------------------------------------------------
    // list_directory tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_list_directory_direct_children() {
        let temp = TempDir::new().unwrap();
        sample_tree(temp.path());

        let listing = list_directory(temp.path(), false).unwrap();
        let names: Vec<_> = listing.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["a.txt", "sub"]);
        assert_eq!(listing[0].size, 1);
        assert!(listing[1].mode.starts_with('d'));
    }

    #[test]
    fn test_list_directory_recursive() {
        let temp = TempDir::new().unwrap();
        sample_tree(temp.path());

        let listing = list_directory(temp.path(), true).unwrap();
        let names: Vec<_> = listing.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["a.txt", "sub", "b.txt", "deeper", "c.txt"]);
    }

    #[test]
    fn test_list_directory_display() {
        let temp = TempDir::new().unwrap();
        write(&temp.path().join("hello.txt"), "hello");

        let listing = list_directory(temp.path(), false).unwrap();
        let line = listing[0].to_string();
        let parts: Vec<_> = line.split(' ').collect();

        assert!(parts[0].starts_with('-'));
        assert_eq!(parts[1], "5");
        assert_eq!(parts.last(), Some(&"hello.txt"));
        assert!(line.contains("UTC"));
    }

    #[cfg(unix)]
    #[test]
    fn test_list_directory_marks_symlinks() {
        let temp = TempDir::new().unwrap();
        sample_tree(temp.path());
        std::os::unix::fs::symlink(temp.path().join("sub"), temp.path().join("link")).unwrap();
        std::os::unix::fs::symlink(temp.path().join("gone"), temp.path().join("dangling"))
            .unwrap();

        let listing = list_directory(temp.path(), true).unwrap();
        let mode_of = |name: &str| {
            listing
                .iter()
                .find(|l| l.name == name)
                .map(|l| l.mode.clone())
                .unwrap()
        };
        assert!(mode_of("link").starts_with('L'));
        assert!(mode_of("dangling").starts_with('L'));
        assert!(mode_of("sub").starts_with('d'));
        assert_eq!(listing.iter().filter(|l| l.name == "b.txt").count(), 1);
    }

    #[test]
    fn test_list_directory_errors() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("file");
        write(&file, "");

        assert!(list_directory(temp.path().join("missing"), false)
            .unwrap_err()
            .is_not_found());
        assert!(matches!(
            list_directory(&file, false).unwrap_err(),
            Error::NotADirectory(_)
        ));
    }
}
