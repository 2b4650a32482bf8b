//! Generic path utilities.
//!
//! - [`expand_path`] / [`expand_tilde`]: `~` and `$VAR` expansion
//! - [`is_sub_path`]: lexical containment check
//! - [`find_project_root`] / [`find_dir_with_marker`]: upward marker search
//! - [`binary_dir`]: directory of the running executable

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Expand `~` and environment variables, then make the path absolute.
///
/// `$VAR` and `${VAR}` are replaced from the environment; undefined
/// variables expand to the empty string. Relative results are joined onto
/// the current working directory.
///
/// # Errors
///
/// - [`Error::Config`] if the path starts with `~` and no home directory is
///   known.
/// - [`Error::Io`] if the current directory cannot be read.
///
/// # Example
///
/// ```no_run
/// use leafkit_core::util::paths::expand_path;
///
/// let workspace = expand_path("~/workspace/foo")?;
/// assert!(workspace.is_absolute());
/// # Ok::<(), leafkit_core::Error>(())
/// ```
pub fn expand_path(path: &str) -> Result<PathBuf> {
    let home = if path.starts_with('~') {
        let home = dirs::home_dir()
            .ok_or_else(|| Error::config("failed to get user home directory"))?;
        Some(home.to_string_lossy().into_owned())
    } else {
        None
    };

    let expanded = shellexpand::full_with_context_no_errors(
        path,
        || home,
        |var| Some(env::var(var).unwrap_or_default()),
    );
    let expanded = PathBuf::from(expanded.into_owned());

    if expanded.is_absolute() {
        return Ok(expanded);
    }
    let cwd = env::current_dir()?;
    Ok(cwd.join(expanded))
}

/// Expand a leading `~` to the home directory.
///
/// Leaves the path unchanged when there is no leading tilde or no known
/// home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    let expanded = shellexpand::tilde_with_context(path, || {
        dirs::home_dir().map(|home| home.to_string_lossy().into_owned())
    });
    PathBuf::from(expanded.into_owned())
}

/// Returns `true` if `path` is `base` or lies below it.
///
/// The comparison is lexical: `.` and `..` components are folded before
/// comparing, so `base/a/../b` is inside `base` and `base/../x` is not.
/// Nothing is read from disk.
///
/// # Example
///
/// ```
/// use leafkit_core::util::paths::is_sub_path;
///
/// assert!(is_sub_path("/srv/app/logs", "/srv/app"));
/// assert!(is_sub_path("/srv/app", "/srv/app"));
/// assert!(!is_sub_path("/srv/app/../other", "/srv/app"));
/// ```
pub fn is_sub_path(path: impl AsRef<Path>, base: impl AsRef<Path>) -> bool {
    let path = normalize_lexically(path.as_ref());
    let base = normalize_lexically(base.as_ref());
    path.starts_with(&base)
}

/// Fold `.` and `..` components without touching the filesystem.
///
/// A `..` that would climb above the start of a relative path is kept, so
/// `../a` stays `../a`.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let last = out.components().next_back();
                match last {
                    Some(Component::Normal(_)) => {
                        out.pop();
                    }
                    Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                    _ => out.push(".."),
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Walk upward from `start` to the first directory containing `marker`.
///
/// `marker` may be a file or a directory and may be nested
/// (`config/default.toml`). `start` itself is checked first.
pub fn find_dir_with_marker(start: &Path, marker: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(marker).exists())
        .map(Path::to_path_buf)
}

/// Alias of [`find_dir_with_marker`] named for project-root discovery.
pub fn find_root_by_marker(start: &Path, marker: &str) -> Option<PathBuf> {
    find_dir_with_marker(start, marker)
}

/// Find the project root by walking up from the current working directory.
///
/// The root is the nearest directory containing `marker` (for example
/// `Cargo.toml` or `.git`).
///
/// # Errors
///
/// - [`Error::Io`] if the current directory cannot be read.
/// - [`Error::NotFound`] if the filesystem root is reached without a match.
///
/// # Example
///
/// ```no_run
/// use leafkit_core::util::paths::find_project_root;
///
/// let root = find_project_root("Cargo.toml")?;
/// println!("{}", root.display());
/// # Ok::<(), leafkit_core::Error>(())
/// ```
pub fn find_project_root(marker: &str) -> Result<PathBuf> {
    let cwd = env::current_dir()?;
    match find_dir_with_marker(&cwd, marker) {
        Some(root) => Ok(root),
        None => {
            log::debug!("no '{marker}' found above {}", cwd.display());
            Err(Error::not_found(marker))
        }
    }
}

/// Directory containing the running executable.
pub fn binary_dir() -> Option<PathBuf> {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}
