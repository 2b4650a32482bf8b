//! Configurable path resolver for project directories.
//!
//! `PathResolver` locates a project's config directory and root using
//! environment variables, directory markers, and fallback paths. The first
//! source that yields an existing directory wins; later sources are never
//! consulted.
//!
//! # Example
//!
//! ```no_run
//! use leafkit_core::util::resolver::PathResolver;
//!
//! let resolver = PathResolver::new("build-tools")
//!     .with_config_marker("config/default.toml")
//!     .with_project_markers(&["Cargo.toml", ".git"]);
//!
//! // Checks BUILD_TOOLS_CONFIG_DIR, then searches for the marker
//! if let Some(config) = resolver.config_dir() {
//!     println!("Config: {:?}", config);
//! }
//! ```

use std::env;
use std::path::{Path, PathBuf};

use crate::util::paths::{binary_dir, expand_tilde, find_dir_with_marker};
use crate::values::first_non_zero;

type Source<'a> = Box<dyn Fn() -> Option<PathBuf> + 'a>;

/// Configurable path resolver for a specific project.
#[derive(Debug, Clone)]
pub struct PathResolver {
    /// Project name (e.g., "build-tools")
    project_name: String,
    /// Environment variable prefix (e.g., "BUILD_TOOLS")
    env_prefix: String,
    /// Marker file/dir to identify config directory (e.g., "config/default.toml")
    config_marker: Option<String>,
    /// Marker files to identify project root (e.g., ["Cargo.toml", ".git"])
    project_markers: Vec<String>,
    /// Fallback config path (expanded with tilde)
    config_fallback: Option<PathBuf>,
    /// Fallback project root (expanded with tilde)
    project_fallback: Option<PathBuf>,
}

impl PathResolver {
    /// Create a new resolver for the given project name.
    ///
    /// The project name is converted to an environment variable prefix:
    /// - "build-tools" → "BUILD_TOOLS"
    /// - "my_project" → "MY_PROJECT"
    pub fn new(project_name: &str) -> Self {
        let env_prefix = project_name.to_uppercase().replace(['-', ' '], "_");

        Self {
            project_name: project_name.to_string(),
            env_prefix,
            config_marker: None,
            project_markers: vec![],
            config_fallback: None,
            project_fallback: None,
        }
    }

    /// Set the marker file/directory that identifies a config directory.
    pub fn with_config_marker(mut self, marker: &str) -> Self {
        self.config_marker = Some(marker.to_string());
        self
    }

    /// Set marker files that identify the project root.
    pub fn with_project_markers(mut self, markers: &[&str]) -> Self {
        self.project_markers = markers.iter().map(|s| (*s).to_string()).collect();
        self
    }

    /// Set a fallback path for config directory (supports ~ expansion).
    pub fn with_config_fallback(mut self, path: &str) -> Self {
        self.config_fallback = Some(expand_tilde(path));
        self
    }

    /// Set a fallback path for project root (supports ~ expansion).
    pub fn with_project_fallback(mut self, path: &str) -> Self {
        self.project_fallback = Some(expand_tilde(path));
        self
    }

    /// Get the environment variable name for a given suffix.
    ///
    /// # Example
    /// ```
    /// use leafkit_core::util::resolver::PathResolver;
    ///
    /// let resolver = PathResolver::new("build-tools");
    /// assert_eq!(resolver.env_var("CONFIG_DIR"), "BUILD_TOOLS_CONFIG_DIR");
    /// ```
    pub fn env_var(&self, suffix: &str) -> String {
        format!("{}_{}", self.env_prefix, suffix)
    }

    /// Resolve the config directory from the process environment.
    ///
    /// Checks in order:
    /// 1. `{PREFIX}_CONFIG_DIR` environment variable
    /// 2. Walk up from the binary, then from the current directory, looking
    ///    for the config marker
    /// 3. Fallback path (if configured)
    pub fn config_dir(&self) -> Option<PathBuf> {
        self.config_dir_with(|name| env::var(name).ok())
    }

    /// Like [`config_dir`](Self::config_dir), reading variables through `lookup`.
    pub fn config_dir_with<F>(&self, lookup: F) -> Option<PathBuf>
    where
        F: Fn(&str) -> Option<String>,
    {
        let sources: [Source<'_>; 3] = [
            Box::new(|| existing_from_env(&lookup, &self.env_var("CONFIG_DIR"))),
            Box::new(|| {
                let marker = self.config_marker.as_deref()?;
                search_roots()
                    .iter()
                    .find_map(|start| find_dir_with_marker(start, marker))
                    .map(|root| config_dir_under(&root, marker))
            }),
            Box::new(|| existing(self.config_fallback.as_deref())),
        ];
        let resolved = first_non_zero(sources.iter().map(|source| source()));
        log::debug!("{}: config dir resolved to {resolved:?}", self.project_name);
        resolved
    }

    /// Resolve the project root directory from the process environment.
    ///
    /// Checks in order:
    /// 1. `{PREFIX}_ROOT` environment variable
    /// 2. Walk up from the binary, then from the current directory, trying
    ///    each project marker
    /// 3. Fallback path (if configured)
    pub fn project_root(&self) -> Option<PathBuf> {
        self.project_root_with(|name| env::var(name).ok())
    }

    /// Like [`project_root`](Self::project_root), reading variables through `lookup`.
    pub fn project_root_with<F>(&self, lookup: F) -> Option<PathBuf>
    where
        F: Fn(&str) -> Option<String>,
    {
        let sources: [Source<'_>; 3] = [
            Box::new(|| existing_from_env(&lookup, &self.env_var("ROOT"))),
            Box::new(|| {
                search_roots().iter().find_map(|start| {
                    self.project_markers
                        .iter()
                        .find_map(|marker| find_dir_with_marker(start, marker))
                })
            }),
            Box::new(|| existing(self.project_fallback.as_deref())),
        ];
        let resolved = first_non_zero(sources.iter().map(|source| source()));
        log::debug!("{}: project root resolved to {resolved:?}", self.project_name);
        resolved
    }

    /// Get the project name.
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Get the environment variable prefix.
    pub fn env_prefix(&self) -> &str {
        &self.env_prefix
    }
}

/// Directories the marker search starts from: binary location, then cwd.
fn search_roots() -> Vec<PathBuf> {
    binary_dir()
        .into_iter()
        .chain(env::current_dir().ok())
        .collect()
}

fn existing_from_env<F>(lookup: &F, name: &str) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(name)?;
    let path = expand_tilde(&value);
    existing(Some(&path))
}

fn existing(path: Option<&Path>) -> Option<PathBuf> {
    path.filter(|p| p.exists()).map(Path::to_path_buf)
}

/// A nested marker (`config/default.toml`) names the directory holding its
/// first component.
fn config_dir_under(root: &Path, marker: &str) -> PathBuf {
    match marker.split('/').next() {
        Some(first) if marker.contains('/') => {
            let config_path = root.join(first);
            if config_path.exists() {
                config_path
            } else {
                root.to_path_buf()
            }
        }
        _ => root.to_path_buf(),
    }
}
