//! Typed YAML and JSON file loading.

use std::fs;
use std::path::Path;

use leafkit_core::{Error, Result};
use serde::de::DeserializeOwned;

/// Read `path` and deserialize it as YAML.
///
/// # Errors
///
/// An I/O error if the file cannot be read, or [`Error::Parse`] naming the
/// file if it is not valid YAML for `T`.
pub fn yaml_from_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(|e| Error::io_with_path(e, path))?;
    serde_yaml::from_slice(&data)
        .map_err(|e| Error::parse(format!("Failed to parse YAML in {}: {e}", path.display())))
}

/// Read `path` and deserialize it as JSON.
///
/// # Errors
///
/// An I/O error if the file cannot be read, or [`Error::Parse`] naming the
/// file if it is not valid JSON for `T`.
pub fn json_from_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(|e| Error::io_with_path(e, path))?;
    serde_json::from_slice(&data)
        .map_err(|e| Error::parse(format!("Failed to parse JSON in {}: {e}", path.display())))
}
