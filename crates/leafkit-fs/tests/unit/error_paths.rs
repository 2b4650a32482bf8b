//! Errors carry the path they concern.

use leafkit_core::Error;
use leafkit_fs::{copy_dir, dir_exists, file_is_empty, json_from_file, list_directory, load_bytes};
use tempfile::TempDir;

#[test]
fn test_missing_source_reports_path() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope");

    let err = copy_dir(&missing, temp.path().join("dst"), false).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.path(), Some(missing.as_path()));
}

#[test]
fn test_file_errors_name_the_file() {
    let temp = TempDir::new().unwrap();

    let err = file_is_empty(temp.path().join("absent.txt")).unwrap_err();
    assert!(err.to_string().contains("absent.txt"));

    let err = load_bytes(temp.path(), "absent.bin").unwrap_err();
    assert!(err.to_string().contains("absent.bin"));
}

#[test]
fn test_json_parse_error_is_parse_variant() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("list.json");
    std::fs::write(&path, "[1, 2,").unwrap();

    let err = json_from_file::<Vec<u32>>(&path).unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}

#[test]
fn test_not_found_is_not_an_error_for_dir_exists() {
    let temp = TempDir::new().unwrap();
    assert!(!dir_exists(temp.path().join("ghost")).unwrap());
    assert!(list_directory(temp.path().join("ghost"), true).is_err());
}
