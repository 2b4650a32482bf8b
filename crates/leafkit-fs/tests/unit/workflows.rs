//! Multi-step workflows mixing directory and file helpers.

use std::fs;
use std::path::{Path, PathBuf};

use leafkit_fs::{
    DEFAULT_FILE_MODE, copy_dir_preserve, create_unique_directory, delete_dir_contents_except,
    glob_all_files, ignore_file, list_directory, ops, recreate_dirs, yaml_from_file,
};
use serde::Deserialize;
use tempfile::TempDir;

fn seed(root: &Path, files: &[(&str, &str)]) {
    for (rel, content) in files {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
}

#[test]
fn test_stage_template_into_unique_run_dir() {
    let temp = TempDir::new().unwrap();
    let template = temp.path().join("template");
    seed(
        &template,
        &[("config.yaml", "name: default\n"), ("bin/run.sh", "echo run\n")],
    );

    let runs = temp.path().join("runs");
    let first = create_unique_directory(&runs, "build", 0).unwrap();
    ops::write(first.join("config.yaml"), "name: custom\n", DEFAULT_FILE_MODE).unwrap();
    copy_dir_preserve(&template, &first).unwrap();

    #[derive(Deserialize)]
    struct Config {
        name: String,
    }
    let config: Config = yaml_from_file(first.join("config.yaml")).unwrap();
    assert_eq!(config.name, "custom");
    assert!(first.join("bin/run.sh").exists());

    let second = create_unique_directory(&runs, "build", 0).unwrap();
    assert_eq!(second, runs.join("build1"));
    assert_eq!(list_directory(&runs, false).unwrap().len(), 2);
}

#[test]
fn test_collect_files_skipping_ignored() {
    let temp = TempDir::new().unwrap();
    seed(
        temp.path(),
        &[
            ("src/lib.rs", ""),
            ("src/lib.rs.bak", ""),
            ("src/util/mod.rs", ""),
            ("debug.log", ""),
        ],
    );

    let ignores = ["*.bak", "*.log"];
    let pattern = format!("{}/*", temp.path().display());
    let mut kept: Vec<PathBuf> = Vec::new();
    glob_all_files("", &pattern, |path| {
        let name = path.file_name().unwrap();
        if !ignore_file(Path::new(name), &ignores)? {
            kept.push(path.strip_prefix(temp.path()).unwrap().to_path_buf());
        }
        Ok(())
    })
    .unwrap();
    kept.sort();

    assert_eq!(
        kept,
        vec![PathBuf::from("src/lib.rs"), PathBuf::from("src/util/mod.rs")]
    );
}

#[test]
fn test_reset_workspace_keeping_cache() {
    let temp = TempDir::new().unwrap();
    seed(
        temp.path(),
        &[("cache/blob", "keep"), ("out/a", ""), ("tmp.txt", "")],
    );

    delete_dir_contents_except(temp.path(), "cache").unwrap();
    recreate_dirs([temp.path().join("out")]).unwrap();

    let names: Vec<_> = list_directory(temp.path(), false)
        .unwrap()
        .into_iter()
        .map(|entry| entry.name)
        .collect();
    assert_eq!(names, vec!["cache", "out"]);
    assert_eq!(
        fs::read_to_string(temp.path().join("cache/blob")).unwrap(),
        "keep"
    );
}
