//! Validation of structs deserialized from YAML.

use leafkit_core::Error;
use leafkit_validation::{impl_fields, validate_struct_fields};
use proptest::prelude::*;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Storage {
    bucket: String,
    region: String,
}
impl_fields!(Storage {
    required "bucket" => bucket,
    optional "region" => region,
});

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Notify {
    channel: String,
}
impl_fields!(Notify {
    required "channel" => channel,
});

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Pipeline {
    name: String,
    workers: u32,
    labels: Vec<String>,
    storage: Storage,
    notify: Notify,
}
impl_fields!(Pipeline {
    required "name" => name,
    required "workers" => workers,
    optional "labels" => labels,
    nested "storage" => storage,
    optional_nested "notify" => notify,
});

fn load(yaml: &str) -> Pipeline {
    serde_yaml::from_str(yaml).unwrap()
}

#[test]
fn test_complete_document() {
    let pipeline = load(
        "name: ingest\nworkers: 4\nlabels: [nightly]\nstorage:\n  bucket: raw\n  region: eu\nnotify:\n  channel: ops\n",
    );
    assert!(validate_struct_fields(&pipeline, "").unwrap().is_empty());
}

#[test]
fn test_missing_optional_sections() {
    let pipeline = load("name: ingest\nworkers: 4\nstorage:\n  bucket: raw\n");
    assert_eq!(
        validate_struct_fields(&pipeline, "pipeline.").unwrap(),
        vec![
            "pipeline.labels",
            "pipeline.storage.region",
            "pipeline.notify.channel",
        ]
    );
}

#[test]
fn test_missing_required_values() {
    let pipeline = load("workers: 0\nlabels: [a]\n");
    let err = validate_struct_fields(&pipeline, "").unwrap_err();
    assert!(matches!(
        &err,
        Error::RequiredFieldsEmpty(fields) if fields == &["name", "workers", "storage.bucket"]
    ));
}

proptest! {
    #[test]
    fn test_workers_count_is_empty_only_at_zero(workers in any::<u32>()) {
        let pipeline = Pipeline {
            name: "p".into(),
            workers,
            storage: Storage { bucket: "b".into(), ..Storage::default() },
            ..Pipeline::default()
        };
        prop_assert_eq!(validate_struct_fields(&pipeline, "").is_err(), workers == 0);
    }
}
