use std::fs;

use kaartblad_manifest::{ManifestError, load_records, manifest_files};
use tempfile::TempDir;

const MANIFEST: &str = r#"{
  "items": [
    {"label": {"none": ["023.bw.1"]}},
    {"label": {"none": ["12.W"]}, "metadata": [
      {"label": {"en": ["bewerkt"]}, "value": {"en": ["1872"]}}
    ]}
  ]
}"#;

#[test]
fn directory_skips_bad_and_ignored_files() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("01-1874.json"), MANIFEST).unwrap();
    fs::write(tmp.path().join("02-1874.json"), "[broken").unwrap();
    fs::write(tmp.path().join("_draft.json"), MANIFEST).unwrap();
    fs::write(tmp.path().join("modified_01-1874.json"), MANIFEST).unwrap();
    fs::write(tmp.path().join("notes.txt"), "12.W").unwrap();

    let files = manifest_files(tmp.path()).unwrap();
    assert_eq!(files.len(), 2);

    let records = load_records(tmp.path()).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].map_label, "12.W");
    assert_eq!(records[0].field("bewerkt"), Some("1872"));
}

#[test]
fn single_malformed_file_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("broken.json");
    fs::write(&path, "{").unwrap();
    let err = load_records(&path).unwrap_err();
    assert!(matches!(err, ManifestError::Json { .. }));
}

#[test]
fn missing_path_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let err = load_records(&tmp.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, ManifestError::Io { .. }));
}
