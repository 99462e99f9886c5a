use std::fs;
use std::path::Path;

use kaartblad_manifest::{
    BatchOptions, FileOutcome, ManifestError, default_rewriter, rewrite_directory,
};
use serde_json::{Value, json};
use tempfile::TempDir;

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn bad_file_does_not_abort_batch() {
    let tmp = TempDir::new().unwrap();
    write(
        tmp.path(),
        "a.json",
        r#"{"items": [{"label": {"none": ["12.B"]}}, {"label": {"none": ["bw"]}}]}"#,
    );
    write(tmp.path(), "b.json", "{ not json");
    write(tmp.path(), "c.json", r#"{"label": "Rotterdam – Zuid"}"#);

    let report = rewrite_directory(tmp.path(), &default_rewriter(), &BatchOptions::default())
        .unwrap();

    assert_eq!(report.files.len(), 3);
    assert_eq!(report.written(), 2);
    assert_eq!(report.changed(), 1);
    let failures: Vec<_> = report.failures().collect();
    assert_eq!(failures.len(), 1);
    assert!(failures[0].0.ends_with("b.json"));
    assert!(failures[0].1.is_decode_error());

    let a = read_json(&tmp.path().join("modified_a.json"));
    assert_eq!(
        a,
        json!({"items": [{"label": {"none": ["12.back"]}}, {"label": {"none": ["bewerkt"]}}]})
    );
    assert!(!tmp.path().join("modified_b.json").exists());

    let c = fs::read_to_string(tmp.path().join("modified_c.json")).unwrap();
    assert!(c.contains("Rotterdam – Zuid"));
    assert!(c.contains("\n    \"label\""));
}

#[test]
fn outputs_are_not_reprocessed() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "a.json", r#"["vk"]"#);
    write(tmp.path(), "modified_a.json", r#"["old"]"#);
    write(tmp.path(), ".hidden.json", r#"["vk"]"#);

    let report = rewrite_directory(tmp.path(), &default_rewriter(), &BatchOptions::default())
        .unwrap();

    assert_eq!(report.files.len(), 1);
    assert_eq!(read_json(&tmp.path().join("modified_a.json")), json!(["verkend"]));
    assert!(!tmp.path().join("modified_modified_a.json").exists());
}

#[test]
fn dry_run_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "a.json", r#"["hz"]"#);

    let options = BatchOptions {
        dry_run: true,
        ..BatchOptions::default()
    };
    let report = rewrite_directory(tmp.path(), &default_rewriter(), &options).unwrap();

    match &report.files[0].1 {
        FileOutcome::Written { output, changed } => {
            assert!(output.ends_with("modified_a.json"));
            assert!(*changed);
        }
        FileOutcome::Failed(e) => panic!("unexpected failure: {e}"),
    }
    assert!(!tmp.path().join("modified_a.json").exists());
}

#[test]
fn missing_directory_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("nope");
    let err = rewrite_directory(&missing, &default_rewriter(), &BatchOptions::default())
        .unwrap_err();
    assert!(matches!(err, ManifestError::NotADirectory(_)));
}

#[test]
fn key_order_follows_input() {
    let tmp = TempDir::new().unwrap();
    write(
        tmp.path(),
        "a.json",
        r#"{"type": "Manifest", "id": "x", "label": "bw", "@context": "c"}"#,
    );

    rewrite_directory(tmp.path(), &default_rewriter(), &BatchOptions::default()).unwrap();

    let out = fs::read_to_string(tmp.path().join("modified_a.json")).unwrap();
    let positions: Vec<usize> = ["\"type\"", "\"id\"", "\"label\"", "\"@context\""]
        .iter()
        .map(|key| out.find(key).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{out}");
    assert!(out.contains("\"bewerkt\""));
}

#[test]
fn empty_output_prefix_is_rejected() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "a.json", r#"["bw"]"#);

    let options = BatchOptions {
        output_prefix: String::new(),
        ..BatchOptions::default()
    };
    let err = rewrite_directory(tmp.path(), &default_rewriter(), &options).unwrap_err();
    assert!(matches!(err, ManifestError::EmptyOutputPrefix));
    assert_eq!(read_json(&tmp.path().join("a.json")), json!(["bw"]));
}
