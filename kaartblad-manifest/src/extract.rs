//! Flat records extracted from IIIF manifests.
//!
//! A manifest lists one canvas per scanned sheet under `items`. The primary
//! label lives at `label.none[0]`; descriptive fields are `metadata` entries of
//! the form `{"label": {"en": [key]}, "value": {"en": [value]}}`.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::ManifestError;
use crate::sheet_label::SheetLabel;

/// Column name under which the primary label is exported.
pub const MAP_LABEL_COLUMN: &str = "map_label";

/// One manifest item with a primary label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestRecord {
    /// Trimmed primary label (e.g., `"23.bw.1"`).
    pub map_label: String,
    /// Metadata fields in first-seen order. A value is `None` when the entry
    /// has a label but no English value.
    pub metadata: Vec<(String, Option<String>)>,
}

impl ManifestRecord {
    /// Value of a metadata field by its English label.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.metadata
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_deref())
    }

    /// The label parsed as a sheet label, when it starts with a number.
    pub fn sheet_label(&self) -> Option<SheetLabel> {
        SheetLabel::parse(&self.map_label)
    }

    /// Placeholder entries are numbered from `0` in the source data.
    pub fn is_placeholder(&self) -> bool {
        self.map_label.starts_with('0')
    }

    fn set_field(&mut self, key: String, value: Option<String>) {
        match self.metadata.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.metadata.push((key, value)),
        }
    }
}

/// Extract one record per labelled item, dropping placeholder items.
///
/// Items without a primary label are skipped. A document without `items`
/// yields no records; a document that is not a JSON object is rejected.
pub fn extract_records(manifest: &Value) -> Result<Vec<ManifestRecord>, ManifestError> {
    let Value::Object(root) = manifest else {
        return Err(ManifestError::invalid_manifest("document is not a JSON object"));
    };

    let items = match root.get("items") {
        Some(Value::Array(items)) => items.as_slice(),
        Some(_) => return Err(ManifestError::invalid_manifest("'items' is not an array")),
        None => &[],
    };

    let mut records = Vec::new();
    for (index, item) in items.iter().enumerate() {
        let Some(label) = first_string(item, "label", "none").map(str::trim) else {
            log::debug!("Skipping item {index}: no primary label");
            continue;
        };
        if label.is_empty() {
            log::debug!("Skipping item {index}: blank primary label");
            continue;
        }

        let mut record = ManifestRecord {
            map_label: label.to_string(),
            metadata: Vec::new(),
        };

        if let Some(Value::Array(entries)) = item.get("metadata") {
            for entry in entries {
                if let Some(key) = first_string(entry, "label", "en") {
                    let value = first_value(entry, "value", "en").and_then(cell_text);
                    record.set_field(key.to_string(), value);
                }
            }
        }

        if record.is_placeholder() {
            log::debug!("Dropping placeholder item '{}'", record.map_label);
            continue;
        }
        records.push(record);
    }

    Ok(records)
}

/// Drop records whose label carries one of `codes` after the sheet number.
pub fn exclude_sheet_types(records: Vec<ManifestRecord>, codes: &[String]) -> Vec<ManifestRecord> {
    if codes.is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|r| {
            let keep = r.sheet_label().is_none_or(|l| !l.has_segment_in(codes));
            if !keep {
                log::debug!("Excluding '{}' by sheet type", r.map_label);
            }
            keep
        })
        .collect()
}

/// Read and decode one manifest file.
pub fn load_manifest(path: &Path) -> Result<Value, ManifestError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ManifestError::io(path, e))?;
    serde_json::from_str(&contents).map_err(|e| ManifestError::json(path, e))
}

/// Manifest files to read from `path`: the file itself, or every `.json`
/// file in the directory except hidden, underscore-prefixed and
/// `modified_` files, sorted by name.
pub fn manifest_files(path: &Path) -> Result<Vec<PathBuf>, ManifestError> {
    let meta = std::fs::metadata(path).map_err(|e| ManifestError::io(path, e))?;
    if !meta.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files: Vec<PathBuf> = std::fs::read_dir(path)
        .map_err(|e| ManifestError::io(path, e))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| !n.starts_with(['.', '_']) && !n.starts_with("modified_"))
        })
        .collect();
    files.sort();
    Ok(files)
}

/// Load records from a manifest file or directory.
///
/// An unreadable `path` is an error. Individual files that cannot be read or
/// decoded are skipped with a warning.
pub fn load_records(path: &Path) -> Result<Vec<ManifestRecord>, ManifestError> {
    let files = manifest_files(path)?;
    let single = files.len() == 1 && files[0] == path;

    let mut records = Vec::new();
    for file in files {
        let result = load_manifest(&file).and_then(|doc| extract_records(&doc));
        match result {
            Ok(found) => {
                log::info!("Read {} labels from {}", found.len(), file.display());
                records.extend(found);
            }
            Err(e) if single => return Err(e),
            Err(e) => log::warn!("Skipping {}: {}", file.display(), e),
        }
    }
    Ok(records)
}

/// `value[outer][inner][0]` as a non-empty string.
fn first_string<'a>(value: &'a Value, outer: &str, inner: &str) -> Option<&'a str> {
    first_value(value, outer, inner)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

fn first_value<'a>(value: &'a Value, outer: &str, inner: &str) -> Option<&'a Value> {
    value.get(outer)?.get(inner)?.get(0)
}

fn cell_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
#[path = "tests/extract_tests.rs"]
mod tests;
