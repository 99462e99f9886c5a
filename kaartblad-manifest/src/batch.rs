//! Directory-wide rewriting of manifest files.
//!
//! Each file is decoded, rewritten and written next to the original under a
//! prefixed name. Files are independent: a file that cannot be read, decoded
//! or written is logged and counted, and the batch moves on.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use crate::error::ManifestError;
use crate::extract::load_manifest;
use crate::rewrite::LabelRewriter;

/// Default prefix of rewritten files.
pub const OUTPUT_PREFIX: &str = "modified_";

/// Options for [`rewrite_directory`].
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Prefix prepended to each input file name to form the output name.
    /// Must not be empty, or outputs would replace their inputs.
    pub output_prefix: String,
    /// Report planned writes without touching the filesystem.
    pub dry_run: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            output_prefix: OUTPUT_PREFIX.to_string(),
            dry_run: false,
        }
    }
}

/// Outcome for one file of the batch.
#[derive(Debug)]
pub enum FileOutcome {
    /// Output written (or planned, in a dry run).
    Written { output: PathBuf, changed: bool },
    /// The file was skipped because of an error.
    Failed(ManifestError),
}

/// Per-file outcomes of a batch run, in processing order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub files: Vec<(PathBuf, FileOutcome)>,
}

impl BatchReport {
    pub fn written(&self) -> usize {
        self.files
            .iter()
            .filter(|(_, o)| matches!(o, FileOutcome::Written { .. }))
            .count()
    }

    pub fn changed(&self) -> usize {
        self.files
            .iter()
            .filter(|(_, o)| matches!(o, FileOutcome::Written { changed: true, .. }))
            .count()
    }

    pub fn failures(&self) -> impl Iterator<Item = (&Path, &ManifestError)> {
        self.files.iter().filter_map(|(p, o)| match o {
            FileOutcome::Failed(e) => Some((p.as_path(), e)),
            FileOutcome::Written { .. } => None,
        })
    }
}

/// Rewrite every file in `dir`.
///
/// Hidden files and files that already carry the output prefix are not
/// inputs. An empty output prefix and a missing or unreadable `dir` are the
/// only fatal errors.
pub fn rewrite_directory(
    dir: &Path,
    rewriter: &LabelRewriter,
    options: &BatchOptions,
) -> Result<BatchReport, ManifestError> {
    if options.output_prefix.is_empty() {
        return Err(ManifestError::EmptyOutputPrefix);
    }
    if !dir.is_dir() {
        return Err(ManifestError::NotADirectory(dir.to_path_buf()));
    }

    let mut inputs: Vec<PathBuf> = std::fs::read_dir(dir)
        .map_err(|e| ManifestError::io(dir, e))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .filter(|p| {
            p.file_name().and_then(|n| n.to_str()).is_some_and(|n| {
                !n.starts_with('.') && !n.starts_with(&options.output_prefix)
            })
        })
        .collect();
    inputs.sort();

    let mut report = BatchReport::default();
    for input in inputs {
        let outcome = match rewrite_file(&input, rewriter, options) {
            Ok((output, changed)) => {
                if options.dry_run {
                    log::info!("Would write {}", output.display());
                } else {
                    log::info!("Successfully processed {}", display_name(&input));
                }
                FileOutcome::Written { output, changed }
            }
            Err(e) => {
                if e.is_decode_error() {
                    log::warn!("Could not decode {}, skipping: {}", display_name(&input), e);
                } else {
                    log::warn!("Error processing {}: {}", display_name(&input), e);
                }
                FileOutcome::Failed(e)
            }
        };
        report.files.push((input, outcome));
    }

    Ok(report)
}

/// Rewrite one file; returns the output path and whether anything changed.
pub fn rewrite_file(
    input: &Path,
    rewriter: &LabelRewriter,
    options: &BatchOptions,
) -> Result<(PathBuf, bool), ManifestError> {
    if options.output_prefix.is_empty() {
        return Err(ManifestError::EmptyOutputPrefix);
    }
    let document = load_manifest(input)?;
    let rewritten = rewriter.apply(&document);
    let changed = rewritten != document;

    let output = output_path(input, &options.output_prefix);
    if !options.dry_run {
        write_pretty_json(&output, &rewritten)?;
    }
    Ok((output, changed))
}

/// `dir/name` -> `dir/<prefix>name`.
pub fn output_path(input: &Path, prefix: &str) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{prefix}{name}"))
}

/// Write JSON with four-space indentation, keeping non-ASCII text as-is.
pub fn write_pretty_json(path: &Path, value: &Value) -> Result<(), ManifestError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| ManifestError::json(path, e))?;
    std::fs::write(path, buf).map_err(|e| ManifestError::io(path, e))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
