//! Pipeline configuration loaded from `kaartblad.toml`.
//!
//! Every field has a default, so a config file only needs the values that
//! differ per run (typically paths and the edition). Command-line flags win
//! over the file.
//!
//! ```toml
//! [paths]
//! catalog = "content/productinfo_klassed.csv"
//! manifests = "content/iiif-manifests/09-1874-456827.json"
//!
//! [compare]
//! edition = "VIJFDE"
//!
//! [rewrite.name_replacements]
//! dup = "duplicate"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use kaartblad_manifest::{
    Dictionary, LabelRewriter, OUTPUT_PREFIX, PROTECTED_PREFIX, label_replacements,
    name_replacements,
};

use crate::error::CliError;

/// Config file looked up in the working directory when `--config` is absent.
pub(crate) const DEFAULT_CONFIG_FILE: &str = "kaartblad.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct PipelineConfig {
    pub paths: PathsConfig,
    pub compare: CompareConfig,
    pub rewrite: RewriteConfig,
}

/// Input and output locations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct PathsConfig {
    pub catalog: Option<PathBuf>,
    pub manifests: Option<PathBuf>,
    pub labels_output: Option<PathBuf>,
    pub compare_output: Option<PathBuf>,
    pub rewrite_dir: Option<PathBuf>,
    pub lonely_input: Option<PathBuf>,
}

/// Row and column selection for the edition comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct CompareConfig {
    /// Value of the `editie` column to keep.
    pub edition: Option<String>,
    /// Rows dropped from the top of the filtered catalog.
    pub skip_rows: usize,
    /// `bladtype` values whose rows are dropped.
    pub excluded_sheet_types: Vec<String>,
    /// Manifest labels carrying one of these codes are dropped.
    pub excluded_label_segments: Vec<String>,
    /// Catalog columns kept, by name prefix.
    pub column_prefixes: Vec<String>,
    /// Columns removed from the combined table.
    pub drop_columns: Vec<String>,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            edition: None,
            skip_rows: 1,
            excluded_sheet_types: strings(&[
                "Hydrologische  Waarnemingspunten",
                "Watervoorzieningseenheden",
                "Watervoorziening",
            ]),
            excluded_label_segments: strings(&["B", "WVE", "HWP", "L", "R"]),
            column_prefixes: strings(&[
                "datum__",
                "titel",
                "onderliggend_kaartbeeld",
                "bewerking_door__?datum",
            ]),
            drop_columns: strings(&["datum__uitgave"]),
        }
    }
}

/// Substitution dictionaries and output naming for `rewrite`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct RewriteConfig {
    /// Strings starting with this are exempt from segment rewriting.
    /// An empty string disables the exemption.
    pub protected_prefix: String,
    /// Prepended to rewritten file names; an empty prefix is rejected.
    pub output_prefix: String,
    pub label_replacements: Dictionary,
    pub name_replacements: Dictionary,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            protected_prefix: PROTECTED_PREFIX.to_string(),
            output_prefix: OUTPUT_PREFIX.to_string(),
            label_replacements: label_replacements(),
            name_replacements: name_replacements(),
        }
    }
}

impl RewriteConfig {
    pub(crate) fn rewriter(&self) -> LabelRewriter {
        let protected = (!self.protected_prefix.is_empty()).then(|| self.protected_prefix.clone());
        LabelRewriter::standard(
            self.label_replacements.clone(),
            self.name_replacements.clone(),
            protected,
        )
    }
}

/// A config together with the file it came from, if any.
#[derive(Debug, Clone, Default)]
pub(crate) struct LoadedConfig {
    pub config: PipelineConfig,
    pub source: Option<PathBuf>,
}

/// Resolve which config file to read:
///
/// 1. `--config` override (must exist)
/// 2. `kaartblad.toml` in `cwd`, when present
/// 3. none: built-in defaults
pub(crate) fn resolve_config_path(
    cli_override: Option<&Path>,
    cwd: &Path,
) -> Result<Option<PathBuf>, CliError> {
    if let Some(path) = cli_override {
        if !path.is_file() {
            return Err(CliError::config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        return Ok(Some(path.to_path_buf()));
    }
    let default = cwd.join(DEFAULT_CONFIG_FILE);
    Ok(default.is_file().then_some(default))
}

/// Load the effective configuration.
pub(crate) fn load(cli_override: Option<&Path>) -> Result<LoadedConfig, CliError> {
    let cwd = std::env::current_dir()?;
    let Some(path) = resolve_config_path(cli_override, &cwd)? else {
        log::debug!("No config file, using defaults");
        return Ok(LoadedConfig::default());
    };
    let config = load_file(&path)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(LoadedConfig {
        config,
        source: Some(path),
    })
}

pub(crate) fn load_file(path: &Path) -> Result<PipelineConfig, CliError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| CliError::config(format!("reading {}: {e}", path.display())))?;
    parse(&contents).map_err(|e| CliError::config(format!("{}: {e}", path.display())))
}

/// Decode a config and check the values serde cannot.
pub(crate) fn parse(contents: &str) -> Result<PipelineConfig, String> {
    let config: PipelineConfig = toml::from_str(contents).map_err(|e| e.to_string())?;
    if config.rewrite.output_prefix.is_empty() {
        return Err("[rewrite].output_prefix must not be empty".to_string());
    }
    Ok(config)
}

pub(crate) fn to_toml(config: &PipelineConfig) -> Result<String, CliError> {
    toml::to_string_pretty(config).map_err(|e| CliError::config(e.to_string()))
}

/// Pick the command-line value, then the config value, or fail naming both.
pub(crate) fn require_path(
    flag: Option<PathBuf>,
    configured: Option<&PathBuf>,
    what: &str,
) -> Result<PathBuf, CliError> {
    flag.or_else(|| configured.cloned()).ok_or_else(|| {
        CliError::missing_input(format!("no {what} given (pass it as a flag or set it in the config)"))
    })
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
