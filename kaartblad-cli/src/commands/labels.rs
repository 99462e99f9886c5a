use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use crate::cli_types::CatalogArgs;
use crate::config::{PipelineConfig, require_path};
use crate::error::CliError;
use crate::pipeline::{NAME_COLUMN, labels_table};

use super::{load_manifest_records, load_mapping};

const DEFAULT_OUTPUT: &str = "labels.csv";

/// Run the `labels` command.
pub(crate) fn run_labels(
    config: &PipelineConfig,
    catalog: CatalogArgs,
    manifests: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<(), CliError> {
    let catalog_path = require_path(catalog.catalog, config.paths.catalog.as_ref(), "catalog")?;
    let manifest_path =
        require_path(manifests, config.paths.manifests.as_ref(), "manifest path")?;
    let output = output
        .or_else(|| config.paths.labels_output.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let records = load_manifest_records(&manifest_path)?;
    let mapping = load_mapping(&catalog_path)?.table;
    log::info!("detected {} labels", mapping.len());

    let table = labels_table(&records, &mapping);
    let unnamed: Vec<usize> = (0..table.len())
        .filter(|&row| table.cell(row, NAME_COLUMN).is_none())
        .collect();
    for &row in &unnamed {
        log::debug!("No catalog name for '{}'", records[row].map_label);
    }

    table.write_csv(&output)?;
    log::info!(
        "{} {} labels to {} ({} without a catalog name)",
        "Wrote".if_supports_color(Stderr, |t| t.bold()),
        table.len(),
        output.display().if_supports_color(Stderr, |t| t.cyan()),
        unnamed.len(),
    );
    Ok(())
}
