use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use kaartblad_catalog::CatalogTable;
use kaartblad_manifest::exclude_sheet_types;

use crate::cli_types::CatalogArgs;
use crate::config::{PipelineConfig, require_path};
use crate::error::CliError;
use crate::pipeline::{compare_table, edition_rows};

use super::load_manifest_records;

const DEFAULT_OUTPUT: &str = "compare.csv";

/// Run the `compare` command.
pub(crate) fn run_compare(
    config: &PipelineConfig,
    catalog: CatalogArgs,
    manifests: Option<PathBuf>,
    edition: Option<String>,
    output: Option<PathBuf>,
) -> Result<(), CliError> {
    let compare = &config.compare;
    let catalog_path = require_path(catalog.catalog, config.paths.catalog.as_ref(), "catalog")?;
    let manifest_path =
        require_path(manifests, config.paths.manifests.as_ref(), "manifest path")?;
    let edition = edition
        .or_else(|| compare.edition.clone())
        .ok_or_else(|| CliError::missing_input("no edition given (use --edition or [compare].edition)"))?;
    let output = output
        .or_else(|| config.paths.compare_output.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let records = load_manifest_records(&manifest_path)?;
    let records = exclude_sheet_types(records, &compare.excluded_label_segments);
    log::info!("{} manifest labels after excluding sheet types", records.len());

    let catalog = CatalogTable::load(&catalog_path)?;
    let rows = edition_rows(catalog, &edition, compare)?;
    log::info!(
        "{} catalog rows for edition {}",
        rows.len(),
        edition.if_supports_color(Stderr, |t| t.cyan()),
    );
    if rows.len() != records.len() {
        log::warn!(
            "Row counts differ: {} manifest labels vs {} catalog rows",
            records.len(),
            rows.len()
        );
    }

    let table = compare_table(&records, &rows, &compare.drop_columns);
    table.write_csv(&output)?;
    log::info!(
        "{} {} rows to {}",
        "Wrote".if_supports_color(Stderr, |t| t.bold()),
        table.len(),
        output.display().if_supports_color(Stderr, |t| t.cyan()),
    );
    Ok(())
}
