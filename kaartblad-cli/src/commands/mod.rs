pub(crate) mod compare;
pub(crate) mod config;
pub(crate) mod labels;
pub(crate) mod lonely;
pub(crate) mod mapping;
pub(crate) mod rewrite;

use std::path::Path;

use kaartblad_catalog::{CatalogTable, MappingReport, build_mapping};
use kaartblad_manifest::{ManifestRecord, load_records};

use crate::error::CliError;

/// Load the catalog and build the mapping table, logging what was dropped.
pub(crate) fn load_mapping(catalog_path: &Path) -> Result<MappingReport, CliError> {
    let catalog = CatalogTable::load(catalog_path)?;
    log::info!("Read {} catalog rows from {}", catalog.len(), catalog_path.display());

    let report = build_mapping(catalog.titles()?);
    if !report.conflicts.is_empty() {
        log::warn!(
            "{} catalog rows name an already mapped sheet differently (first name kept)",
            report.conflicts.len()
        );
    }
    Ok(report)
}

/// Load manifest records from a file or directory; fails when nothing is
/// readable at `path`.
pub(crate) fn load_manifest_records(path: &Path) -> Result<Vec<ManifestRecord>, CliError> {
    let records = load_records(path)?;
    log::info!("{} manifest labels in total", records.len());
    Ok(records)
}
