//! Joins between manifest records and the catalog.

use kaartblad_catalog::{
    CatalogError, CatalogTable, EDITION_COLUMN, MappingTable, SHEET_TYPE_COLUMN,
};
use kaartblad_manifest::{MAP_LABEL_COLUMN, ManifestRecord};

use crate::config::CompareConfig;
use crate::table::Table;

/// Column holding the catalog name in the labels export.
pub(crate) const NAME_COLUMN: &str = "name";

/// `map_label` plus the catalog name of the label's sheet, when known.
pub(crate) fn labels_table(records: &[ManifestRecord], mapping: &MappingTable) -> Table {
    let mut table = Table::new(vec![MAP_LABEL_COLUMN.to_string(), NAME_COLUMN.to_string()]);
    for record in records {
        let name = record
            .sheet_label()
            .and_then(|label| mapping.get(label.number))
            .map(str::to_string);
        table.push_row(vec![Some(record.map_label.clone()), name]);
    }
    table
}

/// Manifest records as a table: `map_label` first, then every metadata field
/// in the order it was first seen across all records.
pub(crate) fn records_table(records: &[ManifestRecord]) -> Table {
    let mut headers = vec![MAP_LABEL_COLUMN.to_string()];
    for record in records {
        for (key, _) in &record.metadata {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let mut table = Table::new(headers.clone());
    for record in records {
        let row = headers
            .iter()
            .map(|h| {
                if h == MAP_LABEL_COLUMN {
                    Some(record.map_label.clone())
                } else {
                    record.field(h).map(str::to_string)
                }
            })
            .collect();
        table.push_row(row);
    }
    table
}

/// Catalog rows of one edition, trimmed to the configured rows and columns.
pub(crate) fn edition_rows(
    catalog: CatalogTable,
    edition: &str,
    config: &CompareConfig,
) -> Result<CatalogTable, CatalogError> {
    let filtered = catalog.filter_eq(EDITION_COLUMN, edition)?;
    log::debug!("{} catalog rows for edition {}", filtered.len(), edition);

    let filtered = filtered.skip_rows(config.skip_rows);
    let filtered = if filtered.column_index(SHEET_TYPE_COLUMN).is_some() {
        filtered.exclude_values(SHEET_TYPE_COLUMN, &config.excluded_sheet_types)?
    } else {
        log::debug!("Catalog has no '{SHEET_TYPE_COLUMN}' column, keeping all sheet types");
        filtered
    };
    Ok(filtered.select_prefixed(&config.column_prefixes))
}

/// Manifest records and catalog rows side by side, aligned by position.
pub(crate) fn compare_table(
    records: &[ManifestRecord],
    catalog: &CatalogTable,
    drop_columns: &[String],
) -> Table {
    let mut right = Table::new(catalog.headers().to_vec());
    for row in catalog.rows() {
        right.push_row(row.iter().cloned().map(Some).collect());
    }
    records_table(records).beside(right).drop_columns(drop_columns)
}

#[cfg(test)]
#[path = "tests/pipeline_tests.rs"]
mod tests;
