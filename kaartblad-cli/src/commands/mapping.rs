use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use crate::cli_types::CatalogArgs;
use crate::config::{PipelineConfig, require_path};
use crate::error::CliError;
use crate::table::Table;

use super::load_mapping;

/// Run the `mapping` command.
pub(crate) fn run_mapping(
    config: &PipelineConfig,
    catalog: CatalogArgs,
    output: Option<PathBuf>,
    strict: bool,
) -> Result<(), CliError> {
    let catalog_path = require_path(catalog.catalog, config.paths.catalog.as_ref(), "catalog")?;
    let report = load_mapping(&catalog_path)?;

    for (id, name) in report.table.iter() {
        log::info!("{}: {}", id, name);
    }
    log::info!(
        "{}",
        format!("detected {} labels", report.table.len()).if_supports_color(Stderr, |t| t.bold()),
    );

    for conflict in &report.conflicts {
        log::info!(
            "  {} sheet {}: '{}' kept, '{}' ignored (row {})",
            "conflict".if_supports_color(Stderr, |t| t.yellow()),
            conflict.id,
            conflict.kept,
            conflict.ignored,
            conflict.row,
        );
    }
    let suspicious = report.suspicious_skips().count();
    if suspicious > 0 {
        log::info!(
            "  {} rows skipped (see warnings above)",
            suspicious.if_supports_color(Stderr, |t| t.yellow()),
        );
    }

    if let Some(path) = output {
        let mut table = Table::new(vec!["id".to_string(), "name".to_string()]);
        for (id, name) in report.table.iter() {
            table.push_row(vec![Some(id.to_string()), Some(name.to_string())]);
        }
        table.write_csv(&path)?;
        log::info!("Mapping written to {}", path.display());
    }

    if strict && !report.conflicts.is_empty() {
        return Err(CliError::Conflicts(report.conflicts.len()));
    }
    Ok(())
}
