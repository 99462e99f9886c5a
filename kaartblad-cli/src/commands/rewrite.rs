use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use kaartblad_manifest::{BatchOptions, rewrite_directory};

use crate::config::{PipelineConfig, require_path};
use crate::error::CliError;

/// Run the `rewrite` command.
pub(crate) fn run_rewrite(
    config: &PipelineConfig,
    dir: Option<PathBuf>,
    dry_run: bool,
) -> Result<(), CliError> {
    let dir = require_path(dir, config.paths.rewrite_dir.as_ref(), "directory")?;
    let rewrite = &config.rewrite;

    for (name, dict) in [
        ("label_replacements", &rewrite.label_replacements),
        ("name_replacements", &rewrite.name_replacements),
    ] {
        if dict.is_empty() {
            log::warn!("{name} is empty, its pass leaves every string unchanged");
            continue;
        }
        let chained = dict.chained_keys();
        if !chained.is_empty() {
            log::warn!(
                "{name}: replacements of {} are themselves keys, results depend on pass order",
                chained.join(", ")
            );
        }
    }

    log::info!(
        "Processing JSON files in directory: {}",
        dir.display().if_supports_color(Stderr, |t| t.cyan()),
    );

    let options = BatchOptions {
        output_prefix: rewrite.output_prefix.clone(),
        dry_run,
    };
    let report = rewrite_directory(&dir, &rewrite.rewriter(), &options)?;

    let failed = report.failures().count();
    log::info!("");
    if dry_run {
        log::info!(
            "{}",
            "Dry run: no files written.".if_supports_color(Stderr, |t| t.yellow()),
        );
    } else {
        log::info!(
            "{}",
            "Processing complete.".if_supports_color(Stderr, |t| t.bold()),
        );
    }
    log::info!("  Files written:    {:>6}", report.written());
    log::info!("  With changes:     {:>6}", report.changed());
    if failed > 0 {
        log::info!(
            "  Failed:           {:>6}",
            failed.if_supports_color(Stderr, |t| t.bright_red()),
        );
    }
    Ok(())
}
