//! kaartblad CLI
//!
//! Command-line interface for cleaning and cross-referencing the labels of a
//! digitized map collection.

mod cli_types;
mod commands;
mod config;
mod error;
mod logging;
mod pipeline;
mod table;

use clap::Parser;

use cli_types::{Cli, Commands};
use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let loaded = config::load(cli.config.as_deref())?;
    let config = &loaded.config;

    match cli.command {
        Commands::Mapping {
            catalog,
            output,
            strict,
        } => commands::mapping::run_mapping(config, catalog, output, strict),
        Commands::Labels {
            catalog,
            manifests,
            output,
        } => commands::labels::run_labels(config, catalog, manifests, output),
        Commands::Compare {
            catalog,
            manifests,
            edition,
            output,
        } => commands::compare::run_compare(config, catalog, manifests, edition, output),
        Commands::Rewrite { dir, dry_run } => commands::rewrite::run_rewrite(config, dir, dry_run),
        Commands::Lonely { input } => commands::lonely::run_lonely(config, input),
        Commands::Config { action } => commands::config::run_config(&loaded, action),
    }
}
