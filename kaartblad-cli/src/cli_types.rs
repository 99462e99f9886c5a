//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "kaartblad")]
#[command(about = "Clean and cross-reference map sheet labels", long_about = None)]
pub(crate) struct Cli {
    /// Configuration file (defaults to ./kaartblad.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Catalog location shared by commands that build the mapping table.
#[derive(Args, Clone)]
pub(crate) struct CatalogArgs {
    /// Catalog CSV export (overrides [paths].catalog)
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Build and print the sheet number to name mapping from the catalog
    Mapping {
        #[command(flatten)]
        catalog: CatalogArgs,

        /// Also write the mapping as CSV (id,name)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fail when the catalog names a sheet number inconsistently
        #[arg(long)]
        strict: bool,
    },

    /// Annotate manifest labels with the catalog name of their sheet
    Labels {
        #[command(flatten)]
        catalog: CatalogArgs,

        /// Manifest file or directory of manifests (overrides [paths].manifests)
        #[arg(short, long)]
        manifests: Option<PathBuf>,

        /// Output CSV (default: labels.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Put manifest records next to the catalog rows of one edition
    Compare {
        #[command(flatten)]
        catalog: CatalogArgs,

        /// Manifest file or directory of manifests (overrides [paths].manifests)
        #[arg(short, long)]
        manifests: Option<PathBuf>,

        /// Edition to compare against (e.g., EERSTE, VIJFDE)
        #[arg(short, long)]
        edition: Option<String>,

        /// Output CSV (default: compare.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Rewrite label strings in every JSON file of a directory
    Rewrite {
        /// Directory of JSON files (overrides [paths].rewrite_dir)
        dir: Option<PathBuf>,

        /// Show planned writes without executing
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// List sheet numbers that occur in only one label
    Lonely {
        /// Text file with one label per line (overrides [paths].lonely_input)
        input: Option<PathBuf>,
    },

    /// Inspect the configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,

    /// Print the config file path in use
    Path,
}
