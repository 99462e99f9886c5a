//! Logger setup for the CLI.
//!
//! Normal output goes through `log::info!`, so the format is just the
//! message unless `--verbose` asks for timestamps and levels. With
//! `--logfile` every line is also appended to a file with ANSI codes removed.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use log::{Level, LevelFilter};

use crate::error::CliError;

/// Install the global logger. `RUST_LOG` overrides the level chosen by flags.
pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> Result<(), CliError> {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).parse_default_env();

    builder.format(move |buf, record| {
        if verbose {
            writeln!(
                buf,
                "[{} {:<5} {}] {}",
                buf.timestamp_millis(),
                record.level(),
                record.target(),
                record.args()
            )
        } else {
            match record.level() {
                Level::Error => writeln!(buf, "error: {}", record.args()),
                Level::Warn => writeln!(buf, "warning: {}", record.args()),
                _ => writeln!(buf, "{}", record.args()),
            }
        }
    });

    if let Some(path) = logfile {
        let file = File::options().create(true).append(true).open(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(TeeWriter {
            terminal: io::stderr(),
            file,
        })));
    }

    builder
        .try_init()
        .map_err(|e| CliError::config(format!("logger already initialized: {e}")))
}

/// Writes to the terminal unchanged and to the log file without ANSI codes.
struct TeeWriter {
    terminal: io::Stderr,
    file: File,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.terminal.write_all(buf)?;
        self.file.write_all(&strip_ansi_escapes::strip(buf))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.terminal.flush()?;
        self.file.flush()
    }
}
