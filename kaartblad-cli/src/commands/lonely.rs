use std::path::PathBuf;

use kaartblad_manifest::find_lonely_numbers;

use crate::config::{PipelineConfig, require_path};
use crate::error::CliError;

/// Run the `lonely` command.
pub(crate) fn run_lonely(config: &PipelineConfig, input: Option<PathBuf>) -> Result<(), CliError> {
    let input = require_path(input, config.paths.lonely_input.as_ref(), "label list")?;
    let contents = std::fs::read_to_string(&input)?;

    let lonely = find_lonely_numbers(contents.lines());
    if lonely.is_empty() {
        log::info!("Every sheet number occurs more than once.");
    } else {
        log::info!("{}", lonely.join(", "));
        log::info!("{} sheet numbers occur only once", lonely.len());
    }
    Ok(())
}
