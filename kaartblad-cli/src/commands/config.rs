use crate::cli_types::ConfigAction;
use crate::config::{self, LoadedConfig};
use crate::error::CliError;

/// Run the `config` subcommands.
pub(crate) fn run_config(loaded: &LoadedConfig, action: ConfigAction) -> Result<(), CliError> {
    match action {
        ConfigAction::Show => {
            match &loaded.source {
                Some(path) => log::info!("# {}", path.display()),
                None => log::info!("# built-in defaults"),
            }
            log::info!("{}", config::to_toml(&loaded.config)?);
        }
        ConfigAction::Path => match &loaded.source {
            Some(path) => log::info!("{}", path.display()),
            None => log::info!("(none, looked for ./{})", config::DEFAULT_CONFIG_FILE),
        },
    }
    Ok(())
}
