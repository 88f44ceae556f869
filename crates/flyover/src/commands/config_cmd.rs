//! Config subcommand handlers.

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config;
use crate::error::CliError;
use crate::output;

pub fn handle(args: &ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let path = config::active_config_path(global);

    match args.command {
        ConfigCommand::Path => {
            output::print_output(&path.display().to_string());
            Ok(())
        }

        ConfigCommand::Show => {
            let cfg = config::with_overrides(config::load_config(&path)?, global);
            let rendered = toml::to_string_pretty(&cfg)?;
            output::print_output(rendered.trim_end());
            Ok(())
        }
    }
}
