//! Command dispatch: bridges CLI args -> API lookups -> output formatting.

pub mod config_cmd;
pub mod lookup;
pub mod passes;

use flyover_api::FlyoverClient;

use crate::cli::{Command, GlobalOpts, OutputFormat};
use crate::error::CliError;

/// Dispatch a lookup command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    client: &FlyoverClient,
    global: &GlobalOpts,
    format: OutputFormat,
) -> Result<(), CliError> {
    match cmd {
        Command::Next => passes::handle_next(client, global, format).await,
        Command::Passes(args) => passes::handle_passes(client, args, global, format).await,
        Command::Ip => lookup::handle_ip(client, global, format).await,
        Command::Coords(args) => lookup::handle_coords(client, args, global, format).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
