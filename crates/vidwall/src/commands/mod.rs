//! Command handlers, one module per subcommand.

mod content;
mod destinations;
mod sources;

use vidwall_api::Client;

use crate::cli::Command;
use crate::error::CliError;

pub async fn dispatch(command: Command, client: &Client) -> Result<(), CliError> {
    match command {
        Command::Sources => sources::handle(client).await,
        Command::Destinations { filter } => destinations::handle(client, filter.into()).await,
        Command::Content { screen_id } => content::handle(client, screen_id).await,
    }
}
