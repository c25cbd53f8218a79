mod cli;
mod commands;
mod error;
mod output;

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use url::Url;
use vidwall_api::{Client, ClientOptions};

use crate::cli::{Cli, GlobalOpts};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let client = build_client(&cli.global)?;
    tracing::debug!(command = ?cli.command, url = %client.url(), "dispatching command");
    commands::dispatch(cli.command, &client).await
}

fn build_client(global: &GlobalOpts) -> Result<Client, CliError> {
    let url_str = global.url.as_deref().ok_or(CliError::NoUrl)?;
    let url: Url = url_str.parse().map_err(|_| CliError::BadUrl {
        url: url_str.to_owned(),
    })?;

    ClientOptions::new(url)
        .timeout(Duration::from_secs(global.timeout))
        .build()
        .map_err(CliError::from)
}
