//! Argument definitions for the `vidwall` binary.

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use vidwall_api::DestinationFilter;

#[derive(Debug, Parser)]
#[command(name = "vidwall", version, about = "Query an Event Master video processor")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Device JSON-RPC endpoint, e.g. http://192.168.0.10:9999/
    #[arg(long, env = "VIDWALL_URL", global = true)]
    pub url: Option<String>,

    /// Per-call timeout in seconds
    #[arg(long, env = "VIDWALL_TIMEOUT", default_value_t = 10, global = true)]
    pub timeout: u64,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the device's sources
    Sources,

    /// List screen and auxiliary destinations
    Destinations {
        /// Which destination kinds to request
        #[arg(long, value_enum, default_value_t = FilterArg::All)]
        filter: FilterArg,
    },

    /// Show one screen's layered content
    Content {
        /// Screen destination id
        screen_id: i32,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FilterArg {
    All,
    Screen,
    Aux,
}

impl From<FilterArg> for DestinationFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => Self::All,
            FilterArg::Screen => Self::Screen,
            FilterArg::Aux => Self::Aux,
        }
    }
}
