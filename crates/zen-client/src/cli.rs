use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "zen")]
#[command(about = "ZEN Traders command-line client")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Backend URL (overrides config.toml and environment)
    #[arg(long, global = true)]
    pub(crate) api_url: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
