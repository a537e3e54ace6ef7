use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::settings::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "conto", disable_version_flag = true)]
#[command(about = "Split shared expenses and work out who pays whom")]
pub struct Cli {
    /// Optional config file path (TOML).
    #[arg(long)]
    pub config: Option<String>,
    /// Override the output format.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
    /// Override the log level (e.g. debug).
    #[arg(long)]
    pub level: Option<String>,
    /// Override the currency symbol used in text output.
    #[arg(long)]
    pub currency: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Net balance of every person.
    Balances(SnapshotArgs),
    /// Payments that settle every balance.
    Settle(SnapshotArgs),
    /// Total spending, balances and suggested settlements.
    Report(SnapshotArgs),
}

impl Command {
    pub fn snapshot(&self) -> &PathBuf {
        match self {
            Self::Balances(args) | Self::Settle(args) | Self::Report(args) => &args.snapshot,
        }
    }
}

#[derive(Debug, Args)]
pub struct SnapshotArgs {
    /// Group snapshot to read (JSON).
    pub snapshot: PathBuf,
}
