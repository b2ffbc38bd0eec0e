use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tudo", about = concat!("tudo v", env!("CARGO_PKG_VERSION"), " - task lists in the terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Read settings from this file instead of the default tudo.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Use this data file instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print every list with its tasks
    Lists,
    /// Validate the data file
    Check,
    /// Append an empty list to the data file
    New(NewArgs),
}

#[derive(Args)]
pub struct NewArgs {
    /// Name of the new list
    pub name: String,
    /// Group the list belongs to
    #[arg(long)]
    pub group: Option<String>,
}
