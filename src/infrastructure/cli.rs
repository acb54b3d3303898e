use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replay recorded grid events against a data service and print the copy text
    Replay(ReplayArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct ReplayArgs {
    /// Dataset identifier on the data service
    #[arg(long, value_name = "ID")]
    pub data_id: String,

    /// JSON file with `columns`, `row_count` and `events`
    #[arg(short, long, value_name = "FILE")]
    pub events: PathBuf,

    /// Data service URL, overrides `base_url` from the config
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Print the text only, never touch the OS clipboard
    #[arg(long)]
    pub no_clipboard: bool,

    /// Request the text without the header row
    #[arg(long)]
    pub strip_header: bool,

    /// Give up waiting for the data service after this many seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}
