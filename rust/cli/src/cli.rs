//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use showdown_engine::table::MAX_PLAYERS;

#[derive(Parser, Debug)]
#[command(
    name = "showdown",
    version,
    about = "Deal Texas Hold'em hands and find the winner"
)]
pub struct ShowdownCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deal a table and show every player's best hand
    Play {
        /// Number of players (defaults to the configured value)
        #[arg(value_parser = clap::value_parser!(u8).range(1..=MAX_PLAYERS as i64))]
        players: Option<u8>,
        /// Seed for the deck shuffle
        #[arg(long)]
        seed: Option<u64>,
        /// Append the showdown to this JSONL file
        #[arg(long)]
        output: Option<String>,
        /// Disable coloured output
        #[arg(long)]
        no_color: bool,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
    /// Time hand evaluation over 200 seven-card pools
    Bench,
}
