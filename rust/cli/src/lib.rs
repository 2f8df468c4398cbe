//! # showdown CLI Library
//!
//! Command-line front end for the showdown poker hand evaluator: deal a
//! Texas Hold'em table, rank every seat and print the winner.
//!
//! The entry point is [`run`], which parses arguments and dispatches to a
//! subcommand with injected output streams, so it can be driven from tests.
//!
//! ```
//! use std::io;
//! let args = vec!["showdown", "play", "4", "--seed", "42", "--no-color"];
//! let code = showdown_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Deal a table and show every player's best hand
//! - `cfg`: Display the resolved configuration
//! - `bench`: Benchmark hand evaluation

use clap::Parser;
use std::io::Write;

#[macro_use]
mod macros;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod logging;
pub mod ui;

use cli::{Commands, ShowdownCli};
use commands::{PlayArgs, handle_bench_command, handle_cfg_command, handle_play_command};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "cfg", "bench"];

/// Parse `args` and run the chosen subcommand.
///
/// Returns the process exit code: `0` on success (including `--help` and
/// `--version`), `2` on parse or command errors.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match ShowdownCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "showdown poker hand evaluator");
                    write_or_exit!(err, "Usage: showdown <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: showdown --help");
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Play {
            players,
            seed,
            output,
            no_color,
        } => handle_play_command(
            PlayArgs {
                players,
                seed,
                output,
                no_color,
            },
            out,
            err,
        ),
        Commands::Cfg => handle_cfg_command(out, err),
        Commands::Bench => handle_bench_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Config(_)) => exit_code::ERROR,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}
