//! Shared helpers for CLI integration tests.
//!
//! - `cli_runner`: [`cli_runner::CliRunner`] drives `showdown_cli::run`
//!   in-process and captures stdout, stderr and the exit code.
//! - `temp_files`: [`temp_files::TempFileManager`] hands out paths inside a
//!   temporary directory removed on drop.
//!
//! Tests that touch `SHOWDOWN_*` variables must be `#[serial]`.

pub mod cli_runner;
pub mod temp_files;
