//! Command handlers, one module per subcommand.
//!
//! Each handler takes its output streams as `&mut dyn Write` and returns
//! `Result<(), CliError>`.

pub mod bench;
pub mod cfg;
pub mod play;

pub use bench::handle_bench_command;
pub use cfg::handle_cfg_command;
pub use play::{PlayArgs, handle_play_command};
