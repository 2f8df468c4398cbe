//! Configuration command handler.
//!
//! Prints the resolved configuration as pretty JSON:
//!
//! ```json
//! {
//!   "players": { "value": 2, "source": "default" },
//!   "seed": { "value": null, "source": "default" },
//!   "color": { "value": true, "source": "env" }
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(e.to_string()));
        }
    };
    write_resolved(&resolved, out)
}

fn write_resolved(resolved: &config::ConfigResolved, out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "players": {
            "value": config.players,
            "source": sources.players,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "color": {
            "value": config.color,
            "source": sources.color,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
