//! Play command handler.
//!
//! Deals one table, ranks every seat and prints the result:
//!
//! ```text
//! Dealing Cards for 2 players.
//! Board: [9♣ 9♥ 4♦ K♠ 2♣]
//! +-----------+-----------------+--------------------------------------------------------------------+
//! | Name      | Hand            | Cards                                                              |
//! +-----------+-----------------+--------------------------------------------------------------------+
//! | Player #2 | Three of a Kind | 9 of Clubs, 9 of Hearts, 9 of Spades, K of Spades, 7 of Clubs      |
//! | Player #1 | One Pair        | 9 of Clubs, 9 of Hearts, K of Spades, Q of Diamonds, 4 of Diamonds |
//! +-----------+-----------------+--------------------------------------------------------------------+
//! Winner: Player #2
//! Seed: 42
//! ```

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_board, render_showdown, winner_line};
use crate::ui;
use showdown_engine::deck::Deck;
use showdown_engine::logger::{ShowdownLogger, ShowdownRecord};
use showdown_engine::table::Table;
use std::io::Write;
use tracing::info;

/// Flags given to `showdown play`. `None` falls back to the configuration.
#[derive(Debug, Clone, Default)]
pub struct PlayArgs {
    pub players: Option<u8>,
    pub seed: Option<u64>,
    pub output: Option<String>,
    pub no_color: bool,
}

pub fn handle_play_command(
    args: PlayArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(e.to_string()));
        }
    };
    play(args, &resolved.config, out)
}

fn play(args: PlayArgs, cfg: &config::Config, out: &mut dyn Write) -> Result<(), CliError> {
    let players = usize::from(args.players.unwrap_or(cfg.players));
    let seed = args.seed.or(cfg.seed).unwrap_or_else(rand::random);
    let color = cfg.color && !args.no_color;

    writeln!(out, "Dealing Cards for {} players.", players)?;

    let mut deck = Deck::new_with_seed(seed);
    deck.shuffle();
    let table = Table::deal(players, &mut deck)?;
    let ranking = table.showdown()?;

    writeln!(out, "Board: {}", format_board(table.board()))?;
    writeln!(out, "{}", render_showdown(&ranking, color))?;
    writeln!(out, "{}", winner_line(&ranking))?;
    writeln!(out, "Seed: {}", seed)?;

    if let Some(path) = args.output {
        let mut logger = ShowdownLogger::create(&path)?;
        let hand_id = logger.next_id();
        logger.write(&ShowdownRecord::new(
            hand_id.clone(),
            Some(seed),
            &table,
            &ranking,
        ))?;
        info!(%path, %hand_id, "showdown recorded");
    }
    Ok(())
}
