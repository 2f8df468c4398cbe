//! Card and showdown formatters for terminal display.
//!
//! Pure functions that turn engine values into strings. Short card notation
//! uses Unicode suit symbols, with an ASCII fallback on Windows consoles that
//! cannot render them.
//!
//! ```rust
//! use showdown_engine::cards::{Card, Rank, Suit};
//! use showdown_cli::formatters::{describe_cards, format_card};
//!
//! let ace = Card::new(Rank::Ace, Suit::Spade);
//! assert!(format_card(&ace) == "A♠" || format_card(&ace) == "As");
//! assert_eq!(describe_cards(&[ace]), "A of Spades");
//! ```

use crate::ui;
use showdown_engine::cards::{Card, Suit};
use showdown_engine::showdown::Ranking;

pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> &'static str {
    if supports_unicode() {
        match suit {
            Suit::Heart => "♥",
            Suit::Diamond => "♦",
            Suit::Club => "♣",
            Suit::Spade => "♠",
        }
    } else {
        match suit {
            Suit::Heart => "h",
            Suit::Diamond => "d",
            Suit::Club => "c",
            Suit::Spade => "s",
        }
    }
}

/// Short form such as "A♠" or "10♥".
pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.label(), format_suit(&card.suit))
}

/// Board in bracket notation, "[A♠ K♥ Q♦]" or "[]".
pub fn format_board(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

/// Long form joined by commas: "A of Hearts, K of Hearts".
pub fn describe_cards(cards: &[Card]) -> String {
    let names: Vec<String> = cards.iter().map(Card::to_string).collect();
    names.join(", ")
}

pub fn player_name(id: usize) -> String {
    format!("Player #{}", id + 1)
}

/// Render rows inside an ASCII border. Rows flagged `true` are highlighted.
///
/// Column widths are measured on the plain text, so colour escapes do not
/// disturb alignment.
pub fn render_table(headers: &[&str], rows: &[(Vec<String>, bool)], color: bool) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for (cells, _) in rows {
        for (w, cell) in widths.iter_mut().zip(cells) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let border = {
        let mut line = String::from("+");
        for w in &widths {
            line.push_str(&"-".repeat(w + 2));
            line.push('+');
        }
        line
    };
    let row_line = |cells: &[String], lit: bool| {
        let mut line = String::from("|");
        for (w, cell) in widths.iter().zip(cells) {
            let padded = format!("{:<width$}", cell, width = w);
            line.push(' ');
            line.push_str(&ui::highlight(&padded, lit && color));
            line.push_str(" |");
        }
        line
    };

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let mut lines = vec![border.clone(), row_line(&header_cells, false), border.clone()];
    for (cells, lit) in rows {
        lines.push(row_line(cells, *lit));
    }
    lines.push(border);
    lines.join("\n")
}

/// Name / Hand / Cards table in ranking order, winners highlighted.
pub fn render_showdown(ranking: &Ranking<usize>, color: bool) -> String {
    let rows: Vec<(Vec<String>, bool)> = ranking
        .standings()
        .iter()
        .map(|s| {
            (
                vec![
                    player_name(s.id),
                    s.hand.label().to_string(),
                    describe_cards(s.hand.best_five()),
                ],
                s.place == 1,
            )
        })
        .collect();
    render_table(&["Name", "Hand", "Cards"], &rows, color)
}

/// "Winner: Player #2" or "Split pot: Player #1, Player #3".
pub fn winner_line(ranking: &Ranking<usize>) -> String {
    let names: Vec<String> = ranking.winners().map(|s| player_name(s.id)).collect();
    if ranking.is_split() {
        format!("Split pot: {}", names.join(", "))
    } else {
        format!("Winner: {}", names.join(", "))
    }
}
