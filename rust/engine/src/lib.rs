//! # showdown-engine: Poker Hand Evaluation Core
//!
//! Classifies a set of playing cards into its strongest five-card poker hand
//! and ranks competing hands to find the winner or co-winners of a showdown.
//! Evaluation is pure and synchronous; every call is independent of the last.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`detect`] - One detector per hand category
//! - [`hand`] - Category selection, kicker padding, and hand comparison
//! - [`showdown`] - Ranking of many hands with tie handling
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`table`] - Dealing hole and board cards to a table of players
//! - [`logger`] - Showdown records serialized as JSONL
//! - [`errors`] - Error types for evaluation and dealing
//!
//! ## Quick Start
//!
//! ```rust
//! use showdown_engine::cards::{Card, Rank, Suit};
//! use showdown_engine::hand::{evaluate, Category};
//!
//! // Hole cards first, then the board
//! let cards = [
//!     Card::new(Rank::Ace, Suit::Heart),
//!     Card::new(Rank::King, Suit::Heart),
//!     Card::new(Rank::Queen, Suit::Heart),
//!     Card::new(Rank::Jack, Suit::Heart),
//!     Card::new(Rank::Ten, Suit::Heart),
//!     Card::new(Rank::Two, Suit::Club),
//!     Card::new(Rank::Three, Suit::Diamond),
//! ];
//!
//! let hand = evaluate(&cards).unwrap();
//! assert_eq!(hand.category(), Category::RoyalFlush);
//! assert_eq!(hand.best_five().len(), 5);
//! ```
//!
//! ## Ranking a Table
//!
//! ```rust
//! use showdown_engine::deck::Deck;
//! use showdown_engine::table::Table;
//!
//! let mut deck = Deck::new_with_seed(42);
//! deck.shuffle();
//! let table = Table::deal(3, &mut deck).unwrap();
//! for standing in table.showdown().unwrap().standings() {
//!     println!("Player #{} {}", standing.id + 1, standing.hand.label());
//! }
//! ```

pub mod cards;
pub mod deck;
pub mod detect;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod showdown;
pub mod table;
