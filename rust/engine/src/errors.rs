use thiserror::Error;

use crate::cards::Card;

/// Rejections raised before a candidate set is evaluated.
/// Every variant is an invalid-input condition; detectors themselves never fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("Invalid input: candidate set is empty")]
    EmptyCandidateSet,
    #[error("Invalid input: expected {expected} cards, got {actual}")]
    WrongCandidateSize { expected: usize, actual: usize },
    #[error("Invalid input: card {0} appears more than once")]
    DuplicateCard(Card),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("Invalid player count: {count}, must be between 1 and {max}")]
    InvalidPlayerCount { count: usize, max: usize },
    #[error("Deck ran out of cards while dealing")]
    DeckExhausted,
    #[error(transparent)]
    Eval(#[from] EvalError),
}
