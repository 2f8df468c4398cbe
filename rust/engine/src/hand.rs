use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::Card;
use crate::detect::{self, sort_by_rank_desc, Detector};
use crate::errors::EvalError;

/// Number of cards in a completed hand.
pub const HAND_SIZE: usize = 5;

/// The ten hand classes, weakest to strongest.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    /// Tier value, 0 for high card up to 900 for a royal flush.
    pub fn score(self) -> u16 {
        self as u16 * 100
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::HighCard => "High-Card Hand",
            Category::Pair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

// Weak to strong; the last detector that matches decides the category.
const DETECTORS: [(Category, Detector); 9] = [
    (Category::Pair, detect::pair),
    (Category::TwoPair, detect::two_pair),
    (Category::ThreeOfAKind, detect::three_of_a_kind),
    (Category::Straight, detect::straight),
    (Category::Flush, detect::flush),
    (Category::FullHouse, detect::full_house),
    (Category::FourOfAKind, detect::four_of_a_kind),
    (Category::StraightFlush, detect::straight_flush),
    (Category::RoyalFlush, detect::royal_flush),
];

/// The outcome of evaluating one candidate set.
///
/// `best_five` holds the category cards first (larger rank groups first, then
/// higher ranks), followed by kickers in descending rank. It has exactly five
/// distinct cards whenever the candidate set had at least five; smaller inputs
/// yield as many cards as were supplied.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct EvaluatedHand {
    category: Category,
    best_five: Vec<Card>,
}

impl EvaluatedHand {
    pub fn category(&self) -> Category {
        self.category
    }

    pub fn score(&self) -> u16 {
        self.category.score()
    }

    pub fn label(&self) -> &'static str {
        self.category.label()
    }

    pub fn best_five(&self) -> &[Card] {
        &self.best_five
    }

    /// `"<rank> of <suit>s"` for each card of `best_five`, in order.
    pub fn descriptions(&self) -> Vec<String> {
        self.best_five.iter().map(Card::to_string).collect()
    }

    /// `best_five` re-ordered purely by descending rank.
    pub fn sorted_cards(&self) -> Vec<Card> {
        let mut cards = self.best_five.clone();
        sort_by_rank_desc(&mut cards);
        cards
    }
}

/// Classify a candidate set into its strongest category.
///
/// Cards are read in the order given; for the scan-order categories (pairs,
/// trips, quads) that order decides which group is reported when several
/// qualify. The input is not checked for duplicate cards, see
/// [`validate_unique`].
///
/// ```
/// use showdown_engine::cards::{Card, Rank, Suit};
/// use showdown_engine::hand::{evaluate, Category};
///
/// let cards = [
///     Card::new(Rank::Two, Suit::Club),
///     Card::new(Rank::Two, Suit::Diamond),
///     Card::new(Rank::Five, Suit::Heart),
///     Card::new(Rank::Nine, Suit::Spade),
///     Card::new(Rank::King, Suit::Club),
/// ];
/// let hand = evaluate(&cards).unwrap();
/// assert_eq!(hand.category(), Category::Pair);
/// assert_eq!(hand.score(), 100);
/// assert_eq!(hand.label(), "One Pair");
/// ```
pub fn evaluate(cards: &[Card]) -> Result<EvaluatedHand, EvalError> {
    let high = high_card(cards).ok_or(EvalError::EmptyCandidateSet)?;

    let (category, matched) = DETECTORS
        .iter()
        .filter_map(|&(category, matches)| matches(cards).map(|m| (category, m)))
        .last()
        .unwrap_or((Category::HighCard, vec![high]));

    let mut best_five = group_order(matched);
    pad_with_kickers(&mut best_five, cards);

    debug!(
        category = ?category,
        candidates = cards.len(),
        best = best_five.len(),
        "evaluated candidate set"
    );
    Ok(EvaluatedHand {
        category,
        best_five,
    })
}

/// [`evaluate`] for callers that promise a fixed-size candidate set.
pub fn evaluate_exact(cards: &[Card], expected: usize) -> Result<EvaluatedHand, EvalError> {
    if cards.len() != expected {
        return Err(EvalError::WrongCandidateSize {
            expected,
            actual: cards.len(),
        });
    }
    evaluate(cards)
}

/// Reject a candidate set that holds the same card twice.
pub fn validate_unique(cards: &[Card]) -> Result<(), EvalError> {
    for (i, c) in cards.iter().enumerate() {
        if cards[..i].contains(c) {
            return Err(EvalError::DuplicateCard(*c));
        }
    }
    Ok(())
}

/// Order two hands: category first, then `best_five` ranks position by position.
///
/// Hands of equal category whose ranks match at every position compare
/// `Equal` even when their suits differ.
pub fn compare_hands(a: &EvaluatedHand, b: &EvaluatedHand) -> Ordering {
    match a.score().cmp(&b.score()) {
        Ordering::Equal => {
            let ranks = |h: &EvaluatedHand| {
                h.best_five
                    .iter()
                    .take(HAND_SIZE)
                    .map(|c| c.rank)
                    .collect::<Vec<_>>()
            };
            ranks(a).cmp(&ranks(b))
        }
        ord => ord,
    }
}

// First card of the highest rank.
fn high_card(cards: &[Card]) -> Option<Card> {
    cards
        .iter()
        .copied()
        .reduce(|best, c| if c.rank > best.rank { c } else { best })
}

fn group_order(mut matched: Vec<Card>) -> Vec<Card> {
    let mut counts = [0usize; 15];
    for c in &matched {
        counts[c.rank.value() as usize] += 1;
    }
    let count = |c: &Card| counts[c.rank.value() as usize];
    matched.sort_by(|a, b| count(b).cmp(&count(a)).then(b.rank.cmp(&a.rank)));
    matched
}

fn pad_with_kickers(best: &mut Vec<Card>, cards: &[Card]) {
    if best.len() >= HAND_SIZE {
        return;
    }
    let mut pool = cards.to_vec();
    sort_by_rank_desc(&mut pool);
    for c in pool {
        if best.len() == HAND_SIZE {
            break;
        }
        if !best.contains(&c) {
            best.push(c);
        }
    }
}
