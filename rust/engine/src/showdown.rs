//! Ranking of competing hands.
//!
//! [`rank_hands`] orders any number of `(id, EvaluatedHand)` pairs with
//! [`compare_hands`] and keeps hands that compare `Equal` together, so a split
//! pot is reported as a set of co-winners instead of an arbitrary pick.

use serde::Serialize;

use crate::hand::{compare_hands, EvaluatedHand};

/// One ranked entry. `place` uses competition numbering: tied hands share a
/// place and the next distinct hand skips ahead (1, 1, 3, ...).
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Standing<T> {
    pub place: usize,
    pub id: T,
    pub hand: EvaluatedHand,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Ranking<T> {
    standings: Vec<Standing<T>>,
}

impl<T> Ranking<T> {
    /// Entries from strongest to weakest. Ties keep their input order.
    pub fn standings(&self) -> &[Standing<T>] {
        &self.standings
    }

    /// Every entry sharing first place.
    pub fn winners(&self) -> impl Iterator<Item = &Standing<T>> {
        self.standings.iter().take_while(|s| s.place == 1)
    }

    pub fn is_split(&self) -> bool {
        self.winners().count() > 1
    }

    pub fn len(&self) -> usize {
        self.standings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.standings.is_empty()
    }
}

/// Sort hands strongest first and assign places.
///
/// ```
/// use showdown_engine::cards::{Card, Rank, Suit};
/// use showdown_engine::hand::evaluate;
/// use showdown_engine::showdown::rank_hands;
///
/// let kings = evaluate(&[
///     Card::new(Rank::King, Suit::Club),
///     Card::new(Rank::King, Suit::Heart),
/// ]).unwrap();
/// let ace = evaluate(&[Card::new(Rank::Ace, Suit::Spade)]).unwrap();
///
/// let ranking = rank_hands(vec![("ace", ace), ("kings", kings)]);
/// let winners: Vec<_> = ranking.winners().map(|s| s.id).collect();
/// assert_eq!(winners, vec!["kings"]);
/// ```
pub fn rank_hands<T, I>(entries: I) -> Ranking<T>
where
    I: IntoIterator<Item = (T, EvaluatedHand)>,
{
    let mut sorted: Vec<(T, EvaluatedHand)> = entries.into_iter().collect();
    // stable: equal hands keep caller order
    sorted.sort_by(|a, b| compare_hands(&b.1, &a.1));

    let mut standings: Vec<Standing<T>> = Vec::with_capacity(sorted.len());
    for (i, (id, hand)) in sorted.into_iter().enumerate() {
        let place = match standings.last() {
            Some(prev) if compare_hands(&prev.hand, &hand).is_eq() => prev.place,
            _ => i + 1,
        };
        standings.push(Standing { place, id, hand });
    }
    Ranking { standings }
}
