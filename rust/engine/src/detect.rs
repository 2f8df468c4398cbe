//! Category detectors.
//!
//! Each detector inspects a candidate set in the order it was given and
//! returns the cards that make up its category, or `None`. Detectors are total
//! over any slice (including an empty one) and never allocate more than a few
//! small vectors.

use crate::cards::{Card, Rank};

/// Signature shared by every detector.
pub type Detector = fn(&[Card]) -> Option<Vec<Card>>;

const RANK_SLOTS: usize = 15; // 2..=14 used

/// Stable sort, highest rank first. Cards of equal rank keep their input order.
pub(crate) fn sort_by_rank_desc(cards: &mut [Card]) {
    cards.sort_by(|a, b| b.rank.cmp(&a.rank));
}

fn rank_groups(cards: &[Card]) -> [Vec<Card>; RANK_SLOTS] {
    let mut groups: [Vec<Card>; RANK_SLOTS] = Default::default();
    for &c in cards {
        groups[c.rank.value() as usize].push(c);
    }
    groups
}

fn suit_groups(cards: &[Card]) -> [Vec<Card>; 4] {
    let mut groups: [Vec<Card>; 4] = Default::default();
    for &c in cards {
        groups[c.suit.index()].push(c);
    }
    groups
}

/// First rank (in scan order) to reach `n` cards.
fn first_of_a_kind(cards: &[Card], n: usize) -> Option<Vec<Card>> {
    let mut seen: [Vec<Card>; RANK_SLOTS] = Default::default();
    for &c in cards {
        let group = &mut seen[c.rank.value() as usize];
        group.push(c);
        if group.len() == n {
            return Some(group.clone());
        }
    }
    None
}

pub fn pair(cards: &[Card]) -> Option<Vec<Card>> {
    first_of_a_kind(cards, 2)
}

/// The first two distinct ranks (in scan order) to complete a pair.
pub fn two_pair(cards: &[Card]) -> Option<Vec<Card>> {
    let mut seen: [Vec<Card>; RANK_SLOTS] = Default::default();
    let mut paired: Vec<usize> = Vec::with_capacity(3);
    for &c in cards {
        let r = c.rank.value() as usize;
        seen[r].push(c);
        if seen[r].len() == 2 {
            paired.push(r);
        }
    }
    if paired.len() < 2 {
        return None;
    }
    Some(
        paired[..2]
            .iter()
            .flat_map(|&r| seen[r][..2].iter().copied())
            .collect(),
    )
}

pub fn three_of_a_kind(cards: &[Card]) -> Option<Vec<Card>> {
    first_of_a_kind(cards, 3)
}

/// Highest run of five consecutive ranks, returned high to low.
///
/// Ranks are de-duplicated first, keeping the earliest card of each rank.
/// Ace only counts high, so A-2-3-4-5 is not a straight.
pub fn straight(cards: &[Card]) -> Option<Vec<Card>> {
    let mut distinct = cards.to_vec();
    sort_by_rank_desc(&mut distinct);
    distinct.dedup_by_key(|c| c.rank);
    distinct
        .windows(5)
        .find(|w| w[0].rank.value() - w[4].rank.value() == 4)
        .map(<[Card]>::to_vec)
}

/// Five highest cards of the first suit holding at least five.
pub fn flush(cards: &[Card]) -> Option<Vec<Card>> {
    suit_groups(cards)
        .into_iter()
        .find(|g| g.len() >= 5)
        .map(|mut g| {
            sort_by_rank_desc(&mut g);
            g.truncate(5);
            g
        })
}

/// Three cards of the highest rank holding three or more, plus two cards of
/// the highest other rank holding two or more.
pub fn full_house(cards: &[Card]) -> Option<Vec<Card>> {
    let groups = rank_groups(cards);
    let trips = (2..RANK_SLOTS).rev().find(|&r| groups[r].len() >= 3)?;
    let pair = (2..RANK_SLOTS)
        .rev()
        .find(|&r| r != trips && groups[r].len() >= 2)?;
    let mut hand = groups[trips][..3].to_vec();
    hand.extend_from_slice(&groups[pair][..2]);
    Some(hand)
}

pub fn four_of_a_kind(cards: &[Card]) -> Option<Vec<Card>> {
    first_of_a_kind(cards, 4)
}

/// Highest straight found inside any single suit.
pub fn straight_flush(cards: &[Card]) -> Option<Vec<Card>> {
    suit_groups(cards)
        .iter()
        .filter(|g| g.len() >= 5)
        .filter_map(|g| straight(g))
        .max_by_key(|run| run[0].rank)
}

pub fn royal_flush(cards: &[Card]) -> Option<Vec<Card>> {
    straight_flush(cards).filter(|run| run[0].rank == Rank::Ace)
}
