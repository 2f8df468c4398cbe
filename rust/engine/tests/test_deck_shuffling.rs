use std::collections::HashSet;

use showdown_engine::cards::Card;
use showdown_engine::deck::Deck;

#[test]
fn shuffled_deck_has_52_unique_cards() {
    let mut deck = Deck::new_with_seed(42);
    deck.shuffle();
    let mut set = HashSet::new();
    for i in 0..52 {
        let c = deck.deal_card().expect("should have 52 cards");
        assert!(set.insert(c), "card {:?} duplicated at position {}", c, i);
    }
    assert!(
        deck.deal_card().is_none(),
        "after 52 cards, deck should be empty"
    );
    assert_eq!(deck.remaining(), 0);
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::new_with_seed(12345);
    let mut d2 = Deck::new_with_seed(12345);
    d1.shuffle();
    d2.shuffle();
    let a: Vec<Card> = (0..10).map(|_| d1.deal_card().unwrap()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.deal_card().unwrap()).collect();
    assert_eq!(a, b, "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::new_with_seed(1);
    let mut d2 = Deck::new_with_seed(2);
    d1.shuffle();
    d2.shuffle();
    let a: Vec<Card> = (0..10).map(|_| d1.deal_card().unwrap()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.deal_card().unwrap()).collect();
    assert_ne!(
        a, b,
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn reshuffle_restores_a_full_deck() {
    let mut deck = Deck::new_with_seed(5);
    deck.shuffle();
    for _ in 0..20 {
        deck.deal_card();
    }
    assert_eq!(deck.remaining(), 32);
    deck.shuffle();
    assert_eq!(deck.remaining(), 52);
}

#[test]
fn random_deck_reports_its_seed() {
    let deck = Deck::new();
    let mut replay = Deck::new_with_seed(deck.seed());
    let mut original = Deck::new_with_seed(deck.seed());
    original.shuffle();
    replay.shuffle();
    assert_eq!(original.deal_card(), replay.deal_card());
}
