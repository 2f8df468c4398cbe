use tracing::{debug, info};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::TableError;
use crate::hand::evaluate_exact;
use crate::showdown::{rank_hands, Ranking};

/// Hole cards per seat.
pub const HOLE_CARDS: usize = 2;
/// Shared cards on the board.
pub const BOARD_CARDS: usize = 5;
/// Most seats a single 52-card deck can serve.
pub const MAX_PLAYERS: usize = (52 - BOARD_CARDS) / HOLE_CARDS;

/// One player's private cards, in the order they were dealt.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Seat {
    id: usize,
    hole: [Card; HOLE_CARDS],
}

impl Seat {
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn hole_cards(&self) -> [Card; HOLE_CARDS] {
        self.hole
    }

    /// Hole cards followed by the board: the canonical evaluation order.
    pub fn candidate_set(&self, board: &[Card]) -> Vec<Card> {
        let mut cards = Vec::with_capacity(HOLE_CARDS + board.len());
        cards.extend_from_slice(&self.hole);
        cards.extend_from_slice(board);
        cards
    }
}

/// A dealt community-card table: every seat's hole cards plus a shared board.
///
/// ```
/// use showdown_engine::deck::Deck;
/// use showdown_engine::table::Table;
///
/// let mut deck = Deck::new_with_seed(7);
/// deck.shuffle();
/// let table = Table::deal(4, &mut deck).unwrap();
/// assert_eq!(table.seats().len(), 4);
/// assert_eq!(table.board().len(), 5);
///
/// let ranking = table.showdown().unwrap();
/// assert!(ranking.winners().count() >= 1);
/// ```
#[derive(Debug, Clone)]
pub struct Table {
    seats: Vec<Seat>,
    board: [Card; BOARD_CARDS],
}

impl Table {
    /// Deal two hole cards to each seat round-robin, then the five board cards.
    pub fn deal(players: usize, deck: &mut Deck) -> Result<Self, TableError> {
        if players == 0 || players > MAX_PLAYERS {
            return Err(TableError::InvalidPlayerCount {
                count: players,
                max: MAX_PLAYERS,
            });
        }
        let mut draw = || deck.deal_card().ok_or(TableError::DeckExhausted);

        let mut first = Vec::with_capacity(players);
        for _ in 0..players {
            first.push(draw()?);
        }
        let mut seats = Vec::with_capacity(players);
        for (id, c1) in first.into_iter().enumerate() {
            seats.push(Seat {
                id,
                hole: [c1, draw()?],
            });
        }
        let board = [draw()?, draw()?, draw()?, draw()?, draw()?];

        debug!(players, "dealt table");
        Ok(Self { seats, board })
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// Evaluate every seat's seven cards and rank them by seat id.
    pub fn showdown(&self) -> Result<Ranking<usize>, TableError> {
        let mut hands = Vec::with_capacity(self.seats.len());
        for seat in &self.seats {
            let pool = seat.candidate_set(&self.board);
            let hand = evaluate_exact(&pool, HOLE_CARDS + BOARD_CARDS)?;
            hands.push((seat.id, hand));
        }
        let ranking = rank_hands(hands);
        info!(
            players = ranking.len(),
            winners = ranking.winners().count(),
            "showdown complete"
        );
        Ok(ranking)
    }
}
