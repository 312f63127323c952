use crate::card::{Card, DECK_SIZE};
use rand::seq::SliceRandom;
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Ordered, mutable card stack. Cards are dealt from the top (the back
/// of the vector), so each card leaves the deck exactly once between
/// rebuilds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// An empty deck. The first deal of a session rebuilds it.
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Discard whatever is left and restore the full 52-card deck in
    /// canonical order.
    pub fn rebuild(&mut self) {
        self.cards.clear();
        self.cards.reserve(DECK_SIZE);
        for index in 0..DECK_SIZE {
            self.cards.push(Card::from_index(index));
        }
    }

    /// Uniformly random permutation of the current contents.
    pub fn permute<R: RngCore>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Remove and return the top card, if any.
    pub fn draw_top(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}
