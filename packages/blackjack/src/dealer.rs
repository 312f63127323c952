use crate::card::Card;
use crate::deck::Deck;
use rand::RngCore;

/// Shuffles and deals. Owns the session randomness; all deck mutation
/// funnels through here.
pub struct Dealer<R> {
    rng: R,
}

impl<R: RngCore> Dealer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Discard the remaining cards, rebuild the full 52-card deck and
    /// randomize its order. The deck is never empty when this returns.
    pub fn shuffle(&mut self, deck: &mut Deck) {
        log::info!("Shuffling...");
        deck.rebuild();
        deck.permute(&mut self.rng);
    }

    /// Deal one card off the top. An exhausted deck is reshuffled first
    /// and the deal proceeds; recovery, not an error.
    pub fn deal(&mut self, deck: &mut Deck) -> Card {
        if deck.is_empty() {
            log::warn!("Card deck empty, reshuffling");
            self.shuffle(deck);
        }
        match deck.draw_top() {
            Some(card) => card,
            None => unreachable!("deck holds 52 cards after a shuffle"),
        }
    }
}
