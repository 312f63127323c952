use crate::card::Card;
use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Best hand value a participant can stand on.
pub const BLACKJACK: u8 = 21;

/// Cards a natural blackjack is made of.
pub const NATURAL_SIZE: usize = 2;

/// Best value of a hand under Ace-flexible scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub value: u8,
    /// True when one Ace is counted as 11 without busting.
    pub soft: bool,
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.soft {
            write!(f, "soft {} or hard {}", self.value, self.value - 10)
        } else {
            write!(f, "{}", self.value)
        }
    }
}

/// Score a hand, counting at most one Ace as 11.
///
/// Aces contribute 1 to the base sum. If an Ace is present and upgrading
/// a single one to 11 stays at or under 21, the upgraded (soft) total is
/// returned; otherwise the hard base sum. An empty hand has no score to
/// report and is rejected rather than scored as zero.
pub fn score_cards(cards: &[Card]) -> Result<Score, GameError> {
    let mut base: u8 = 0;
    let mut ace_found = false;
    for card in cards {
        if card.is_ace() {
            ace_found = true;
        }
        base += card.rank();
    }

    if base == 0 {
        return Err(GameError::EmptyHand);
    }

    if base > BLACKJACK || !ace_found {
        return Ok(Score { value: base, soft: false });
    }

    let soft_value = base + 10;
    if soft_value <= BLACKJACK {
        Ok(Score { value: soft_value, soft: true })
    } else {
        Ok(Score { value: base, soft: false })
    }
}

/// Check for a natural blackjack: exactly two cards, at least one face
/// card and at least one Ace. A Ten next to an Ace totals 21 but is not
/// a natural.
pub fn is_natural(cards: &[Card]) -> bool {
    if cards.len() != NATURAL_SIZE {
        return false;
    }
    let face_found = cards.iter().any(|c| c.is_face());
    let ace_found = cards.iter().any(|c| c.is_ace());
    face_found && ace_found
}

/// Cards held by one participant during a single hand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    pub cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn score(&self) -> Result<Score, GameError> {
        score_cards(&self.cards)
    }

    pub fn is_natural(&self) -> bool {
        is_natural(&self.cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(card.name())?;
        }
        Ok(())
    }
}
