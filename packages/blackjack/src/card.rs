use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of cards in a fresh deck.
pub const DECK_SIZE: usize = 52;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Card {
    AceSpades, TwoSpades, ThreeSpades, FourSpades, FiveSpades, SixSpades, SevenSpades,
    EightSpades, NineSpades, TenSpades, JackSpades, QueenSpades, KingSpades,
    AceHearts, TwoHearts, ThreeHearts, FourHearts, FiveHearts, SixHearts, SevenHearts,
    EightHearts, NineHearts, TenHearts, JackHearts, QueenHearts, KingHearts,
    AceDiamonds, TwoDiamonds, ThreeDiamonds, FourDiamonds, FiveDiamonds, SixDiamonds, SevenDiamonds,
    EightDiamonds, NineDiamonds, TenDiamonds, JackDiamonds, QueenDiamonds, KingDiamonds,
    AceClubs, TwoClubs, ThreeClubs, FourClubs, FiveClubs, SixClubs, SevenClubs,
    EightClubs, NineClubs, TenClubs, JackClubs, QueenClubs, KingClubs,
}

impl Card {
    /// Counting rank of the card: 1 for an Ace, pip value for number
    /// cards, 10 for every face card. Always in 1..=10.
    pub fn rank(&self) -> u8 {
        match self {
            Card::AceSpades | Card::AceHearts | Card::AceDiamonds | Card::AceClubs => 1,
            Card::TwoSpades | Card::TwoHearts | Card::TwoDiamonds | Card::TwoClubs => 2,
            Card::ThreeSpades | Card::ThreeHearts | Card::ThreeDiamonds | Card::ThreeClubs => 3,
            Card::FourSpades | Card::FourHearts | Card::FourDiamonds | Card::FourClubs => 4,
            Card::FiveSpades | Card::FiveHearts | Card::FiveDiamonds | Card::FiveClubs => 5,
            Card::SixSpades | Card::SixHearts | Card::SixDiamonds | Card::SixClubs => 6,
            Card::SevenSpades | Card::SevenHearts | Card::SevenDiamonds | Card::SevenClubs => 7,
            Card::EightSpades | Card::EightHearts | Card::EightDiamonds | Card::EightClubs => 8,
            Card::NineSpades | Card::NineHearts | Card::NineDiamonds | Card::NineClubs => 9,
            _ => 10, // Ten, Jack, Queen, King
        }
    }

    /// True for Jack, Queen and King only. A Ten counts 10 but is not a
    /// face card, which matters for the natural-blackjack check.
    pub fn is_face(&self) -> bool {
        matches!(
            self,
            Card::JackSpades | Card::JackHearts | Card::JackDiamonds | Card::JackClubs
                | Card::QueenSpades | Card::QueenHearts | Card::QueenDiamonds | Card::QueenClubs
                | Card::KingSpades | Card::KingHearts | Card::KingDiamonds | Card::KingClubs
        )
    }

    pub fn is_ace(&self) -> bool {
        matches!(
            self,
            Card::AceSpades | Card::AceHearts | Card::AceDiamonds | Card::AceClubs
        )
    }

    /// Display name, e.g. "Queen of hearts".
    pub fn name(&self) -> &'static str {
        match self {
            Card::AceSpades => "Ace of spades",
            Card::TwoSpades => "2 of spades",
            Card::ThreeSpades => "3 of spades",
            Card::FourSpades => "4 of spades",
            Card::FiveSpades => "5 of spades",
            Card::SixSpades => "6 of spades",
            Card::SevenSpades => "7 of spades",
            Card::EightSpades => "8 of spades",
            Card::NineSpades => "9 of spades",
            Card::TenSpades => "10 of spades",
            Card::JackSpades => "Jack of spades",
            Card::QueenSpades => "Queen of spades",
            Card::KingSpades => "King of spades",
            Card::AceHearts => "Ace of hearts",
            Card::TwoHearts => "2 of hearts",
            Card::ThreeHearts => "3 of hearts",
            Card::FourHearts => "4 of hearts",
            Card::FiveHearts => "5 of hearts",
            Card::SixHearts => "6 of hearts",
            Card::SevenHearts => "7 of hearts",
            Card::EightHearts => "8 of hearts",
            Card::NineHearts => "9 of hearts",
            Card::TenHearts => "10 of hearts",
            Card::JackHearts => "Jack of hearts",
            Card::QueenHearts => "Queen of hearts",
            Card::KingHearts => "King of hearts",
            Card::AceDiamonds => "Ace of diamonds",
            Card::TwoDiamonds => "2 of diamonds",
            Card::ThreeDiamonds => "3 of diamonds",
            Card::FourDiamonds => "4 of diamonds",
            Card::FiveDiamonds => "5 of diamonds",
            Card::SixDiamonds => "6 of diamonds",
            Card::SevenDiamonds => "7 of diamonds",
            Card::EightDiamonds => "8 of diamonds",
            Card::NineDiamonds => "9 of diamonds",
            Card::TenDiamonds => "10 of diamonds",
            Card::JackDiamonds => "Jack of diamonds",
            Card::QueenDiamonds => "Queen of diamonds",
            Card::KingDiamonds => "King of diamonds",
            Card::AceClubs => "Ace of clubs",
            Card::TwoClubs => "2 of clubs",
            Card::ThreeClubs => "3 of clubs",
            Card::FourClubs => "4 of clubs",
            Card::FiveClubs => "5 of clubs",
            Card::SixClubs => "6 of clubs",
            Card::SevenClubs => "7 of clubs",
            Card::EightClubs => "8 of clubs",
            Card::NineClubs => "9 of clubs",
            Card::TenClubs => "10 of clubs",
            Card::JackClubs => "Jack of clubs",
            Card::QueenClubs => "Queen of clubs",
            Card::KingClubs => "King of clubs",
        }
    }

    pub fn from_index(index: usize) -> Self {
        match index {
            0 => Card::AceSpades, 1 => Card::TwoSpades, 2 => Card::ThreeSpades, 3 => Card::FourSpades,
            4 => Card::FiveSpades, 5 => Card::SixSpades, 6 => Card::SevenSpades, 7 => Card::EightSpades,
            8 => Card::NineSpades, 9 => Card::TenSpades, 10 => Card::JackSpades, 11 => Card::QueenSpades,
            12 => Card::KingSpades, 13 => Card::AceHearts, 14 => Card::TwoHearts, 15 => Card::ThreeHearts,
            16 => Card::FourHearts, 17 => Card::FiveHearts, 18 => Card::SixHearts, 19 => Card::SevenHearts,
            20 => Card::EightHearts, 21 => Card::NineHearts, 22 => Card::TenHearts, 23 => Card::JackHearts,
            24 => Card::QueenHearts, 25 => Card::KingHearts, 26 => Card::AceDiamonds, 27 => Card::TwoDiamonds,
            28 => Card::ThreeDiamonds, 29 => Card::FourDiamonds, 30 => Card::FiveDiamonds, 31 => Card::SixDiamonds,
            32 => Card::SevenDiamonds, 33 => Card::EightDiamonds, 34 => Card::NineDiamonds, 35 => Card::TenDiamonds,
            36 => Card::JackDiamonds, 37 => Card::QueenDiamonds, 38 => Card::KingDiamonds, 39 => Card::AceClubs,
            40 => Card::TwoClubs, 41 => Card::ThreeClubs, 42 => Card::FourClubs, 43 => Card::FiveClubs,
            44 => Card::SixClubs, 45 => Card::SevenClubs, 46 => Card::EightClubs, 47 => Card::NineClubs,
            48 => Card::TenClubs, 49 => Card::JackClubs, 50 => Card::QueenClubs, 51 => Card::KingClubs,
            _ => panic!("Invalid card index: {}", index),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
