mod card;
mod dealer;
mod deck;
mod error;
mod hand;
mod prompt;
mod rules;
mod stats;
mod table;

pub use card::{Card, DECK_SIZE};
pub use dealer::Dealer;
pub use deck::Deck;
pub use error::GameError;
pub use hand::{is_natural, score_cards, Hand, Score, BLACKJACK, NATURAL_SIZE};
pub use prompt::{Prompt, PromptReply};
pub use rules::TableRules;
pub use stats::SessionStats;
pub use table::{HandOutcome, Table};
