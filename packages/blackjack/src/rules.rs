use serde::{Deserialize, Serialize};
use std::time::Duration;

/// House rules and pacing for a table session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRules {
    /// Dealer draws again on a soft 17 instead of standing.
    pub dealer_hits_soft_17: bool,

    /// Completed hands between forced reshuffles. Hand zero always
    /// shuffles, so a fresh session starts from a full random deck.
    pub shuffle_period: u64,

    /// Consecutive malformed prompt answers tolerated before the prompt
    /// gives up.
    pub max_input_retries: u32,

    /// Pause before each dealer draw so a human can follow along.
    /// Cosmetic only.
    pub dealer_draw_delay: Option<Duration>,
}

impl Default for TableRules {
    fn default() -> Self {
        Self {
            dealer_hits_soft_17: true,
            shuffle_period: 6,
            max_input_retries: 10,
            dealer_draw_delay: None,
        }
    }
}

impl TableRules {
    /// Rules for an interactive console session: default house rules
    /// plus a one-second beat before every dealer draw.
    pub fn interactive() -> Self {
        Self {
            dealer_draw_delay: Some(Duration::from_secs(1)),
            ..Self::default()
        }
    }
}
