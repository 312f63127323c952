use crate::table::HandOutcome;
use serde::{Deserialize, Serialize};

/// Session-wide outcome counters. Created once per session and mutated
/// only by the rule engine when a hand resolves; never reset mid-session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Hands that ran to a resolution. Errored hands do not count.
    pub hands_played: u64,
    pub pushes: u64,
    pub player_busts: u64,
    pub dealer_busts: u64,
    pub player_wins: u64,
    pub dealer_wins: u64,
    pub errors: u64,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one resolved hand into the counters.
    pub fn record(&mut self, outcome: HandOutcome) {
        match outcome {
            HandOutcome::Continue => return,
            HandOutcome::Error => {
                self.errors += 1;
                return;
            }
            HandOutcome::Push => self.pushes += 1,
            HandOutcome::PlayerNaturalWin | HandOutcome::PlayerWin => self.player_wins += 1,
            HandOutcome::DealerNaturalWin | HandOutcome::DealerWin => self.dealer_wins += 1,
            HandOutcome::PlayerBust => {
                self.dealer_wins += 1;
                self.player_busts += 1;
            }
            HandOutcome::DealerBust => {
                self.player_wins += 1;
                self.dealer_busts += 1;
            }
        }
        self.hands_played += 1;
    }

    fn percentage(&self, count: u64) -> String {
        if self.hands_played == 0 {
            "n/a".to_string()
        } else {
            format!("{:.1}%", count as f64 / self.hands_played as f64 * 100.0)
        }
    }

    /// Human-readable dump of the counters and derived percentages.
    pub fn report(&self) -> String {
        format!(
            "******* Virtual Blackjack Statistics *******\n\
             Hands played:  {}\n\
             Pushes (ties): {} ({})\n\
             Player wins:   {} ({})\n\
             Dealer wins:   {} ({})\n\
             Player busts:  {} ({})\n\
             Dealer busts:  {} ({})\n\
             Errors:        {}",
            self.hands_played,
            self.pushes,
            self.percentage(self.pushes),
            self.player_wins,
            self.percentage(self.player_wins),
            self.dealer_wins,
            self.percentage(self.dealer_wins),
            self.player_busts,
            self.percentage(self.player_busts),
            self.dealer_busts,
            self.percentage(self.dealer_busts),
            self.errors,
        )
    }
}
