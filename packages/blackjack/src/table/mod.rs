use crate::dealer::Dealer;
use crate::deck::Deck;
use crate::error::GameError;
use crate::hand::{Hand, BLACKJACK, NATURAL_SIZE};
use crate::prompt::{Prompt, PromptReply};
use crate::rules::TableRules;
use crate::stats::SessionStats;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::thread;

/// Lowest score the dealer stands on. Soft 17 is the exception when the
/// house hits soft 17.
const DEALER_STAND_MIN: u8 = 17;

const HIT_QUESTION: &str = "Do you want a card? Enter 'Y' to draw or 'N' to stand";

/// Resolution of a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandOutcome {
    /// Initial checks passed, play continues. Never returned by
    /// [`Table::play_hand`].
    Continue,
    PlayerNaturalWin,
    DealerNaturalWin,
    Push,
    PlayerBust,
    DealerBust,
    PlayerWin,
    DealerWin,
    Error,
}

/// How a draw loop ended: over 21, or standing on a final score.
enum DrawResult {
    Busted,
    Stood(u8),
}

/// One blackjack table: the deck, the dealer, the house rules and the
/// session counters. Owns everything for the lifetime of a session;
/// hands are played one at a time through [`Table::play_hand`].
pub struct Table<R> {
    pub rules: TableRules,
    pub deck: Deck,
    pub stats: SessionStats,
    dealer: Dealer<R>,
}

impl<R: RngCore> Table<R> {
    pub fn new(rules: TableRules, rng: R) -> Self {
        Self {
            rules,
            deck: Deck::new(),
            stats: SessionStats::new(),
            dealer: Dealer::new(rng),
        }
    }

    /// Play one full hand: deal, natural checks, player draws, dealer
    /// draws, score comparison. Any rule-engine error is absorbed here —
    /// the hand resolves as [`HandOutcome::Error`], the error counter
    /// moves instead of hands-played, and the session can continue.
    pub fn play_hand(&mut self, prompt: &mut dyn Prompt) -> HandOutcome {
        let outcome = match self.run_hand(prompt) {
            Ok(outcome) => outcome,
            Err(err) => {
                log::error!("Hand abandoned: {err}");
                HandOutcome::Error
            }
        };
        self.stats.record(outcome);
        outcome
    }

    fn run_hand(&mut self, prompt: &mut dyn Prompt) -> Result<HandOutcome, GameError> {
        self.reshuffle_if_due();

        let (mut player, mut dealer_hand) = self.deal_initial();

        match check_naturals(&player, &dealer_hand)? {
            HandOutcome::Continue => {}
            outcome => return Ok(outcome),
        }

        let player_score = match self.player_draws(prompt, &mut player)? {
            DrawResult::Busted => return Ok(HandOutcome::PlayerBust),
            DrawResult::Stood(score) => score,
        };

        let dealer_score = match self.dealer_draws(&mut dealer_hand)? {
            DrawResult::Busted => return Ok(HandOutcome::DealerBust),
            DrawResult::Stood(score) => score,
        };

        resolve(player_score, dealer_score)
    }

    /// Force a reshuffle every `shuffle_period` completed hands. Hand
    /// zero always lands on the boundary, so a fresh session starts
    /// from a full random deck.
    fn reshuffle_if_due(&mut self) {
        let period = self.rules.shuffle_period.max(1);
        if self.stats.hands_played % period != 0 {
            return;
        }
        if self.stats.hands_played > 0 {
            log::info!(
                "Shuffle period of {period} hands reached (hands played: {})",
                self.stats.hands_played
            );
        }
        self.dealer.shuffle(&mut self.deck);
    }

    /// Two cards to the player, two to the dealer. The dealer's first
    /// card stays face down in the narration; the engine sees both.
    fn deal_initial(&mut self) -> (Hand, Hand) {
        let mut player = Hand::new();
        player.add_card(self.dealer.deal(&mut self.deck));
        player.add_card(self.dealer.deal(&mut self.deck));
        log::info!("Player has a {} and a {}", player.cards[0], player.cards[1]);

        let mut dealer_hand = Hand::new();
        dealer_hand.add_card(self.dealer.deal(&mut self.deck));
        let up_card = self.dealer.deal(&mut self.deck);
        dealer_hand.add_card(up_card);
        log::info!("Dealer has one card facing down. The other is a {up_card}");

        (player, dealer_hand)
    }

    fn player_draws(
        &mut self,
        prompt: &mut dyn Prompt,
        hand: &mut Hand,
    ) -> Result<DrawResult, GameError> {
        loop {
            let score = hand.score()?;
            log::info!("Player holds: {hand}");
            log::info!("Player score: {score}");
            if score.value > BLACKJACK {
                log::info!("Player busted");
                return Ok(DrawResult::Busted);
            }

            match prompt.ask_yes_no(HIT_QUESTION, "Y", "N", self.rules.max_input_retries) {
                PromptReply::Continue => {
                    let card = self.dealer.deal(&mut self.deck);
                    log::info!("Player draws a {card}");
                    hand.add_card(card);
                }
                PromptReply::Exit => {
                    log::info!("Player stands at {}", score.value);
                    return Ok(DrawResult::Stood(score.value));
                }
                PromptReply::Error => {
                    log::warn!("No valid answer received, player stands at {}", score.value);
                    return Ok(DrawResult::Stood(score.value));
                }
            }
        }
    }

    fn dealer_draws(&mut self, hand: &mut Hand) -> Result<DrawResult, GameError> {
        loop {
            let score = hand.score()?;
            log::info!("Dealer holds: {hand}");
            log::info!("Dealer score: {score}");
            if score.value > BLACKJACK {
                log::info!("Dealer busted");
                return Ok(DrawResult::Busted);
            }

            let hits_soft_17 =
                self.rules.dealer_hits_soft_17 && score.soft && score.value == DEALER_STAND_MIN;
            if score.value >= DEALER_STAND_MIN && !hits_soft_17 {
                log::info!("Dealer stands at {}", score.value);
                return Ok(DrawResult::Stood(score.value));
            }

            if let Some(delay) = self.rules.dealer_draw_delay {
                thread::sleep(delay);
            }
            let card = self.dealer.deal(&mut self.deck);
            log::info!("Dealer draws a {card}");
            hand.add_card(card);
        }
    }
}

/// Evaluate both freshly dealt hands for naturals. A natural on either
/// side ends the hand; so does a dealer whose revealed value is already
/// 21, which beats a player who has not yet drawn.
fn check_naturals(player: &Hand, dealer_hand: &Hand) -> Result<HandOutcome, GameError> {
    if player.len() != NATURAL_SIZE || dealer_hand.len() != NATURAL_SIZE {
        return Err(GameError::BadInitialDeal {
            player: player.len(),
            dealer: dealer_hand.len(),
            expected: NATURAL_SIZE,
        });
    }

    let player_natural = player.is_natural();
    let dealer_natural = dealer_hand.is_natural();

    if player_natural && dealer_natural {
        log::info!("Both dealer and player have blackjack, the hand is a push");
        log::info!("Dealer has: {dealer_hand}");
        log::info!("Player has: {player}");
        Ok(HandOutcome::Push)
    } else if dealer_natural {
        log::info!("Dealer wins with a natural: {dealer_hand}");
        Ok(HandOutcome::DealerNaturalWin)
    } else if player_natural {
        log::info!("Player wins with a blackjack: {player}");
        Ok(HandOutcome::PlayerNaturalWin)
    } else if dealer_hand.score()?.value == BLACKJACK {
        // House rule: a revealed dealer 21 beats any non-natural player
        // hand before the player gets to draw.
        log::info!("Dealer wins with 21 against a non-natural hand");
        Ok(HandOutcome::DealerWin)
    } else {
        Ok(HandOutcome::Continue)
    }
}

/// Compare two standing scores. The house wins ties.
fn resolve(player_score: u8, dealer_score: u8) -> Result<HandOutcome, GameError> {
    if player_score > BLACKJACK || dealer_score > BLACKJACK {
        return Err(GameError::ScoreOutOfRange {
            player: player_score,
            dealer: dealer_score,
        });
    }

    if dealer_score >= player_score {
        log::info!("Dealer wins the hand: {dealer_score} against {player_score}");
        Ok(HandOutcome::DealerWin)
    } else {
        log::info!("Player wins the hand: {player_score} against {dealer_score}");
        Ok(HandOutcome::PlayerWin)
    }
}

#[cfg(test)]
mod tests;
