use super::*;
use crate::card::{Card, DECK_SIZE};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

struct ScriptedPrompt {
    replies: Vec<PromptReply>,
    next: usize,
    asked: u32,
}

impl ScriptedPrompt {
    fn new(replies: &[PromptReply]) -> Self {
        Self {
            replies: replies.to_vec(),
            next: 0,
            asked: 0,
        }
    }

    /// A player who never draws.
    fn stand() -> Self {
        Self::new(&[])
    }
}

impl Prompt for ScriptedPrompt {
    fn ask_yes_no(&mut self, _q: &str, _yes: &str, _no: &str, _max_retries: u32) -> PromptReply {
        self.asked += 1;
        let reply = self
            .replies
            .get(self.next)
            .copied()
            .unwrap_or(PromptReply::Exit);
        self.next += 1;
        reply
    }
}

/// Deck that deals the listed cards in order: player, player, dealer
/// face-down, dealer face-up, then further draws.
fn deck_in_order(cards: &[Card]) -> Deck {
    Deck::from(cards.iter().rev().copied().collect::<Vec<_>>())
}

/// Table one hand past the shuffle boundary so a stacked deck survives
/// the period check.
fn stacked_table(deck: Deck) -> Table<ChaCha8Rng> {
    let mut table = Table::new(TableRules::default(), ChaCha8Rng::seed_from_u64(0));
    table.stats.hands_played = 1;
    table.deck = deck;
    table
}

#[test]
fn test_player_natural_wins() {
    let mut table = stacked_table(deck_in_order(&[
        Card::AceSpades,
        Card::KingHearts,
        Card::SevenDiamonds,
        Card::NineDiamonds,
    ]));
    let mut prompt = ScriptedPrompt::stand();

    let outcome = table.play_hand(&mut prompt);

    assert_eq!(outcome, HandOutcome::PlayerNaturalWin);
    assert_eq!(table.stats.player_wins, 1);
    assert_eq!(table.stats.dealer_wins, 0);
    assert_eq!(table.stats.hands_played, 2);
    assert_eq!(prompt.asked, 0);
}

#[test]
fn test_dealer_natural_wins() {
    let mut table = stacked_table(deck_in_order(&[
        Card::TenSpades,
        Card::NineSpades,
        Card::AceClubs,
        Card::KingClubs,
    ]));
    let mut prompt = ScriptedPrompt::stand();

    let outcome = table.play_hand(&mut prompt);

    assert_eq!(outcome, HandOutcome::DealerNaturalWin);
    assert_eq!(table.stats.dealer_wins, 1);
    assert_eq!(table.stats.hands_played, 2);
    assert_eq!(prompt.asked, 0);
}

#[test]
fn test_both_naturals_push() {
    let mut table = stacked_table(deck_in_order(&[
        Card::AceSpades,
        Card::KingSpades,
        Card::AceHearts,
        Card::QueenHearts,
    ]));
    let mut prompt = ScriptedPrompt::stand();

    let outcome = table.play_hand(&mut prompt);

    assert_eq!(outcome, HandOutcome::Push);
    assert_eq!(table.stats.pushes, 1);
    assert_eq!(table.stats.player_wins, 0);
    assert_eq!(table.stats.dealer_wins, 0);
    assert_eq!(table.stats.hands_played, 2);
}

#[test]
fn test_dealer_non_natural_21_denies_player_draws() {
    // Ace + Ten is 21 but not a natural; the player still gets no say.
    let mut table = stacked_table(deck_in_order(&[
        Card::TenHearts,
        Card::EightHearts,
        Card::AceClubs,
        Card::TenClubs,
    ]));
    let mut prompt = ScriptedPrompt::new(&[PromptReply::Continue]);

    let outcome = table.play_hand(&mut prompt);

    assert_eq!(outcome, HandOutcome::DealerWin);
    assert_eq!(table.stats.dealer_wins, 1);
    assert_eq!(table.stats.hands_played, 2);
    assert_eq!(prompt.asked, 0);
}

#[test]
fn test_player_bust_counts_dealer_win_and_bust() {
    // Player sits at 16, draws a 9 and busts at 25.
    let mut table = stacked_table(deck_in_order(&[
        Card::TenSpades,
        Card::SixHearts,
        Card::FiveClubs,
        Card::NineClubs,
        Card::NineSpades,
    ]));
    let mut prompt = ScriptedPrompt::new(&[PromptReply::Continue]);

    let outcome = table.play_hand(&mut prompt);

    assert_eq!(outcome, HandOutcome::PlayerBust);
    assert_eq!(table.stats.dealer_wins, 1);
    assert_eq!(table.stats.player_busts, 1);
    assert_eq!(table.stats.player_wins, 0);
    assert_eq!(table.stats.hands_played, 2);
}

#[test]
fn test_player_stands_18_dealer_draws_to_17() {
    // Dealer starts at 12, draws to hard 17 and must stand; 18 beats 17.
    let mut table = stacked_table(deck_in_order(&[
        Card::TenHearts,
        Card::EightHearts,
        Card::ThreeSpades,
        Card::NineSpades,
        Card::FiveSpades,
    ]));
    let mut prompt = ScriptedPrompt::new(&[PromptReply::Exit]);

    let outcome = table.play_hand(&mut prompt);

    assert_eq!(outcome, HandOutcome::PlayerWin);
    assert_eq!(table.stats.player_wins, 1);
    assert_eq!(table.stats.dealer_wins, 0);
    assert!(table.deck.is_empty(), "dealer must draw the stacked 5");
}

#[test]
fn test_dealer_hits_soft_17() {
    // Ace + 6 is soft 17; the dealer draws and lands on hard 17.
    let mut table = stacked_table(deck_in_order(&[
        Card::TenHearts,
        Card::EightClubs,
        Card::AceDiamonds,
        Card::SixDiamonds,
        Card::TenClubs,
    ]));
    let mut prompt = ScriptedPrompt::new(&[PromptReply::Exit]);

    let outcome = table.play_hand(&mut prompt);

    assert_eq!(outcome, HandOutcome::PlayerWin);
    assert!(table.deck.is_empty(), "soft 17 must draw");
}

#[test]
fn test_dealer_stands_on_soft_18() {
    let mut table = stacked_table(deck_in_order(&[
        Card::TenHearts,
        Card::NineHearts,
        Card::AceDiamonds,
        Card::SevenDiamonds,
        Card::FiveClubs,
    ]));
    let mut prompt = ScriptedPrompt::new(&[PromptReply::Exit]);

    let outcome = table.play_hand(&mut prompt);

    assert_eq!(outcome, HandOutcome::PlayerWin);
    assert_eq!(table.deck.len(), 1, "soft 18 must not draw");
}

#[test]
fn test_dealer_wins_score_tie() {
    let mut table = stacked_table(deck_in_order(&[
        Card::TenSpades,
        Card::SevenSpades,
        Card::TenDiamonds,
        Card::SevenDiamonds,
    ]));
    let mut prompt = ScriptedPrompt::new(&[PromptReply::Exit]);

    let outcome = table.play_hand(&mut prompt);

    assert_eq!(outcome, HandOutcome::DealerWin);
    assert_eq!(table.stats.dealer_wins, 1);
}

#[test]
fn test_dealer_bust_counts_player_win_and_bust() {
    let mut table = stacked_table(deck_in_order(&[
        Card::TenHearts,
        Card::EightHearts,
        Card::TenDiamonds,
        Card::SixDiamonds,
        Card::TenClubs,
    ]));
    let mut prompt = ScriptedPrompt::new(&[PromptReply::Exit]);

    let outcome = table.play_hand(&mut prompt);

    assert_eq!(outcome, HandOutcome::DealerBust);
    assert_eq!(table.stats.player_wins, 1);
    assert_eq!(table.stats.dealer_busts, 1);
    assert_eq!(table.stats.hands_played, 2);
}

#[test]
fn test_exhausted_retries_become_a_forced_stand() {
    let mut table = stacked_table(deck_in_order(&[
        Card::TenSpades,
        Card::SevenSpades,
        Card::TenDiamonds,
        Card::EightDiamonds,
    ]));
    let mut prompt = ScriptedPrompt::new(&[PromptReply::Error]);

    let outcome = table.play_hand(&mut prompt);

    // The hand still completes; the bad input is not a rule-engine error.
    assert_eq!(outcome, HandOutcome::DealerWin);
    assert_eq!(table.stats.errors, 0);
    assert_eq!(table.stats.hands_played, 2);
}

#[test]
fn test_session_start_forces_a_shuffle() {
    // Hand count 0 lands on the shuffle boundary, so the four stacked
    // cards are replaced by a full rebuilt deck before dealing.
    let mut table = Table::new(TableRules::default(), ChaCha8Rng::seed_from_u64(11));
    table.deck = deck_in_order(&[
        Card::AceSpades,
        Card::KingHearts,
        Card::SevenDiamonds,
        Card::NineDiamonds,
    ]);
    let mut prompt = ScriptedPrompt::stand();

    let outcome = table.play_hand(&mut prompt);

    assert_ne!(outcome, HandOutcome::Error);
    assert!(table.deck.len() > DECK_SIZE - 15);
}

#[test]
fn test_empty_deck_mid_hand_reshuffles() {
    let mut table = stacked_table(deck_in_order(&[
        Card::TenSpades,
        Card::SixSpades,
        Card::TenDiamonds,
        Card::EightDiamonds,
    ]));
    let mut prompt = ScriptedPrompt::new(&[PromptReply::Continue, PromptReply::Exit]);

    let outcome = table.play_hand(&mut prompt);

    assert_ne!(outcome, HandOutcome::Error);
    assert!(table.deck.len() > DECK_SIZE - 15, "deck must be rebuilt mid-hand");
}

#[test]
fn test_full_session_of_hands() {
    let mut table = Table::new(TableRules::default(), ChaCha8Rng::seed_from_u64(42));
    let mut prompt = ScriptedPrompt::stand();

    for _ in 0..10 {
        table.play_hand(&mut prompt);
    }

    // A standing player can never bust; every hand resolves cleanly.
    assert_eq!(table.stats.errors, 0);
    assert_eq!(table.stats.player_busts, 0);
    assert_eq!(table.stats.hands_played, 10);
    let decided = table.stats.player_wins + table.stats.dealer_wins + table.stats.pushes;
    assert!(decided >= table.stats.hands_played);
}

#[test]
fn test_dealer_never_stands_below_17() {
    let mut table = stacked_table(deck_in_order(&[
        Card::TwoHearts,
        Card::TwoDiamonds,
        Card::TwoSpades,
        Card::ThreeHearts,
        Card::ThreeDiamonds,
        Card::ThreeClubs,
        Card::FourClubs,
    ]));
    let mut hand = Hand::new();
    hand.add_card(table.dealer.deal(&mut table.deck));
    hand.add_card(table.dealer.deal(&mut table.deck));

    match table.dealer_draws(&mut hand).unwrap() {
        DrawResult::Stood(score) => {
            assert!((DEALER_STAND_MIN..=BLACKJACK).contains(&score));
            assert!(hand.len() > 2, "dealer had to draw up from 4");
        }
        DrawResult::Busted => panic!("small cards cannot bust this hand"),
    }
}

#[test]
fn test_resolve_tie_goes_to_dealer() {
    assert_eq!(resolve(17, 17), Ok(HandOutcome::DealerWin));
    assert_eq!(resolve(21, 21), Ok(HandOutcome::DealerWin));
}

#[test]
fn test_resolve_higher_player_score_wins() {
    assert_eq!(resolve(20, 19), Ok(HandOutcome::PlayerWin));
}

#[test]
fn test_resolve_rejects_scores_over_21() {
    assert!(resolve(22, 17).is_err());
    assert!(resolve(17, 22).is_err());
}

#[test]
fn test_check_naturals_rejects_malformed_hands() {
    let mut player = Hand::new();
    player.add_card(Card::AceSpades);
    let mut dealer_hand = Hand::new();
    dealer_hand.add_card(Card::TenClubs);
    dealer_hand.add_card(Card::NineClubs);

    let err = check_naturals(&player, &dealer_hand).unwrap_err();
    assert_eq!(
        err,
        GameError::BadInitialDeal {
            player: 1,
            dealer: 2,
            expected: NATURAL_SIZE,
        }
    );
}
