use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GameError {
    #[error("cannot score an empty hand")]
    EmptyHand,
    #[error("malformed initial deal: player holds {player} cards, dealer holds {dealer}, expected {expected} each")]
    BadInitialDeal {
        player: usize,
        dealer: usize,
        expected: usize,
    },
    #[error("cannot compare scores outside 0..=21: player {player}, dealer {dealer}")]
    ScoreOutOfRange { player: u8, dealer: u8 },
}
