use thiserror::Error;

use crate::cards::Card;

#[derive(Error, Debug)]
pub enum GtoError {
    #[error("Invalid rank: {0}")]
    InvalidRank(char),

    #[error("Invalid suit: {0}")]
    InvalidSuit(char),

    #[error("Invalid card notation: {0}")]
    InvalidCardNotation(String),

    #[error("Invalid board notation: {0}")]
    InvalidBoardNotation(String),

    #[error("Invalid hand notation: {0}")]
    InvalidHandNotation(String),

    #[error("Need at least {need} cards, got {got}")]
    NotEnoughCards { need: usize, got: usize },

    #[error("At most {max} cards can be evaluated, got {got}")]
    TooManyCards { max: usize, got: usize },

    #[error("Cannot deal {requested} cards, only {available} remaining")]
    NotEnoughDeck { requested: usize, available: usize },

    #[error("Card {0} is assigned more than once")]
    DuplicateCard(Card),

    #[error("Board must have 0, 3, 4 or 5 cards, got {0}")]
    InvalidBoardSize(usize),

    #[error("{owner} must hold exactly 2 hole cards, got {got}")]
    InvalidHoleCards { owner: &'static str, got: usize },

    #[error("Iteration count must be positive")]
    ZeroIterations,

    #[error("Invalid position '{0}'. Valid: BTN, CO, MP, UTG, SB, BB")]
    InvalidPosition(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GtoResult<T> = Result<T, GtoError>;
