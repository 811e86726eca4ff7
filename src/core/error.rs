use thiserror::Error;

/// This is the core error type for the library.
/// It uses `thiserror` to provide readable error messages.
///
/// Every parse error carries the token that failed.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PokerError {
    #[error("Card tokens are two characters, found {0:?}")]
    TokenLength(String),
    #[error("Unable to parse value in {0:?}")]
    UnexpectedValueChar(String),
    #[error("Unable to parse suit in {0:?}")]
    UnexpectedSuitChar(String),
    #[error("Jokers are ?B or ?R, found {0:?}")]
    UnknownJoker(String),
    #[error("Joker {0:?} is not allowed here")]
    UnexpectedJoker(String),
    #[error("Holdem hands should have exactly 7 cards in them, found {0}")]
    HandSize(usize),
    #[error("At most 2 jokers can be in a hand, found {0}")]
    TooManyJokers(usize),
}

impl PokerError {
    /// Was the failure caused by a malformed token?
    pub fn is_parse_error(&self) -> bool {
        !matches!(
            self,
            PokerError::HandSize(_) | PokerError::TooManyJokers(_)
        )
    }

    /// The token that couldn't be parsed, if any.
    pub fn token(&self) -> Option<&str> {
        match self {
            PokerError::TokenLength(t)
            | PokerError::UnexpectedValueChar(t)
            | PokerError::UnexpectedSuitChar(t)
            | PokerError::UnknownJoker(t)
            | PokerError::UnexpectedJoker(t) => Some(t),
            PokerError::HandSize(_) | PokerError::TooManyJokers(_) => None,
        }
    }
}
