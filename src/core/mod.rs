//! This is the core module. It exports the cards, jokers, hands
//! and the five card hand ranking.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, Suit and Color
pub use self::card::{Card, Color, Suit, Value};

/// Jokers and cards that may be jokers.
mod joker;
pub use self::joker::{Joker, WildCard};

/// Errors for every fallible operation.
mod error;
pub use self::error::PokerError;

/// Code related to cards in hands.
mod hand;
/// Everything in there should be public.
pub use self::hand::*;

/// We want to be able to iterate over five card hands.
mod card_iter;
/// Make that functionality public.
pub use self::card_iter::*;

/// The building blocks of hand ranking.
mod detect;
pub use self::detect::{card_ranks, flush, kind, straight, two_pair};

/// 5 Card hand ranking code.
mod rank;
/// Export the trait and the results.
pub use self::rank::{Category, Rank, RankList, Rankable};
