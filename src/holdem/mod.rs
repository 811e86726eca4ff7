//! Seven card selection. Picks the best five cards out of a hold'em
//! sized hand, with or without jokers.

/// The plain seven card search.
mod best_hand;
/// Export `BestHand` and the token entry point.
pub use self::best_hand::{BestHand, HAND_SIZE, best_hand};

/// Joker expansion and the wild search built on top of it.
mod wild;
pub use self::wild::{MAX_JOKERS, Variants, best_wild_hand};

/// Memoized five card ranks.
mod rank_cache;
pub use self::rank_cache::RankCache;
