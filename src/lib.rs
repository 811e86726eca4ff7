//! Joker Poker finds the best five card poker hand out of seven cards.
//!
//! Any of the seven cards can also be a joker. The black joker `?B` plays
//! as any spade or club and the red joker `?R` as any heart or diamond.
//! Every substitution is tried and the best hand over all of them wins.
//!
//! ```
//! use joker_poker::holdem::{best_hand, best_wild_hand};
//!
//! let best = best_hand(&["JD", "TC", "TH", "7C", "7D", "7S", "7H"]).unwrap();
//! assert_eq!("JD 7C 7D 7S 7H", best.to_string());
//!
//! let best = best_wild_hand(&["6C", "7C", "8C", "9C", "TC", "5C", "?B"]).unwrap();
//! assert_eq!(vec!["7C", "8C", "9C", "JC", "TC"], best.sorted_tokens());
//! ```

/// Cards, jokers, hands and the five card hand ranking.
/// Nothing in here knows about seven card hands.
pub mod core;
/// Picking the best five cards out of seven.
pub mod holdem;
