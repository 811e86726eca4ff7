use tracing::{event, trace_span};

use super::best_hand::{check_hand_size, search};
use super::{BestHand, RankCache};
use crate::core::{Card, Hand, Joker, PokerError, Rank, Rankable, WildCard, WildHand};

/// Most jokers the wild selectors will expand.
pub const MAX_JOKERS: usize = 2;

/// Iterator over every concrete hand that a `WildHand` can turn into.
///
/// Each joker is replaced, in place, by each of its 26 substitutes. With
/// more than one joker the last one changes fastest. A hand with no
/// jokers gives back exactly one hand, itself.
///
/// There are 26 to the power of the joker count variants. The iterator
/// itself has no limit, the selectors refuse more than `MAX_JOKERS`.
///
/// Substitutes aren't checked against the rest of the hand, so a
/// variant can hold the same card twice.
#[derive(Debug, Clone)]
pub struct Variants<'a> {
    cards: &'a [WildCard],
    // One list of substitutes per joker, in hand order.
    substitutes: Vec<[Card; Joker::SUBSTITUTES]>,
    // Which substitute each joker is using right now.
    counters: Vec<usize>,
    done: bool,
}

impl WildHand {
    /// All the concrete hands this hand can be.
    ///
    /// ```
    /// use joker_poker::core::WildHand;
    ///
    /// let hand: WildHand = "TD TC 5H 5C 7C ?R ?B".parse().unwrap();
    /// assert_eq!(676, hand.variants().count());
    /// ```
    pub fn variants(&self) -> Variants<'_> {
        let substitutes: Vec<[Card; Joker::SUBSTITUTES]> = self
            .iter()
            .filter_map(|wc| match wc {
                WildCard::Joker(joker) => Some(joker.substitutes()),
                WildCard::Card(_) => None,
            })
            .collect();

        Variants {
            cards: &self[..],
            counters: vec![0; substitutes.len()],
            substitutes,
            done: false,
        }
    }
}

impl Iterator for Variants<'_> {
    type Item = Hand;

    fn next(&mut self) -> Option<Hand> {
        if self.done {
            return None;
        }

        let mut joker = 0;
        let hand: Hand = self
            .cards
            .iter()
            .map(|wc| match wc {
                WildCard::Card(card) => *card,
                WildCard::Joker(_) => {
                    let card = self.substitutes[joker][self.counters[joker]];
                    joker += 1;
                    card
                }
            })
            .collect();

        // Odometer style, bump the last joker that isn't on its last
        // substitute and reset every joker after it.
        match (0..self.counters.len())
            .rev()
            .find(|&j| self.counters[j] + 1 < Joker::SUBSTITUTES)
        {
            Some(j) => {
                self.counters[j] += 1;
                self.counters[j + 1..].fill(0);
            }
            None => self.done = true,
        }

        Some(hand)
    }
}

impl BestHand {
    /// Find the best five card hand out of seven cards where some of
    /// them can be jokers.
    ///
    /// Every variant of the hand is searched the same way
    /// `BestHand::from_hand` searches a plain hand, and the best rank
    /// over all of them wins. Ties keep the first hand generated. The
    /// returned cards never contain a joker.
    ///
    /// Hands with more than `MAX_JOKERS` jokers are refused with
    /// `PokerError::TooManyJokers`.
    ///
    /// ```
    /// use joker_poker::core::{Rank, Value, WildHand};
    /// use joker_poker::holdem::BestHand;
    ///
    /// let hand: WildHand = "6C 7C 8C 9C TC 5C ?B".parse().unwrap();
    /// let best = BestHand::from_wild_hand(&hand).unwrap();
    /// assert_eq!(Rank::StraightFlush(Value::Jack), best.rank);
    /// ```
    pub fn from_wild_hand(hand: &WildHand) -> Result<Self, PokerError> {
        best_of_variants(hand, |cards| cards.rank())
    }

    /// Same as `BestHand::from_wild_hand` but ranks go through `cache`.
    ///
    /// Combinations that don't use a joker show up in many variants,
    /// the cache ranks each of them only once.
    pub fn from_wild_hand_cached(
        hand: &WildHand,
        cache: &mut RankCache,
    ) -> Result<Self, PokerError> {
        best_of_variants(hand, |cards| cache.rank(cards))
    }
}

fn best_of_variants<F>(hand: &WildHand, mut score: F) -> Result<BestHand, PokerError>
where
    F: FnMut(&[Card; 5]) -> Rank,
{
    check_hand_size(hand.len())?;
    let jokers = hand.jokers();
    if jokers > MAX_JOKERS {
        return Err(PokerError::TooManyJokers(jokers));
    }
    let _span = trace_span!("best_wild_hand", jokers).entered();

    let mut variants = 0usize;
    let best = hand.variants().fold(None, |best, variant| {
        variants += 1;
        search(&variant[..], best, &mut score)
    });

    let best = best.ok_or(PokerError::HandSize(hand.len()))?;
    event!(
        tracing::Level::DEBUG,
        variants,
        rank = ?best.rank,
        "Found best wild hand"
    );
    Ok(best)
}

/// Find the best five card hand from exactly seven tokens, any of
/// which can be the `?B` or `?R` joker.
///
/// ```
/// use joker_poker::holdem::best_wild_hand;
///
/// let best = best_wild_hand(&["TD", "TC", "5H", "5C", "7C", "?R", "?B"]).unwrap();
/// assert_eq!(vec!["7C", "TC", "TD", "TH", "TS"], best.sorted_tokens());
/// ```
pub fn best_wild_hand<S: AsRef<str>>(tokens: &[S]) -> Result<BestHand, PokerError> {
    check_hand_size(tokens.len())?;
    BestHand::from_wild_hand(&WildHand::from_tokens(tokens)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Category, Suit, Value};
    use std::collections::HashSet;

    fn tokens(s: &str) -> Vec<&str> {
        s.split_whitespace().collect()
    }

    #[test]
    fn test_variant_counts() {
        let none: WildHand = "JD TC TH 7C 7D 7S 7H".parse().unwrap();
        let one: WildHand = "JD TC TH 7C 7D 7S ?R".parse().unwrap();
        let two: WildHand = "JD TC TH 7C 7D ?B ?R".parse().unwrap();

        assert_eq!(1, none.variants().count());
        assert_eq!(26, one.variants().count());
        assert_eq!(676, two.variants().count());
    }

    #[test]
    fn test_no_joker_variant_is_the_hand() {
        let hand: Hand = "JD TC TH 7C 7D 7S 7H".parse().unwrap();
        let variants: Vec<Hand> = WildHand::from(hand.clone()).variants().collect();
        assert_eq!(vec![hand], variants);
    }

    #[test]
    fn test_jokers_replaced_in_place() {
        let hand: WildHand = "?B 2C 3C ?R 4C".parse().unwrap();
        let variants: Vec<Hand> = hand.variants().collect();
        assert_eq!(676, variants.len());

        // Last joker moves fastest.
        assert_eq!("2S 2C 3C 2H 4C", variants[0].to_string());
        assert_eq!("2S 2C 3C 3H 4C", variants[1].to_string());
        assert_eq!("2S 2C 3C 2D 4C", variants[13].to_string());
        assert_eq!("3S 2C 3C 2H 4C", variants[26].to_string());
        assert_eq!("AC 2C 3C AD 4C", variants[675].to_string());

        let unique: HashSet<Hand> = variants.iter().cloned().collect();
        assert_eq!(676, unique.len());
        for v in &variants {
            assert_eq!(v[1], Card::new(Value::Two, Suit::Club));
            assert_eq!(v[4], Card::new(Value::Four, Suit::Club));
            assert_eq!(Suit::Spade.color(), v[0].suit.color());
            assert_eq!(Suit::Heart.color(), v[3].suit.color());
        }
    }

    #[test]
    fn test_duplicates_are_generated() {
        // 2C is already in the hand, the black joker still becomes it.
        let hand: WildHand = "2C ?B".parse().unwrap();
        assert!(hand.variants().any(|v| v[0] == v[1]));
    }

    #[test_log::test]
    fn test_joker_makes_straight_flush() {
        let best = best_wild_hand(&tokens("6C 7C 8C 9C TC 5C ?B")).unwrap();
        assert_eq!(vec!["7C", "8C", "9C", "JC", "TC"], best.sorted_tokens());
        assert_eq!(Category::StraightFlush, best.category());
    }

    #[test_log::test]
    fn test_two_jokers_make_quads() {
        let best = best_wild_hand(&tokens("TD TC 5H 5C 7C ?R ?B")).unwrap();
        assert_eq!(vec!["7C", "TC", "TD", "TH", "TS"], best.sorted_tokens());
        assert_eq!(Rank::FourOfAKind(Value::Ten, Value::Seven), best.rank);
    }

    #[test_log::test]
    fn test_no_joker_same_as_best_hand() {
        let t = tokens("JD TC TH 7C 7D 7S 7H");
        let best = best_wild_hand(&t).unwrap();
        assert_eq!(vec!["7C", "7D", "7H", "7S", "JD"], best.sorted_tokens());
        assert_eq!(crate::holdem::best_hand(&t).unwrap(), best);
    }

    #[test]
    fn test_never_returns_a_joker() {
        let best = best_wild_hand(&tokens("?R ?B 2C 4D 6H 8S TC")).unwrap();
        assert!(!best.to_string().contains('?'));
        // The jokers fill in the 7 and the 9. The red joker runs slowest
        // so 7H 9S is found before 9H 7S.
        assert_eq!(Rank::Straight(Value::Ten), best.rank);
        assert_eq!("7H 9S 6H 8S TC", best.to_string());
    }

    #[test]
    fn test_deterministic() {
        let t = tokens("TD TC 5H 5C 7C ?R ?B");
        let first = best_wild_hand(&t).unwrap();
        for _ in 0..3 {
            assert_eq!(first, best_wild_hand(&t).unwrap());
        }
    }

    #[test]
    fn test_cached_agrees() {
        let mut cache = RankCache::new();
        for hand in [
            "TD TC 5H 5C 7C ?R ?B",
            "6C 7C 8C 9C TC 5C ?B",
            "JD TC TH 7C 7D 7S 7H",
            "AS 2D 9H ?R KC 3S 4D",
        ] {
            let hand: WildHand = hand.parse().unwrap();
            assert_eq!(
                BestHand::from_wild_hand(&hand).unwrap(),
                BestHand::from_wild_hand_cached(&hand, &mut cache).unwrap()
            );
        }
        assert!(cache.hits() > 0);
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            PokerError::HandSize(6),
            best_wild_hand(&tokens("TD TC 5H 5C ?R ?B")).unwrap_err()
        );
        assert_eq!(
            PokerError::UnknownJoker("?G".to_string()),
            best_wild_hand(&tokens("TD TC 5H 5C 7C ?R ?G")).unwrap_err()
        );
        assert_eq!(
            PokerError::UnexpectedSuitChar("7X".to_string()),
            best_wild_hand(&tokens("TD TC 5H 5C 7X ?R ?B")).unwrap_err()
        );

        let hand: WildHand = "?R ?B".parse().unwrap();
        assert_eq!(
            PokerError::HandSize(2),
            BestHand::from_wild_hand(&hand).unwrap_err()
        );
    }

    #[test]
    fn test_too_many_jokers() {
        assert_eq!(
            PokerError::TooManyJokers(3),
            best_wild_hand(&tokens("?B ?B ?B 2C 3D 4H 5S")).unwrap_err()
        );
        assert_eq!(
            PokerError::TooManyJokers(7),
            best_wild_hand(&tokens("?B ?B ?B ?R ?R ?R ?B")).unwrap_err()
        );

        let hand: WildHand = "?B ?R ?B 2C 3D 4H 5S".parse().unwrap();
        let mut cache = RankCache::new();
        assert_eq!(
            PokerError::TooManyJokers(3),
            BestHand::from_wild_hand_cached(&hand, &mut cache).unwrap_err()
        );
        assert!(cache.is_empty());

        // The expander has no limit of its own.
        assert_eq!(26 * 26 * 26, hand.variants().count());

        // Size is still checked first.
        assert_eq!(
            PokerError::HandSize(3),
            best_wild_hand(&tokens("?B ?B ?B")).unwrap_err()
        );
    }
}
