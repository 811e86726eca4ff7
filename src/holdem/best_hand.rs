use std::fmt;

use tracing::{event, trace_span};

use crate::core::{Card, CardIter, Category, Hand, PokerError, Rank, Rankable};

/// Number of cards the selectors pick the best five from.
pub const HAND_SIZE: usize = 7;

/// The best five cards found in a hand, and how strong they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BestHand {
    /// The chosen cards, in the order they were found in the hand.
    pub cards: [Card; 5],
    /// The rank of those five cards.
    pub rank: Rank,
}

impl BestHand {
    /// Find the best five card hand out of seven cards.
    ///
    /// Every one of the 21 five card combinations is ranked. When more
    /// than one combination has the best rank the first one generated
    /// is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use joker_poker::core::{Category, Hand};
    /// use joker_poker::holdem::BestHand;
    ///
    /// let hand: Hand = "TD TC TH 7C 7D 8C 8S".parse().unwrap();
    /// let best = BestHand::from_hand(&hand).unwrap();
    /// assert_eq!(Category::FullHouse, best.category());
    /// assert_eq!("TD TC TH 8C 8S", best.to_string());
    /// ```
    pub fn from_hand(hand: &Hand) -> Result<Self, PokerError> {
        check_hand_size(hand.len())?;
        let _span = trace_span!("best_hand").entered();

        let best = search(&hand[..], None, &mut |cards: &[Card; 5]| cards.rank())
            .ok_or(PokerError::HandSize(hand.len()))?;

        event!(tracing::Level::DEBUG, rank = ?best.rank, "Found best hand");
        Ok(best)
    }

    pub fn category(&self) -> Category {
        self.rank.category()
    }

    /// The chosen cards sorted the way the tokens sort as strings.
    ///
    /// Handy to compare against a known answer without caring about order.
    pub fn sorted_tokens(&self) -> Vec<String> {
        let mut tokens: Vec<String> = self.cards.iter().map(Card::to_string).collect();
        tokens.sort();
        tokens
    }
}

impl fmt::Display for BestHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

/// Find the best five card hand from exactly seven card tokens.
///
/// The number of tokens is checked before any of them is parsed.
///
/// ```
/// use joker_poker::holdem::best_hand;
///
/// let best = best_hand(&["6C", "7C", "8C", "9C", "TC", "5C", "JS"]).unwrap();
/// assert_eq!(vec!["6C", "7C", "8C", "9C", "TC"], best.sorted_tokens());
///
/// assert!(best_hand(&["6C", "7C"]).is_err());
/// ```
pub fn best_hand<S: AsRef<str>>(tokens: &[S]) -> Result<BestHand, PokerError> {
    check_hand_size(tokens.len())?;
    BestHand::from_hand(&Hand::from_tokens(tokens)?)
}

pub(crate) fn check_hand_size(len: usize) -> Result<(), PokerError> {
    if len == HAND_SIZE {
        Ok(())
    } else {
        Err(PokerError::HandSize(len))
    }
}

/// Rank every five card combination of `cards` and fold them into `best`.
///
/// A combination only replaces the current best when its rank is
/// strictly higher, so ties keep whatever was found first.
pub(crate) fn search<F>(cards: &[Card], best: Option<BestHand>, score: &mut F) -> Option<BestHand>
where
    F: FnMut(&[Card; 5]) -> Rank,
{
    CardIter::<5>::new(cards).fold(best, |best, five| {
        let rank = score(&five);
        match best {
            Some(current) if current.rank >= rank => Some(current),
            _ => Some(BestHand { cards: five, rank }),
        }
    })
}
