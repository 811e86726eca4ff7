use std::fmt;
use std::ops::{Index, RangeFull};
use std::str::FromStr;

use super::{Card, PokerError, WildCard};

/// An ordered list of cards.
///
/// No verification is done at all, the same card can be in a hand
/// more than once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Hand(Vec<Card>);

impl Hand {
    pub fn new() -> Self {
        Self(Vec::with_capacity(7))
    }

    pub fn new_with_cards(cards: Vec<Card>) -> Self {
        Self(cards)
    }

    /// Parse every token into a card.
    ///
    /// # Examples
    ///
    /// ```
    /// use joker_poker::core::Hand;
    ///
    /// let hand = Hand::from_tokens(&["AS", "KD", "2C"]).unwrap();
    /// assert_eq!(3, hand.len());
    ///
    /// assert!(Hand::from_tokens(&["AS", "?B"]).is_err());
    /// ```
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Self, PokerError> {
        tokens
            .iter()
            .map(|t| t.as_ref().parse())
            .collect::<Result<Vec<Card>, _>>()
            .map(Self)
    }

    /// Add card at to the hand.
    pub fn push(&mut self, c: Card) {
        self.0.push(c);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.0.iter()
    }
}

impl Index<usize> for Hand {
    type Output = Card;
    fn index(&self, index: usize) -> &Card {
        &self.0[index]
    }
}

impl Index<RangeFull> for Hand {
    type Output = [Card];
    fn index(&self, index: RangeFull) -> &[Card] {
        &self.0[index]
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Whitespace separated tokens, `"6C 7C 8C"`.
impl FromStr for Hand {
    type Err = PokerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace().map(str::parse::<Card>).collect()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tokens(f, self.iter())
    }
}

/// An ordered list of cards where some of them may be jokers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct WildHand(Vec<WildCard>);

impl WildHand {
    /// Parse every token, `?B` and `?R` are jokers.
    ///
    /// ```
    /// use joker_poker::core::WildHand;
    ///
    /// let hand = WildHand::from_tokens(&["AS", "?R", "?B"]).unwrap();
    /// assert_eq!(2, hand.jokers());
    /// ```
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Self, PokerError> {
        tokens
            .iter()
            .map(|t| t.as_ref().parse())
            .collect::<Result<Vec<WildCard>, _>>()
            .map(Self)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// How many jokers are in the hand.
    pub fn jokers(&self) -> usize {
        self.0.iter().filter(|c| c.is_joker()).count()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WildCard> {
        self.0.iter()
    }
}

impl Index<usize> for WildHand {
    type Output = WildCard;
    fn index(&self, index: usize) -> &WildCard {
        &self.0[index]
    }
}

impl Index<RangeFull> for WildHand {
    type Output = [WildCard];
    fn index(&self, index: RangeFull) -> &[WildCard] {
        &self.0[index]
    }
}

impl From<Hand> for WildHand {
    fn from(hand: Hand) -> Self {
        Self(hand.0.into_iter().map(WildCard::Card).collect())
    }
}

impl FromIterator<WildCard> for WildHand {
    fn from_iter<T: IntoIterator<Item = WildCard>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromStr for WildHand {
    type Err = PokerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace().map(str::parse::<WildCard>).collect()
    }
}

impl fmt::Display for WildHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tokens(f, self.iter())
    }
}

fn write_tokens<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: impl Iterator<Item = T>,
) -> fmt::Result {
    for (i, item) in items.enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}
