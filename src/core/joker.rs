use std::fmt;
use std::str::FromStr;

use super::{Card, Color, PokerError, Value};

/// A wildcard. The black joker can be used as any club or spade,
/// the red joker as any diamond or heart.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Joker {
    pub color: Color,
}

impl Joker {
    pub const BLACK: Joker = Joker {
        color: Color::Black,
    };
    pub const RED: Joker = Joker { color: Color::Red };

    /// Number of cards a joker can stand in for.
    pub const SUBSTITUTES: usize = 26;

    /// Every card this joker can become.
    ///
    /// Suits come in `Suit::suits()` order, and each suit runs
    /// through all the values from two to ace.
    ///
    /// ```
    /// use joker_poker::core::{Card, Joker, Suit, Value};
    ///
    /// let subs = Joker::BLACK.substitutes();
    /// assert_eq!(Card::new(Value::Two, Suit::Spade), subs[0]);
    /// assert_eq!(Card::new(Value::Ace, Suit::Club), subs[25]);
    /// ```
    pub fn substitutes(&self) -> [Card; Joker::SUBSTITUTES] {
        let values = Value::values();
        let suits = self.color.suits();
        std::array::from_fn(|i| Card::new(values[i % values.len()], suits[i / values.len()]))
    }
}

impl fmt::Display for Joker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.color {
            Color::Black => write!(f, "?B"),
            Color::Red => write!(f, "?R"),
        }
    }
}

impl FromStr for Joker {
    type Err = PokerError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "?B" => Ok(Joker::BLACK),
            "?R" => Ok(Joker::RED),
            _ => Err(PokerError::UnknownJoker(token.to_string())),
        }
    }
}

/// Either a regular card or a joker that hasn't been resolved yet.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WildCard {
    Card(Card),
    Joker(Joker),
}

impl WildCard {
    pub fn is_joker(&self) -> bool {
        matches!(self, WildCard::Joker(_))
    }
}

impl From<Card> for WildCard {
    fn from(card: Card) -> Self {
        WildCard::Card(card)
    }
}

impl From<Joker> for WildCard {
    fn from(joker: Joker) -> Self {
        WildCard::Joker(joker)
    }
}

impl fmt::Display for WildCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WildCard::Card(c) => fmt::Display::fmt(c, f),
            WildCard::Joker(j) => fmt::Display::fmt(j, f),
        }
    }
}

/// Tokens starting with `?` are jokers, anything else has to be a card.
impl FromStr for WildCard {
    type Err = PokerError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        if token.starts_with('?') {
            Ok(WildCard::Joker(token.parse()?))
        } else {
            Ok(WildCard::Card(token.parse()?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Suit;
    use std::collections::HashSet;

    #[test]
    fn test_substitutes_match_color() {
        for joker in [Joker::BLACK, Joker::RED] {
            let subs = joker.substitutes();
            assert!(subs.iter().all(|c| c.suit.color() == joker.color));

            // All different
            let unique: HashSet<Card> = subs.iter().copied().collect();
            assert_eq!(Joker::SUBSTITUTES, unique.len());
        }
    }

    #[test]
    fn test_red_order() {
        let subs = Joker::RED.substitutes();
        assert_eq!(Card::new(Value::Two, Suit::Heart), subs[0]);
        assert_eq!(Card::new(Value::Ace, Suit::Heart), subs[12]);
        assert_eq!(Card::new(Value::Two, Suit::Diamond), subs[13]);
        assert_eq!(Card::new(Value::Ace, Suit::Diamond), subs[25]);
    }

    #[test]
    fn test_parse_wild() {
        assert_eq!(WildCard::Joker(Joker::BLACK), "?B".parse().unwrap());
        assert_eq!(WildCard::Joker(Joker::RED), "?R".parse().unwrap());
        assert_eq!(
            WildCard::Card(Card::new(Value::Jack, Suit::Diamond)),
            "JD".parse().unwrap()
        );
        assert_eq!(
            PokerError::UnknownJoker("?b".to_string()),
            "?b".parse::<WildCard>().unwrap_err()
        );
        assert_eq!(
            PokerError::UnknownJoker("??".to_string()),
            "??".parse::<WildCard>().unwrap_err()
        );
        assert_eq!(
            PokerError::UnknownJoker("?BB".to_string()),
            "?BB".parse::<WildCard>().unwrap_err()
        );
    }

    #[test]
    fn test_display() {
        assert_eq!("?B", WildCard::from(Joker::BLACK).to_string());
        assert_eq!("?R", Joker::RED.to_string());
        assert_eq!(
            "5C",
            WildCard::from(Card::new(Value::Five, Suit::Club)).to_string()
        );
    }
}
