use std::fmt;
use std::str::FromStr;

use super::PokerError;

/// Card rank or value.
/// This is basically the face value - 2
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Constant of all the values.
/// This is what `Value::values()` returns
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Get all of the `Value`'s that are possible, lowest first.
    /// This is used to iterate through all the cards a joker
    /// can stand in for.
    pub const fn values() -> [Value; 13] {
        VALUES
    }

    /// The face score of the value. Two scores 2 and the ace,
    /// which is always high, scores 14.
    ///
    /// ```
    /// use joker_poker::core::Value;
    ///
    /// assert_eq!(2, Value::Two.score());
    /// assert_eq!(10, Value::Ten.score());
    /// assert_eq!(14, Value::Ace.score());
    /// ```
    pub const fn score(self) -> u8 {
        self as u8 + 2
    }

    pub fn from_char(c: char) -> Option<Value> {
        match c {
            'A' => Some(Value::Ace),
            'K' => Some(Value::King),
            'Q' => Some(Value::Queen),
            'J' => Some(Value::Jack),
            'T' => Some(Value::Ten),
            '9' => Some(Value::Nine),
            '8' => Some(Value::Eight),
            '7' => Some(Value::Seven),
            '6' => Some(Value::Six),
            '5' => Some(Value::Five),
            '4' => Some(Value::Four),
            '3' => Some(Value::Three),
            '2' => Some(Value::Two),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Value::Ace => 'A',
            Value::King => 'K',
            Value::Queen => 'Q',
            Value::Jack => 'J',
            Value::Ten => 'T',
            Value::Nine => '9',
            Value::Eight => '8',
            Value::Seven => '7',
            Value::Six => '6',
            Value::Five => '5',
            Value::Four => '4',
            Value::Three => '3',
            Value::Two => '2',
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// The two colors of a deck. Each color has two suits
/// and one joker.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// Clubs and spades
    Black,
    /// Diamonds and hearts
    Red,
}

impl Color {
    /// The two suits of this color, in `Suit::suits()` order.
    pub const fn suits(self) -> [Suit; 2] {
        match self {
            Color::Black => [Suit::Spade, Suit::Club],
            Color::Red => [Suit::Heart, Suit::Diamond],
        }
    }
}

/// Enum for the four different suits.
/// While this has support for ordering it's not
/// sensical. The sorting is only there to allow sorting cards.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Spades
    Spade = 0,
    /// Clubs
    Club = 1,
    /// Hearts
    Heart = 2,
    /// Diamonds
    Diamond = 3,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Spade, Suit::Club, Suit::Heart, Suit::Diamond];

impl Suit {
    /// Provide all the Suit's that there are.
    pub const fn suits() -> [Suit; 4] {
        SUITS
    }

    pub const fn color(self) -> Color {
        match self {
            Suit::Spade | Suit::Club => Color::Black,
            Suit::Heart | Suit::Diamond => Color::Red,
        }
    }

    /// Parse a suit letter. Both `C` and `c` are clubs.
    pub fn from_char(s: char) -> Option<Suit> {
        match s {
            'D' | 'd' => Some(Suit::Diamond),
            'S' | 's' => Some(Suit::Spade),
            'H' | 'h' => Some(Suit::Heart),
            'C' | 'c' => Some(Suit::Club),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Suit::Diamond => 'D',
            Suit::Spade => 'S',
            Suit::Heart => 'H',
            Suit::Club => 'C',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }
}

/// Cards print as their two character token, `TH` for the ten of hearts.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.suit)
    }
}

/// Parse a two character token such as `"AS"` or `"7d"`.
///
/// ```
/// use joker_poker::core::{Card, Suit, Value};
///
/// let card: Card = "TH".parse().unwrap();
/// assert_eq!(Card::new(Value::Ten, Suit::Heart), card);
///
/// assert!("1H".parse::<Card>().is_err());
/// assert!("?B".parse::<Card>().is_err());
/// ```
impl FromStr for Card {
    type Err = PokerError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut chars = token.chars();
        let (Some(vc), Some(sc), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(PokerError::TokenLength(token.to_string()));
        };

        if vc == '?' {
            // Jokers get their own errors, not a bad value.
            return Err(if matches!(sc, 'B' | 'R') {
                PokerError::UnexpectedJoker(token.to_string())
            } else {
                PokerError::UnknownJoker(token.to_string())
            });
        }

        let value =
            Value::from_char(vc).ok_or_else(|| PokerError::UnexpectedValueChar(token.to_string()))?;
        let suit =
            Suit::from_char(sc).ok_or_else(|| PokerError::UnexpectedSuitChar(token.to_string()))?;

        Ok(Card { value, suit })
    }
}
