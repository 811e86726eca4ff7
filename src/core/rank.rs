use std::fmt;

use super::{Card, Value, card_ranks, flush, kind, straight, two_pair};

/// Five card values from the highest to the lowest.
pub type RankList = [Value; 5];

/// All the different possible hand ranks.
///
/// Variants are declared from weakest to strongest so the derived
/// ordering compares the category first, then the tie break fields
/// of that category in order.
///
/// Tie breaks are not uniform: straights only keep the top card and
/// full houses only keep the trips and pair values, while flushes
/// and the lower categories keep every value of the hand.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rank {
    /// No matches. All the values.
    HighCard(RankList),
    /// One card matches another. Pair value, then all the values.
    OnePair(Value, RankList),
    /// Two different pairs. High pair, low pair, then all the values.
    TwoPair(Value, Value, RankList),
    /// Three of the same value. Trips value, then all the values.
    ThreeOfAKind(Value, RankList),
    /// Five cards in a sequence. Top card.
    Straight(Value),
    /// Five cards of the same suit. All the values.
    Flush(RankList),
    /// Three of one value and two of another. Trips then pair value.
    FullHouse(Value, Value),
    /// Four of the same value. Quads value then kicker.
    FourOfAKind(Value, Value),
    /// Five cards in a sequence all of the same suit. Top card.
    StraightFlush(Value),
}

/// Hand categories without any tie break information.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    /// 0 for high card up to 8 for a straight flush.
    pub const fn tier(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High card",
            Category::OnePair => "One pair",
            Category::TwoPair => "Two pair",
            Category::ThreeOfAKind => "Three of a kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full house",
            Category::FourOfAKind => "Four of a kind",
            Category::StraightFlush => "Straight flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Rank {
    pub fn category(&self) -> Category {
        match self {
            Rank::HighCard(..) => Category::HighCard,
            Rank::OnePair(..) => Category::OnePair,
            Rank::TwoPair(..) => Category::TwoPair,
            Rank::ThreeOfAKind(..) => Category::ThreeOfAKind,
            Rank::Straight(..) => Category::Straight,
            Rank::Flush(..) => Category::Flush,
            Rank::FullHouse(..) => Category::FullHouse,
            Rank::FourOfAKind(..) => Category::FourOfAKind,
            Rank::StraightFlush(..) => Category::StraightFlush,
        }
    }

    pub fn tier(&self) -> u8 {
        self.category().tier()
    }
}

/// Can this turn into a hand rank?
pub trait Rankable {
    /// Rank the hand. It doesn't do any caching so it's left up to the
    /// caller to understand that duplicate work will be done if this is
    /// called more than once.
    fn rank(&self) -> Rank;
}

/// Implementation for five cards.
///
/// ```
/// use joker_poker::core::{Card, Hand, Rank, Rankable, Value};
///
/// let hand: Hand = "7C 7D 7H 7S JD".parse().unwrap();
/// let cards: [Card; 5] = std::array::from_fn(|i| hand[i]);
/// assert_eq!(Rank::FourOfAKind(Value::Seven, Value::Jack), cards.rank());
/// ```
impl Rankable for [Card; 5] {
    fn rank(&self) -> Rank {
        let ranks = card_ranks(self);
        let top = ranks[0];
        let is_straight = straight(&ranks);
        let is_flush = flush(self);

        if is_straight && is_flush {
            return Rank::StraightFlush(top);
        }
        if let (Some(quads), Some(kicker)) = (kind(4, &ranks), kind(1, &ranks)) {
            return Rank::FourOfAKind(quads, kicker);
        }
        if let (Some(trips), Some(pair)) = (kind(3, &ranks), kind(2, &ranks)) {
            return Rank::FullHouse(trips, pair);
        }
        if is_flush {
            return Rank::Flush(ranks);
        }
        if is_straight {
            return Rank::Straight(top);
        }
        if let Some(trips) = kind(3, &ranks) {
            return Rank::ThreeOfAKind(trips, ranks);
        }
        if let Some((high, low)) = two_pair(&ranks) {
            return Rank::TwoPair(high, low, ranks);
        }
        if let Some(pair) = kind(2, &ranks) {
            return Rank::OnePair(pair, ranks);
        }
        Rank::HighCard(ranks)
    }
}
