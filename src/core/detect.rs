//! Small predicates and extractors used to rank a hand.
//!
//! Everything except `flush` works on the card values sorted from
//! high to low, as returned by `card_ranks`.

use super::{Card, Value};

/// The values of the cards sorted from the highest to the lowest.
///
/// ```
/// use joker_poker::core::{Hand, Value, card_ranks};
///
/// let hand: Hand = "7C AS 7D".parse().unwrap();
/// let cards = [hand[0], hand[1], hand[2]];
/// assert_eq!([Value::Ace, Value::Seven, Value::Seven], card_ranks(&cards));
/// ```
pub fn card_ranks<const N: usize>(cards: &[Card; N]) -> [Value; N] {
    let mut ranks = cards.map(|c| c.value);
    ranks.sort_unstable_by(|a, b| b.cmp(a));
    ranks
}

/// Are all the cards the same suit?
pub fn flush(cards: &[Card]) -> bool {
    match cards.split_first() {
        Some((first, rest)) => rest.iter().all(|c| c.suit == first.suit),
        None => false,
    }
}

/// Does every value follow the one before it by exactly one?
///
/// The ace only ever plays high, so `A 5 4 3 2` is not a straight.
pub fn straight(ranks: &[Value]) -> bool {
    ranks
        .windows(2)
        .all(|pair| pair[0].score() == pair[1].score() + 1)
}

/// The highest value that shows up exactly `n` times.
pub fn kind(n: usize, ranks: &[Value]) -> Option<Value> {
    if n == 0 {
        return None;
    }

    let mut counts = [0usize; 13];
    for r in ranks {
        counts[*r as usize] += 1;
    }

    Value::values()
        .into_iter()
        .rev()
        .find(|v| counts[*v as usize] == n)
}

/// The values of the two highest pairs, high pair first.
///
/// After the first pair is found every card of that value is removed
/// before looking for the second one, so three or four of a kind never
/// counts as a pair here.
pub fn two_pair(ranks: &[Value]) -> Option<(Value, Value)> {
    let high = kind(2, ranks)?;
    let leftover: Vec<Value> = ranks.iter().copied().filter(|r| *r != high).collect();
    let low = kind(2, &leftover)?;
    Some((high, low))
}
