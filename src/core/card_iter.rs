use super::Card;

/// Iterate over every `N` card combination of a slice of cards.
///
/// Combinations come out in lexicographic order of their positions
/// in the slice: for seven cards and `N = 5` the first combination is
/// positions `0..5` and the last one `2..7`.
///
/// ```
/// use joker_poker::core::{CardIter, Hand};
///
/// let hand: Hand = "6C 7C 8C 9C TC 5C JS".parse().unwrap();
/// assert_eq!(21, CardIter::<5>::new(&hand[..]).count());
/// ```
#[derive(Debug, Clone)]
pub struct CardIter<'a, const N: usize> {
    // All the possible cards that can be picked.
    possible_cards: &'a [Card],

    // Set of current offsets being used to create card sets.
    idx: [usize; N],

    // Set once the last combination has been returned.
    done: bool,
}

impl<'a, const N: usize> CardIter<'a, N> {
    pub fn new(possible_cards: &'a [Card]) -> Self {
        Self {
            possible_cards,
            idx: std::array::from_fn(|i| i),
            done: N > possible_cards.len(),
        }
    }
}

impl<const N: usize> Iterator for CardIter<'_, N> {
    type Item = [Card; N];

    fn next(&mut self) -> Option<[Card; N]> {
        if self.done {
            return None;
        }

        let result: [Card; N] = std::array::from_fn(|i| self.possible_cards[self.idx[i]]);

        // Find the right most offset that can still move forward,
        // move it, and pack every offset after it right behind it.
        let max_offset = self.possible_cards.len() - N;
        match (0..N).rev().find(|&level| self.idx[level] < max_offset + level) {
            Some(level) => {
                self.idx[level] += 1;
                for next in (level + 1)..N {
                    self.idx[next] = self.idx[next - 1] + 1;
                }
            }
            None => self.done = true,
        }

        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Suit, Value};
    use std::collections::HashSet;

    fn cards(n: usize) -> Vec<Card> {
        Value::values()
            .into_iter()
            .take(n)
            .map(|v| Card::new(v, Suit::Spade))
            .collect()
    }

    #[test]
    fn test_iter_one() {
        let c = cards(1);
        for combo in CardIter::<1>::new(&c) {
            assert_eq!(c[0], combo[0]);
        }
        assert_eq!(1, CardIter::<1>::new(&c).count());
    }

    #[test]
    fn test_iter_two() {
        let c = cards(3);

        // Make sure that we get the correct number back.
        assert_eq!(3, CardIter::<2>::new(&c).count());

        // Make sure that everything has two cards and they are different.
        for combo in CardIter::<2>::new(&c) {
            assert!(combo[0] != combo[1]);
        }
    }

    #[test]
    fn test_five_of_seven() {
        let c = cards(7);
        let combos: Vec<[Card; 5]> = CardIter::<5>::new(&c).collect();
        assert_eq!(21, combos.len());

        let unique: HashSet<[Card; 5]> = combos.iter().copied().collect();
        assert_eq!(21, unique.len());

        // Lexicographic order of positions.
        assert_eq!(&c[0..5], &combos[0][..]);
        assert_eq!([c[0], c[1], c[2], c[3], c[5]], combos[1]);
        assert_eq!(&c[2..7], &combos[20][..]);
    }

    #[test]
    fn test_all_of_them() {
        let c = cards(5);
        let combos: Vec<[Card; 5]> = CardIter::<5>::new(&c).collect();
        assert_eq!(1, combos.len());
        assert_eq!(&c[..], &combos[0][..]);
    }

    #[test]
    fn test_not_enough_cards() {
        let c = cards(4);
        assert_eq!(0, CardIter::<5>::new(&c).count());
    }

    #[test]
    fn test_thirteen_choose_five() {
        let c = cards(13);
        assert_eq!(1287, CardIter::<5>::new(&c).count());
    }
}
