use std::collections::HashMap;

use tracing::event;

use crate::core::{Card, Rank, Rankable};

/// Remembers the rank of every five card combination it has seen.
///
/// The rank of five cards doesn't depend on their order, so the
/// combinations are sorted before they're looked up.
#[derive(Debug, Clone, Default)]
pub struct RankCache {
    ranks: HashMap<[Card; 5], Rank>,
    hits: usize,
    misses: usize,
}

impl RankCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rank `cards`, only doing the work the first time they show up.
    ///
    /// ```
    /// use joker_poker::core::{Card, Hand, Rankable};
    /// use joker_poker::holdem::RankCache;
    ///
    /// let hand: Hand = "AD KD QD JD TD".parse().unwrap();
    /// let cards: [Card; 5] = std::array::from_fn(|i| hand[i]);
    ///
    /// let mut cache = RankCache::new();
    /// assert_eq!(cards.rank(), cache.rank(&cards));
    /// assert_eq!(cards.rank(), cache.rank(&cards));
    /// assert_eq!(1, cache.hits());
    /// ```
    pub fn rank(&mut self, cards: &[Card; 5]) -> Rank {
        let mut key = *cards;
        key.sort_unstable();

        if let Some(rank) = self.ranks.get(&key) {
            self.hits += 1;
            return *rank;
        }

        self.misses += 1;
        let rank = key.rank();
        event!(tracing::Level::TRACE, ?rank, "Rank cache miss");
        self.ranks.insert(key, rank);
        rank
    }

    /// Number of distinct combinations stored.
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }

    /// Forget everything, counters included.
    pub fn clear(&mut self) {
        self.ranks.clear();
        self.hits = 0;
        self.misses = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CardIter, Hand};

    fn five(s: &str) -> [Card; 5] {
        let hand: Hand = s.parse().unwrap();
        std::array::from_fn(|i| hand[i])
    }

    #[test]
    fn test_order_does_not_matter() {
        let mut cache = RankCache::new();
        let a = cache.rank(&five("AD 8H 9C TC 5C"));
        let b = cache.rank(&five("5C TC 9C 8H AD"));

        assert_eq!(a, b);
        assert_eq!(1, cache.len());
        assert_eq!(1, cache.misses());
        assert_eq!(1, cache.hits());
    }

    #[test]
    fn test_matches_rank() {
        let hand: Hand = "2C 2D 9H 9S KD KC 4H".parse().unwrap();
        let mut cache = RankCache::new();
        for cards in CardIter::<5>::new(&hand[..]) {
            assert_eq!(cards.rank(), cache.rank(&cards));
        }
        assert_eq!(21, cache.len());
        assert_eq!(0, cache.hits());
    }

    #[test]
    fn test_clear() {
        let mut cache = RankCache::new();
        assert!(cache.is_empty());

        cache.rank(&five("7C 7D 7H 7S JD"));
        cache.rank(&five("7C 7D 7H 7S JD"));
        assert!(!cache.is_empty());

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(0, cache.hits());
        assert_eq!(0, cache.misses());
    }
}
