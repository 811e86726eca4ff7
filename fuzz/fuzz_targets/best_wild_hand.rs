#![no_main]
use std::str;

use joker_poker::core::{Hand, PokerError, Rankable, WildHand};
use joker_poker::holdem::{BestHand, HAND_SIZE, MAX_JOKERS, RankCache};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = str::from_utf8(data) else {
        return;
    };
    let Ok(wild) = s.parse::<WildHand>() else {
        return;
    };
    if wild.len() != HAND_SIZE {
        return;
    }
    if wild.jokers() > MAX_JOKERS {
        assert_eq!(
            PokerError::TooManyJokers(wild.jokers()),
            BestHand::from_wild_hand(&wild).unwrap_err()
        );
        return;
    }

    let best = BestHand::from_wild_hand(&wild).unwrap();
    assert_eq!(best.rank, best.cards.rank());

    let mut cache = RankCache::new();
    assert_eq!(best, BestHand::from_wild_hand_cached(&wild, &mut cache).unwrap());

    // Without jokers the wild search has to agree with the plain one.
    if wild.jokers() == 0 {
        let hand: Hand = s.parse().unwrap();
        assert_eq!(best, BestHand::from_hand(&hand).unwrap());
    }
});
