use itertools::Itertools;
use proptest::prelude::*;

use yahtzee_odds::{decide, score, Category, MatrixPowerCache, ProbabilityEngine};

fn hand() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(1u8..=6, 5)
}

fn faces(len: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(1u8..=6, len)
}

/// A turn in progress: rolled dice plus whatever was set aside. Mostly five in total,
/// but a full roll on top of withheld dice is accepted too.
fn split_hand() -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
    prop_oneof![
        (hand(), 1usize..=5).prop_map(|(dice, rolled)| {
            (dice[..rolled].to_vec(), dice[rolled..].to_vec())
        }),
        (hand(), faces(0..=5)),
        (faces(1..=5), faces(0..=5)),
    ]
}

fn category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig { max_global_rejects: 65536, ..ProptestConfig::default() })]

    #[test]
    fn probabilities_stay_in_unit_interval(dice in hand(), c in category(), rolls in 0u32..=2) {
        let cache = MatrixPowerCache::shared();
        let p = ProbabilityEngine::new(cache).category_probability(c, &dice, rolls);
        prop_assert!((0.0..=1.0).contains(&p), "{} {:?} r={} -> {}", c, dice, rolls, p);
    }

    #[test]
    fn satisfied_lower_boxes_are_certain(dice in hand(), c in category(), rolls in 0u32..=2) {
        prop_assume!(!c.is_upper());
        prop_assume!(score(c, &dice).unwrap() > 0);
        let cache = MatrixPowerCache::shared();
        let p = ProbabilityEngine::new(cache).category_probability(c, &dice, rolls);
        prop_assert!((p - 1.0).abs() < 1e-12, "{} {:?} -> {}", c, dice, p);
    }

    #[test]
    fn run_reach_never_shrinks_with_more_rolls(
        dice in hand(),
        face in 1u8..=6,
        target in 0usize..5,
    ) {
        let cache = MatrixPowerCache::shared();
        let probs = ProbabilityEngine::new(cache);
        let p = (0..=3)
            .map(|r| probs.run_reach_probability(&dice, face, target, r))
            .collect_vec();
        prop_assert!(p.windows(2).all(|w| w[0] <= w[1] + 1e-12), "{:?}", p);
    }

    #[test]
    fn keep_partitions_the_roll((rolled, withheld) in split_hand(), c in category()) {
        let d = decide(&rolled, &withheld, c).unwrap();
        prop_assert_eq!(&d.withheld[..withheld.len()], &withheld[..]);
        prop_assert_eq!(d.withheld.len() + d.reroll.len(), rolled.len() + withheld.len());

        let before = rolled.iter().chain(&withheld).copied().sorted().collect_vec();
        let after = d.withheld.iter().chain(&d.reroll).copied().sorted().collect_vec();
        prop_assert_eq!(before, after);

        // rerolled dice keep their roll order
        let mut rest = rolled.iter();
        prop_assert!(d.reroll.iter().all(|r| rest.any(|x| x == r)));
    }

    #[test]
    fn keep_is_deterministic((rolled, withheld) in split_hand(), c in category()) {
        let first = decide(&rolled, &withheld, c).unwrap();
        prop_assert_eq!(first, decide(&rolled, &withheld, c).unwrap());
    }
}
