//! Property-based tests for level generation, shuffling and matching.

use facematch_core::{
    attempt, normalize_level, shuffled_indices, Attribute, AttemptOutcome, Combination,
    LevelGenerator, ScriptedRng, SimpleRng, Solution, ValueIndex, NUM_LEVELS,
};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_value()(i in 0..4i64) -> ValueIndex {
        ValueIndex::new(i).unwrap()
    }
}

prop_compose! {
    fn arbitrary_solution()(
        shape in arbitrary_value(),
        color in arbitrary_value(),
        expression in arbitrary_value(),
    ) -> Solution {
        Solution::new(shape, color, expression)
    }
}

proptest! {
    #[test]
    fn normalize_is_in_range_and_idempotent(requested in any::<i64>()) {
        let level = normalize_level(requested);
        prop_assert!(level < NUM_LEVELS);
        prop_assert_eq!(normalize_level(level as i64), level);
    }

    #[test]
    fn normalize_agrees_with_euclid(requested in -1000i64..1000) {
        prop_assert_eq!(normalize_level(requested) as i64, requested.rem_euclid(NUM_LEVELS as i64));
    }

    #[test]
    fn levels_respect_value_set_invariants(seed in any::<u64>(), requested in -20i64..20) {
        let level = LevelGenerator::with_seed(seed).generate(requested);
        prop_assert!(level.validate().is_ok());

        for attribute in Attribute::ALL {
            let set = level.value_set(attribute);
            prop_assert!((1..=4).contains(&set.len()));
            let mut sorted: Vec<u8> = set.iter().map(|v| v.get()).collect();
            sorted.sort_unstable();
            sorted.dedup();
            prop_assert_eq!(sorted.len(), set.len());
            prop_assert!(sorted.iter().all(|v| *v < 4));

            for solution in level.solutions() {
                prop_assert!(set.contains(&solution.get(attribute)));
            }
        }
    }

    #[test]
    fn scripted_levels_are_valid(draws in prop::collection::vec(0usize..16, 1..40), requested in 0i64..7) {
        let level = LevelGenerator::with_rng(ScriptedRng::new(draws)).generate(requested);
        prop_assert!(level.validate().is_ok());
    }

    #[test]
    fn derangement_has_no_fixed_point(seed in any::<u64>(), n in 2usize..40) {
        let mut rng = SimpleRng::with_seed(seed);
        for _ in 0..20 {
            let result = shuffled_indices(&mut rng, n, true);
            for (i, value) in result.iter().enumerate() {
                prop_assert_ne!(i, *value);
            }
        }
    }

    #[test]
    fn shuffle_is_a_permutation(seed in any::<u64>(), n in 0usize..40, derange in any::<bool>()) {
        let mut rng = SimpleRng::with_seed(seed);
        let mut result = shuffled_indices(&mut rng, n, derange);
        result.sort_unstable();
        prop_assert_eq!(result, (0..n).collect::<Vec<_>>());
    }

    #[test]
    fn empty_combination_never_matches(solution in arbitrary_solution()) {
        prop_assert_eq!(attempt(&Combination::new(), &solution), AttemptOutcome::Mismatched);
    }

    #[test]
    fn solution_matches_itself(solution in arbitrary_solution()) {
        prop_assert_eq!(attempt(&Combination::from(solution), &solution), AttemptOutcome::Matched);
    }

    #[test]
    fn different_triples_never_match(a in arbitrary_solution(), b in arbitrary_solution()) {
        let expected = if a == b { AttemptOutcome::Matched } else { AttemptOutcome::Mismatched };
        prop_assert_eq!(attempt(&Combination::from(a), &b), expected);
    }
}
