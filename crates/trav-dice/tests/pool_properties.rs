//! Property tests for rolling, modifiers and sums.

use proptest::prelude::*;
use trav_dice::{DiceError, DicePool, Modifier, RollOption, SIDES, mods, treat_as};

proptest! {
    #[test]
    fn roll_length_and_face_range(seed in any::<u64>(), count in 0i32..200) {
        let mut pool = DicePool::with_seed(seed);
        pool.roll(count, &[]).unwrap();
        prop_assert_eq!(pool.len(), count as usize);
        prop_assert!(pool.results().iter().all(|f| (1..=SIDES).contains(f)));
    }

    #[test]
    fn same_seed_same_rolls(seed in any::<u64>(), counts in prop::collection::vec(0i32..20, 1..8)) {
        let mut a = DicePool::with_seed(seed);
        let mut b = DicePool::with_seed(seed);
        for count in counts {
            a.roll(count, &[]).unwrap();
            b.roll(count, &[]).unwrap();
            prop_assert_eq!(a.results(), b.results());
        }
    }

    #[test]
    fn mods_append_exactly(seed in any::<u64>(), count in 0i32..10, extra in prop::collection::vec(-20i32..20, 0..6)) {
        let mut pool = DicePool::with_seed(seed);
        pool.roll(count, &[&mods(extra.clone())]).unwrap();
        let dice = count as usize;
        prop_assert_eq!(pool.len(), dice + extra.len());
        prop_assert_eq!(&pool.results()[dice..], extra.as_slice());
    }

    #[test]
    fn sum_equals_total_and_is_stable(seed in any::<u64>(), count in 0i32..50) {
        let mut pool = DicePool::with_seed(seed);
        let first = pool.roll(count, &[]).unwrap().sum();
        let total: i64 = pool.results().iter().map(|&v| i64::from(v)).sum();
        prop_assert_eq!(first, total);
        prop_assert_eq!(pool.sum(), first);
    }

    #[test]
    fn treat_as_leaves_no_source_value(seed in any::<u64>(), count in 0i32..30, from in 1i32..=6, to in 7i32..100) {
        let mut pool = DicePool::with_seed(seed);
        pool.roll(count, &[&treat_as(from, to)]).unwrap();
        prop_assert!(!pool.results().contains(&from));
        prop_assert_eq!(pool.len(), count as usize);
    }

    #[test]
    fn negative_counts_are_rejected(seed in any::<u64>(), count in i32::MIN..0) {
        let mut pool = DicePool::with_seed(seed);
        let err = pool.roll(count, &[]).unwrap_err();
        prop_assert!(matches!(err, DiceError::InvalidArgument(_)));
        prop_assert!(pool.is_empty());
    }

    #[test]
    fn parsed_modifiers_match_constructors(values in prop::collection::vec(-99i32..99, 1..5)) {
        let token = values
            .iter()
            .map(|v| format!("{v:+}"))
            .collect::<Vec<_>>()
            .join(",");
        prop_assert_eq!(token.parse::<Modifier>().unwrap(), mods(values));
    }
}

#[test]
fn closure_modifiers_compose_in_order() {
    let push_seven = |p: &mut DicePool| p.results_mut().push(7);
    let seven_to_zero = treat_as(7, 0);

    let mut before = DicePool::with_seed(5);
    before.roll(3, &[&seven_to_zero, &push_seven]).unwrap();
    let mut after = DicePool::with_seed(5);
    after.roll(3, &[&push_seven, &seven_to_zero]).unwrap();

    assert_eq!(before.results()[3], 7);
    assert_eq!(after.results()[3], 0);
    assert_eq!(&before.results()[..3], &after.results()[..3]);
}

#[test]
fn options_can_be_collected_at_runtime() {
    let parsed: Vec<Modifier> = ["+2", "1=6"].iter().map(|t| t.parse().unwrap()).collect();
    let options: Vec<&dyn RollOption> = parsed.iter().map(|m| m as &dyn RollOption).collect();

    let mut pool = DicePool::with_seed(9);
    pool.roll(2, &options).unwrap();
    assert_eq!(pool.len(), 3);
    assert_eq!(pool.results()[2], 2);
    assert!(!pool.results().contains(&1));
}
