//! Property-based tests for comparator composition and sorting.

use std::cmp::Ordering;

use fluent_sort::{
    compose_sort, negate, selector_to_comparator, sort_in_place, sorted_copy, wrap,
    wrap_in_place, Comparator, Dir, RuleSet, Selector, SortBuilder,
};
use proptest::prelude::*;
use serde_json::{json, Value as Json};

type Row = (i8, i8, i8);

fn dir_strategy() -> impl Strategy<Value = Dir> {
    prop_oneof![Just(Dir::Asc), Just(Dir::Desc)]
}

fn rows_strategy() -> impl Strategy<Value = Vec<Row>> {
    // Small ranges so ties on the leading columns are common
    prop::collection::vec((0i8..4, 0i8..4, any::<i8>()), 0..40)
}

fn column(index: usize) -> Comparator<Row> {
    Comparator::by_key(move |row: &Row| match index {
        0 => row.0,
        1 => row.1,
        _ => row.2,
    })
}

fn rules_for(dirs: &[Dir]) -> RuleSet<Row> {
    let mut rules = RuleSet::new();
    for (index, dir) in dirs.iter().enumerate() {
        rules.push_with_dir(column(index), *dir);
    }
    rules
}

fn manual_compare(a: &Row, b: &Row, dirs: &[Dir]) -> Ordering {
    let columns = [(a.0, b.0), (a.1, b.1), (a.2, b.2)];
    for ((left, right), dir) in columns.iter().zip(dirs) {
        let ordering = dir.apply(left.cmp(right));
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

proptest! {
    #[test]
    fn composition_returns_first_non_tie(
        a in (0i8..4, 0i8..4, any::<i8>()),
        b in (0i8..4, 0i8..4, any::<i8>()),
        dirs in prop::collection::vec(dir_strategy(), 1..=3),
    ) {
        let composed = rules_for(&dirs).compose().unwrap();
        prop_assert_eq!(composed.compare(&a, &b), manual_compare(&a, &b, &dirs));
    }

    #[test]
    fn composition_of_one_equals_that_rule(a in any::<i64>(), b in any::<i64>()) {
        let rule = Comparator::by_key(|n: &i64| *n);
        let composed = compose_sort(std::slice::from_ref(&rule)).unwrap();
        prop_assert_eq!(composed.compare(&a, &b), rule.compare(&a, &b));
    }

    #[test]
    fn negation_reverses(a in any::<i64>(), b in any::<i64>()) {
        let rule = Comparator::by_key(|n: &i64| *n);
        let negated = negate(&rule);
        prop_assert_eq!(negated.compare(&a, &b), rule.compare(&a, &b).reverse());
        prop_assert_eq!(negate(&negated).compare(&a, &b), rule.compare(&a, &b));
    }

    #[test]
    fn path_selector_matches_manual_compare(
        a in -1.0e6f64..1.0e6,
        b in -1.0e6f64..1.0e6,
    ) {
        let left = json!({"stats": {"agility": a}});
        let right = json!({"stats": {"agility": b}});

        let by_path = selector_to_comparator(Selector::path("stats.agility").unwrap());
        let by_key = selector_to_comparator(Selector::key(|r: &Json| r["stats"]["agility"].as_f64()));

        let expected = a.partial_cmp(&b).unwrap();
        prop_assert_eq!(by_path.compare(&left, &right), expected);
        prop_assert_eq!(by_key.compare(&left, &right), expected);
    }

    #[test]
    fn sorted_copy_is_ordered_permutation(
        rows in rows_strategy(),
        dirs in prop::collection::vec(dir_strategy(), 1..=3),
    ) {
        let sorted = sorted_copy(&rows, &rules_for(&dirs)).unwrap();

        for pair in sorted.windows(2) {
            prop_assert_ne!(manual_compare(&pair[0], &pair[1], &dirs), Ordering::Greater);
        }

        let mut expected = rows.clone();
        let mut actual = sorted.clone();
        expected.sort();
        actual.sort();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn sorting_is_stable(rows in rows_strategy(), dir in dir_strategy()) {
        let indexed: Vec<(Row, usize)> = rows.into_iter().zip(0..).collect();
        let mut rules = RuleSet::new();
        rules.push_with_dir(Comparator::by_key(|entry: &(Row, usize)| entry.0 .0), dir);

        let sorted = sorted_copy(&indexed, &rules).unwrap();
        for pair in sorted.windows(2) {
            if pair[0].0 .0 == pair[1].0 .0 {
                prop_assert!(pair[0].1 < pair[1].1);
            }
        }
    }

    #[test]
    fn resorting_is_idempotent(
        rows in rows_strategy(),
        dirs in prop::collection::vec(dir_strategy(), 1..=3),
    ) {
        let rules = rules_for(&dirs);
        let once = sorted_copy(&rows, &rules).unwrap();
        let mut twice = once.clone();
        sort_in_place(&mut twice, &rules).unwrap();
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn in_place_and_persistent_agree(
        rows in rows_strategy(),
        first in dir_strategy(),
        second in dir_strategy(),
    ) {
        let persistent = wrap(rows.clone())
            .sort_by(|r: &Row| r.0, first)
            .then_by(|r: &Row| r.1, second)
            .unwrap()
            .sorted_result()
            .unwrap();

        let mut data = rows;
        wrap_in_place(&mut data)
            .sort_by(|r: &Row| r.0, first)
            .then_by(|r: &Row| r.1, second)
            .unwrap()
            .execute_sort()
            .unwrap();

        prop_assert_eq!(data, persistent);
    }

    #[test]
    fn persistent_wrappers_never_change(
        rows in rows_strategy(),
        dir in dir_strategy(),
    ) {
        let base = wrap(rows.clone());
        let sorted = base.sort_by(|r: &Row| r.2, dir);
        let extended = sorted.then_by(|r: &Row| r.0, dir).unwrap();

        let _ = extended.sorted_result().unwrap();
        let _ = sorted.sorted_result().unwrap();

        prop_assert_eq!(base.as_slice(), rows.as_slice());
        prop_assert_eq!(sorted.as_slice(), rows.as_slice());
        prop_assert_eq!(extended.as_slice(), rows.as_slice());
        prop_assert!(!base.is_configured());
        prop_assert_eq!(sorted.rules().map(RuleSet::len), Some(1));
        prop_assert_eq!(extended.rules().map(RuleSet::len), Some(2));
    }
}
