//! Sort executors.
//!
//! Both executors compose the rule set first, so an empty rule set fails
//! before any element is touched. Sorting itself is `slice::sort_by`, which is
//! stable: elements that tie on every rule keep their relative order.

use crate::error::Result;
use crate::rules::RuleSet;

/// Sorts `data` in place.
pub fn sort_in_place<T: 'static>(data: &mut [T], rules: &RuleSet<T>) -> Result<()> {
    let comparator = rules.compose()?;
    log::debug!(
        "sorting {} elements in place with {} rules",
        data.len(),
        rules.len()
    );
    data.sort_by(comparator.as_fn());
    Ok(())
}

/// Returns a sorted copy of `data`, leaving `data` untouched.
pub fn sorted_copy<T: Clone + 'static>(data: &[T], rules: &RuleSet<T>) -> Result<Vec<T>> {
    let comparator = rules.compose()?;
    log::debug!(
        "sorting a copy of {} elements with {} rules",
        data.len(),
        rules.len()
    );
    let mut copy = data.to_vec();
    copy.sort_by(comparator.as_fn());
    Ok(copy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparator::Comparator;
    use crate::error::SortError;

    fn by_first() -> Comparator<(i32, char)> {
        Comparator::by_key(|p: &(i32, char)| p.0)
    }

    #[test]
    fn in_place_sorts_and_is_stable() {
        let mut data = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        sort_in_place(&mut data, &RuleSet::single(by_first())).unwrap();
        assert_eq!(data, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    fn copy_leaves_input_alone() {
        let data = vec![(3, 'x'), (1, 'y')];
        let sorted = sorted_copy(&data, &RuleSet::single(by_first())).unwrap();
        assert_eq!(sorted, vec![(1, 'y'), (3, 'x')]);
        assert_eq!(data, vec![(3, 'x'), (1, 'y')]);
    }

    #[test]
    fn empty_rules_fail_without_touching_data() {
        let mut data = vec![(3, 'x'), (1, 'y')];
        let rules = RuleSet::new();
        assert_eq!(
            sort_in_place(&mut data, &rules).unwrap_err(),
            SortError::EmptyRuleSet
        );
        assert_eq!(data, vec![(3, 'x'), (1, 'y')]);
        assert_eq!(sorted_copy(&data, &rules).unwrap_err(), SortError::EmptyRuleSet);
    }

    #[test]
    fn empty_data_sorts_fine() {
        let mut data: Vec<(i32, char)> = Vec::new();
        sort_in_place(&mut data, &RuleSet::single(by_first())).unwrap();
        assert!(data.is_empty());
    }
}
