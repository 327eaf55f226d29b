//! Mode finding over a sequence, built on the chaining map.

use crate::ChainedHashMap;
use std::hash::Hash;

/// Returns the most frequent elements of `values` together with their
/// occurrence count.
///
/// The returned vector holds every element tied for the highest count, so a
/// multi-modal input yields more than one element. An empty input yields an
/// empty vector and a count of 0.
///
/// Internally this builds an occurrence-count map with roughly one bucket
/// per three input elements, a heuristic balancing chain length against
/// memory, then takes two passes over the distinct keys: one to find the
/// maximum count and one to collect the keys that reach it. Overall cost is
/// O(n) amortized.
pub fn find_mode<T>(values: &[T]) -> (Vec<T>, usize)
where
    T: Hash + Eq + Clone,
{
    let mut counts = ChainedHashMap::with_capacity(values.len() / 3);
    for value in values {
        counts.put_mode(value.clone());
    }

    let keys = counts.get_keys();

    let mut mode_count = 0;
    for key in &keys {
        if let Some(&count) = counts.get(key) {
            mode_count = mode_count.max(count);
        }
    }

    let mut modes = Vec::new();
    for key in keys {
        if counts.get(&key) == Some(&mode_count) {
            modes.push(key);
        }
    }

    (modes, mode_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_with_ties() {
        let values = ["apple", "apple", "grape", "melon", "melon", "peach"];
        let (mut modes, count) = find_mode(&values);
        modes.sort_unstable();

        assert_eq!(modes, ["apple", "melon"]);
        assert_eq!(count, 2);
    }

    #[test]
    fn test_single_mode() {
        let values = [3, 1, 3, 2, 3, 2];
        let (modes, count) = find_mode(&values);

        assert_eq!(modes, [3]);
        assert_eq!(count, 3);
    }

    #[test]
    fn test_all_distinct_elements_tie() {
        let values = ["x".to_string(), "y".to_string(), "z".to_string()];
        let (mut modes, count) = find_mode(&values);
        modes.sort_unstable();

        assert_eq!(modes, values);
        assert_eq!(count, 1);
    }

    #[test]
    fn test_empty_input() {
        let values: Vec<i32> = Vec::new();
        let (modes, count) = find_mode(&values);

        assert!(modes.is_empty());
        assert_eq!(count, 0);
    }
}
