use crate::OrderedMap;
use itertools::Itertools;
use std::cmp::Ordering;
use std::hash::Hash;

// All sorts are stable and keep the original keys.
impl<K: Hash + Eq + Clone, V: Clone> OrderedMap<K, V> {
    fn sorted_entries(&self, mut cmp: impl FnMut((&K, &V), (&K, &V)) -> Ordering) -> Self {
        self.iter()
            .sorted_by(|a, b| cmp(*a, *b))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub fn sort(&self) -> Self
    where
        V: Ord,
    {
        self.sorted_entries(|(_, a), (_, b)| a.cmp(b))
    }

    pub fn sort_desc(&self) -> Self
    where
        V: Ord,
    {
        self.sorted_entries(|(_, a), (_, b)| b.cmp(a))
    }

    /// Sorts with a custom comparator, e.g. for floats.
    pub fn sort_with(&self, mut cmp: impl FnMut(&V, &V) -> Ordering) -> Self {
        self.sorted_entries(|(_, a), (_, b)| cmp(a, b))
    }

    /// Sorts by the key `f` extracts from each entry.
    pub fn sort_by<O: Ord>(&self, mut f: impl FnMut(&V, &K) -> O) -> Self {
        self.sorted_entries(|(ka, a), (kb, b)| f(a, ka).cmp(&f(b, kb)))
    }

    pub fn sort_by_desc<O: Ord>(&self, mut f: impl FnMut(&V, &K) -> O) -> Self {
        self.sorted_entries(|(ka, a), (kb, b)| f(b, kb).cmp(&f(a, ka)))
    }

    pub fn sort_keys(&self) -> Self
    where
        K: Ord,
    {
        self.sorted_entries(|(a, _), (b, _)| a.cmp(b))
    }

    pub fn sort_keys_desc(&self) -> Self
    where
        K: Ord,
    {
        self.sorted_entries(|(a, _), (b, _)| b.cmp(a))
    }

    pub fn reverse(&self) -> Self {
        self.iter()
            .rev()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::{collect, OrderedMap};
    use itertools::Itertools;

    #[test]
    fn sort_ascending_and_descending() {
        let c = collect([1, 3, 2, 4, 6, 5, 8, 7, 9]);
        assert_eq!(c.sort().to_values(), (1..=9).collect_vec());
        assert_eq!(c.sort_desc().to_values(), (1..=9).rev().collect_vec());
        // source untouched
        assert_eq!(c.to_values(), vec![1, 3, 2, 4, 6, 5, 8, 7, 9]);
    }

    #[test]
    fn sort_keeps_keys() {
        let sorted = collect([30, 10, 20]).sort();
        assert_eq!(sorted.all(), vec![(1, 10), (2, 20), (0, 30)]);
    }

    #[test]
    fn sort_by_is_stable() {
        let c = collect([("b", 1), ("a", 2), ("c", 1), ("d", 2)]);
        let by_rank = c.sort_by(|(_, rank), _| *rank);
        assert_eq!(
            by_rank.values().map(|(name, _)| *name).collect_vec(),
            vec!["b", "c", "a", "d"]
        );
        let by_rank_desc = c.sort_by_desc(|(_, rank), _| *rank);
        assert_eq!(
            by_rank_desc.values().map(|(name, _)| *name).collect_vec(),
            vec!["a", "d", "b", "c"]
        );
    }

    #[test]
    fn sort_desc_is_stable() {
        let c = OrderedMap::from_pairs([("x", 1), ("y", 2), ("z", 1)]);
        assert_eq!(c.sort_desc().keys().copied().collect_vec(), vec!["y", "x", "z"]);
    }

    #[test]
    fn sort_floats_with_comparator() {
        let c = collect([2.5f64, -1.0, 0.5]);
        let sorted = c.sort_with(|a, b| a.total_cmp(b));
        assert_eq!(sorted.to_values(), vec![-1.0, 0.5, 2.5]);
    }

    #[test]
    fn sort_keys_both_ways() {
        let c = OrderedMap::from_pairs([("b", 2), ("c", 3), ("a", 1)]);
        assert_eq!(c.sort_keys().keys().copied().collect_vec(), vec!["a", "b", "c"]);
        assert_eq!(c.sort_keys_desc().keys().copied().collect_vec(), vec!["c", "b", "a"]);
    }

    #[test]
    fn reverse_keeps_keys() {
        assert_eq!(collect([1, 2, 3]).reverse().all(), vec![(2, 3), (1, 2), (0, 1)]);
    }
}
