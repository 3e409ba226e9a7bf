use crate::error::{CollectionError, Result};
use collection_traits::{HasLength, IntoValues, Positional};
use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};
use std::hash::Hash;
use std::ops::{ControlFlow, Index};
use utils::map::{order_map_with_capacity, OrderMap};

mod aggregate;
mod ordering;
mod query;
mod serde_impl;
mod slicing;
mod transform;

/// Insertion-ordered mapping from keys to values.
///
/// Transformations borrow the map and return a new one; only [push],
/// [push_many], [pop], [prepend], [pull] and [put] modify the map in place.
/// The mutating methods take `&mut self`, so sharing a map across threads
/// requires external synchronization.
///
/// Values created without explicit keys get positional keys, see
/// [Positional]. Filtering and slicing keep the original keys, which leaves
/// holes in positional maps.
///
/// [push]: OrderedMap::push
/// [push_many]: OrderedMap::push_many
/// [pop]: OrderedMap::pop
/// [prepend]: OrderedMap::prepend
/// [pull]: OrderedMap::pull
/// [put]: OrderedMap::put
#[derive(Clone)]
pub struct OrderedMap<K, V> {
    entries: OrderMap<K, V>,
    /// Key position for the next [push](OrderedMap::push), `None` when it
    /// has to be recomputed from the keys.
    next_position: Option<usize>,
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::from_entries(OrderMap::default())
    }
}

impl<K, V> OrderedMap<K, V> {
    fn from_entries(entries: OrderMap<K, V>) -> Self {
        Self {
            entries,
            next_position: None,
        }
    }
}

impl<V> OrderedMap<usize, V> {
    /// Creates a map with positional keys `0..n`.
    pub fn from_values(values: impl IntoIterator<Item = V>) -> Self {
        values.into_iter().enumerate().collect()
    }
}

impl<K: Hash + Eq, V> OrderedMap<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_entries(order_map_with_capacity(capacity))
    }

    /// Creates a map from key-value pairs. Later duplicates overwrite the
    /// value but keep the position of the first occurrence.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (K, V)>) -> Self {
        pairs.into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_not_empty(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn contains_one_item(&self) -> bool {
        self.entries.len() == 1
    }

    /// Snapshot of all entries in iteration order.
    pub fn all(&self) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&K, &V)> + ExactSizeIterator {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator {
        self.entries.keys()
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator {
        self.entries.values()
    }

    pub fn to_values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.values().cloned().collect()
    }

    pub fn keys_vec(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.keys().cloned().collect()
    }

    pub fn into_values(self) -> Vec<V> {
        self.entries.into_iter().map(|(_, v)| v).collect()
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn get_index(&self, index: usize) -> Option<(&K, &V)> {
        self.entries.get_index(index)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Sets the value for `key`. An existing key keeps its position.
    pub fn put(&mut self, key: K, value: V) {
        self.next_position = None;
        self.entries.insert(key, value);
    }

    /// Removes and returns the value stored under `key`.
    pub fn pull(&mut self, key: &K) -> Result<V>
    where
        K: Debug,
    {
        self.next_position = None;
        self.entries
            .remove(key)
            .ok_or_else(|| CollectionError::key_not_found(key))
    }

    /// Removes and returns the value stored under `key`, or `default` if the
    /// key is absent.
    pub fn pull_or(&mut self, key: &K, default: V) -> V {
        self.next_position = None;
        self.entries.remove(key).unwrap_or(default)
    }

    /// Removes and returns the last entry.
    pub fn pop(&mut self) -> Result<(K, V)> {
        self.next_position = None;
        self.entries.pop().ok_or(CollectionError::empty("pop"))
    }

    /// Calls `f` for each entry until it breaks.
    pub fn each(&self, mut f: impl FnMut(&V, &K) -> ControlFlow<()>) -> &Self {
        for (k, v) in self.iter() {
            if f(v, k).is_break() {
                break;
            }
        }
        self
    }
}

fn position_key<K: Positional>(position: usize) -> Result<K> {
    K::from_position(position).ok_or_else(|| {
        CollectionError::InvalidArgument(format!(
            "position {} does not fit in the key type",
            position
        ))
    })
}

impl<K: Positional + Hash + Eq, V> OrderedMap<K, V> {
    /// Appends a value under the next free positional key.
    ///
    /// Fails without modifying the map when the key type has no room for
    /// another position.
    pub fn push(&mut self, value: V) -> Result<()> {
        let position = self.next_position()?;
        self.entries.insert(position_key(position)?, value);
        self.next_position = position.checked_add(1);
        Ok(())
    }

    /// Appends every value under consecutive positional keys. An empty
    /// iterator leaves the map untouched, and so does running out of
    /// positions.
    pub fn push_many(&mut self, values: impl IntoIterator<Item = V>) -> Result<()> {
        let start = self.next_position()?;
        let entries: Vec<(K, V)> = values
            .into_iter()
            .enumerate()
            .map(|(offset, value)| {
                let position = start.checked_add(offset).ok_or_else(|| {
                    CollectionError::InvalidArgument("positions exhausted".to_string())
                })?;
                Ok((position_key(position)?, value))
            })
            .collect::<Result<_>>()?;
        let next = start.checked_add(entries.len());
        self.entries.extend(entries);
        self.next_position = next;
        Ok(())
    }

    /// Inserts a value at the front. Positional keys are renumbered from zero;
    /// explicit keys are kept.
    pub fn prepend(&mut self, value: V) -> Result<()> {
        let first = position_key(0)?;
        let mut position = 1;
        let mut renumbered: Vec<Option<K>> = Vec::with_capacity(self.entries.len());
        for key in self.entries.keys() {
            if key.position().is_some() {
                renumbered.push(Some(position_key(position)?));
                position += 1;
            } else {
                renumbered.push(None);
            }
        }

        let old = std::mem::take(&mut self.entries);
        let mut entries = order_map_with_capacity(old.len() + 1);
        entries.insert(first, value);
        for ((key, value), new_key) in old.into_iter().zip(renumbered) {
            entries.insert(new_key.unwrap_or(key), value);
        }
        self.entries = entries;
        self.next_position = Some(position);
        Ok(())
    }

    fn next_position(&mut self) -> Result<usize> {
        if let Some(position) = self.next_position {
            return Ok(position);
        }
        match self.entries.keys().filter_map(Positional::position).max() {
            None => Ok(0),
            Some(max) => max.checked_add(1).ok_or_else(|| {
                CollectionError::InvalidArgument("positions exhausted".to_string())
            }),
        }
    }
}

impl<K: Hash + Eq, V> OrderedMap<K, V> {
    /// Inserts a value under an explicit key at the front, moving the key
    /// there if it was already present.
    pub fn prepend_with_key(&mut self, key: K, value: V) {
        let old = std::mem::take(&mut self.entries);
        let mut entries = order_map_with_capacity(old.len() + 1);
        entries.insert(key, value);
        self.next_position = None;
        for (k, v) in old {
            if !entries.contains_key(&k) {
                entries.insert(k, v);
            }
        }
        self.entries = entries;
    }
}

/// Creates a positional map from any sequence of values.
pub fn collect<V>(values: impl IntoIterator<Item = V>) -> OrderedMap<usize, V> {
    OrderedMap::from_values(values)
}

impl<K: Debug, V: Debug> Debug for OrderedMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for OrderedMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len() && self.entries.iter().eq(other.entries.iter())
    }
}

impl<K: Eq, V: Eq> Eq for OrderedMap<K, V> {}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self::from_entries(iter.into_iter().collect())
    }
}

impl<K: Hash + Eq, V> Extend<(K, V)> for OrderedMap<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        self.next_position = None;
        self.entries.extend(iter);
    }
}

impl<V> From<Vec<V>> for OrderedMap<usize, V> {
    fn from(values: Vec<V>) -> Self {
        Self::from_values(values)
    }
}

impl<const N: usize, V> From<[V; N]> for OrderedMap<usize, V> {
    fn from(values: [V; N]) -> Self {
        Self::from_values(values)
    }
}

impl<K: Hash + Eq, V> From<BTreeMap<K, V>> for OrderedMap<K, V> {
    fn from(map: BTreeMap<K, V>) -> Self {
        map.into_iter().collect()
    }
}

#[allow(clippy::disallowed_types)]
impl<K: Hash + Eq, V, S> From<std::collections::HashMap<K, V, S>> for OrderedMap<K, V> {
    fn from(map: std::collections::HashMap<K, V, S>) -> Self {
        map.into_iter().collect()
    }
}

impl<K, V> IntoIterator for OrderedMap<K, V> {
    type Item = (K, V);
    type IntoIter = ordermap::map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = ordermap::map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: Hash + Eq, V> IntoValues for OrderedMap<K, V> {
    type Value = V;
    type Values = std::vec::IntoIter<V>;

    fn into_value_iter(self) -> Self::Values {
        self.into_values().into_iter()
    }
}

impl<'a, K, V: Clone> IntoValues for &'a OrderedMap<K, V> {
    type Value = V;
    type Values = std::iter::Cloned<ordermap::map::Values<'a, K, V>>;

    fn into_value_iter(self) -> Self::Values {
        self.entries.values().cloned()
    }
}

impl<K: Hash + Eq, V> Index<&K> for OrderedMap<K, V> {
    type Output = V;

    fn index(&self, key: &K) -> &V {
        &self.entries[key]
    }
}

impl<K: Hash + Eq, V> HasLength for OrderedMap<K, V> {
    fn len(&self) -> usize {
        self.entries.len()
    }
}
