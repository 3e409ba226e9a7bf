use crate::error::{CollectionError, Result};
use crate::OrderedMap;
use collection_traits::{AsKey, Fields, Key};
use std::hash::Hash;

impl<K: Hash + Eq, V> OrderedMap<K, V> {
    /// Keeps the entries for which `f` returns `true`. Keys are not
    /// renumbered.
    pub fn filter(&self, mut f: impl FnMut(&V, &K) -> bool) -> Self
    where
        K: Clone,
        V: Clone,
    {
        self.iter()
            .filter(|&(k, v)| f(v, k))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Inverse of [filter](OrderedMap::filter).
    pub fn reject(&self, mut f: impl FnMut(&V, &K) -> bool) -> Self
    where
        K: Clone,
        V: Clone,
    {
        self.filter(|v, k| !f(v, k))
    }

    /// Splits into `(matching, rest)`, both keeping the original keys.
    pub fn partition(&self, mut f: impl FnMut(&V, &K) -> bool) -> (Self, Self)
    where
        K: Clone,
        V: Clone,
    {
        let mut matching = Self::new();
        let mut rest = Self::new();
        for (k, v) in self.iter() {
            let side = if f(v, k) { &mut matching } else { &mut rest };
            side.put(k.clone(), v.clone());
        }
        (matching, rest)
    }

    pub fn contains(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.values().any(|v| v == value)
    }

    pub fn contains_by(&self, mut f: impl FnMut(&V, &K) -> bool) -> bool {
        self.iter().any(|(k, v)| f(v, k))
    }

    /// Checks for the exact `key => value` entry.
    pub fn contains_entry(&self, key: &K, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.get(key).is_some_and(|v| v == value)
    }

    /// Checks whether any record has `field` equal to `value`.
    pub fn contains_where<T: ?Sized>(&self, field: &str, value: &T) -> bool
    where
        V: Fields,
        V::Field: PartialEq<T>,
    {
        self.first_where(field, value).is_some()
    }

    /// `true` if every key is present. An empty set of keys is always present.
    pub fn has<'a>(&self, keys: impl IntoIterator<Item = &'a K>) -> bool
    where
        K: 'a,
    {
        keys.into_iter().all(|k| self.contains_key(k))
    }

    pub fn has_any<'a>(&self, keys: impl IntoIterator<Item = &'a K>) -> bool
    where
        K: 'a,
    {
        keys.into_iter().any(|k| self.contains_key(k))
    }

    pub fn first(&self) -> Option<&V> {
        self.values().next()
    }

    pub fn first_by(&self, mut f: impl FnMut(&V, &K) -> bool) -> Option<&V> {
        self.iter().find(|&(k, v)| f(v, k)).map(|(_, v)| v)
    }

    pub fn first_or_fail(&self) -> Result<&V> {
        self.first().ok_or(CollectionError::ItemNotFound)
    }

    pub fn first_or_fail_by(&self, f: impl FnMut(&V, &K) -> bool) -> Result<&V> {
        self.first_by(f).ok_or(CollectionError::ItemNotFound)
    }

    /// First record whose `field` equals `value`.
    pub fn first_where<T: ?Sized>(&self, field: &str, value: &T) -> Option<&V>
    where
        V: Fields,
        V::Field: PartialEq<T>,
    {
        self.values()
            .find(|v| v.field(field).is_some_and(|f| f == value))
    }

    pub fn last(&self) -> Option<&V> {
        self.values().next_back()
    }

    pub fn last_by(&self, mut f: impl FnMut(&V, &K) -> bool) -> Option<&V> {
        self.iter().rev().find(|&(k, v)| f(v, k)).map(|(_, v)| v)
    }

    /// Groups values by the key computed by `f`. Groups appear in the order
    /// their first member was seen; members keep source order.
    pub fn group_by<G>(
        &self,
        mut f: impl FnMut(&V, &K) -> G,
    ) -> OrderedMap<G, OrderedMap<usize, V>>
    where
        G: Hash + Eq,
        V: Clone,
    {
        self.map_to_groups(|v, k| (f(v, k), v.clone()))
    }

    /// Groups records by the value of `field`. Records missing the field are
    /// grouped under an empty name.
    pub fn group_by_field(&self, field: &str) -> OrderedMap<Key, OrderedMap<usize, V>>
    where
        V: Fields + Clone,
        V::Field: AsKey,
    {
        self.group_by(|v, _| {
            v.field(field)
                .map_or_else(|| Key::Name(String::new()), AsKey::as_key)
        })
    }
}
