use crate::error::{CollectionError, Result};
use crate::OrderedMap;
use itertools::Itertools;
use rand::Rng;
use std::hash::Hash;
use std::ops::Range;
use tracing::debug;

/// Resolves `start`/`len` into a clamped index range. Negative `start` counts
/// from the end; negative `len` stops that many entries before the end.
fn slice_range(total: usize, start: isize, len: Option<isize>) -> Range<usize> {
    let from = if start >= 0 {
        start.unsigned_abs().min(total)
    } else {
        total.saturating_sub(start.unsigned_abs())
    };
    let to = match len {
        None => total,
        Some(len) if len >= 0 => from.saturating_add(len.unsigned_abs()).min(total),
        Some(len) => total.saturating_sub(len.unsigned_abs()).max(from),
    };
    from..to
}

impl<K: Hash + Eq + Clone, V: Clone> OrderedMap<K, V> {
    fn cloned_range(&self, range: Range<usize>) -> Self {
        self.iter()
            .skip(range.start)
            .take(range.len())
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Entries from `start`, `len` entries long (or to the end). Keys are
    /// kept. Out-of-range bounds are clamped rather than rejected.
    pub fn slice(&self, start: isize, len: Option<isize>) -> Self {
        let range = slice_range(self.len(), start, len);
        if range.is_empty() && self.is_not_empty() {
            debug!(start, ?len, total = self.len(), "slice clamped to an empty range");
        }
        self.cloned_range(range)
    }

    /// First `n` entries, or the last `-n` entries when `n` is negative.
    pub fn take(&self, n: isize) -> Self {
        if n >= 0 {
            self.slice(0, Some(n))
        } else {
            self.slice(n, None)
        }
    }

    /// Entries before the first one matching `f`.
    pub fn take_until(&self, mut f: impl FnMut(&V, &K) -> bool) -> Self {
        self.take_while(|v, k| !f(v, k))
    }

    pub fn take_while(&self, mut f: impl FnMut(&V, &K) -> bool) -> Self {
        self.iter()
            .take_while(|&(k, v)| f(v, k))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub fn skip(&self, n: usize) -> Self {
        self.cloned_range(n.min(self.len())..self.len())
    }

    /// Entries starting from the first one matching `f`.
    pub fn skip_until(&self, mut f: impl FnMut(&V, &K) -> bool) -> Self {
        self.skip_while(|v, k| !f(v, k))
    }

    pub fn skip_while(&self, mut f: impl FnMut(&V, &K) -> bool) -> Self {
        self.iter()
            .skip_while(|&(k, v)| f(v, k))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Splits into maps of at most `size` entries each, keeping keys.
    pub fn chunk(&self, size: usize) -> Result<Vec<Self>> {
        if size == 0 {
            return Err(CollectionError::InvalidArgument(
                "chunk size must be greater than zero".to_string(),
            ));
        }
        let entries = self.iter().collect_vec();
        Ok(entries
            .chunks(size)
            .map(|chunk| chunk.iter().map(|(k, v)| ((*k).clone(), (*v).clone())).collect())
            .collect())
    }

    pub fn random(&self) -> Result<&V> {
        self.random_with(&mut rand::thread_rng())
    }

    /// Picks one value uniformly using the given generator.
    pub fn random_with<R: Rng>(&self, rng: &mut R) -> Result<&V> {
        if self.is_empty() {
            return Err(CollectionError::empty("pick a random item from"));
        }
        let idx = rng.gen_range(0..self.len());
        self.get_index(idx)
            .map(|(_, v)| v)
            .ok_or(CollectionError::ItemNotFound)
    }

    pub fn random_n(&self, n: usize) -> Result<OrderedMap<usize, V>> {
        self.random_n_with(&mut rand::thread_rng(), n)
    }

    /// Picks `n` distinct entries. The picked values keep their relative
    /// order and get fresh positional keys.
    pub fn random_n_with<R: Rng>(
        &self,
        rng: &mut R,
        n: usize,
    ) -> Result<OrderedMap<usize, V>> {
        if n > self.len() {
            return Err(CollectionError::InvalidArgument(format!(
                "requested {} items, but the collection only has {}",
                n,
                self.len()
            )));
        }
        let mut picked = rand::seq::index::sample(rng, self.len(), n).into_vec();
        picked.sort_unstable();
        debug!(requested = n, total = self.len(), "sampled random items");
        Ok(OrderedMap::from_values(
            picked
                .into_iter()
                .filter_map(|idx| self.get_index(idx).map(|(_, v)| v.clone())),
        ))
    }
}
