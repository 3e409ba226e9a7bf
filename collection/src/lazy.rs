use crate::error::{CollectionError, Result};
use crate::OrderedMap;
use itertools::Itertools;
use std::fmt::{Debug, Formatter};
use std::rc::Rc;
use tracing::trace;

mod remember;

type Recipe<V> = Rc<dyn Fn() -> Box<dyn Iterator<Item = V>>>;

/// A possibly infinite sequence whose values are produced only when a
/// bounding operation such as [take](LazySequence::take) pulls them.
///
/// The sequence stores a recipe rather than a cursor: every bounding
/// operation starts a fresh run from the beginning. Use
/// [remember](LazySequence::remember) to share pulled values between runs.
pub struct LazySequence<V> {
    recipe: Recipe<V>,
}

impl<V> Clone for LazySequence<V> {
    fn clone(&self) -> Self {
        Self {
            recipe: self.recipe.clone(),
        }
    }
}

impl<V> Debug for LazySequence<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazySequence").finish_non_exhaustive()
    }
}

impl<V: 'static> LazySequence<V> {
    /// Creates a sequence from a recipe that is called once per run.
    pub fn make<I>(recipe: impl Fn() -> I + 'static) -> Self
    where
        I: IntoIterator<Item = V>,
        I::IntoIter: 'static,
    {
        Self {
            recipe: Rc::new(move || -> Box<dyn Iterator<Item = V>> {
                Box::new(recipe().into_iter())
            }),
        }
    }

    /// Creates a sequence from explicit generator state. Each run starts
    /// from a clone of `seed` and a clone of `step`; `step` returning
    /// `None` ends the sequence.
    pub fn unfold<S>(seed: S, step: impl FnMut(&mut S) -> Option<V> + Clone + 'static) -> Self
    where
        S: Clone + 'static,
    {
        Self::make(move || {
            let mut state = seed.clone();
            let mut step = step.clone();
            std::iter::from_fn(move || step(&mut state))
        })
    }

    pub fn from_values(values: Vec<V>) -> Self
    where
        V: Clone,
    {
        Self::make(move || values.clone())
    }

    /// Replays a cloneable iterator, e.g. `0..`, on every run.
    pub fn from_iterator<I>(iter: I) -> Self
    where
        I: Iterator<Item = V> + Clone + 'static,
    {
        Self::make(move || iter.clone())
    }

    /// Starts a new run.
    pub fn iter(&self) -> Box<dyn Iterator<Item = V>> {
        (self.recipe)()
    }

    /// Pulls at most `n` values. The generator is advanced exactly
    /// `min(n, available)` times.
    pub fn take(&self, n: usize) -> OrderedMap<usize, V> {
        let mut pulls = 0usize;
        let taken = OrderedMap::from_values(self.iter().take(n).inspect(|_| pulls += 1));
        trace!(requested = n, pulls, "bounded lazy run finished");
        taken
    }

    /// Pulls values until `f` fails. The failing value is not included.
    pub fn take_while(&self, mut f: impl FnMut(&V) -> bool) -> OrderedMap<usize, V> {
        OrderedMap::from_values(self.iter().take_while(|v| f(v)))
    }

    /// Pulls values until `f` matches. The matching value is not included.
    pub fn take_until(&self, mut f: impl FnMut(&V) -> bool) -> OrderedMap<usize, V> {
        self.take_while(|v| !f(v))
    }

    pub fn map<T: 'static>(&self, f: impl Fn(V) -> T + 'static) -> LazySequence<T> {
        let recipe = self.recipe.clone();
        let f = Rc::new(f);
        LazySequence::make(move || {
            let f = f.clone();
            recipe().map(move |v| f(v))
        })
    }

    pub fn filter(&self, f: impl Fn(&V) -> bool + 'static) -> Self {
        let recipe = self.recipe.clone();
        let f = Rc::new(f);
        Self::make(move || {
            let f = f.clone();
            recipe().filter(move |v| f(v))
        })
    }

    pub fn skip(&self, n: usize) -> Self {
        let recipe = self.recipe.clone();
        Self::make(move || recipe().skip(n))
    }

    pub fn skip_while(&self, f: impl Fn(&V) -> bool + 'static) -> Self {
        let recipe = self.recipe.clone();
        let f = Rc::new(f);
        Self::make(move || {
            let f = f.clone();
            recipe().skip_while(move |v| f(v))
        })
    }

    /// Groups values into vectors of `size`. The last chunk may be shorter.
    pub fn chunk(&self, size: usize) -> Result<LazySequence<Vec<V>>> {
        if size == 0 {
            return Err(CollectionError::InvalidArgument(
                "chunk size must be greater than zero".to_string(),
            ));
        }
        let recipe = self.recipe.clone();
        Ok(LazySequence::make(move || {
            let mut source = recipe();
            std::iter::from_fn(move || {
                let chunk = source.by_ref().take(size).collect_vec();
                (!chunk.is_empty()).then_some(chunk)
            })
        }))
    }

    pub fn first(&self) -> Option<V> {
        self.iter().next()
    }

    pub fn first_by(&self, mut f: impl FnMut(&V) -> bool) -> Option<V> {
        self.iter().find(|v| f(v))
    }

    /// Materializes the whole sequence. Never returns for infinite sources;
    /// bound the sequence first.
    pub fn collect(&self) -> OrderedMap<usize, V> {
        OrderedMap::from_values(self.iter())
    }
}
