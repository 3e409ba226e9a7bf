use super::{LazySequence, Recipe};
use std::cell::RefCell;
use std::iter::Fuse;
use std::rc::Rc;
use tracing::trace;

struct Memo<V> {
    cache: Vec<V>,
    source: Option<Fuse<Box<dyn Iterator<Item = V>>>>,
}

impl<V: Clone> Memo<V> {
    fn get(&mut self, position: usize, recipe: &Recipe<V>) -> Option<V> {
        if let Some(value) = self.cache.get(position) {
            trace!(position, "replaying remembered value");
            return Some(value.clone());
        }
        let source = self.source.get_or_insert_with(|| recipe().fuse());
        let value = source.next()?;
        self.cache.push(value.clone());
        Some(value)
    }
}

impl<V: Clone + 'static> LazySequence<V> {
    /// Returns a sequence that pulls each value from this one at most once.
    ///
    /// All runs of the returned sequence share one source run; values pulled
    /// by an earlier run are replayed from memory.
    pub fn remember(&self) -> Self {
        let recipe = self.recipe.clone();
        let memo = Rc::new(RefCell::new(Memo {
            cache: Vec::new(),
            source: None,
        }));
        Self::make(move || {
            let memo = memo.clone();
            let recipe = recipe.clone();
            let mut position = 0;
            std::iter::from_fn(move || {
                let value = memo.borrow_mut().get(position, &recipe);
                position += 1;
                value
            })
        })
    }
}
