use std::collections::BTreeMap;
use std::hash::BuildHasher;

/// Record-like values whose fields can be looked up by name.
pub trait Fields {
    type Field: ?Sized;

    fn field(&self, name: &str) -> Option<&Self::Field>;
}

impl<V> Fields for BTreeMap<String, V> {
    type Field = V;

    fn field(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

#[allow(clippy::disallowed_types)]
impl<V, S: BuildHasher> Fields for std::collections::HashMap<String, V, S> {
    type Field = V;

    fn field(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl<T: Fields + ?Sized> Fields for &T {
    type Field = T::Field;

    fn field(&self, name: &str) -> Option<&Self::Field> {
        T::field(self, name)
    }
}
