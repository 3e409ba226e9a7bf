use crate::HasLength;
use std::collections::{BTreeMap, VecDeque};

#[duplicate::duplicate_item(
    ty(T);
    [ Vec<T> ];
    [ VecDeque<T> ];
    [ [T] ];
)]
impl<T> HasLength for ty([T]) {
    fn len(&self) -> usize {
        self.len()
    }
}

impl<const N: usize, T> HasLength for [T; N] {
    fn len(&self) -> usize {
        N
    }
}

impl<K, V> HasLength for BTreeMap<K, V> {
    fn len(&self) -> usize {
        self.len()
    }
}

impl<T: HasLength + ?Sized> HasLength for &T {
    fn len(&self) -> usize {
        T::len(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::HasLength;
    use std::collections::VecDeque;

    fn length_of(value: &impl HasLength) -> usize {
        value.len()
    }

    #[test]
    fn arrays_report_const_length() {
        assert_eq!(length_of(&[1, 2, 3]), 3);
        assert_eq!(length_of(&[0u8; 0]), 0);
    }

    #[test]
    fn growable_collections() {
        assert_eq!(length_of(&vec!["a", "b"]), 2);
        assert!(HasLength::is_empty(&VecDeque::<i32>::new()));
    }
}
