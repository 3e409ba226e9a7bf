use itertools::Itertools;
use thiserror::Error;

#[derive(Debug, Copy, Clone, Error)]
#[error("{} items were requested, but only {} were found", .wants, .found)]
pub struct NotEnoughError {
    pub wants: usize,
    pub found: usize,
}

impl NotEnoughError {
    pub fn new(wants: usize, found: usize) -> Self {
        Self { wants, found }
    }
}

pub trait UtilsNextNIterExt<T>: Iterator<Item = T> {
    /// Pulls exactly `N` items into an array, without touching the items past
    /// the `N`th.
    fn next_n<const N: usize>(&mut self) -> Result<[T; N], NotEnoughError>;
}

impl<T, I: Iterator<Item = T>> UtilsNextNIterExt<T> for I {
    fn next_n<const N: usize>(&mut self) -> Result<[T; N], NotEnoughError> {
        let items: Vec<T> = (0..N)
            .map(|found| self.next().ok_or_else(|| NotEnoughError::new(N, found)))
            .try_collect()?;
        items
            .try_into()
            .map_err(|items: Vec<T>| NotEnoughError::new(N, items.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::UtilsNextNIterExt;
    use rstest::rstest;

    #[test]
    fn takes_prefix() {
        let mut iter = 1..=5;
        assert_eq!(iter.next_n::<2>().ok(), Some([1, 2]));
        assert_eq!(iter.next(), Some(3));
    }

    #[rstest]
    #[case(0)]
    #[case(2)]
    fn reports_found_count(#[case] available: usize) {
        let err = (0..available).next_n::<3>().unwrap_err();
        assert_eq!(err.wants, 3);
        assert_eq!(err.found, available);
    }
}
