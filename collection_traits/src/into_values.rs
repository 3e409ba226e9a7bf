/// Sources of values for operations that pair or append sequences, such as
/// `zip`, `concat` and `combine`.
///
/// Unlike [IntoIterator], maps implementing this yield only their values, so
/// passing a map behaves the same as passing its values.
pub trait IntoValues {
    type Value;
    type Values: Iterator<Item = Self::Value>;

    fn into_value_iter(self) -> Self::Values;
}

impl<T> IntoValues for Vec<T> {
    type Value = T;
    type Values = std::vec::IntoIter<T>;

    fn into_value_iter(self) -> Self::Values {
        self.into_iter()
    }
}

impl<T, const N: usize> IntoValues for [T; N] {
    type Value = T;
    type Values = std::array::IntoIter<T, N>;

    fn into_value_iter(self) -> Self::Values {
        self.into_iter()
    }
}

impl<'a, T: Clone> IntoValues for &'a [T] {
    type Value = T;
    type Values = std::iter::Cloned<std::slice::Iter<'a, T>>;

    fn into_value_iter(self) -> Self::Values {
        self.iter().cloned()
    }
}

impl<T> IntoValues for std::collections::VecDeque<T> {
    type Value = T;
    type Values = std::collections::vec_deque::IntoIter<T>;

    fn into_value_iter(self) -> Self::Values {
        self.into_iter()
    }
}

impl<T> IntoValues for std::ops::Range<T>
where
    std::ops::Range<T>: Iterator<Item = T>,
{
    type Value = T;
    type Values = std::ops::Range<T>;

    fn into_value_iter(self) -> Self::Values {
        self
    }
}
