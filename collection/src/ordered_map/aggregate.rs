use crate::error::{CollectionError, Result};
use crate::OrderedMap;
use collection_traits::{Number, Numeric};
use std::hash::Hash;

fn extreme(numbers: Vec<Number>, replace: impl Fn(&Number, &Number) -> bool) -> Option<Number> {
    numbers
        .into_iter()
        .reduce(|best, n| if replace(&n, &best) { n } else { best })
}

impl<K: Hash + Eq, V> OrderedMap<K, V> {
    fn numbers<N: Numeric>(&self, mut select: impl FnMut(&V) -> N) -> Result<Vec<Number>> {
        self.values()
            .enumerate()
            .map(|(position, v)| {
                select(v)
                    .to_number()
                    .ok_or(CollectionError::TypeMismatch { position })
            })
            .collect()
    }

    /// Sum of all values. An empty map sums to `Int(0)`.
    pub fn sum(&self) -> Result<Number>
    where
        V: Numeric,
    {
        self.sum_by(V::to_number)
    }

    pub fn sum_by<N: Numeric>(&self, select: impl FnMut(&V) -> N) -> Result<Number> {
        Ok(self
            .numbers(select)?
            .into_iter()
            .fold(Number::default(), |acc, n| acc + n))
    }

    /// Arithmetic mean, `None` for an empty map.
    pub fn avg(&self) -> Result<Option<f64>>
    where
        V: Numeric,
    {
        self.avg_by(V::to_number)
    }

    pub fn avg_by<N: Numeric>(&self, select: impl FnMut(&V) -> N) -> Result<Option<f64>> {
        let numbers = self.numbers(select)?;
        if numbers.is_empty() {
            return Ok(None);
        }
        let count = numbers.len() as f64;
        let total = numbers
            .into_iter()
            .fold(Number::default(), |acc, n| acc + n);
        Ok(Some(total.as_f64() / count))
    }

    pub fn min(&self) -> Result<Option<Number>>
    where
        V: Numeric,
    {
        self.min_by(V::to_number)
    }

    pub fn min_by<N: Numeric>(&self, select: impl FnMut(&V) -> N) -> Result<Option<Number>> {
        let numbers = self.numbers(select)?;
        Ok(extreme(numbers, |n, best| n < best))
    }

    pub fn max(&self) -> Result<Option<Number>>
    where
        V: Numeric,
    {
        self.max_by(V::to_number)
    }

    pub fn max_by<N: Numeric>(&self, select: impl FnMut(&V) -> N) -> Result<Option<Number>> {
        let numbers = self.numbers(select)?;
        Ok(extreme(numbers, |n, best| n > best))
    }

    /// Folds values from the first one onward.
    pub fn reduce(&self, mut f: impl FnMut(V, &V) -> V) -> Result<V>
    where
        V: Clone,
    {
        let mut values = self.values();
        let first = values
            .next()
            .cloned()
            .ok_or(CollectionError::empty("reduce"))?;
        Ok(values.fold(first, |acc, v| f(acc, v)))
    }

    pub fn reduce_with<T>(&self, initial: T, mut f: impl FnMut(T, &V) -> T) -> T {
        self.values().fold(initial, |acc, v| f(acc, v))
    }
}

#[cfg(test)]
mod tests {
    use crate::{collect, CollectionError, OrderedMap};
    use collection_traits::Number;
    use serde_json::json;

    #[test]
    fn aggregates_over_one_to_nine() {
        let c = collect(1..=9);
        assert_eq!(c.sum(), Ok(Number::Int(45)));
        assert_eq!(c.avg(), Ok(Some(5.0)));
        assert_eq!(c.min(), Ok(Some(Number::Int(1))));
        assert_eq!(c.max(), Ok(Some(Number::Int(9))));
        assert_eq!(c.count(), 9);
    }

    #[test]
    fn reduce_sums() {
        assert_eq!(collect(1..=9).reduce(|acc, v| acc + v), Ok(45));
        assert_eq!(collect(1..=9).reduce_with(0, |acc, v| acc + v), 45);
        assert_eq!(collect(["a", "b"]).reduce_with(String::new(), |acc, v| acc + *v), "ab");
    }

    #[test]
    fn reduce_empty_without_seed_fails() {
        let empty: OrderedMap<usize, i32> = OrderedMap::new();
        assert_eq!(
            empty.reduce(|acc, v| acc + v),
            Err(CollectionError::EmptyCollection { operation: "reduce" })
        );
        assert_eq!(empty.reduce_with(7, |acc, v| acc + v), 7);
    }

    #[test]
    fn empty_aggregates() {
        let empty: OrderedMap<usize, f64> = OrderedMap::new();
        assert_eq!(empty.sum(), Ok(Number::Int(0)));
        assert_eq!(empty.avg(), Ok(None));
        assert_eq!(empty.min(), Ok(None));
        assert_eq!(empty.max(), Ok(None));
    }

    #[test]
    fn floats_promote_the_result() {
        let c = collect([1.5, 2.5]);
        assert_eq!(c.sum(), Ok(Number::Float(4.0)));
        assert_eq!(c.avg(), Ok(Some(2.0)));
    }

    #[test]
    fn selector_aggregates() {
        let orders = collect([
            json!({ "item": "book", "price": 12 }),
            json!({ "item": "pen", "price": 3 }),
            json!({ "item": "lamp", "price": 30 }),
        ]);
        assert_eq!(orders.sum_by(|o| o["price"].as_i64()), Ok(Number::Int(45)));
        assert_eq!(orders.avg_by(|o| o["price"].as_i64()), Ok(Some(15.0)));
        assert_eq!(orders.min_by(|o| o["price"].as_i64()), Ok(Some(Number::Int(3))));
        assert_eq!(orders.max_by(|o| o["price"].as_i64()), Ok(Some(Number::Int(30))));
    }

    #[test]
    fn non_numeric_item_is_type_mismatch() {
        let c = collect([json!(1), json!("two"), json!(3)]);
        assert_eq!(c.sum(), Err(CollectionError::TypeMismatch { position: 1 }));
        assert_eq!(c.max(), Err(CollectionError::TypeMismatch { position: 1 }));
    }
}
