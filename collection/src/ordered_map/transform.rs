use crate::error::{CollectionError, Result};
use crate::OrderedMap;
use collection_traits::{HasLength, IntoValues};
use itertools::Itertools;
use std::fmt::Display;
use std::hash::Hash;
use utils::iter_utils::UtilsNextNIterExt;

impl<K: Hash + Eq, V> OrderedMap<K, V> {
    /// Transforms every value, keeping keys and order.
    pub fn map<V2>(&self, mut f: impl FnMut(&V, &K) -> V2) -> OrderedMap<K, V2>
    where
        K: Clone,
    {
        self.iter().map(|(k, v)| (k.clone(), f(v, k))).collect()
    }

    /// Passes every value to a constructor, e.g. `Person::new` or `T::from`.
    pub fn map_into<T>(&self, mut ctor: impl FnMut(V) -> T) -> OrderedMap<K, T>
    where
        K: Clone,
        V: Clone,
    {
        self.map(|v, _| ctor(v.clone()))
    }

    /// Destructures each sequence-like value into exactly `N` arguments.
    ///
    /// Tuples do not need this: `map(|(a, b), _| ..)` destructures them at
    /// compile time.
    pub fn map_spread<const N: usize, T, R>(
        &self,
        mut f: impl FnMut([T; N]) -> R,
    ) -> Result<OrderedMap<K, R>>
    where
        K: Clone,
        V: Clone + HasLength + IntoIterator<Item = T>,
    {
        self.iter()
            .map(|(k, v)| {
                let found = v.len();
                if found != N {
                    return Err(CollectionError::ArityMismatch { expected: N, found });
                }
                let args = v.clone().into_iter().next_n::<N>().map_err(|err| {
                    CollectionError::ArityMismatch {
                        expected: err.wants,
                        found: err.found,
                    }
                })?;
                Ok((k.clone(), f(args)))
            })
            .collect()
    }

    /// Groups the `(group, value)` pairs returned by `f`, keeping source order
    /// inside each group.
    pub fn map_to_groups<G, V2>(
        &self,
        mut f: impl FnMut(&V, &K) -> (G, V2),
    ) -> OrderedMap<G, OrderedMap<usize, V2>>
    where
        G: Hash + Eq,
    {
        let mut groups: OrderedMap<G, OrderedMap<usize, V2>> = OrderedMap::new();
        for (k, v) in self.iter() {
            let (group, value) = f(v, k);
            let items = groups.entries.entry(group).or_default();
            items.entries.insert(items.len(), value);
        }
        groups
    }

    /// Pairs values by position, stopping at the shorter side. Maps passed
    /// as `other` contribute their values.
    pub fn zip<O: IntoValues>(&self, other: O) -> OrderedMap<usize, (V, O::Value)>
    where
        V: Clone,
    {
        OrderedMap::from_values(self.values().cloned().zip(other.into_value_iter()))
    }

    /// Appends the values of `other` after this map's values and renumbers
    /// everything.
    pub fn concat(&self, other: impl IntoValues<Value = V>) -> OrderedMap<usize, V>
    where
        V: Clone,
    {
        OrderedMap::from_values(self.values().cloned().chain(other.into_value_iter()))
    }

    /// Uses this map's values as keys for the values of `values`.
    pub fn combine<O: IntoValues>(&self, values: O) -> Result<OrderedMap<V, O::Value>>
    where
        V: Clone + Hash + Eq,
    {
        let values = values.into_value_iter().collect_vec();
        if values.len() != self.len() {
            return Err(CollectionError::LengthMismatch {
                keys: self.len(),
                values: values.len(),
            });
        }
        Ok(self.values().cloned().zip(values).collect())
    }

    /// Flattens one level of nesting into a positional map.
    pub fn collapse(&self) -> OrderedMap<usize, V::Item>
    where
        V: Clone + IntoIterator,
    {
        OrderedMap::from_values(self.values().cloned().flatten())
    }

    pub fn flat_map<I: IntoIterator>(
        &self,
        mut f: impl FnMut(&V, &K) -> I,
    ) -> OrderedMap<usize, I::Item> {
        OrderedMap::from_values(self.iter().flat_map(|(k, v)| f(v, k)))
    }

    pub fn join(&self, glue: &str) -> String
    where
        V: Display,
    {
        self.values().join(glue)
    }

    /// Like [join](OrderedMap::join), but the last two values are separated
    /// by `final_glue`.
    pub fn join_with_final(&self, glue: &str, final_glue: &str) -> String
    where
        V: Display,
    {
        let Some(last) = self.values().last() else {
            return String::new();
        };
        if self.len() == 1 {
            return last.to_string();
        }
        let head = self.values().take(self.len() - 1).join(glue);
        format!("{head}{final_glue}{last}")
    }
}

#[cfg(test)]
mod tests {
    use crate::{collect, CollectionError, OrderedMap};
    use itertools::Itertools;
    use serde_json::{json, Value};

    #[derive(Debug, Clone, PartialEq)]
    struct Person {
        name: String,
    }

    impl Person {
        fn new(name: impl Into<String>) -> Self {
            Self { name: name.into() }
        }
    }

    fn people() -> OrderedMap<usize, Value> {
        collect([
            json!({ "name": "Dira", "department": "IT" }),
            json!({ "name": "Sanjaya", "department": "IT" }),
            json!({ "name": "Wardana", "department": "HR" }),
        ])
    }

    #[test]
    fn map_doubles_values() {
        let result = collect([1, 2, 3]).map(|v, _| v * 2);
        assert_eq!(result.to_values(), vec![2, 4, 6]);
    }

    #[test]
    fn map_keeps_explicit_keys() {
        let result = OrderedMap::from_pairs([("a", 1), ("b", 2)]).map(|v, k| format!("{k}{v}"));
        assert_eq!(result.all(), vec![("a", "a1".to_string()), ("b", "b2".to_string())]);
    }

    #[test]
    fn map_composition() {
        let c = collect([1, 2, 3, 4]);
        let f = |v: &i32| v + 1;
        let g = |v: &i32| v * 10;
        assert_eq!(c.map(|v, _| f(v)).map(|v, _| g(v)), c.map(|v, _| g(&f(v))));
    }

    #[test]
    fn map_into_constructs() {
        let result = collect(["Dira".to_string()]).map_into(Person::new);
        assert_eq!(result.to_values(), vec![Person::new("Dira")]);
    }

    #[test]
    fn map_spread_destructures() {
        let c = collect([vec!["Dira", "Sanjaya"], vec!["Wardana", "Pratama"]]);
        let result = c
            .map_spread(|[first, last]: [&str; 2]| Person::new(format!("{first} {last}")))
            .unwrap();
        assert_eq!(
            result.to_values(),
            vec![Person::new("Dira Sanjaya"), Person::new("Wardana Pratama")]
        );
    }

    #[test]
    fn map_spread_arity_mismatch() {
        let c = collect([vec![1, 2], vec![1, 2, 3]]);
        let err = c.map_spread(|[a, b]: [i32; 2]| a + b).unwrap_err();
        assert_eq!(err, CollectionError::ArityMismatch { expected: 2, found: 3 });
    }

    #[test]
    fn map_to_groups_by_department() {
        let result = people().map_to_groups(|person, _| {
            (
                person["department"].as_str().unwrap_or_default().to_string(),
                person["name"].as_str().unwrap_or_default().to_string(),
            )
        });
        assert_eq!(result.keys().cloned().collect_vec(), vec!["IT", "HR"]);
        assert_eq!(
            result[&"IT".to_string()],
            collect(["Dira".to_string(), "Sanjaya".to_string()])
        );
        assert_eq!(result[&"HR".to_string()], collect(["Wardana".to_string()]));
    }

    #[test]
    fn zip_pairs_by_position() {
        let result = collect([1, 2, 3]).zip(collect([4, 5, 6]));
        assert_eq!(result.to_values(), vec![(1, 4), (2, 5), (3, 6)]);
    }

    #[test]
    fn zip_takes_values_of_keyed_maps() {
        let prices = OrderedMap::from_pairs([("book", 12), ("pen", 3)]);
        let result = collect(["first", "second"]).zip(&prices);
        assert_eq!(result.to_values(), vec![("first", 12), ("second", 3)]);
        assert_eq!(prices.len(), 2);
    }

    #[test]
    fn zip_stops_at_shorter() {
        let result = collect([1, 2, 3]).zip(["a"]);
        assert_eq!(result.all(), vec![(0, (1, "a"))]);
    }

    #[test]
    fn concat_renumbers() {
        let result = OrderedMap::from_pairs([("x", 1), ("y", 2)]).concat([3]);
        assert_eq!(result.all(), vec![(0, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn concat_appends_map_values() {
        let tail = OrderedMap::from_pairs([("z", 3), ("w", 4)]);
        let result = collect([1, 2]).concat(tail);
        assert_eq!(result.all(), vec![(0, 1), (1, 2), (2, 3), (3, 4)]);
        assert_eq!(collect([1i32]).concat(0..2).to_values(), vec![1, 0, 1]);
    }

    #[test]
    fn combine_keys_with_values() {
        let result = collect(["name", "country"]).combine(["Dira", "Indonesia"]).unwrap();
        assert_eq!(result.all(), vec![("name", "Dira"), ("country", "Indonesia")]);
    }

    #[test]
    fn combine_with_another_map() {
        let values = collect(["Dira", "Indonesia"]);
        let result = collect(["name", "country"]).combine(values).unwrap();
        assert_eq!(result.all(), vec![("name", "Dira"), ("country", "Indonesia")]);
    }

    #[test]
    fn combine_length_mismatch() {
        let err = collect(["name", "country"]).combine(["Dira"]).unwrap_err();
        assert_eq!(err, CollectionError::LengthMismatch { keys: 2, values: 1 });
    }

    #[test]
    fn collapse_flattens_one_level() {
        let result = collect([vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).collapse();
        assert_eq!(result.to_values(), (1..=9).collect_vec());
        assert_eq!(result.keys().copied().collect_vec(), (0..9).collect_vec());
    }

    #[test]
    fn flat_map_hobbies() {
        let c = collect([
            json!({ "name": "Dira", "hobbies": ["Coding", "Gaming"] }),
            json!({ "name": "Sanjaya", "hobbies": ["Reading", "Writing"] }),
        ]);
        let hobbies = c.flat_map(|item, _| item["hobbies"].as_array().cloned().unwrap_or_default());
        assert_eq!(
            hobbies.to_values(),
            vec![json!("Coding"), json!("Gaming"), json!("Reading"), json!("Writing")]
        );
    }

    #[test]
    fn join_with_glues() {
        let c = collect(["Dira", "Sanjaya", "Wardana"]);
        assert_eq!(c.join("-"), "Dira-Sanjaya-Wardana");
        assert_eq!(c.join_with_final("-", "="), "Dira-Sanjaya=Wardana");
        assert_eq!(c.join_with_final(", ", " and "), "Dira, Sanjaya and Wardana");
    }

    #[test]
    fn join_small_collections() {
        assert_eq!(collect(["solo"]).join_with_final(", ", " and "), "solo");
        assert_eq!(collect(Vec::<&str>::new()).join_with_final(", ", " and "), "");
    }
}
