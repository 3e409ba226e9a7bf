use crate::OrderedMap;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Formatter;
use std::hash::Hash;
use std::marker::PhantomData;

impl<K: Serialize, V: Serialize> Serialize for OrderedMap<K, V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct OrderedMapVisitor<K, V>(PhantomData<fn() -> OrderedMap<K, V>>);

impl<'de, K, V> Visitor<'de> for OrderedMapVisitor<K, V>
where
    K: Deserialize<'de> + Hash + Eq,
    V: Deserialize<'de>,
{
    type Value = OrderedMap<K, V>;

    fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut map = OrderedMap::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((k, v)) = access.next_entry()? {
            map.put(k, v);
        }
        Ok(map)
    }
}

impl<'de, K, V> Deserialize<'de> for OrderedMap<K, V>
where
    K: Deserialize<'de> + Hash + Eq,
    V: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use crate::{collect, OrderedMap};
    use collection_traits::Key;
    use itertools::Itertools;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Person {
        name: String,
        age: u32,
    }

    #[test]
    fn serializes_in_insertion_order() {
        let c = OrderedMap::from_pairs([("zeta", 1), ("alpha", 2)]);
        assert_eq!(
            serde_json::to_string(&c).unwrap(),
            r#"{"zeta":1,"alpha":2}"#
        );
    }

    #[test]
    fn deserializes_in_source_order() {
        let c: OrderedMap<String, i32> =
            serde_json::from_str(r#"{"zeta":1,"alpha":2,"mid":3}"#).unwrap();
        assert_eq!(c.keys().cloned().collect_vec(), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn positional_keys_come_back_as_indices() {
        let c = collect([
            Person { name: "Dira".to_string(), age: 30 },
            Person { name: "Sanjaya".to_string(), age: 25 },
        ]);
        let value = serde_json::to_value(&c).unwrap();
        assert_eq!(
            value,
            json!({ "0": { "name": "Dira", "age": 30 }, "1": { "name": "Sanjaya", "age": 25 } })
        );

        let back: OrderedMap<Key, Person> = serde_json::from_value(value).unwrap();
        assert_eq!(back.keys().cloned().collect_vec(), vec![Key::Index(0), Key::Index(1)]);
        assert_eq!(back.to_values(), c.to_values());
    }
}
