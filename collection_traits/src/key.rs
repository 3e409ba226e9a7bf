use std::fmt::{Display, Formatter};

/// Key types that can stand in for a dense integer index.
///
/// Collections use this to assign keys to values pushed without an explicit
/// key, and to renumber positional entries when a value is prepended.
pub trait Positional: Sized {
    /// Builds the key for the given position, or `None` if the position does
    /// not fit in the key type.
    fn from_position(position: usize) -> Option<Self>;

    /// Returns the position this key represents, or `None` for explicit keys.
    fn position(&self) -> Option<usize>;
}

#[duplicate::duplicate_item(
    int_type;
    [ u8 ];
    [ u16 ];
    [ u32 ];
    [ u64 ];
    [ u128 ];
    [ usize ];
    [ i8 ];
    [ i16 ];
    [ i32 ];
    [ i64 ];
    [ i128 ];
    [ isize ];
)]
impl Positional for int_type {
    fn from_position(position: usize) -> Option<Self> {
        int_type::try_from(position).ok()
    }

    fn position(&self) -> Option<usize> {
        usize::try_from(*self).ok()
    }
}

/// Mixed key for collections holding both named and positional entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Index(usize),
    Name(String),
}

impl Key {
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Index(idx) => Some(*idx),
            Key::Name(_) => None,
        }
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            Key::Index(_) => None,
            Key::Name(name) => Some(name),
        }
    }

    /// Parses canonical decimal integers (`"0"`, `"17"`, but not `"017"` or
    /// `"+1"`) into an index.
    fn parse_index(name: &str) -> Option<usize> {
        let canonical = name == "0"
            || (!name.is_empty()
                && !name.starts_with('0')
                && name.bytes().all(|b| b.is_ascii_digit()));
        if canonical {
            name.parse().ok()
        } else {
            None
        }
    }
}

impl Positional for Key {
    fn from_position(position: usize) -> Option<Self> {
        Some(Key::Index(position))
    }

    fn position(&self) -> Option<usize> {
        self.as_index()
    }
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        Key::Index(value)
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        match Key::parse_index(value) {
            Some(idx) => Key::Index(idx),
            None => Key::Name(value.to_string()),
        }
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        match Key::parse_index(&value) {
            Some(idx) => Key::Index(idx),
            None => Key::Name(value),
        }
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Key::Index(idx) => write!(f, "{}", idx),
            Key::Name(name) => f.write_str(name),
        }
    }
}

/// Values that can be used as a group key.
pub trait AsKey {
    fn as_key(&self) -> Key;
}

impl AsKey for Key {
    fn as_key(&self) -> Key {
        self.clone()
    }
}

impl AsKey for str {
    fn as_key(&self) -> Key {
        Key::from(self)
    }
}

impl AsKey for String {
    fn as_key(&self) -> Key {
        Key::from(self.as_str())
    }
}

impl AsKey for bool {
    fn as_key(&self) -> Key {
        Key::Index(usize::from(*self))
    }
}

#[duplicate::duplicate_item(
    int_type;
    [ u8 ];
    [ u16 ];
    [ u32 ];
    [ u64 ];
    [ usize ];
    [ i8 ];
    [ i16 ];
    [ i32 ];
    [ i64 ];
    [ isize ];
)]
impl AsKey for int_type {
    fn as_key(&self) -> Key {
        match usize::try_from(*self) {
            Ok(idx) => Key::Index(idx),
            Err(_) => Key::Name(self.to_string()),
        }
    }
}

impl<T: AsKey + ?Sized> AsKey for &T {
    fn as_key(&self) -> Key {
        T::as_key(self)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Key;
    use serde::de::{Error, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt::Formatter;

    impl Serialize for Key {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                Key::Index(idx) => serializer.serialize_u64(*idx as u64),
                Key::Name(name) => serializer.serialize_str(name),
            }
        }
    }

    struct KeyVisitor;

    impl Visitor<'_> for KeyVisitor {
        type Value = Key;

        fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
            formatter.write_str("an integer or a string key")
        }

        fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(match usize::try_from(v) {
                Ok(idx) => Key::Index(idx),
                Err(_) => Key::Name(v.to_string()),
            })
        }

        fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(match usize::try_from(v) {
                Ok(idx) => Key::Index(idx),
                Err(_) => Key::Name(v.to_string()),
            })
        }

        fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(Key::from(v))
        }

        fn visit_string<E: Error>(self, v: String) -> Result<Self::Value, E> {
            Ok(Key::from(v))
        }
    }

    impl<'de> Deserialize<'de> for Key {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(KeyVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AsKey, Key, Positional};
    use rstest::rstest;

    #[rstest]
    #[case("0", Key::Index(0))]
    #[case("42", Key::Index(42))]
    #[case("042", Key::Name("042".to_string()))]
    #[case("-1", Key::Name("-1".to_string()))]
    #[case("", Key::Name(String::new()))]
    #[case("IT", Key::Name("IT".to_string()))]
    fn should_normalize_numeric_names(#[case] raw: &str, #[case] expected: Key) {
        assert_eq!(Key::from(raw), expected);
    }

    #[test]
    fn signed_keys_are_not_positional_when_negative() {
        assert_eq!((-3i64).position(), None);
        assert_eq!(7i64.position(), Some(7));
        assert_eq!(i8::from_position(1000), None);
        assert_eq!(u8::from_position(255), Some(255));
    }

    #[test]
    fn names_have_no_position() {
        assert_eq!(Key::from("name").position(), None);
        assert_eq!(Key::from_position(3), Some(Key::Index(3)));
    }

    #[test]
    fn group_keys_from_primitives() {
        assert_eq!(true.as_key(), Key::Index(1));
        assert_eq!((-5i32).as_key(), Key::Name("-5".to_string()));
        assert_eq!("HR".as_key(), Key::Name("HR".to_string()));
    }
}
