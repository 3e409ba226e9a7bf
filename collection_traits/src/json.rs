use crate::{AsKey, Fields, Key, Number, Numeric};
use serde_json::{Map, Value};

impl Fields for Value {
    type Field = Value;

    fn field(&self, name: &str) -> Option<&Value> {
        self.as_object()?.get(name)
    }
}

impl Fields for Map<String, Value> {
    type Field = Value;

    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl Numeric for Value {
    fn to_number(&self) -> Option<Number> {
        let Value::Number(n) = self else {
            return None;
        };
        n.as_i64()
            .map(Number::Int)
            .or_else(|| n.as_f64().map(Number::Float))
    }
}

impl AsKey for Value {
    fn as_key(&self) -> Key {
        match self {
            Value::Null => Key::Name(String::new()),
            Value::Bool(b) => b.as_key(),
            Value::Number(n) => match n.as_u64() {
                Some(idx) => idx.as_key(),
                None => Key::Name(n.to_string()),
            },
            Value::String(s) => s.as_key(),
            Value::Array(_) | Value::Object(_) => Key::Name(self.to_string()),
        }
    }
}
