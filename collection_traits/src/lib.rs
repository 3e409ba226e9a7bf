#![forbid(clippy::unconditional_recursion)]

pub mod fields;
pub mod has_length;
pub mod into_values;
pub mod key;
pub mod numeric;

#[cfg(feature = "serde_json")]
pub mod json;

pub use fields::Fields;
pub use into_values::IntoValues;
pub use key::{AsKey, Key, Positional};
pub use numeric::{Number, Numeric};

pub trait HasLength {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
