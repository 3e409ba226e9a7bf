//! Insertion-ordered maps with a fluent transformation API, and lazily
//! generated sequences that are bounded into maps on demand.
//!
//! ```
//! use collection::{collect, LazySequence};
//!
//! let evens = collect(1..=10).filter(|v, _| v % 2 == 0);
//! assert_eq!(evens.keys().copied().collect::<Vec<_>>(), vec![1, 3, 5, 7, 9]);
//!
//! let squares = LazySequence::from_iterator(1..).map(|v: i64| v * v);
//! assert_eq!(squares.take(4).to_values(), vec![1, 4, 9, 16]);
//! ```

pub mod error;
pub mod lazy;
pub mod ordered_map;

pub use collection_traits::{
    AsKey, Fields, HasLength, IntoValues, Key, Number, Numeric, Positional,
};
pub use error::{CollectionError, Result};
pub use lazy::LazySequence;
pub use ordered_map::{collect, OrderedMap};
