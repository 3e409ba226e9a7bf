use miette::Diagnostic;
use thiserror::Error;

pub type Result<T, E = CollectionError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum CollectionError {
    #[error("cannot {operation} an empty collection")]
    #[diagnostic(code(collection::empty))]
    EmptyCollection { operation: &'static str },
    #[error("key {0} is not present in the collection")]
    #[diagnostic(code(collection::key_not_found))]
    KeyNotFound(String),
    #[error("no item matched the condition")]
    #[diagnostic(code(collection::item_not_found))]
    ItemNotFound,
    #[error("callback takes {expected} arguments, but the item has {found} elements")]
    #[diagnostic(code(collection::arity_mismatch))]
    ArityMismatch { expected: usize, found: usize },
    #[error("cannot combine {keys} keys with {values} values")]
    #[diagnostic(code(collection::length_mismatch))]
    LengthMismatch { keys: usize, values: usize },
    #[error("invalid argument: {0}")]
    #[diagnostic(code(collection::invalid_argument))]
    InvalidArgument(String),
    #[error("item at position {position} is not numeric")]
    #[diagnostic(
        code(collection::type_mismatch),
        help("pass a selector returning a number, e.g. `sum_by(|item| item.amount)`")
    )]
    TypeMismatch { position: usize },
}

impl CollectionError {
    pub(crate) fn empty(operation: &'static str) -> Self {
        CollectionError::EmptyCollection { operation }
    }

    pub(crate) fn key_not_found(key: &impl std::fmt::Debug) -> Self {
        CollectionError::KeyNotFound(format!("{:?}", key))
    }
}
