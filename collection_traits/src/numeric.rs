use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::ops::Add;

/// Result type of numeric aggregates.
///
/// Integer inputs stay integral; any float, or an overflowing integer sum,
/// promotes the value to [Number::Float].
#[derive(Debug, Copy, Clone)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    pub fn as_i64(self) -> Option<i64> {
        match self {
            Number::Int(i) => Some(i),
            Number::Float(_) => None,
        }
    }
}

impl Default for Number {
    fn default() -> Self {
        Number::Int(0)
    }
}

impl Add for Number {
    type Output = Number;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => a
                .checked_add(b)
                .map_or_else(|| Number::Float(a as f64 + b as f64), Number::Int),
            (a, b) => Number::Float(a.as_f64() + b.as_f64()),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(b)),
            (a, b) => a.as_f64().partial_cmp(&b.as_f64()),
        }
    }
}

impl PartialEq<i64> for Number {
    fn eq(&self, other: &i64) -> bool {
        *self == Number::Int(*other)
    }
}

impl PartialEq<f64> for Number {
    fn eq(&self, other: &f64) -> bool {
        *self == Number::Float(*other)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            Number::Float(v) => write!(f, "{}", v),
        }
    }
}

/// Values that take part in `sum`/`avg`/`min`/`max`.
///
/// Returning `None` marks the value as non-numeric.
pub trait Numeric {
    fn to_number(&self) -> Option<Number>;
}

#[duplicate::duplicate_item(
    int_type;
    [ i8 ];
    [ i16 ];
    [ i32 ];
    [ i64 ];
    [ u8 ];
    [ u16 ];
    [ u32 ];
)]
impl Numeric for int_type {
    fn to_number(&self) -> Option<Number> {
        Some(Number::Int(i64::from(*self)))
    }
}

#[duplicate::duplicate_item(
    int_type;
    [ u64 ];
    [ u128 ];
    [ usize ];
    [ i128 ];
    [ isize ];
)]
impl Numeric for int_type {
    fn to_number(&self) -> Option<Number> {
        Some(match i64::try_from(*self) {
            Ok(i) => Number::Int(i),
            Err(_) => Number::Float(*self as f64),
        })
    }
}

#[duplicate::duplicate_item(
    float_type;
    [ f32 ];
    [ f64 ];
)]
impl Numeric for float_type {
    fn to_number(&self) -> Option<Number> {
        Some(Number::Float(f64::from(*self)))
    }
}

impl Numeric for Number {
    fn to_number(&self) -> Option<Number> {
        Some(*self)
    }
}

impl<T: Numeric> Numeric for Option<T> {
    fn to_number(&self) -> Option<Number> {
        self.as_ref().and_then(T::to_number)
    }
}

impl<T: Numeric + ?Sized> Numeric for &T {
    fn to_number(&self) -> Option<Number> {
        T::to_number(self)
    }
}
