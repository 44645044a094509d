use crate::types::Float64;
use serde::Serialize;

///
/// ValueType
///
/// Declared type of a field. Anything that is not numeric ranges and sorts
/// lexicographically.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum ValueType {
    Int,
    Float,
    Text,
}

///
/// Value
///
/// Literal operand of a comparison or pattern operator.
///
/// `Phrase` is a marker literal: it is always whitespace-tokenized during
/// compilation, regardless of the compiler's term-splitting flag. `List` is
/// only legal as the collection argument of `In`.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum Value {
    Int(i64),
    Float(Float64),
    Text(String),
    /// Ordered list of values. Element order is preserved, though `In`
    /// matching is order-insensitive.
    List(Vec<Self>),
    Phrase(String),
}

impl Value {
    /// Build a `Value::List` from a slice literal.
    ///
    /// Intended for tests and inline construction.
    /// Requires `Clone` because items are borrowed.
    pub fn from_slice<T>(items: &[T]) -> Self
    where
        T: Into<Self> + Clone,
    {
        Self::List(items.iter().cloned().map(Into::into).collect())
    }

    #[must_use]
    pub fn phrase(text: impl Into<String>) -> Self {
        Self::Phrase(text.into())
    }

    /// Fallible float constructor; `None` for non-finite input.
    #[must_use]
    pub fn float(v: f64) -> Option<Self> {
        Float64::try_new(v).map(Self::Float)
    }

    #[must_use]
    pub const fn is_phrase(&self) -> bool {
        matches!(self, Self::Phrase(_))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<Float64> for Value {
    fn from(f: Float64) -> Self {
        Self::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}
