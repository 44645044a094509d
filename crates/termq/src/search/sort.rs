use serde::Serialize;

///
/// SortComparator
///
/// Comparison kind of one sort field. `Text` compares lexicographically with
/// a fixed, locale-independent collation.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum SortComparator {
    Int,
    Float,
    Text,
}

///
/// SortField
///
/// `descending` is the index's native direction flag, the logical inverse of
/// the expression layer's `ascending`.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SortField {
    pub field: String,
    pub comparator: SortComparator,
    pub descending: bool,
}

///
/// Sort
///
/// Ordered sort descriptor; field order is significant.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Sort {
    pub fields: Vec<SortField>,
}

impl Sort {
    #[must_use]
    pub const fn new(fields: Vec<SortField>) -> Self {
        Self { fields }
    }
}
