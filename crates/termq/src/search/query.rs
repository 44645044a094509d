use crate::types::Float64;
use derive_more::Display;
use serde::Serialize;
use std::ops::Bound;

///
/// Search query model
///
/// Closed representation of the queries the backing term index can execute.
/// The compiler only constructs these values; executing them is the search
/// engine's concern.
///

///
/// Occur
///
/// Per-clause combination semantics inside a boolean query: required,
/// optional (at least one `Should` must match absent any `Must`), excluded.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq, Serialize)]
pub enum Occur {
    Must,
    Should,
    MustNot,
}

///
/// TermValue
///
/// Indexed token of a single term. Numeric equality carries the exact native
/// number rather than a string rendering, so the index can match it against
/// its numeric encoding.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum TermValue {
    Text(String),
    Int(i64),
    Float(Float64),
}

///
/// TermQuery
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TermQuery {
    pub field: String,
    pub value: TermValue,
}

impl TermQuery {
    #[must_use]
    pub fn text(field: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: TermValue::Text(token.into()),
        }
    }

    #[must_use]
    pub fn int(field: impl Into<String>, value: i64) -> Self {
        Self {
            field: field.into(),
            value: TermValue::Int(value),
        }
    }

    #[must_use]
    pub fn float(field: impl Into<String>, value: Float64) -> Self {
        Self {
            field: field.into(),
            value: TermValue::Float(value),
        }
    }
}

///
/// PhraseQuery
///
/// Ordered terms that must match contiguously and in order.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PhraseQuery {
    pub field: String,
    pub terms: Vec<String>,
}

impl PhraseQuery {
    #[must_use]
    pub fn new(field: impl Into<String>, terms: Vec<String>) -> Self {
        Self {
            field: field.into(),
            terms,
        }
    }
}

///
/// WildcardQuery
///
/// Pattern leaf; `*` and `?` in the pattern are wildcard metacharacters.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct WildcardQuery {
    pub field: String,
    pub pattern: String,
}

impl WildcardQuery {
    #[must_use]
    pub fn new(field: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            pattern: pattern.into(),
        }
    }
}

///
/// PrefixQuery
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PrefixQuery {
    pub field: String,
    pub prefix: String,
}

impl PrefixQuery {
    #[must_use]
    pub fn new(field: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            prefix: prefix.into(),
        }
    }
}

///
/// RangeQuery
///
/// Bounded interval over one field, typed by comparison kind. Numeric ranges
/// compare by true numeric ordering; term ranges compare lexicographically.
/// At least one bound is present; the builder rejects fully unbounded
/// ranges.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum RangeQuery {
    Int {
        field: String,
        lower: Bound<i64>,
        upper: Bound<i64>,
    },
    Float {
        field: String,
        lower: Bound<Float64>,
        upper: Bound<Float64>,
    },
    Term {
        field: String,
        lower: Bound<String>,
        upper: Bound<String>,
    },
}

///
/// BooleanClause
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct BooleanClause {
    pub occur: Occur,
    pub query: Query,
}

impl BooleanClause {
    #[must_use]
    pub const fn new(occur: Occur, query: Query) -> Self {
        Self { occur, query }
    }

    #[must_use]
    pub const fn must(query: Query) -> Self {
        Self::new(Occur::Must, query)
    }

    #[must_use]
    pub const fn should(query: Query) -> Self {
        Self::new(Occur::Should, query)
    }

    #[must_use]
    pub const fn must_not(query: Query) -> Self {
        Self::new(Occur::MustNot, query)
    }
}

///
/// BooleanQuery
///
/// Ordered clause set. Clause order is preserved from compilation even where
/// match semantics are order-insensitive.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct BooleanQuery {
    pub clauses: Vec<BooleanClause>,
}

impl BooleanQuery {
    #[must_use]
    pub const fn new(clauses: Vec<BooleanClause>) -> Self {
        Self { clauses }
    }
}

///
/// Query
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum Query {
    Term(TermQuery),
    Phrase(PhraseQuery),
    Wildcard(WildcardQuery),
    Prefix(PrefixQuery),
    Range(RangeQuery),
    Boolean(BooleanQuery),
}

impl Query {
    #[must_use]
    pub const fn boolean(clauses: Vec<BooleanClause>) -> Self {
        Self::Boolean(BooleanQuery::new(clauses))
    }
}
