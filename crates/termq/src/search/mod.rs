mod query;
mod sort;

pub use query::{
    BooleanClause, BooleanQuery, Occur, PhraseQuery, PrefixQuery, Query, RangeQuery, TermQuery,
    TermValue, WildcardQuery,
};
pub use sort::{Sort, SortComparator, SortField};
