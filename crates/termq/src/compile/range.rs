use crate::{
    compile::QueryCompiler,
    error::{CompileError, InvalidArgument},
    expr::{Operator, Value},
    search::{Query, RangeQuery},
    types::Float64,
};
use std::ops::Bound;

///
/// Range construction
///
/// Builds the numeric or lexicographic range leaf for the interval
/// operators. If any present bound is numeric the range is numeric and every
/// present bound must share that numeric type; otherwise the range is
/// lexicographic over the first tokenized-and-normalized term of each bound
/// (multi-token bounds contribute only their first term).
///

impl QueryCompiler {
    pub(crate) fn range(
        &self,
        op: Operator,
        field: String,
        min: Option<&Value>,
        max: Option<&Value>,
        min_inc: bool,
        max_inc: bool,
    ) -> Result<Query, CompileError> {
        if min.is_none() && max.is_none() {
            return Err(InvalidArgument::UnboundedRange { field }.into());
        }

        if matches!(min, Some(Value::Int(_))) || matches!(max, Some(Value::Int(_))) {
            let lower = int_bound(&field, min, min_inc)?;
            let upper = int_bound(&field, max, max_inc)?;

            return Ok(Query::Range(RangeQuery::Int {
                field,
                lower,
                upper,
            }));
        }

        if matches!(min, Some(Value::Float(_))) || matches!(max, Some(Value::Float(_))) {
            let lower = float_bound(&field, min, min_inc)?;
            let upper = float_bound(&field, max, max_inc)?;

            return Ok(Query::Range(RangeQuery::Float {
                field,
                lower,
                upper,
            }));
        }

        let lower = self.term_bound(op, &field, min, min_inc)?;
        let upper = self.term_bound(op, &field, max, max_inc)?;

        Ok(Query::Range(RangeQuery::Term {
            field,
            lower,
            upper,
        }))
    }

    /// First tokenized-and-normalized term of a lexicographic bound.
    fn term_bound(
        &self,
        op: Operator,
        field: &str,
        value: Option<&Value>,
        inclusive: bool,
    ) -> Result<Bound<String>, CompileError> {
        let Some(value) = value else {
            return Ok(Bound::Unbounded);
        };

        let terms = self
            .terms(value)
            .ok_or(InvalidArgument::NotALiteral { op, position: 1 })?;
        let Some(first) = terms.first() else {
            return Err(InvalidArgument::EmptyTerms {
                op,
                field: field.to_string(),
            }
            .into());
        };

        Ok(bound(self.normalize(first), inclusive))
    }
}

fn int_bound(
    field: &str,
    value: Option<&Value>,
    inclusive: bool,
) -> Result<Bound<i64>, CompileError> {
    match value {
        None => Ok(Bound::Unbounded),
        Some(Value::Int(n)) => Ok(bound(*n, inclusive)),
        Some(_) => Err(InvalidArgument::MixedRangeBounds {
            field: field.to_string(),
        }
        .into()),
    }
}

fn float_bound(
    field: &str,
    value: Option<&Value>,
    inclusive: bool,
) -> Result<Bound<Float64>, CompileError> {
    match value {
        None => Ok(Bound::Unbounded),
        Some(Value::Float(f)) => Ok(bound(*f, inclusive)),
        Some(_) => Err(InvalidArgument::MixedRangeBounds {
            field: field.to_string(),
        }
        .into()),
    }
}

const fn bound<T>(value: T, inclusive: bool) -> Bound<T> {
    if inclusive {
        Bound::Included(value)
    } else {
        Bound::Excluded(value)
    }
}
