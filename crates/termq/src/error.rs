use crate::expr::{Expr, Operation, Operator};
use thiserror::Error as ThisError;

///
/// CompileError
///
/// Fatal outcome of a single compile or sort call. Compilation is
/// all-or-nothing: a failure anywhere in a sub-expression aborts the whole
/// call and no partial query is produced.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum CompileError {
    /// The expression's operator has no entry in the dispatch table.
    #[error("unsupported operator {op} in expression {expr:?}")]
    UnsupportedOperator { op: Operator, expr: Box<Operation> },

    /// A structural violation in the expression or order specifiers.
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),

    /// The expression tree is deeper than [`crate::MAX_EXPR_DEPTH`].
    #[error("expression tree exceeds maximum depth {limit}")]
    DepthExceeded { limit: usize },
}

///
/// InvalidArgument
///
/// Structural violations, each carrying the operator and argument position
/// needed to diagnose the failure without re-deriving the tree.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum InvalidArgument {
    #[error("operator {op} is missing its argument at position {position}")]
    MissingArgument { op: Operator, position: usize },

    #[error("operator {op} argument at position {position} must be a scalar literal")]
    NotALiteral { op: Operator, position: usize },

    #[error("operator {op} target {expr:?} does not resolve to a field")]
    NotAField { op: Operator, expr: Box<Expr> },

    #[error("operator {op} requires a collection literal as its second argument")]
    NotACollection { op: Operator },

    #[error("operator {op} literal for field '{field}' produced no terms")]
    EmptyTerms { op: Operator, field: String },

    #[error("range on field '{field}' needs at least one bound")]
    UnboundedRange { field: String },

    #[error("range bounds on field '{field}' mix numeric types")]
    MixedRangeBounds { field: String },

    #[error("top-level expression {expr:?} is not an operation")]
    NotAnOperation { expr: Box<Expr> },

    #[error("sort target {expr:?} is not a field")]
    SortTargetNotAField { expr: Box<Expr> },
}
