//! Compiles typed query expression trees into the query and sort model of a
//! term-oriented search index.
//!
//! The crate is split along the data flow: `expr` holds the backend-neutral
//! expression AST, `search` holds the backend-native query and sort model,
//! and `compile` turns the former into the latter.
#![warn(unreachable_pub)]

pub mod compile;
pub mod error;
pub mod expr;
pub mod search;
pub mod types;

///
/// CONSTANTS
///

/// Maximum expression-tree depth accepted by the compiler.
///
/// Compilation recurses once per boolean combinator, so this bounds stack
/// usage for adversarially deep trees. Deeper trees fail with a structured
/// error instead of overflowing the stack.
pub const MAX_EXPR_DEPTH: usize = 64;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors or internal helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        compile::QueryCompiler,
        expr::{Expr, FieldRef, Operation, Operator, OrderSpecifier, Value, ValueType},
        search::{Occur, Query, Sort, SortComparator},
    };
}
