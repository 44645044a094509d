mod value;

pub use value::{Value, ValueType};

use derive_more::Display;
use std::ops::{BitAnd, BitOr};

///
/// Expression AST
///
/// Pure, backend-agnostic representation of query predicates as built by a
/// fluent query layer. This module carries no compilation semantics; all
/// interpretation happens in `compile`.
///

///
/// Operator
///
/// Closed operator vocabulary understood by the compiler. The temporal
/// aliases (`Before`/`After`/`Boe`/`Aoe`) compile identically to their
/// comparison twins. `Lower`/`Upper` are case-transform wrappers that are
/// only legal directly around a field reference.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Operator {
    And,
    Or,
    Not,
    Like,
    Eq,
    EqIgnoreCase,
    Ne,
    StartsWith,
    StartsWithIc,
    EndsWith,
    EndsWithIc,
    Contains,
    ContainsIc,
    Between,
    In,
    Lt,
    Gt,
    Loe,
    Goe,
    Before,
    After,
    Boe,
    Aoe,
    Lower,
    Upper,
}

///
/// FieldRef
///
/// Dotted field name plus the declared value type of the field. The type
/// drives numeric-vs-lexicographic branching in range and sort compilation.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldRef {
    pub name: String,
    pub ty: ValueType,
}

impl FieldRef {
    #[must_use]
    pub fn new(name: impl Into<String>, ty: ValueType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

///
/// Operation
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Operation {
    pub op: Operator,
    pub args: Vec<Expr>,
}

impl Operation {
    #[must_use]
    pub const fn new(op: Operator, args: Vec<Expr>) -> Self {
        Self { op, args }
    }

    /// Shorthand for the common `field <op> literal` shape.
    #[must_use]
    pub fn binary(op: Operator, field: FieldRef, value: Value) -> Self {
        Self::new(op, vec![Expr::Field(field), Expr::Literal(value)])
    }
}

///
/// Expr
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Expr {
    Op(Operation),
    Field(FieldRef),
    Literal(Value),
}

impl Expr {
    #[must_use]
    pub fn and(lhs: Self, rhs: Self) -> Self {
        Self::Op(Operation::new(Operator::And, vec![lhs, rhs]))
    }

    #[must_use]
    pub fn or(lhs: Self, rhs: Self) -> Self {
        Self::Op(Operation::new(Operator::Or, vec![lhs, rhs]))
    }

    #[expect(clippy::should_implement_trait)]
    #[must_use]
    pub fn not(expr: Self) -> Self {
        Self::Op(Operation::new(Operator::Not, vec![expr]))
    }

    #[must_use]
    pub fn eq(field: FieldRef, value: Value) -> Self {
        Self::Op(Operation::binary(Operator::Eq, field, value))
    }

    #[must_use]
    pub fn ne(field: FieldRef, value: Value) -> Self {
        Self::Op(Operation::binary(Operator::Ne, field, value))
    }

    #[must_use]
    pub fn like(field: FieldRef, value: Value) -> Self {
        Self::Op(Operation::binary(Operator::Like, field, value))
    }

    #[must_use]
    pub fn starts_with(field: FieldRef, value: Value) -> Self {
        Self::Op(Operation::binary(Operator::StartsWith, field, value))
    }

    #[must_use]
    pub fn ends_with(field: FieldRef, value: Value) -> Self {
        Self::Op(Operation::binary(Operator::EndsWith, field, value))
    }

    #[must_use]
    pub fn contains(field: FieldRef, value: Value) -> Self {
        Self::Op(Operation::binary(Operator::Contains, field, value))
    }

    #[must_use]
    pub fn between(field: FieldRef, min: Value, max: Value) -> Self {
        Self::Op(Operation::new(
            Operator::Between,
            vec![Self::Field(field), Self::Literal(min), Self::Literal(max)],
        ))
    }

    #[must_use]
    pub fn in_(field: FieldRef, values: Vec<Value>) -> Self {
        Self::Op(Operation::binary(Operator::In, field, Value::List(values)))
    }

    #[must_use]
    pub fn lt(field: FieldRef, value: Value) -> Self {
        Self::Op(Operation::binary(Operator::Lt, field, value))
    }

    #[must_use]
    pub fn gt(field: FieldRef, value: Value) -> Self {
        Self::Op(Operation::binary(Operator::Gt, field, value))
    }

    #[must_use]
    pub fn loe(field: FieldRef, value: Value) -> Self {
        Self::Op(Operation::binary(Operator::Loe, field, value))
    }

    #[must_use]
    pub fn goe(field: FieldRef, value: Value) -> Self {
        Self::Op(Operation::binary(Operator::Goe, field, value))
    }
}

impl From<FieldRef> for Expr {
    fn from(field: FieldRef) -> Self {
        Self::Field(field)
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::Literal(value)
    }
}

impl From<Operation> for Expr {
    fn from(operation: Operation) -> Self {
        Self::Op(operation)
    }
}

impl BitAnd for Expr {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::and(self, rhs)
    }
}

impl BitOr for Expr {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::or(self, rhs)
    }
}

///
/// OrderSpecifier
///
/// One `order by` entry. The target must reduce to a bare field reference
/// when sort compilation runs.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrderSpecifier {
    pub target: Expr,
    pub ascending: bool,
}

impl OrderSpecifier {
    #[must_use]
    pub fn asc(field: FieldRef) -> Self {
        Self {
            target: Expr::Field(field),
            ascending: true,
        }
    }

    #[must_use]
    pub fn desc(field: FieldRef) -> Self {
        Self {
            target: Expr::Field(field),
            ascending: false,
        }
    }
}
