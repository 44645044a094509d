mod range;
mod sort;
mod terms;

#[cfg(test)]
mod tests;

use crate::{
    MAX_EXPR_DEPTH,
    error::{CompileError, InvalidArgument},
    expr::{Expr, FieldRef, Operation, Operator, Value},
    search::{BooleanClause, Occur, PhraseQuery, PrefixQuery, Query, TermQuery, WildcardQuery},
};

///
/// QueryCompiler
///
/// Compiles an expression tree into one search query, and an order-specifier
/// list into one sort descriptor. The two configuration flags are fixed at
/// construction; the compiler holds no other state and may be shared freely
/// across threads.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct QueryCompiler {
    lower_case: bool,
    split_terms: bool,
}

impl QueryCompiler {
    /// Case-sensitive, term-splitting compiler.
    pub const DEFAULT: Self = Self::new(false, true);

    #[must_use]
    pub const fn new(lower_case: bool, split_terms: bool) -> Self {
        Self {
            lower_case,
            split_terms,
        }
    }

    /// Compile an expression tree into a search query.
    ///
    /// Fails on the first structural violation or unknown operator; no
    /// partial query is ever returned.
    pub fn compile(&self, expr: &Expr) -> Result<Query, CompileError> {
        self.compile_at(expr, 0)
    }

    fn compile_at(&self, expr: &Expr, depth: usize) -> Result<Query, CompileError> {
        if depth >= MAX_EXPR_DEPTH {
            return Err(CompileError::DepthExceeded {
                limit: MAX_EXPR_DEPTH,
            });
        }

        match expr {
            Expr::Op(operation) => self.operation(operation, depth),
            Expr::Field(_) | Expr::Literal(_) => Err(InvalidArgument::NotAnOperation {
                expr: Box::new(expr.clone()),
            }
            .into()),
        }
    }

    fn operation(&self, operation: &Operation, depth: usize) -> Result<Query, CompileError> {
        match operation.op {
            Operator::Or => self.two_sided(operation, Occur::Should, depth),
            Operator::And => self.two_sided(operation, Occur::Must, depth),
            Operator::Not => {
                let inner = self.compile_at(arg(operation, 0)?, depth + 1)?;

                // A clause set holding only a MustNot entry matches nothing
                // under standard boolean semantics. Kept as compiled.
                Ok(Query::boolean(vec![BooleanClause::must_not(inner)]))
            }
            Operator::Like => self.like(operation),
            Operator::Eq | Operator::EqIgnoreCase => self.eq(operation),
            Operator::Ne => self.ne(operation),
            Operator::StartsWith | Operator::StartsWithIc => self.starts_with(operation),
            Operator::EndsWith | Operator::EndsWithIc => self.ends_with(operation),
            Operator::Contains | Operator::ContainsIc => self.contains(operation),
            Operator::Between => self.between(operation),
            Operator::In => self.in_(operation),
            Operator::Lt | Operator::Before => self.lt(operation),
            Operator::Gt | Operator::After => self.gt(operation),
            Operator::Loe | Operator::Boe => self.loe(operation),
            Operator::Goe | Operator::Aoe => self.goe(operation),

            // case wrappers are only legal in field position
            Operator::Lower | Operator::Upper => Err(CompileError::UnsupportedOperator {
                op: operation.op,
                expr: Box::new(operation.clone()),
            }),
        }
    }

    fn two_sided(
        &self,
        operation: &Operation,
        occur: Occur,
        depth: usize,
    ) -> Result<Query, CompileError> {
        let lhs = self.compile_at(arg(operation, 0)?, depth + 1)?;
        let rhs = self.compile_at(arg(operation, 1)?, depth + 1)?;

        Ok(Query::boolean(vec![
            BooleanClause::new(occur, lhs),
            BooleanClause::new(occur, rhs),
        ]))
    }

    fn like(&self, operation: &Operation) -> Result<Query, CompileError> {
        verify_arguments(operation)?;
        let field = resolve_field(operation)?;
        let literal = literal_at(operation, 1)?;
        let terms = self.tokens(operation.op, &field, literal, false)?;

        if terms.len() > 1 {
            let clauses = terms
                .iter()
                .map(|term| {
                    let pattern = format!("*{}*", self.normalize(term));
                    BooleanClause::must(Query::Wildcard(WildcardQuery::new(&field, pattern)))
                })
                .collect();
            return Ok(Query::boolean(clauses));
        }

        // caller-supplied wildcard syntax passes through verbatim
        let pattern = self.normalize(&terms[0]);

        Ok(Query::Wildcard(WildcardQuery::new(field, pattern)))
    }

    fn eq(&self, operation: &Operation) -> Result<Query, CompileError> {
        verify_arguments(operation)?;
        let field = resolve_field(operation)?;

        match literal_at(operation, 1)? {
            Value::Int(n) => Ok(Query::Term(TermQuery::int(field, *n))),
            Value::Float(f) => Ok(Query::Term(TermQuery::float(field, *f))),
            literal => {
                let terms = self.tokens(operation.op, &field, literal, false)?;
                Ok(self.eq_terms(field, &terms))
            }
        }
    }

    /// Term or phrase leaf from already-tokenized terms.
    fn eq_terms(&self, field: String, terms: &[String]) -> Query {
        if terms.len() > 1 {
            let terms = terms.iter().map(|term| self.normalize(term)).collect();
            return Query::Phrase(PhraseQuery::new(field, terms));
        }

        Query::Term(TermQuery::text(field, self.normalize(&terms[0])))
    }

    fn ne(&self, operation: &Operation) -> Result<Query, CompileError> {
        let positive = self.eq(operation)?;

        Ok(Query::boolean(vec![BooleanClause::must_not(positive)]))
    }

    fn starts_with(&self, operation: &Operation) -> Result<Query, CompileError> {
        verify_arguments(operation)?;
        let field = resolve_field(operation)?;
        let literal = literal_at(operation, 1)?;
        let terms = self.tokens(operation.op, &field, literal, true)?;

        if terms.len() > 1 {
            let clauses = terms
                .iter()
                .enumerate()
                .map(|(i, term)| {
                    let pattern = if i == 0 {
                        format!("{term}*")
                    } else {
                        format!("*{term}*")
                    };
                    let query =
                        Query::Wildcard(WildcardQuery::new(&field, self.normalize(&pattern)));
                    BooleanClause::must(query)
                })
                .collect();
            return Ok(Query::boolean(clauses));
        }

        let prefix = self.normalize(&terms[0]);

        Ok(Query::Prefix(PrefixQuery::new(field, prefix)))
    }

    fn ends_with(&self, operation: &Operation) -> Result<Query, CompileError> {
        verify_arguments(operation)?;
        let field = resolve_field(operation)?;
        let literal = literal_at(operation, 1)?;
        let terms = self.tokens(operation.op, &field, literal, true)?;

        if terms.len() > 1 {
            let last = terms.len() - 1;
            let clauses = terms
                .iter()
                .enumerate()
                .map(|(i, term)| {
                    let pattern = if i == last {
                        format!("*{term}")
                    } else {
                        format!("*{term}*")
                    };
                    let query =
                        Query::Wildcard(WildcardQuery::new(&field, self.normalize(&pattern)));
                    BooleanClause::must(query)
                })
                .collect();
            return Ok(Query::boolean(clauses));
        }

        let pattern = format!("*{}", self.normalize(&terms[0]));

        Ok(Query::Wildcard(WildcardQuery::new(field, pattern)))
    }

    fn contains(&self, operation: &Operation) -> Result<Query, CompileError> {
        verify_arguments(operation)?;
        let field = resolve_field(operation)?;
        let literal = literal_at(operation, 1)?;
        let terms = self.tokens(operation.op, &field, literal, true)?;

        // every token is wildcarded independently, even for a single term
        if terms.len() > 1 {
            let clauses = terms
                .iter()
                .map(|term| {
                    let pattern = format!("*{}*", self.normalize(term));
                    BooleanClause::must(Query::Wildcard(WildcardQuery::new(&field, pattern)))
                })
                .collect();
            return Ok(Query::boolean(clauses));
        }

        let pattern = format!("*{}*", self.normalize(&terms[0]));

        Ok(Query::Wildcard(WildcardQuery::new(field, pattern)))
    }

    fn between(&self, operation: &Operation) -> Result<Query, CompileError> {
        verify_arguments(operation)?;
        let field = resolve_field(operation)?;
        let min = literal_at(operation, 1)?;
        let max = literal_at(operation, 2)?;

        self.range(operation.op, field, Some(min), Some(max), true, true)
    }

    fn lt(&self, operation: &Operation) -> Result<Query, CompileError> {
        verify_arguments(operation)?;
        let field = resolve_field(operation)?;
        let max = literal_at(operation, 1)?;

        self.range(operation.op, field, None, Some(max), false, false)
    }

    fn gt(&self, operation: &Operation) -> Result<Query, CompileError> {
        verify_arguments(operation)?;
        let field = resolve_field(operation)?;
        let min = literal_at(operation, 1)?;

        self.range(operation.op, field, Some(min), None, false, false)
    }

    fn loe(&self, operation: &Operation) -> Result<Query, CompileError> {
        verify_arguments(operation)?;
        let field = resolve_field(operation)?;
        let max = literal_at(operation, 1)?;

        self.range(operation.op, field, None, Some(max), true, true)
    }

    fn goe(&self, operation: &Operation) -> Result<Query, CompileError> {
        verify_arguments(operation)?;
        let field = resolve_field(operation)?;
        let min = literal_at(operation, 1)?;

        self.range(operation.op, field, Some(min), None, true, true)
    }

    fn in_(&self, operation: &Operation) -> Result<Query, CompileError> {
        let op = operation.op;
        let field = resolve_field(operation)?;

        let Value::List(values) = literal_at(operation, 1)? else {
            return Err(InvalidArgument::NotACollection { op }.into());
        };

        let mut clauses = Vec::with_capacity(values.len());
        for value in values {
            // element terms are whitespace-split regardless of the
            // compiler's splitting flag
            let text = terms::string_form(value)
                .ok_or(InvalidArgument::NotALiteral { op, position: 1 })?;
            let terms: Vec<String> = text.split_whitespace().map(str::to_string).collect();
            if terms.is_empty() {
                return Err(InvalidArgument::EmptyTerms {
                    op,
                    field: field.clone(),
                }
                .into());
            }

            clauses.push(BooleanClause::should(
                self.eq_terms(field.clone(), &terms),
            ));
        }

        Ok(Query::boolean(clauses))
    }

    /// Tokenize the literal and require at least one term.
    fn tokens(
        &self,
        op: Operator,
        field: &str,
        literal: &Value,
        escape: bool,
    ) -> Result<Vec<String>, CompileError> {
        let terms = if escape {
            self.escaped_terms(literal)
        } else {
            self.terms(literal)
        };
        let terms = terms.ok_or(InvalidArgument::NotALiteral { op, position: 1 })?;

        if terms.is_empty() {
            return Err(InvalidArgument::EmptyTerms {
                op,
                field: field.to_string(),
            }
            .into());
        }

        Ok(terms)
    }
}

///
/// ARGUMENT ACCESS
///

fn arg(operation: &Operation, position: usize) -> Result<&Expr, CompileError> {
    operation.args.get(position).ok_or_else(|| {
        InvalidArgument::MissingArgument {
            op: operation.op,
            position,
        }
        .into()
    })
}

fn literal_at(operation: &Operation, position: usize) -> Result<&Value, CompileError> {
    match arg(operation, position)? {
        Expr::Literal(value) => Ok(value),
        Expr::Op(_) | Expr::Field(_) => Err(InvalidArgument::NotALiteral {
            op: operation.op,
            position,
        }
        .into()),
    }
}

/// Resolve the operation's first argument to a field name.
///
/// Accepts a bare field reference, or a `Lower`/`Upper` operation whose sole
/// argument is one. The wrapper is unwrapped exactly one level and only the
/// name is used; the case transform itself does not affect the compiled
/// query.
fn resolve_field(operation: &Operation) -> Result<String, CompileError> {
    let target = arg(operation, 0)?;

    if let Expr::Field(FieldRef { name, .. }) = target {
        return Ok(name.clone());
    }

    if let Expr::Op(inner) = target
        && matches!(inner.op, Operator::Lower | Operator::Upper)
        && let [Expr::Field(FieldRef { name, .. })] = inner.args.as_slice()
    {
        return Ok(name.clone());
    }

    Err(InvalidArgument::NotAField {
        op: operation.op,
        expr: Box::new(target.clone()),
    }
    .into())
}

/// Every argument past index 0 must be a literal; checked before any leaf is
/// constructed.
fn verify_arguments(operation: &Operation) -> Result<(), CompileError> {
    for (position, arg) in operation.args.iter().enumerate().skip(1) {
        if !matches!(arg, Expr::Literal(_)) {
            return Err(InvalidArgument::NotALiteral {
                op: operation.op,
                position,
            }
            .into());
        }
    }

    Ok(())
}
