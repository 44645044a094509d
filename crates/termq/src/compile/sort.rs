use crate::{
    compile::QueryCompiler,
    error::{CompileError, InvalidArgument},
    expr::{Expr, OrderSpecifier, ValueType},
    search::{Sort, SortComparator, SortField},
};

impl QueryCompiler {
    /// Compile an ordered list of order specifiers into a sort descriptor.
    ///
    /// Each target must be a bare field reference; case-transform wrappers
    /// are not accepted here. The comparison kind follows the field's
    /// declared type and the direction flag is inverted into the index's
    /// native `descending`.
    #[expect(clippy::unused_self)]
    pub fn to_sort(&self, order: &[OrderSpecifier]) -> Result<Sort, CompileError> {
        let mut fields = Vec::with_capacity(order.len());

        for spec in order {
            let Expr::Field(field) = &spec.target else {
                return Err(InvalidArgument::SortTargetNotAField {
                    expr: Box::new(spec.target.clone()),
                }
                .into());
            };

            let comparator = match field.ty {
                ValueType::Int => SortComparator::Int,
                ValueType::Float => SortComparator::Float,
                ValueType::Text => SortComparator::Text,
            };

            fields.push(SortField {
                field: field.name.clone(),
                comparator,
                descending: !spec.ascending,
            });
        }

        Ok(Sort::new(fields))
    }
}
