
use crate::expr::{FieldRef, ValueType};

pub(crate) fn text_field(name: &str) -> FieldRef {
    FieldRef::new(name, ValueType::Text)
}

pub(crate) fn int_field(name: &str) -> FieldRef {
    FieldRef::new(name, ValueType::Int)
}

pub(crate) fn float_field(name: &str) -> FieldRef {
    FieldRef::new(name, ValueType::Float)
}
