use crate::{compile::QueryCompiler, expr::Value};

///
/// Term tokenization
///
/// Turns one literal into the ordered term sequence a leaf query is built
/// from: optional metacharacter escaping, then whitespace splitting (always
/// for phrase literals, otherwise per the compiler flag), then case
/// normalization per token.
///

/// Index metacharacters that must be escaped before pattern affixes are
/// applied, so only compiler-added `*` act as wildcards.
const ESCAPED: &[char] = &[
    '\\', '+', '-', '!', '(', ')', ':', '^', '[', ']', '"', '{', '}', '~', '*', '?', '|', '&',
];

/// String form of a scalar literal; `None` for collections.
pub(crate) fn string_form(value: &Value) -> Option<String> {
    match value {
        Value::Int(n) => Some(n.to_string()),
        Value::Float(f) => Some(f.to_string()),
        Value::Text(s) | Value::Phrase(s) => Some(s.clone()),
        Value::List(_) => None,
    }
}

/// Backslash-escape every index metacharacter in `text`.
pub(crate) fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if ESCAPED.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }

    escaped
}

impl QueryCompiler {
    /// Tokenize a scalar literal; `None` if the literal is a collection.
    pub(crate) fn terms(&self, value: &Value) -> Option<Vec<String>> {
        let text = string_form(value)?;

        Some(self.split(value, text))
    }

    /// Tokenize with escaping applied to the string form before splitting.
    pub(crate) fn escaped_terms(&self, value: &Value) -> Option<Vec<String>> {
        let text = escape(&string_form(value)?);

        Some(self.split(value, text))
    }

    fn split(&self, value: &Value, text: String) -> Vec<String> {
        if self.split_terms || value.is_phrase() {
            text.split_whitespace().map(str::to_string).collect()
        } else {
            vec![text]
        }
    }

    /// Lowercase with the locale-independent Unicode mapping when the
    /// compiler's case-normalization flag is set; identity otherwise.
    pub(crate) fn normalize(&self, token: &str) -> String {
        if self.lower_case {
            token.to_lowercase()
        } else {
            token.to_string()
        }
    }
}

///
/// TESTS
///
