use serde::{Deserialize, Serialize};
use std::fmt;

/// A single parsed unit
///
/// A form is a word, a quoted form, or a list of forms. Forms own their
/// children outright: no sharing, no cycles, a node is dropped when its
/// parent (or the top-level result vector) is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Form {
    /// A bare word, holding the literal token text
    Word(String),
    /// A quoted form: `'form`
    Quote(Box<Form>),
    /// A parenthesized list of zero or more forms: `(a b c)`
    List(Vec<Form>),
}

impl Form {
    /// Creates a word form
    pub fn word(text: impl Into<String>) -> Self {
        Form::Word(text.into())
    }

    /// Creates a quote form wrapping `inner`
    pub fn quote(inner: Form) -> Self {
        Form::Quote(Box::new(inner))
    }

    /// Creates a list form from its items
    pub fn list(items: Vec<Form>) -> Self {
        Form::List(items)
    }
}

/// Writes the canonical surface syntax of a form.
///
/// Re-parsing the printed text reproduces an equal tree, provided every
/// word came through the scanner (scanner-produced words never contain
/// separators or delimiters).
impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Form::Word(text) => write!(f, "{}", text),
            Form::Quote(inner) => write!(f, "'{}", inner),
            Form::List(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_word() {
        assert_eq!(Form::word("define").to_string(), "define");
    }

    #[test]
    fn test_display_nested_quote() {
        let form = Form::quote(Form::quote(Form::word("a")));
        assert_eq!(form.to_string(), "''a");
    }

    #[test]
    fn test_display_list() {
        let form = Form::list(vec![
            Form::word("head"),
            Form::list(vec![]),
            Form::quote(Form::word("x")),
        ]);
        assert_eq!(form.to_string(), "(head () 'x)");
    }

    #[test]
    fn test_json_round_trip() {
        let form = Form::list(vec![Form::word("a"), Form::quote(Form::word("b"))]);
        let json = serde_json::to_string(&form).unwrap();
        let back: Form = serde_json::from_str(&json).unwrap();
        assert_eq!(back, form);
    }
}
