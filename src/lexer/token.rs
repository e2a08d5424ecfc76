use serde::{Deserialize, Serialize};
use std::fmt;

/// A single token from filtered source text
///
/// A token is just its text: one of the delimiters `'`, `(`, `)`, or a
/// maximal run of word characters. The kind is classified from the content
/// on demand rather than stored alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token(String);

impl Token {
    /// Creates a token from its text
    pub fn new(text: impl Into<String>) -> Self {
        Token(text.into())
    }

    /// The token's text
    pub fn text(&self) -> &str {
        &self.0
    }

    /// Consumes the token, returning its text
    pub fn into_text(self) -> String {
        self.0
    }

    /// Classifies the token by its content
    pub fn kind(&self) -> TokenKind {
        match self.0.as_str() {
            "(" => TokenKind::OpenParen,
            ")" => TokenKind::CloseParen,
            "'" => TokenKind::Quote,
            _ => TokenKind::Word,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The four token kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    /// Left parenthesis `(`
    OpenParen,
    /// Right parenthesis `)`
    CloseParen,
    /// Quote marker `'`
    Quote,
    /// A word run (any other non-whitespace text)
    Word,
}
