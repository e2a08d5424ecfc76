//! Error types for the S-expression reader

use thiserror::Error;

/// Reader errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // Precondition violations
    /// Closing `]` encountered while no comment is open
    ///
    /// **Triggered by:** A `]` in the source with no matching `[` before it
    /// **Example:** `a] b` (stray close bracket)
    ///
    /// This is the bug class of failure: well-formed input never produces it,
    /// and it aborts processing with no attempt at resynchronization.
    #[error("Unbalanced comment: `]` with no matching `[`")]
    UnbalancedCommentClose,

    // Syntax errors
    /// Closing `)` encountered where a form was expected
    ///
    /// **Triggered by:** A `)` at top level, or directly after a `'`
    /// **Example:** `) define` or `(a ')`
    #[error("Unexpected `)`: close before open")]
    UnexpectedClose,

    /// Input ended directly after a `'`
    ///
    /// **Triggered by:** A quote marker with nothing left to quote
    /// **Example:** `(a b) '`
    #[error("Expected a form after `'`, found end of input")]
    ExpectedQuotedForm,

    /// Input ended while a list was still open
    ///
    /// **Triggered by:** A `(` whose matching `)` never arrives
    /// **Example:** `(head (tail x)`
    #[error("Unterminated list: expected `)` before end of input")]
    UnterminatedList,
}

/// Error class distinguishing caller-side bugs from malformed user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Precondition violation; a failure of this class is a programming bug
    /// in whatever produced the source text, not a property of user input
    Precondition,
    /// Malformed user input; expected in normal operation
    Syntax,
}

impl Error {
    /// Classify the error so callers can treat malformed-comment input as a
    /// bug and malformed-form input as a user error.
    pub fn classify(&self) -> ErrorClass {
        match self {
            Error::UnbalancedCommentClose => ErrorClass::Precondition,

            Error::UnexpectedClose => ErrorClass::Syntax,
            Error::ExpectedQuotedForm => ErrorClass::Syntax,
            Error::UnterminatedList => ErrorClass::Syntax,
        }
    }
}

/// Result type for reader operations
pub type Result<T> = std::result::Result<T, Error>;
