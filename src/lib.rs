//! # sexform - A small S-expression reader
//!
//! Reads a textual S-expression language into an in-memory tree of forms.
//! Three stages run as a strict pipeline:
//!
//! ```text
//! Source Code → Comment Filter → Scanner → Tokens → Reader → Forms
//! ```
//!
//! - [`strip_comments`] removes bracket comments `[...]`, which nest
//!   arbitrarily deeply
//! - [`Scanner`] tokenizes the filtered text: `'`, `(`, `)` are singleton
//!   tokens, anything else groups into whitespace-separated words
//! - [`Reader`] parses the tokens into [`Form`] trees by recursive descent
//!
//! The tree is purely syntactic: no evaluation, no symbol resolution, no
//! numeric literal typing.
//!
//! ## Quick Start
//!
//! ```rust
//! use sexform::{parse, Form};
//!
//! # fn main() -> sexform::Result<()> {
//! let forms = parse("(head [drop the first cell] 0) ' define")?;
//!
//! assert_eq!(
//!     forms,
//!     vec![
//!         Form::list(vec![Form::word("head"), Form::word("0")]),
//!         Form::quote(Form::word("define")),
//!     ]
//! );
//! # Ok(())
//! # }
//! ```
//!
//! Stages can also be driven individually:
//!
//! ```rust
//! use sexform::{strip_comments, Reader, Scanner};
//!
//! # fn main() -> sexform::Result<()> {
//! let filtered = strip_comments("'x [note]")?;
//! let tokens = Scanner::new(&filtered).scan_tokens();
//! let forms = Reader::new(tokens).parse()?;
//! assert_eq!(forms.len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Failures come in two classes, distinguished by [`Error::classify`]:
//! a stray `]` is a precondition violation (a bug in whatever produced the
//! source), while malformed forms — `)` before any `(`, a trailing `'`, an
//! unclosed list — are ordinary syntax errors. Either way the whole parse
//! fails atomically; no partial tree is ever returned.
//!
//! ## Format quirks
//!
//! Two behaviors are historical quirks of the format, preserved on purpose
//! rather than fixed:
//!
//! - An unterminated `[` comment is not an error; it silently consumes the
//!   rest of the input.
//! - Only the literal space and newline characters separate words. A tab
//!   does not: `a\tb` is one word.
//!
//! ## Concurrency
//!
//! The pipeline is a pure function of its input string: no I/O, no shared
//! state between calls. Independent inputs may be parsed from any number
//! of threads concurrently.

/// Version of the sexform reader
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;
pub mod parser;

// Re-export main types
pub use error::{Error, ErrorClass, Result};
pub use lexer::{strip_comments, Scanner, Token, TokenKind};
pub use parser::{Form, Reader};

use tracing::debug;

/// Parses raw source text into its sequence of top-level forms.
///
/// Runs the full pipeline: comment stripping, tokenization, and the
/// recursive descent read. See the crate docs for the error classes and
/// the preserved format quirks.
pub fn parse(source: &str) -> Result<Vec<Form>> {
    let filtered = strip_comments(source)?;
    debug!(
        source_len = source.len(),
        filtered_len = filtered.len(),
        "stripped comments"
    );

    let tokens = Scanner::new(&filtered).scan_tokens();
    debug!(token_count = tokens.len(), "scanned tokens");

    let forms = Reader::new(tokens).parse()?;
    debug!(form_count = forms.len(), "read forms");

    Ok(forms)
}
