//! Lexical analysis for the S-expression reader
//!
//! Strips bracket comments from source text, then converts the filtered
//! text into a stream of tokens.

mod comment_filter;
mod scanner;
mod token;

pub use comment_filter::strip_comments;
pub use scanner::Scanner;
pub use token::{Token, TokenKind};
