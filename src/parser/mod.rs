//! Parser for the S-expression reader
//!
//! Consumes the token stream via recursive descent and builds form trees.

mod ast;
mod reader;

pub use ast::Form;
pub use reader::Reader;
