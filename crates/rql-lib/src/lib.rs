//! RQL: parser for compact filter, sort and pagination expressions.
//!
//! # Example
//!
//! ```
//! use rql_lib::Parser;
//!
//! let root = Parser::new().parse("a=1&sort(-date)&limit(0,5)").expect("valid query");
//! assert_eq!(root.node().map(|n| n.to_string()).as_deref(), Some("eq(a,1)"));
//! assert_eq!(root.offset(), "0");
//! assert_eq!(root.limit(), "5");
//! assert!(root.sort()[0].desc);
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod ast;
pub mod colors;
pub mod diagnostics;
pub mod extract;
pub mod parser;
pub mod printer;

#[cfg(test)]
mod diagnostics_tests;
#[cfg(test)]
mod printer_tests;

pub use ast::{Arg, Node, RootNode, Sort};
pub use colors::Colors;
pub use diagnostics::ErrorPrinter;
pub use parser::{
    DEFAULT_RECURSION_FUEL, LexError, ParseError, ParseErrorKind, Parser, Token, TokenKind, lex,
    parse,
};
pub use printer::{RootPrinter, TokenPrinter};

/// Errors that can occur while parsing a query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("lexical error: {0}")]
    Lex(#[from] LexError),

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Recursion fuel exhausted (input nested too deeply).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,
}

/// Result type for query operations.
pub type Result<T> = std::result::Result<T, Error>;

impl TryFrom<&str> for RootNode {
    type Error = Error;

    fn try_from(text: &str) -> Result<Self> {
        parse(text)
    }
}

impl RootNode {
    pub fn printer(&self) -> RootPrinter<'_> {
        RootPrinter::new(self)
    }
}
