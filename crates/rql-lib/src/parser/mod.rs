//! Text to tree: percent-decoding, lexing and the two-tier grammar.
//!
//! # Pipeline
//!
//! ```text
//! raw text ─decode─▶ text ─lex─▶ tokens ─grammar─▶ Node ─extract─▶ RootNode
//! ```
//!
//! Errors abort the call; no partial tree is returned.

pub mod decode;
pub mod errors;
pub mod lexer;

mod core;
mod grammar;


pub use self::core::{DEFAULT_RECURSION_FUEL, Parser, parse};
pub use decode::decode;
pub use errors::{LexError, ParseError, ParseErrorKind};
pub use lexer::{Family, Token, TokenKind, lex, tokenize};
