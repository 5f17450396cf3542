//! Parser facade: options and entry points.

use std::io::Read;

use crate::Result;
use crate::ast::{Node, RootNode};

use super::decode::decode;
use super::errors::LexError;
use super::grammar::Grammar;
use super::lexer::{Token, tokenize};

/// Maximum nesting of spans (groups, calls, split segments) accepted by default.
pub const DEFAULT_RECURSION_FUEL: u32 = 256;

/// Reusable, stateless parser configuration. Each call owns its tokens and tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parser {
    recursion_fuel: Option<u32>,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    pub fn new() -> Self {
        Self {
            recursion_fuel: Some(DEFAULT_RECURSION_FUEL),
        }
    }

    /// `None` removes the limit.
    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel = limit;
        self
    }

    pub fn recursion_fuel(&self) -> Option<u32> {
        self.recursion_fuel
    }

    /// Decodes, lexes and parses `text`, then extracts `limit`/`sort` into the root.
    pub fn parse(&self, text: &str) -> Result<RootNode> {
        let mut root = RootNode::new(self.parse_tree(text)?);
        root.extract_special_ops();
        Ok(root)
    }

    /// Reads `reader` to completion, then parses like [`Parser::parse`].
    pub fn parse_reader(&self, mut reader: impl Read) -> Result<RootNode> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|e| LexError::Read(e.to_string()))?;
        let text = String::from_utf8(bytes).map_err(|e| LexError::InvalidUtf8 {
            offset: e.utf8_error().valid_up_to(),
        })?;
        self.parse(&text)
    }

    /// Filter tree without special-operator extraction.
    pub fn parse_tree(&self, text: &str) -> Result<Option<Node>> {
        let decoded = decode(text)?;
        self.parse_tokens(&tokenize(&decoded))
    }

    /// Parses an already-lexed token sequence (see [`crate::lex`]).
    pub fn parse_tokens(&self, tokens: &[Token]) -> Result<Option<Node>> {
        Grammar::new(self.recursion_fuel).parse_root(tokens)
    }
}

/// Parses with default options.
pub fn parse(text: &str) -> Result<RootNode> {
    Parser::new().parse(text)
}
