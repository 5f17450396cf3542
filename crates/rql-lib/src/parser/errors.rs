//! Error types for the decoding, lexing and grammar stages.

use std::ops::Range;

use super::lexer::Token;

/// Failure to turn raw input into text the lexer can classify.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// `%` not followed by two hex digits. `offset` is a byte offset into the raw input.
    #[error("malformed percent-encoding '{sequence}' at byte {offset}")]
    MalformedPercentEncoding { offset: usize, sequence: String },

    /// Input (after percent-decoding) is not valid UTF-8.
    #[error("invalid UTF-8 at byte {offset}")]
    InvalidUtf8 { offset: usize },

    #[error("failed to read query: {0}")]
    Read(String),
}

impl LexError {
    /// Byte range in the raw input, when the error points at one.
    pub fn span(&self) -> Option<Range<usize>> {
        match self {
            LexError::MalformedPercentEncoding { offset, sequence } => {
                Some(*offset..offset + sequence.len())
            }
            LexError::InvalidUtf8 { .. } | LexError::Read(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    UnclosedParen,
    UnexpectedCloseParen,
    /// Segment is not a group, function call, comparison or value.
    UnrecognizedBloc,
    /// `a=op=…` with a tail that is neither a value nor one parenthesized list.
    MalformedDoubleEqual,
    /// The whole query is a literal value, which has no node to return.
    BareValue,
}

impl ParseErrorKind {
    pub fn title(self) -> &'static str {
        match self {
            ParseErrorKind::UnclosedParen => "unclosed parenthesis",
            ParseErrorKind::UnexpectedCloseParen => "unexpected closing parenthesis",
            ParseErrorKind::UnrecognizedBloc => "unrecognized bloc",
            ParseErrorKind::MalformedDoubleEqual => "unrecognized double-equal bloc",
            ParseErrorKind::BareValue => "bare value is not a query",
        }
    }

    /// Short label attached to the underlined span in rendered diagnostics.
    pub fn label(self) -> &'static str {
        match self {
            ParseErrorKind::UnclosedParen => "this '(' is never closed",
            ParseErrorKind::UnexpectedCloseParen => "no matching '('",
            ParseErrorKind::UnrecognizedBloc => "expected a function call, comparison or value",
            ParseErrorKind::MalformedDoubleEqual => {
                "expected a value or a parenthesized list after the operator"
            }
            ParseErrorKind::BareValue => "wrap it in a function call or comparison",
        }
    }
}

/// Grammar failure. `tokens` holds the offending token texts, each quoted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}: {}", .kind.title(), .tokens)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Byte range in the percent-decoded query.
    pub span: Range<usize>,
    pub tokens: String,
}

impl ParseError {
    /// `fallback` positions the error when `tokens` is empty.
    pub(crate) fn new(kind: ParseErrorKind, tokens: &[Token], fallback: usize) -> Self {
        let span = match (tokens.first(), tokens.last()) {
            (Some(first), Some(last)) => first.span.start..last.span.end,
            _ => fallback..fallback,
        };
        Self {
            kind,
            span,
            tokens: quote_tokens(tokens),
        }
    }
}

/// Formats a token span as `'a' '=' 'b'`.
pub fn quote_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| format!("'{}'", t.text))
        .collect::<Vec<_>>()
        .join(" ")
}
