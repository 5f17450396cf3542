//! Lexer for RQL expressions.
//!
//! Logos recognizes punctuation, escapes and text runs; a second pass coalesces
//! consecutive text, escape and stray-backslash pieces into one `Ident` token whose
//! text has escapes resolved.
//!
//! ## Escaping
//!
//! `\` followed by punctuation or another `\` yields that character as text.
//! Any other `\` (including a trailing one) is kept literally.

use std::ops::Range;

use logos::Logos;

use super::decode::decode;
use super::errors::LexError;

/// Pieces recognized by Logos before coalescing.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Piece {
    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token("=")]
    Equals,

    #[token("&")]
    Ampersand,

    #[token(",")]
    Comma,

    #[token("|")]
    Pipe,

    #[token(";")]
    Semicolon,

    /// Backslash plus the character it protects. Longer than `Backslash`, so it wins.
    #[regex(r"\\[()=&,|;\\]")]
    Escaped,

    #[token("\\")]
    Backslash,

    #[regex(r"[^()=&,|;\\]+", allow_greedy = true)]
    Text,
}

impl Piece {
    fn punct(self) -> Option<TokenKind> {
        match self {
            Piece::ParenOpen => Some(TokenKind::ParenOpen),
            Piece::ParenClose => Some(TokenKind::ParenClose),
            Piece::Equals => Some(TokenKind::Equals),
            Piece::Ampersand => Some(TokenKind::Ampersand),
            Piece::Comma => Some(TokenKind::Comma),
            Piece::Pipe => Some(TokenKind::Pipe),
            Piece::Semicolon => Some(TokenKind::Semicolon),
            Piece::Escaped | Piece::Backslash | Piece::Text => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Identifier or value text.
    Ident,
    ParenOpen,
    ParenClose,
    Equals,
    Ampersand,
    Comma,
    Pipe,
    Semicolon,
}

/// Logical operator family of a delimiter. Members of a family are synonyms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// `&` and `,`
    And,
    /// `|` and `;`
    Or,
}

impl Family {
    /// Operator name given to nodes built from a split on this family.
    pub fn op_name(self) -> &'static str {
        match self {
            Family::And => "AND",
            Family::Or => "OR",
        }
    }
}

impl TokenKind {
    pub fn family(self) -> Option<Family> {
        match self {
            TokenKind::Ampersand | TokenKind::Comma => Some(Family::And),
            TokenKind::Pipe | TokenKind::Semicolon => Some(Family::Or),
            _ => None,
        }
    }

    pub fn is_ident(self) -> bool {
        self == TokenKind::Ident
    }
}

/// Token with its decoded text. `span` is a byte range in the percent-decoded query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Range<usize>,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }
}

/// Percent-decodes `source`, then tokenizes it.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    Ok(tokenize(&decode(source)?))
}

/// Tokenizes already-decoded text. Never fails: any character is either
/// punctuation or part of an identifier.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = Piece::lexer(text);
    let mut ident: Option<(usize, String)> = None;

    while let Some(piece) = lexer.next() {
        let span = lexer.span();
        let slice = lexer.slice();

        let punct = match piece {
            Ok(piece) => piece.punct(),
            // Unreachable with the current patterns; keep the bytes as text regardless.
            Err(()) => None,
        };

        if let Some(kind) = punct {
            flush_ident(&mut ident, span.start, &mut tokens);
            tokens.push(Token::new(kind, slice, span));
            continue;
        }

        let (_, buf) = ident.get_or_insert_with(|| (span.start, String::new()));
        match piece {
            Ok(Piece::Escaped) => buf.push_str(&slice[1..]),
            _ => buf.push_str(slice),
        }
    }

    flush_ident(&mut ident, text.len(), &mut tokens);
    tokens
}

fn flush_ident(ident: &mut Option<(usize, String)>, end: usize, tokens: &mut Vec<Token>) {
    if let Some((start, text)) = ident.take() {
        tokens.push(Token::new(TokenKind::Ident, text, start..end));
    }
}
