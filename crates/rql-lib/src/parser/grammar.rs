//! Recursive-descent grammar over token slices.
//!
//! Two tiers:
//! - Tier 1 splits a segment on depth-0 delimiters. The first delimiter found fixes the
//!   family (`&`/`,` or `|`/`;`); only delimiters of that family split further.
//! - Tier 2 matches the bloc shapes: value, group, function call, `a=b`, `a=op=b`.
//!
//! Every recursive call receives a strictly smaller slice.

use crate::ast::{Arg, Node};
use crate::{Error, Result};

use super::errors::{ParseError, ParseErrorKind};
use super::lexer::{Family, Token, TokenKind};

/// Result of parsing a span: either a node or a literal the caller inlines into its args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Bloc {
    Node(Node),
    Literal(String),
}

impl Bloc {
    fn into_arg(self) -> Arg {
        match self {
            Bloc::Node(node) => Arg::Node(node),
            Bloc::Literal(value) => Arg::Value(value),
        }
    }
}

impl From<Arg> for Bloc {
    fn from(arg: Arg) -> Self {
        match arg {
            Arg::Node(node) => Bloc::Node(node),
            Arg::Value(value) => Bloc::Literal(value),
        }
    }
}

pub(super) struct Grammar {
    depth: u32,
    recursion_fuel: Option<u32>,
}

impl Grammar {
    pub(super) fn new(recursion_fuel: Option<u32>) -> Self {
        Self {
            depth: 0,
            recursion_fuel,
        }
    }

    /// Parses a whole query. Empty input has no filter.
    pub(super) fn parse_root(&mut self, tokens: &[Token]) -> Result<Option<Node>> {
        if tokens.is_empty() {
            return Ok(None);
        }
        check_balance(tokens)?;

        match self.parse_expr(tokens)? {
            Bloc::Node(node) => Ok(Some(node)),
            Bloc::Literal(_) => Err(ParseError::new(ParseErrorKind::BareValue, tokens, 0).into()),
        }
    }

    fn parse_expr(&mut self, tokens: &[Token]) -> Result<Bloc> {
        if self.recursion_fuel.is_some_and(|limit| self.depth >= limit) {
            return Err(Error::RecursionLimitExceeded);
        }
        self.depth += 1;
        let result = self.expr(tokens);
        self.depth -= 1;
        result
    }

    fn expr(&mut self, tokens: &[Token]) -> Result<Bloc> {
        let Some((family, segments)) = split_by_family(tokens) else {
            return self.parse_bloc(tokens);
        };

        let mut args = Vec::with_capacity(segments.len());
        for segment in segments.into_iter().filter(|s| !s.is_empty()) {
            args.push(self.parse_expr(segment)?.into_arg());
        }

        if args.len() > 1 {
            return Ok(Bloc::Node(Node::new(family.op_name(), args)));
        }
        Ok(args
            .pop()
            .map_or_else(|| Bloc::Literal(String::new()), Bloc::from))
    }

    fn parse_bloc(&mut self, tokens: &[Token]) -> Result<Bloc> {
        use TokenKind::*;

        let fallback = tokens.first().map_or(0, |t| t.span.start);
        match tokens {
            [] => Ok(Bloc::Literal(String::new())),
            [value] if value.kind.is_ident() => Ok(Bloc::Literal(value.text.clone())),
            [open, .., _] if open.kind == ParenOpen && wraps_rest(tokens, 0) => {
                self.parse_expr(&tokens[1..tokens.len() - 1])
            }
            [name, open, ..] if name.kind.is_ident() && open.kind == ParenOpen => {
                if !wraps_rest(tokens, 1) {
                    return Err(
                        ParseError::new(ParseErrorKind::UnrecognizedBloc, tokens, fallback).into(),
                    );
                }
                let args = self.parse_args(&tokens[2..tokens.len() - 1])?;
                Ok(Bloc::Node(Node::new(name.text.clone(), args)))
            }
            [left, eq1, op, eq2, ..]
                if left.kind.is_ident()
                    && eq1.kind == Equals
                    && op.kind.is_ident()
                    && eq2.kind == Equals =>
            {
                self.parse_double_equal(tokens)
            }
            // Anything after `left=right` that is not a second `=` is ignored.
            [left, eq, right, ..]
                if left.kind.is_ident() && eq.kind == Equals && right.kind.is_ident() =>
            {
                Ok(Bloc::Node(Node::new(
                    "eq",
                    vec![Arg::value(&left.text), Arg::value(&right.text)],
                )))
            }
            _ => Err(ParseError::new(ParseErrorKind::UnrecognizedBloc, tokens, fallback).into()),
        }
    }

    /// `left=op=value` or `left=op=(v1,v2,…)`; `op` becomes the node operator.
    fn parse_double_equal(&mut self, tokens: &[Token]) -> Result<Bloc> {
        let mut args = vec![Arg::value(&tokens[0].text)];

        match &tokens[4..] {
            [value] if value.kind.is_ident() => args.push(Arg::value(&value.text)),
            [open, .., _] if open.kind == TokenKind::ParenOpen && wraps_rest(tokens, 4) => {
                args.extend(self.parse_args(&tokens[5..tokens.len() - 1])?);
            }
            _ => {
                return Err(ParseError::new(
                    ParseErrorKind::MalformedDoubleEqual,
                    tokens,
                    tokens[0].span.start,
                )
                .into());
            }
        }

        Ok(Bloc::Node(Node::new(tokens[2].text.clone(), args)))
    }

    /// Splits a parenthesis interior on depth-0 commas. `f()` has no args; an empty
    /// segment in a non-empty list is the empty string.
    fn parse_args(&mut self, tokens: &[Token]) -> Result<Vec<Arg>> {
        if tokens.is_empty() {
            return Ok(Vec::new());
        }

        let segments = split_on_commas(tokens);
        let mut args = Vec::with_capacity(segments.len());
        for segment in segments {
            args.push(self.parse_expr(segment)?.into_arg());
        }
        Ok(args)
    }
}

/// Tier-1 split. Returns `None` when the segment has no depth-0 delimiter.
fn split_by_family(tokens: &[Token]) -> Option<(Family, Vec<&[Token]>)> {
    let mut depth = 0usize;
    let mut family: Option<Family> = None;
    let mut segments = Vec::new();
    let mut start = 0;

    for (i, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::ParenOpen => depth += 1,
            TokenKind::ParenClose => depth = depth.saturating_sub(1),
            kind if depth == 0 => {
                let Some(found) = kind.family() else {
                    continue;
                };
                if family.is_none_or(|current| current == found) {
                    family = Some(found);
                    segments.push(&tokens[start..i]);
                    start = i + 1;
                }
            }
            _ => {}
        }
    }

    let family = family?;
    segments.push(&tokens[start..]);
    Some((family, segments))
}

fn split_on_commas(tokens: &[Token]) -> Vec<&[Token]> {
    let mut depth = 0usize;
    let mut segments = Vec::new();
    let mut start = 0;

    for (i, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::ParenOpen => depth += 1,
            TokenKind::ParenClose => depth = depth.saturating_sub(1),
            TokenKind::Comma if depth == 0 => {
                segments.push(&tokens[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    segments.push(&tokens[start..]);
    segments
}

/// Index of the `)` matching the `(` at `open`.
fn matching_close(tokens: &[Token], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, token) in tokens.iter().enumerate().skip(open) {
        match token.kind {
            TokenKind::ParenOpen => depth += 1,
            TokenKind::ParenClose => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// The `(` at `open` is closed by the last token of the slice.
fn wraps_rest(tokens: &[Token], open: usize) -> bool {
    tokens.get(open).is_some_and(|t| t.kind == TokenKind::ParenOpen)
        && matching_close(tokens, open) == Some(tokens.len() - 1)
}

/// Rejects any unmatched parenthesis before the grammar runs.
pub(super) fn check_balance(tokens: &[Token]) -> Result<()> {
    let mut open = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::ParenOpen => open.push(i),
            TokenKind::ParenClose if open.pop().is_none() => {
                return Err(ParseError::new(
                    ParseErrorKind::UnexpectedCloseParen,
                    &tokens[i..=i],
                    token.span.start,
                )
                .into());
            }
            _ => {}
        }
    }

    if let Some(&first) = open.first() {
        return Err(ParseError::new(
            ParseErrorKind::UnclosedParen,
            &tokens[first..],
            tokens[first].span.start,
        )
        .into());
    }

    Ok(())
}
