//! Indented dumps of trees and token streams, used by the CLI and by snapshot tests.
//!
//! ```text
//! Root
//!   Node eq
//!     Value "a"
//!     Value "1"
//!   Offset "0"
//!   Limit "5"
//!   Sort date desc
//! ```

use std::fmt::Write;

use crate::Colors;
use crate::ast::{Arg, Node, RootNode};
use crate::parser::Token;

pub struct RootPrinter<'r> {
    root: &'r RootNode,
    colors: Colors,
}

impl<'r> RootPrinter<'r> {
    pub fn new(root: &'r RootNode) -> Self {
        Self {
            root,
            colors: Colors::OFF,
        }
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colors = Colors::new(value);
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let c = self.colors;
        writeln!(w, "{}Root{}", c.label, c.reset)?;

        if let Some(node) = self.root.node() {
            format_node(node, 1, c, w)?;
        }
        if !self.root.offset().is_empty() {
            writeln!(w, "  {}Offset{} {}", c.label, c.reset, quoted(self.root.offset(), c))?;
        }
        if !self.root.limit().is_empty() {
            writeln!(w, "  {}Limit{} {}", c.label, c.reset, quoted(self.root.limit(), c))?;
        }
        for sort in self.root.sort() {
            let direction = if sort.desc { " desc" } else { "" };
            writeln!(w, "  {}Sort{} {}{direction}", c.label, c.reset, sort.by)?;
        }
        Ok(())
    }
}

/// Dump of a bare tree (no root fields).
pub fn dump_node(node: &Node) -> String {
    let mut out = String::new();
    format_node(node, 0, Colors::OFF, &mut out).expect("String write never fails");
    out
}

fn format_node(node: &Node, depth: usize, c: Colors, w: &mut impl Write) -> std::fmt::Result {
    let indent = "  ".repeat(depth);
    writeln!(w, "{indent}{}Node{} {}{}{}", c.label, c.reset, c.op, node.op, c.reset)?;

    for arg in &node.args {
        match arg {
            Arg::Node(child) => format_node(child, depth + 1, c, w)?,
            Arg::Value(value) => {
                writeln!(w, "{indent}  {}Value{} {}", c.label, c.reset, quoted(value, c))?
            }
        }
    }
    Ok(())
}

pub struct TokenPrinter<'t> {
    tokens: &'t [Token],
    spans: bool,
    colors: Colors,
}

impl<'t> TokenPrinter<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self {
            tokens,
            spans: false,
            colors: Colors::OFF,
        }
    }

    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colors = Colors::new(value);
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let c = self.colors;
        for token in self.tokens {
            write!(w, "{}{:?}{}", c.label, token.kind, c.reset)?;
            if self.spans {
                write!(w, " {}..{}", token.span.start, token.span.end)?;
            }
            writeln!(w, " {}", quoted(&token.text, c))?;
        }
        Ok(())
    }
}

fn quoted(text: &str, c: Colors) -> String {
    format!("{}{:?}{}", c.value, text, c.reset)
}
