//! Query tree: operator nodes, literal values and the root carrying pagination/sort.

use std::fmt;

use serde::Serialize;

/// Operator applied to arguments. `op` is opaque: any function or comparator name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Node {
    pub op: String,
    pub args: Vec<Arg>,
}

/// Node argument: a nested node or a literal value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Arg {
    Node(Node),
    Value(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Sort {
    pub by: String,
    pub desc: bool,
}

/// Parse result: optional filter tree plus extracted `limit`/`sort` data.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RootNode {
    pub(crate) node: Option<Node>,
    pub(crate) offset: String,
    pub(crate) limit: String,
    pub(crate) sort: Vec<Sort>,
    #[serde(skip)]
    pub(crate) extracted: bool,
}

impl Node {
    pub fn new(op: impl Into<String>, args: Vec<Arg>) -> Self {
        Self {
            op: op.into(),
            args,
        }
    }

    /// ASCII case-insensitive operator comparison.
    pub fn is_op(&self, name: &str) -> bool {
        self.op.eq_ignore_ascii_case(name)
    }

    /// Literal arguments, skipping nested nodes.
    pub fn values(&self) -> impl Iterator<Item = &str> + '_ {
        self.args.iter().filter_map(Arg::as_value)
    }

    pub fn children(&self) -> impl Iterator<Item = &Node> + '_ {
        self.args.iter().filter_map(Arg::as_node)
    }

    /// Nesting depth; a node with only literal args has depth 1.
    pub fn depth(&self) -> usize {
        1 + self.children().map(Node::depth).max().unwrap_or(0)
    }
}

impl Arg {
    pub fn value(text: impl Into<String>) -> Self {
        Arg::Value(text.into())
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Arg::Node(node) => Some(node),
            Arg::Value(_) => None,
        }
    }

    pub fn as_value(&self) -> Option<&str> {
        match self {
            Arg::Value(value) => Some(value),
            Arg::Node(_) => None,
        }
    }
}

impl From<Node> for Arg {
    fn from(node: Node) -> Self {
        Arg::Node(node)
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Value(value.to_owned())
    }
}

impl Sort {
    /// Reads a sort property: leading `+` means ascending, `-` descending.
    pub fn from_property(property: &str) -> Self {
        if let Some(by) = property.strip_prefix('-') {
            return Self {
                by: by.to_owned(),
                desc: true,
            };
        }
        Self {
            by: property.strip_prefix('+').unwrap_or(property).to_owned(),
            desc: false,
        }
    }
}

impl RootNode {
    /// Root over a hand-built tree. Special operators are not extracted yet.
    pub fn new(node: Option<Node>) -> Self {
        Self {
            node,
            ..Self::default()
        }
    }

    pub fn node(&self) -> Option<&Node> {
        self.node.as_ref()
    }

    pub fn into_node(self) -> Option<Node> {
        self.node
    }

    /// Raw offset text; empty if unspecified.
    pub fn offset(&self) -> &str {
        &self.offset
    }

    /// Raw limit text; empty if unspecified.
    pub fn limit(&self) -> &str {
        &self.limit
    }

    /// Offset as a number; 0 when absent or not an integer.
    pub fn offset_as_int(&self) -> i64 {
        self.offset.parse().unwrap_or(0)
    }

    /// Limit as a number; 0 when absent or not an integer.
    pub fn limit_as_int(&self) -> i64 {
        self.limit.parse().unwrap_or(0)
    }

    pub fn sort(&self) -> &[Sort] {
        &self.sort
    }
}

// `extracted` is bookkeeping, not content.
impl PartialEq for RootNode {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
            && self.offset == other.offset
            && self.limit == other.limit
            && self.sort == other.sort
    }
}

impl Eq for RootNode {}

/// Canonical RQL text. Delimiters and `\` are escaped and `%` is written as `%25`,
/// so the output parses back to the same tree.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_escaped(f, &self.op)?;
        // `f()` has no args, so a lone empty value needs an empty group.
        if let [Arg::Value(value)] = self.args.as_slice()
            && value.is_empty()
        {
            return f.write_str("(())");
        }
        f.write_str("(")?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{arg}")?;
        }
        f.write_str(")")
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Node(node) => write!(f, "{node}"),
            Arg::Value(value) => write_escaped(f, value),
        }
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    for c in text.chars() {
        match c {
            '(' | ')' | '=' | '&' | ',' | '|' | ';' | '\\' => write!(f, "\\{c}")?,
            '%' => f.write_str("%25")?,
            c => write!(f, "{c}")?,
        }
    }
    Ok(())
}
