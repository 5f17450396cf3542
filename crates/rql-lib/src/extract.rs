//! Pulls `limit(…)` and `sort(…)` out of the filter tree into the root.
//!
//! Only the whole tree or the direct children of a top-level AND are inspected;
//! special operators nested deeper stay in the filter.
//!
//! Policy for repeated operators: the first LIMIT and the first SORT among the
//! children are extracted, later ones remain as ordinary filter nodes.

use crate::ast::{Arg, Node, RootNode, Sort};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Special {
    Limit,
    Sort,
}

impl Special {
    /// Operator name match plus literal-only arguments.
    fn of(node: &Node) -> Option<Self> {
        if node.args.iter().any(|arg| arg.as_value().is_none()) {
            return None;
        }
        if node.is_op("limit") {
            Some(Special::Limit)
        } else if node.is_op("sort") {
            Some(Special::Sort)
        } else {
            None
        }
    }
}

impl RootNode {
    /// Moves pagination and sort data out of the tree. Never fails; runs once per root.
    pub fn extract_special_ops(&mut self) {
        if std::mem::replace(&mut self.extracted, true) {
            return;
        }
        if let Some(node) = self.node.take() {
            self.node = self.extract(node);
        }
    }

    fn extract(&mut self, mut node: Node) -> Option<Node> {
        if let Some(special) = Special::of(&node) {
            self.apply(special, &node);
            return None;
        }
        if !node.is_op("AND") {
            return Some(node);
        }

        let mut claimed = Vec::new();
        let (mut limit_seen, mut sort_seen) = (false, false);

        for (index, arg) in node.args.iter().enumerate() {
            let Some(child) = arg.as_node() else {
                continue;
            };
            let Some(special) = Special::of(child) else {
                continue;
            };
            let seen = match special {
                Special::Limit => &mut limit_seen,
                Special::Sort => &mut sort_seen,
            };
            if std::mem::replace(seen, true) {
                continue;
            }
            self.apply(special, child);
            claimed.push(index);
        }

        if claimed.is_empty() {
            return Some(node);
        }

        // Highest index first so earlier indices stay valid.
        claimed.sort_unstable_by(|a, b| b.cmp(a));
        for index in claimed {
            node.args.remove(index);
        }

        match node.args.len() {
            0 => None,
            1 => match node.args.pop() {
                Some(Arg::Node(survivor)) => Some(survivor),
                Some(value) => {
                    // A bare value cannot be the filter root; keep its AND.
                    node.args.push(value);
                    Some(node)
                }
                None => None,
            },
            _ => Some(node),
        }
    }

    fn apply(&mut self, special: Special, node: &Node) {
        match special {
            Special::Limit => {
                let mut values = node.values();
                self.offset = values.next().unwrap_or_default().to_owned();
                if let Some(limit) = values.next() {
                    self.limit = limit.to_owned();
                }
            }
            Special::Sort => {
                self.sort.extend(
                    node.values()
                        .filter(|property| !property.is_empty())
                        .map(Sort::from_property),
                );
            }
        }
    }
}
