//! Stage tracing for `-v`/`-vv`, written to stderr.

use std::fmt::Write;

use rql_lib::parser::{decode, tokenize};
use rql_lib::printer::dump_node;
use rql_lib::{Colors, Node, RootNode, TokenPrinter};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    #[default]
    Default,
    /// Decoded text, tree before extraction, extracted pagination.
    Verbose,
    /// Adds the token stream.
    VeryVerbose,
}

pub struct StageTracer {
    verbosity: Verbosity,
    colors: Colors,
}

impl StageTracer {
    pub fn new(verbosity: Verbosity, colored: bool) -> Self {
        Self {
            verbosity,
            colors: Colors::new(colored),
        }
    }

    pub fn input(&self, text: &str) {
        eprint!("{}", self.input_report(text));
    }

    pub fn tree(&self, node: Option<&Node>) {
        eprint!("{}", self.tree_report(node));
    }

    pub fn extracted(&self, root: &RootNode) {
        eprint!("{}", self.extracted_report(root));
    }

    pub fn input_report(&self, text: &str) -> String {
        let mut out = String::new();
        if self.verbosity < Verbosity::Verbose {
            return out;
        }

        // Decoding failures are reported by the parse itself.
        let Ok(decoded) = decode(text) else {
            return out;
        };
        self.stage(&mut out, "decode");
        writeln!(out, "  {:?}", decoded).expect("String write never fails");

        if self.verbosity >= Verbosity::VeryVerbose {
            let tokens = tokenize(&decoded);
            self.stage(&mut out, "tokens");
            let dump = TokenPrinter::new(&tokens)
                .with_spans(true)
                .colored(self.colors.is_enabled())
                .dump();
            indent_into(&mut out, &dump);
        }
        out
    }

    pub fn tree_report(&self, node: Option<&Node>) -> String {
        let mut out = String::new();
        if self.verbosity < Verbosity::Verbose {
            return out;
        }

        self.stage(&mut out, "tree");
        match node {
            Some(node) => indent_into(&mut out, &dump_node(node)),
            None => out.push_str("  (empty)\n"),
        }
        out
    }

    pub fn extracted_report(&self, root: &RootNode) -> String {
        let mut out = String::new();
        if self.verbosity < Verbosity::Verbose {
            return out;
        }

        self.stage(&mut out, "extract");
        writeln!(
            out,
            "  offset={:?} limit={:?} sort={}",
            root.offset(),
            root.limit(),
            root.sort().len()
        )
        .expect("String write never fails");
        out
    }

    fn stage(&self, out: &mut String, name: &str) {
        let c = self.colors;
        writeln!(out, "{}[{}]{}", c.label, name, c.reset).expect("String write never fails");
    }
}

fn indent_into(out: &mut String, text: &str) {
    for line in text.lines() {
        out.push_str("  ");
        out.push_str(line);
        out.push('\n');
    }
}
