//! Show the parsed query tree.

use std::path::PathBuf;

use rql_lib::RootNode;

use super::run_common;
use super::trace::{StageTracer, Verbosity};

pub struct AstArgs {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub json: bool,
    pub raw: bool,
    pub verbosity: Verbosity,
    pub recursion_limit: Option<u32>,
    pub color: bool,
}

pub fn run(args: AstArgs) {
    let query = run_common::load_query(args.query_path.as_deref(), args.query_text.as_deref());
    let tracer = StageTracer::new(args.verbosity, args.color);
    tracer.input(&query.text);

    let parser = run_common::build_parser(args.recursion_limit);
    let tree = match parser.parse_tree(&query.text) {
        Ok(tree) => tree,
        Err(e) => run_common::exit_with_error(&e, &query, args.color),
    };
    tracer.tree(tree.as_ref());

    let mut root = RootNode::new(tree);
    if !args.raw {
        root.extract_special_ops();
        tracer.extracted(&root);
    }

    if args.json {
        match serde_json::to_string_pretty(&root) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: failed to serialize tree: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    print!("{}", root.printer().colored(args.color).dump());
}
