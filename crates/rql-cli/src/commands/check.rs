use std::path::PathBuf;

use super::run_common;
use super::trace::{StageTracer, Verbosity};

pub struct CheckArgs {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub verbosity: Verbosity,
    pub recursion_limit: Option<u32>,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let query = run_common::load_query(args.query_path.as_deref(), args.query_text.as_deref());
    let tracer = StageTracer::new(args.verbosity, args.color);
    tracer.input(&query.text);

    let parser = run_common::build_parser(args.recursion_limit);
    match parser.parse(&query.text) {
        Ok(root) => tracer.extracted(&root),
        Err(e) => run_common::exit_with_error(&e, &query, args.color),
    }

    // Silent on success (like cargo check)
}
