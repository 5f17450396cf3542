//! Show the token stream of a query.

use std::path::PathBuf;

use rql_lib::{Error, TokenPrinter, lex};

use super::run_common;

pub struct TokensArgs {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub spans: bool,
    pub color: bool,
}

pub fn run(args: TokensArgs) {
    let query = run_common::load_query(args.query_path.as_deref(), args.query_text.as_deref());

    let tokens = match lex(&query.text) {
        Ok(tokens) => tokens,
        Err(e) => run_common::exit_with_error(&Error::from(e), &query, args.color),
    };

    let printer = TokenPrinter::new(&tokens)
        .with_spans(args.spans)
        .colored(args.color);
    print!("{}", printer.dump());
}
