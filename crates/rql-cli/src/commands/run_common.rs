//! Shared logic for the parsing commands.

use std::path::Path;

use rql_lib::{Error, Parser};

use super::query_loader::{QuerySource, load_query_source};

/// Load the query or exit with a message.
pub fn load_query(query_path: Option<&Path>, query_text: Option<&str>) -> QuerySource {
    load_query_source(query_path, query_text).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    })
}

pub fn build_parser(recursion_limit: Option<u32>) -> Parser {
    Parser::new().with_recursion_fuel(recursion_limit)
}

/// Render a parse failure against the query text and exit.
pub fn exit_with_error(error: &Error, query: &QuerySource, color: bool) -> ! {
    let mut printer = error.printer().source(&query.text).colored(color);
    if let Some(name) = &query.name {
        printer = printer.path(name);
    }
    eprint!("{}", printer.render());
    std::process::exit(1);
}
