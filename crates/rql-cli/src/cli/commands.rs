//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.
//! All commands accept the same flags so they can be swapped in scripts;
//! flags a command ignores are hidden from its `--help`.

use clap::Command;

use super::args::*;

/// Add hidden output args (for commands that don't print a tree).
fn with_hidden_output_args(cmd: Command) -> Command {
    cmd.arg(json_arg().hide(true)).arg(raw_arg().hide(true))
}

/// Add hidden token args (for commands that don't print tokens).
fn with_hidden_token_args(cmd: Command) -> Command {
    cmd.arg(spans_arg().hide(true))
}

/// Add hidden parser args (for commands that only lex).
fn with_hidden_parser_args(cmd: Command) -> Command {
    cmd.arg(verbose_arg().hide(true))
        .arg(recursion_limit_arg().hide(true))
        .arg(no_recursion_limit_arg().hide(true))
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("rql")
        .about("Parse resource query expressions into filter trees")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(ast_command())
        .subcommand(check_command())
        .subcommand(tokens_command())
}

/// Show the parsed tree with limit and sort extracted.
pub fn ast_command() -> Command {
    let cmd = Command::new("ast")
        .about("Show the parsed query tree")
        .override_usage(
            "\
  rql ast <QUERY_FILE>
  rql ast -q <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  rql ast -q 'a=1&sort(-date)&limit(0,5)'   # tree with limit/sort extracted
  rql ast -q 'a=1&limit(10)' --raw          # keep limit() in the tree
  rql ast query.rql --json                  # JSON output
  echo 'a=1' | rql ast -                    # read stdin"#,
        )
        .arg(query_path_arg())
        .arg(query_text_arg())
        .arg(json_arg())
        .arg(raw_arg())
        .arg(verbose_arg())
        .arg(recursion_limit_arg())
        .arg(no_recursion_limit_arg())
        .arg(color_arg());

    with_hidden_token_args(cmd)
}

/// Validate a query, silent on success.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate a query")
        .override_usage(
            "\
  rql check <QUERY_FILE>
  rql check -q <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  rql check query.rql           # exit 1 with a diagnostic on error
  rql check -q 'eq(a,(b)'       # inline query"#,
        )
        .arg(query_path_arg())
        .arg(query_text_arg())
        .arg(verbose_arg())
        .arg(recursion_limit_arg())
        .arg(no_recursion_limit_arg())
        .arg(color_arg());

    with_hidden_token_args(with_hidden_output_args(cmd))
}

/// Show the token stream after percent-decoding.
pub fn tokens_command() -> Command {
    let cmd = Command::new("tokens")
        .about("Show the token stream of a query")
        .override_usage(
            "\
  rql tokens <QUERY_FILE>
  rql tokens -q <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  rql tokens -q 'eq(a,b)'           # one token per line
  rql tokens -q 'a=1|b=2' --spans   # with byte offsets"#,
        )
        .arg(query_path_arg())
        .arg(query_text_arg())
        .arg(spans_arg())
        .arg(color_arg());

    with_hidden_parser_args(with_hidden_output_args(cmd))
}
