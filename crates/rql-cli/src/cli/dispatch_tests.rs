//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Unified flags: every command accepts the others' flags without error
//! 2. Help visibility: hidden flags don't appear in --help
//! 3. Params extraction: correct fields are extracted from ArgMatches

use std::path::PathBuf;

use rql_lib::DEFAULT_RECURSION_FUEL;

use super::*;
use crate::cli::commands::{ast_command, build_cli, check_command, tokens_command};

#[test]
fn ast_extracts_inline_query_and_flags() {
    let cmd = ast_command();
    let result = cmd.try_get_matches_from(["ast", "-q", "a=1", "--json", "--raw", "-vv"]);
    assert!(result.is_ok(), "ast should accept flags: {:?}", result.err());

    let m = result.unwrap();
    let params = AstParams::from_matches(&m);

    assert_eq!(params.query_text.as_deref(), Some("a=1"));
    assert_eq!(params.query_path, None);
    assert!(params.json);
    assert!(params.raw);
    assert_eq!(params.verbose, 2);
    assert_eq!(params.recursion_limit, Some(DEFAULT_RECURSION_FUEL));
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn ast_extracts_query_path() {
    let cmd = ast_command();
    let m = cmd
        .try_get_matches_from(["ast", "query.rql", "--color", "never"])
        .unwrap();
    let params = AstParams::from_matches(&m);

    assert_eq!(params.query_path, Some(PathBuf::from("query.rql")));
    assert!(!params.json);
    assert!(!params.raw);
    assert_eq!(params.color, ColorChoice::Never);
}

#[test]
fn ast_accepts_stdin_marker() {
    let cmd = ast_command();
    let m = cmd.try_get_matches_from(["ast", "-"]).unwrap();
    let params = AstParams::from_matches(&m);

    assert_eq!(params.query_path, Some(PathBuf::from("-")));
}

#[test]
fn ast_accepts_token_flags() {
    let cmd = ast_command();
    let result = cmd.try_get_matches_from(["ast", "-q", "a=1", "--spans"]);
    assert!(
        result.is_ok(),
        "ast should accept token flags: {:?}",
        result.err()
    );
}

#[test]
fn query_text_conflicts_with_query_path() {
    let cmd = ast_command();
    let result = cmd.try_get_matches_from(["ast", "query.rql", "-q", "a=1"]);
    assert!(result.is_err());
}

#[test]
fn recursion_limit_is_parsed() {
    let cmd = check_command();
    let m = cmd
        .try_get_matches_from(["check", "-q", "a=1", "--recursion-limit", "8"])
        .unwrap();
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.recursion_limit, Some(8));
}

#[test]
fn no_recursion_limit_disables_fuel() {
    let cmd = check_command();
    let m = cmd
        .try_get_matches_from(["check", "-q", "a=1", "--no-recursion-limit"])
        .unwrap();
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.recursion_limit, None);
}

#[test]
fn recursion_limit_flags_conflict() {
    let cmd = check_command();
    let result = cmd.try_get_matches_from([
        "check",
        "-q",
        "a=1",
        "--recursion-limit",
        "8",
        "--no-recursion-limit",
    ]);
    assert!(result.is_err());
}

#[test]
fn recursion_limit_rejects_non_numbers() {
    let cmd = check_command();
    let result = cmd.try_get_matches_from(["check", "-q", "a=1", "--recursion-limit", "deep"]);
    assert!(result.is_err());
}

#[test]
fn check_accepts_output_flags() {
    let cmd = check_command();
    let result = cmd.try_get_matches_from(["check", "query.rql", "--json", "--raw", "--spans"]);
    assert!(
        result.is_ok(),
        "check should accept output flags: {:?}",
        result.err()
    );

    let m = result.unwrap();
    let params = CheckParams::from_matches(&m);
    assert_eq!(params.query_path, Some(PathBuf::from("query.rql")));
}

#[test]
fn check_help_hides_output_flags() {
    let mut cmd = check_command();
    let help = cmd.render_help().to_string();

    assert!(!help.contains("--json"), "check help should not show --json");
    assert!(!help.contains("--raw"), "check help should not show --raw");
    assert!(
        !help.contains("--spans"),
        "check help should not show --spans"
    );
}

#[test]
fn tokens_accepts_parser_flags() {
    let cmd = tokens_command();
    let result = cmd.try_get_matches_from([
        "tokens",
        "-q",
        "a=1",
        "-v",
        "--recursion-limit",
        "4",
        "--json",
    ]);
    assert!(
        result.is_ok(),
        "tokens should accept parser flags: {:?}",
        result.err()
    );

    let m = result.unwrap();
    let params = TokensParams::from_matches(&m);
    assert_eq!(params.query_text.as_deref(), Some("a=1"));
    assert!(!params.spans);
}

#[test]
fn tokens_extracts_spans() {
    let cmd = tokens_command();
    let m = cmd
        .try_get_matches_from(["tokens", "-q", "a=1", "--spans", "--color", "always"])
        .unwrap();
    let params = TokensParams::from_matches(&m);

    assert!(params.spans);
    assert_eq!(params.color, ColorChoice::Always);
}

#[test]
fn tokens_help_hides_parser_flags() {
    let mut cmd = tokens_command();
    let help = cmd.render_help().to_string();

    assert!(
        !help.contains("--recursion-limit"),
        "tokens help should not show --recursion-limit"
    );
    assert!(
        !help.contains("Verbosity level"),
        "tokens help should not show -v description"
    );
    assert!(!help.contains("--json"), "tokens help should not show --json");
}

#[test]
fn ast_help_hides_token_flags() {
    let mut cmd = ast_command();
    let help = cmd.render_help().to_string();

    assert!(!help.contains("--spans"), "ast help should not show --spans");
    assert!(help.contains("--json"));
    assert!(help.contains("--raw"));
}

#[test]
fn build_cli_dispatches_subcommands() {
    let m = build_cli()
        .try_get_matches_from(["rql", "tokens", "-q", "a=1"])
        .unwrap();
    let (name, _) = m.subcommand().unwrap();
    assert_eq!(name, "tokens");
}

#[test]
fn build_cli_requires_subcommand() {
    let result = build_cli().try_get_matches_from(["rql"]);
    assert!(result.is_err());
}

#[test]
fn build_cli_is_consistent() {
    build_cli().debug_assert();
}
