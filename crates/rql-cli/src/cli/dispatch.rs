//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors pull relevant fields (ignoring hidden ones)
//! - `From<*Params>` impls bridge dispatch to command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use rql_lib::DEFAULT_RECURSION_FUEL;

use super::ColorChoice;
use crate::commands::ast::AstArgs;
use crate::commands::check::CheckArgs;
use crate::commands::tokens::TokensArgs;
use crate::commands::trace::Verbosity;

pub struct AstParams {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub json: bool,
    pub raw: bool,
    pub verbose: u8,
    pub recursion_limit: Option<u32>,
    pub color: ColorChoice,
    // Note: spans is parsed but not extracted (unified flags)
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            query_path: m.get_one::<PathBuf>("query_path").cloned(),
            query_text: m.get_one::<String>("query_text").cloned(),
            json: m.get_flag("json"),
            raw: m.get_flag("raw"),
            verbose: m.get_count("verbose"),
            recursion_limit: parse_recursion_limit(m),
            color: parse_color(m),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            query_path: p.query_path,
            query_text: p.query_text,
            json: p.json,
            raw: p.raw,
            verbosity: verbosity(p.verbose),
            recursion_limit: p.recursion_limit,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub verbose: u8,
    pub recursion_limit: Option<u32>,
    pub color: ColorChoice,
    // Note: json, raw, spans are parsed but not extracted (unified flags)
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            query_path: m.get_one::<PathBuf>("query_path").cloned(),
            query_text: m.get_one::<String>("query_text").cloned(),
            verbose: m.get_count("verbose"),
            recursion_limit: parse_recursion_limit(m),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            query_path: p.query_path,
            query_text: p.query_text,
            verbosity: verbosity(p.verbose),
            recursion_limit: p.recursion_limit,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TokensParams {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub spans: bool,
    pub color: ColorChoice,
    // Note: json, raw, verbose, recursion limits are parsed but not extracted
}

impl TokensParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            query_path: m.get_one::<PathBuf>("query_path").cloned(),
            query_text: m.get_one::<String>("query_text").cloned(),
            spans: m.get_flag("spans"),
            color: parse_color(m),
        }
    }
}

impl From<TokensParams> for TokensArgs {
    fn from(p: TokensParams) -> Self {
        Self {
            query_path: p.query_path,
            query_text: p.query_text,
            spans: p.spans,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

/// `None` means unlimited nesting.
fn parse_recursion_limit(m: &ArgMatches) -> Option<u32> {
    if m.get_flag("no_recursion_limit") {
        return None;
    }
    Some(
        m.get_one::<u32>("recursion_limit")
            .copied()
            .unwrap_or(DEFAULT_RECURSION_FUEL),
    )
}

fn verbosity(count: u8) -> Verbosity {
    match count {
        0 => Verbosity::Default,
        1 => Verbosity::Verbose,
        _ => Verbosity::VeryVerbose,
    }
}
