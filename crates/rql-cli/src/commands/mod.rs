pub mod ast;
pub mod check;
pub mod query_loader;
pub mod run_common;
pub mod tokens;
pub mod trace;

#[cfg(test)]
mod query_loader_tests;
#[cfg(test)]
mod trace_tests;
