use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Query text plus the name diagnostics show for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySource {
    pub text: String,
    pub name: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("query is required: use positional argument or -q/--query")]
    Missing,

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{path}': {source}")]
    File { path: String, source: io::Error },
}

pub fn load_query_source(
    query_path: Option<&Path>,
    query_text: Option<&str>,
) -> Result<QuerySource, LoadError> {
    if let Some(text) = query_text {
        return Ok(QuerySource {
            text: text.to_owned(),
            name: None,
        });
    }

    match query_path {
        Some(path) if path.as_os_str() == "-" => load_reader(io::stdin().lock()),
        Some(path) => load_file(path),
        None => Err(LoadError::Missing),
    }
}

pub(crate) fn load_reader(mut reader: impl Read) -> Result<QuerySource, LoadError> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf).map_err(LoadError::Stdin)?;
    Ok(QuerySource {
        text: strip_line_end(buf),
        name: Some("<stdin>".to_owned()),
    })
}

fn load_file(path: &Path) -> Result<QuerySource, LoadError> {
    let path_name = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|source| LoadError::File {
        path: path_name.clone(),
        source,
    })?;
    Ok(QuerySource {
        text: strip_line_end(content),
        name: Some(path_name),
    })
}

/// Whitespace is significant inside values, so only the final line break of a
/// file or pipe is dropped.
fn strip_line_end(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}
