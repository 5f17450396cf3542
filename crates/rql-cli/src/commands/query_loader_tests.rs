use std::io::Write;
use std::path::Path;

use super::query_loader::{LoadError, load_reader, load_query_source};

#[test]
fn inline_text_wins() {
    let source = load_query_source(Some(Path::new("ignored.rql")), Some("a=1")).unwrap();

    assert_eq!(source.text, "a=1");
    assert_eq!(source.name, None);
}

#[test]
fn inline_text_is_kept_verbatim() {
    let source = load_query_source(None, Some("a= 1\n")).unwrap();

    assert_eq!(source.text, "a= 1\n");
}

#[test]
fn missing_query_is_an_error() {
    let err = load_query_source(None, None).unwrap_err();

    assert!(matches!(err, LoadError::Missing));
    assert_eq!(
        err.to_string(),
        "query is required: use positional argument or -q/--query"
    );
}

#[test]
fn file_drops_trailing_newline() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "eq(a, b )").unwrap();

    let source = load_query_source(Some(file.path()), None).unwrap();

    assert_eq!(source.text, "eq(a, b )");
    assert_eq!(source.name, Some(file.path().display().to_string()));
}

#[test]
fn file_drops_only_one_crlf() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "a=1\r\n\r\n").unwrap();

    let source = load_query_source(Some(file.path()), None).unwrap();

    assert_eq!(source.text, "a=1\r\n");
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.rql");

    let err = load_query_source(Some(&path), None).unwrap_err();

    assert!(matches!(err, LoadError::File { .. }));
    let msg = err.to_string();
    assert!(msg.starts_with("failed to read '"), "got: {msg}");
    assert!(msg.contains("absent.rql"), "got: {msg}");
}

#[test]
fn reader_is_named_stdin() {
    let source = load_reader("a=1|b=2\n".as_bytes()).unwrap();

    assert_eq!(source.text, "a=1|b=2");
    assert_eq!(source.name.as_deref(), Some("<stdin>"));
}

#[test]
fn reader_rejects_invalid_utf8() {
    let err = load_reader(&[0x61, 0x3d, 0xff][..]).unwrap_err();

    assert!(matches!(err, LoadError::Stdin(_)));
}
