use crate::{Error, Parser, parse};

fn render(source: &str) -> String {
    let err = parse(source).unwrap_err();
    err.printer().source(source).render()
}

#[test]
fn parse_error_points_into_the_query() {
    let out = render("eq(a,1)x");
    assert!(out.starts_with("error: parse error: unrecognized bloc"), "{out}");
    assert!(out.contains("eq(a,1)x"), "{out}");
    assert!(out.contains("^^^^^^"), "{out}");
    assert!(
        out.contains("expected a function call, comparison or value"),
        "{out}"
    );
}

#[test]
fn parse_error_is_shown_against_decoded_text() {
    let out = render("eq(a%2C");
    assert!(out.contains("eq(a,"), "{out}");
    assert!(out.contains("this '(' is never closed"), "{out}");
}

#[test]
fn lex_error_is_shown_against_raw_text() {
    let out = render("name=50%zz");
    assert!(out.contains("name=50%zz"), "{out}");
    assert!(out.contains("expected '%' followed by two hex digits"), "{out}");
}

#[test]
fn path_is_included_when_given() {
    let err = parse("a=").unwrap_err();
    let out = err.printer().source("a=").path("query.rql").render();
    assert!(out.contains("query.rql"), "{out}");
}

#[test]
fn errors_without_span_render_plain() {
    let err = Parser::new()
        .with_recursion_fuel(Some(1))
        .parse("not(a=1)")
        .unwrap_err();
    assert_eq!(err, Error::RecursionLimitExceeded);
    assert_eq!(
        err.printer().source("not(a=1)").render(),
        "error: recursion limit exceeded\n"
    );
}

#[test]
fn missing_source_renders_plain() {
    let err = parse("eq(a,").unwrap_err();
    assert_eq!(
        err.printer().render(),
        "error: parse error: unclosed parenthesis: '(' 'a' ','\n"
    );
}
