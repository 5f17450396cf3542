use indoc::indoc;
use rql_lib::Parser;

use super::trace::{StageTracer, Verbosity};

#[test]
fn default_verbosity_is_silent() {
    let tracer = StageTracer::new(Verbosity::Default, false);
    let root = Parser::new().parse("a=1&limit(5)").unwrap();

    assert_eq!(tracer.input_report("a=1"), "");
    assert_eq!(tracer.tree_report(root.node()), "");
    assert_eq!(tracer.extracted_report(&root), "");
}

#[test]
fn verbose_shows_decoded_text() {
    let tracer = StageTracer::new(Verbosity::Verbose, false);

    insta::assert_snapshot!(tracer.input_report("name=caf%C3%A9"), @r#"
    [decode]
      "name=café"
    "#);
}

#[test]
fn very_verbose_adds_tokens() {
    let tracer = StageTracer::new(Verbosity::VeryVerbose, false);

    insta::assert_snapshot!(tracer.input_report("a=1"), @r#"
    [decode]
      "a=1"
    [tokens]
      Ident 0..1 "a"
      Equals 1..2 "="
      Ident 2..3 "1"
    "#);
}

#[test]
fn malformed_input_skips_trace() {
    let tracer = StageTracer::new(Verbosity::VeryVerbose, false);

    assert_eq!(tracer.input_report("a=%zz"), "");
}

#[test]
fn tree_before_extraction() {
    let tracer = StageTracer::new(Verbosity::Verbose, false);
    let tree = Parser::new().parse_tree("a=1&limit(5)").unwrap();

    insta::assert_snapshot!(tracer.tree_report(tree.as_ref()), @r#"
    [tree]
      Node AND
        Node eq
          Value "a"
          Value "1"
        Node limit
          Value "5"
    "#);
}

#[test]
fn empty_tree() {
    let tracer = StageTracer::new(Verbosity::Verbose, false);

    assert_eq!(
        tracer.tree_report(None),
        indoc! {"
            [tree]
              (empty)
        "}
    );
}

#[test]
fn extraction_summary() {
    let tracer = StageTracer::new(Verbosity::Verbose, false);
    let root = Parser::new().parse("a=1&limit(10,20)&sort(-date,+name)").unwrap();

    assert_eq!(
        tracer.extracted_report(&root),
        "[extract]\n  offset=\"10\" limit=\"20\" sort=2\n"
    );
}
