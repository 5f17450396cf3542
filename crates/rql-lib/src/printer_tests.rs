use indoc::indoc;

use crate::printer::{RootPrinter, dump_node};
use crate::{Colors, Parser, TokenPrinter, lex, parse};

#[test]
fn empty_root() {
    let root = parse("").unwrap();
    insta::assert_snapshot!(root.printer().dump(), @"Root");
}

#[test]
fn root_with_all_fields() {
    let root = parse("a=1&b=gt=2&limit(0,5)&sort(-date,+name)").unwrap();
    insta::assert_snapshot!(root.printer().dump(), @r#"
    Root
      Node AND
        Node eq
          Value "a"
          Value "1"
        Node gt
          Value "b"
          Value "2"
      Offset "0"
      Limit "5"
      Sort date desc
      Sort name
    "#);
}

#[test]
fn values_are_quoted_verbatim() {
    let root = parse(r#"like(name, *H\&M "x")"#).unwrap();
    insta::assert_snapshot!(root.printer().dump(), @r#"
    Root
      Node like
        Value "name"
        Value " *H&M \"x\""
    "#);
}

#[test]
fn bare_tree_dump() {
    let tree = Parser::new()
        .parse_tree("a=1&limit(0,5)")
        .unwrap()
        .unwrap();
    insta::assert_snapshot!(dump_node(&tree), @r#"
    Node AND
      Node eq
        Value "a"
        Value "1"
      Node limit
        Value "0"
        Value "5"
    "#);
}

#[test]
fn token_dump_with_spans() {
    let tokens = lex("eq(a, 1)").unwrap();
    insta::assert_snapshot!(TokenPrinter::new(&tokens).with_spans(true).dump(), @r#"
    Ident 0..2 "eq"
    ParenOpen 2..3 "("
    Ident 3..4 "a"
    Comma 4..5 ","
    Ident 5..7 " 1"
    ParenClose 7..8 ")"
    "#);
}

#[test]
fn token_dump_without_spans() {
    let tokens = lex("a%3Db|c").unwrap();
    insta::assert_snapshot!(TokenPrinter::new(&tokens).dump(), @r#"
    Ident "a"
    Equals "="
    Ident "b"
    Pipe "|"
    Ident "c"
    "#);
}

#[test]
fn colored_dump_wraps_operators_and_values() {
    let root = parse("a=1").unwrap();
    let out = RootPrinter::new(&root).colored(true).dump();
    assert!(out.contains(&format!("{}eq{}", Colors::ON.op, Colors::ON.reset)));
    assert!(out.contains(&format!("{}\"1\"{}", Colors::ON.value, Colors::ON.reset)));
    assert!(Colors::new(true).is_enabled());
    assert!(!Colors::default().is_enabled());
}

#[test]
fn multi_line_query_keeps_line_breaks_in_values() {
    let query = indoc! {"
        and(eq(name,first
        second),gt(age,3))"};
    let root = parse(query).unwrap();
    insta::assert_snapshot!(root.printer().dump(), @r#"
    Root
      Node and
        Node eq
          Value "name"
          Value "first\nsecond"
        Node gt
          Value "age"
          Value "3"
    "#);
}
