//! Whole-parser tests: construct interplay, backtracking and termination.
//!
//! Every input here also goes through `invariants::check`.


use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::{
    ast::{List, ListItem, Node, Style, Text, TextBlock, TextNode},
    parsing::{Parser, parse_document},
};

fn item(s: &str) -> ListItem {
    ListItem::Text(TextBlock::new(vec![Text::plain(s).into()]))
}

#[rstest]
#[case("")]
#[case("\n\n\n")]
#[case("[")]
#[case("{\n")]
#[case("\"\"\"")]
#[case("@{")]
#[case("#")]
#[case("=#")]
#[case("===")]
#[case("```\n```")]
#[case("|")]
#[case("--")]
#[case("![")]
#[case("video[")]
#[case("ignore {")]
#[case("\\")]
#[case("*_//__``''[|]")]
fn degenerate_inputs_terminate(#[case] src: &str) {
    invariants::check(src);
}

#[test]
fn windows_line_endings() {
    let parsed = parse_document("[\r\none\r\ntwo\r\n]\r\n");
    assert_eq!(
        parsed.document.nodes,
        vec![Node::UnorderedList(List {
            items: vec![item("one"), item("two")]
        })]
    );
    let parsed = parse_document("a\rb");
    assert_eq!(parsed.document.nodes.len(), 1);
}

#[test]
fn failed_recognizer_leaves_no_partial_state() {
    // A multiline meta block that never closes must not set any key.
    let parsed = parse_document("@{\ntitle = Lost\n\nsome text");
    assert_eq!(parsed.document.meta.len(), 0);
    assert_eq!(parsed.document.title(), None);
    assert_eq!(parsed.diagnostics.len(), 1);
    let text: String = parsed
        .document
        .nodes
        .iter()
        .filter_map(|n| match n {
            Node::TextBlock(b) => Some(b.plain()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("|");
    assert_eq!(text, "@{\ntitle = Lost|some text");
}

#[test]
fn failed_nested_list_keeps_outer() {
    // The inner `{` never closes; its lines become items of the outer list.
    let nodes = invariants::check("[\n{\na\n]");
    assert_eq!(
        nodes,
        vec![Node::UnorderedList(List {
            items: vec![item("{"), item("a")]
        })]
    );
}

#[test]
fn list_nesting_example() {
    let src = "[\nfruit\n{\napple\npear\n}\n[\nred\n]\n]";
    let nodes = invariants::check(src);
    assert_eq!(
        nodes,
        vec![Node::UnorderedList(List {
            items: vec![
                item("fruit"),
                ListItem::Ordered(List {
                    items: vec![item("apple"), item("pear")]
                }),
                ListItem::Unordered(List {
                    items: vec![item("red")]
                }),
            ]
        })]
    );
}

#[rstest]
#[case("*_x_*", Style::BoldItalic)]
#[case("__//x//__", Style::BoldItalic)]
#[case("//*x*//", Style::BoldItalic)]
#[case("*x*", Style::Bold)]
#[case("//x//", Style::Italic)]
fn nesting_exactness(#[case] src: &str, #[case] style: Style) {
    let nodes = invariants::check(src);
    assert_eq!(
        nodes,
        vec![Node::TextBlock(TextBlock::new(vec![
            Text::styled(style, "x").into()
        ]))]
    );
}

#[test]
fn styled_link_label_in_list() {
    let nodes = invariants::check("[\nsee [*docs* here|http://d]\n]");
    let Node::UnorderedList(list) = &nodes[0] else {
        panic!("expected list, got {nodes:?}");
    };
    let ListItem::Text(block) = &list.items[0] else {
        panic!("expected text item");
    };
    let TextNode::Anchor(anchor) = &block.items[1] else {
        panic!("expected anchor, got {:?}", block.items);
    };
    assert_eq!(anchor.url, "http://d");
    let TextNode::Block(label) = anchor.label.as_ref() else {
        panic!("expected block label");
    };
    assert_eq!(label.items[0], Text::styled(Style::Bold, "docs").into());
}

#[test]
fn parser_state_is_per_instance() {
    let a: Vec<char> = "=# One".chars().collect();
    let b: Vec<char> = "text".chars().collect();
    let mut first = Parser::new(&a);
    let mut second = Parser::new(&b);
    first.by_ref().for_each(drop);
    second.by_ref().for_each(drop);
    assert_eq!(first.meta().get("title").map(String::as_str), Some("One"));
    assert!(second.meta().is_empty());
}

#[test]
fn parser_is_send() {
    fn assert_send<T: Send>() {}
    assert_send::<Parser<'static>>();
}
