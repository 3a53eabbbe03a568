//! Integration tests for combinators and combined selector rendering.
//!
//! [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)

use wallaby_css::selector::{Combinator, Selector, SelectorBuilder, combine};

fn element(name: &str) -> SelectorBuilder {
    SelectorBuilder::new().element(name).unwrap()
}

#[test]
fn test_next_sibling_combination() {
    let left = element("div").id("main").unwrap();
    let right = element("table").id("data").unwrap();
    let joined = combine(left, Combinator::NextSibling, right);
    assert_eq!(joined.stringify(), "div#main + table#data");
}

#[test]
fn test_child_combination() {
    let joined = combine(element("ul"), Combinator::Child, element("li"));
    assert_eq!(joined.stringify(), "ul > li");
}

#[test]
fn test_subsequent_sibling_combination() {
    let joined = combine(element("h1"), Combinator::SubsequentSibling, element("p"));
    assert_eq!(joined.stringify(), "h1 ~ p");
}

#[test]
fn test_descendant_combination_is_single_space() {
    let joined = combine(element("nav"), Combinator::Descendant, element("a"));
    assert_eq!(joined.stringify(), "nav a");
}

#[test]
fn test_nested_combination_right() {
    // The outer combinator ends up leftmost in the rendered string.
    let inner = combine(
        element("p").pseudo_class("focus").unwrap(),
        Combinator::SubsequentSibling,
        element("a").attr("href").unwrap(),
    );
    let joined = combine(
        element("div").id("main").unwrap(),
        Combinator::NextSibling,
        inner,
    );
    assert_eq!(joined.stringify(), "div#main + p:focus ~ a[href]");
}

#[test]
fn test_nested_combination_left() {
    let inner = combine(element("html"), Combinator::Child, element("body"));
    let joined = combine(inner, Combinator::Descendant, element("main"));
    assert_eq!(joined.stringify(), "html > body main");
}

#[test]
fn test_deeply_nested_combination() {
    let sel = combine(
        element("ul").class("menu").unwrap(),
        Combinator::Child,
        combine(
            element("li"),
            Combinator::NextSibling,
            combine(element("li"), Combinator::Descendant, element("span")),
        ),
    );
    assert_eq!(sel.stringify(), "ul.menu > li + li span");
}

#[test]
fn test_combine_is_pure() {
    // The same builder can feed two independent chains.
    let shared = element("td");
    let first = combine(element("tr"), Combinator::Child, shared.clone());
    let second = combine(element("table"), Combinator::Descendant, shared.clone());

    assert_eq!(first.stringify(), "tr > td");
    assert_eq!(second.stringify(), "table td");
    assert_eq!(shared.stringify(), "td");
}

#[test]
fn test_combined_stringify_is_idempotent() {
    let joined = combine(element("a"), Combinator::NextSibling, element("b"));
    assert_eq!(joined.stringify(), "a + b");
    assert_eq!(joined.stringify(), "a + b");
}

#[test]
fn test_builder_converts_into_selector() {
    let selector: Selector = element("div").class("card").unwrap().into();
    assert_eq!(selector.stringify(), "div.card");
}

#[test]
fn test_selector_serializes() {
    let joined = combine(element("a"), Combinator::Child, element("b"));
    let json = serde_json::to_string(&joined).unwrap();
    assert!(json.contains("Complex"));
    assert!(json.contains("Child"));
}
