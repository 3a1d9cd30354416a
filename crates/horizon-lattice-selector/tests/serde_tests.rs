//! Serialization of built selector structure (requires the `serde` feature).

#![cfg(feature = "serde")]

use horizon_lattice_selector::prelude::*;

#[test]
fn simple_selector_from_payload() {
    let json = r#"{
        "element": "a",
        "classes": ["nav", "item"],
        "pseudo_classes": ["hover"]
    }"#;
    let mut sel: SimpleSelector = serde_json::from_str(json).unwrap();
    assert_eq!(sel.element(), Some("a"));
    assert_eq!(sel.id(), None);
    assert_eq!(sel.render(), "a.nav.item:hover");
}

#[test]
fn accumulated_selector_to_json() {
    let expr = element("img").unwrap().attr("alt").unwrap().clone();
    let value = serde_json::to_value(expr.selector()).unwrap();
    assert_eq!(value["element"], "img");
    assert_eq!(value["attributes"][0], "alt");
    assert!(value["pseudo_element"].is_null());
}

#[test]
fn kinds_and_combinators_use_kebab_case() {
    assert_eq!(
        serde_json::to_string(&PartKind::PseudoElement).unwrap(),
        r#""pseudo-element""#
    );
    let comb: Combinator = serde_json::from_str(r#""next-sibling""#).unwrap();
    assert_eq!(comb, Combinator::NextSibling);
}
