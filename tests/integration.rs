//! Integration tests for selkit.
//!
//! These exercise the public API from outside the crate: the factory entry
//! points, fluent chaining, validation failures, combination, and the JSON
//! helpers.

use pretty_assertions::assert_eq;
use selkit::geometry::Rect;
use selkit::json::{from_json, to_json};
use selkit::selector::factory;
use selkit::selector::{Kind, SelectorBuilder, SelectorError};

// ---------------------------------------------------------------------------
// Compound selectors
// ---------------------------------------------------------------------------

#[test]
fn test_id_with_repeated_classes() {
    let selector = factory::id("main")
        .unwrap()
        .class("container")
        .unwrap()
        .class("editable")
        .unwrap();
    assert_eq!(selector.as_css(), "#main.container.editable");
}

#[test]
fn test_element_attribute_pseudo_class() {
    let selector = factory::element("a")
        .unwrap()
        .attribute("href$=\".png\"")
        .unwrap()
        .pseudo_class("focus")
        .unwrap();
    assert_eq!(selector.as_css(), "a[href$=\".png\"]:focus");
}

#[test]
fn test_every_kind_in_canonical_order() {
    let selector = factory::element("input")
        .unwrap()
        .id("search")
        .unwrap()
        .class("wide")
        .unwrap()
        .class("rounded")
        .unwrap()
        .attribute("type=\"text\"")
        .unwrap()
        .pseudo_class("focus")
        .unwrap()
        .pseudo_element("placeholder")
        .unwrap();
    insta::assert_snapshot!(
        selector.as_css(),
        @r#"input#search.wide.rounded[type="text"]:focus::placeholder"#
    );
}

// ---------------------------------------------------------------------------
// Validation failures
// ---------------------------------------------------------------------------

#[test]
fn test_second_id_is_rejected() {
    let err = factory::id("main").unwrap().id("other").unwrap_err();
    assert_eq!(err, SelectorError::Duplicate { kind: Kind::Id });
    assert_eq!(
        err.to_string(),
        "Element, id and pseudo-element should not occur more than one time inside the selector"
    );
}

#[test]
fn test_element_after_class_is_rejected() {
    let err = factory::class("x").unwrap().element("a").unwrap_err();
    assert_eq!(err, SelectorError::OutOfOrder { kind: Kind::Element });
    assert_eq!(
        err.to_string(),
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element"
    );
}

#[test]
fn test_unknown_combinator_is_rejected() {
    let left = factory::element("div").unwrap();
    let right = factory::element("span").unwrap();
    let err = factory::combine(&left, '*', &right).unwrap_err();
    assert_eq!(err, SelectorError::InvalidCombinator { found: '*' });
}

// ---------------------------------------------------------------------------
// Combination
// ---------------------------------------------------------------------------

#[test]
fn test_combine_round_trips_operand_text() {
    let left = factory::element("div").unwrap().id("main").unwrap();
    let right = factory::element("p").unwrap().class("note").unwrap();

    for symbol in ['+', '~', '>', ' '] {
        let combined = factory::combine(&left, symbol, &right).unwrap();
        assert_eq!(
            combined.as_css(),
            format!("{} {} {}", left.as_css(), symbol, right.as_css())
        );
    }
}

#[test]
fn test_nested_combination_builds_left_to_right() {
    let tr = factory::element("tr").unwrap();
    let table = factory::element("table").unwrap().id("data").unwrap();
    let inner = factory::combine(&table, '~', &tr).unwrap();

    let div = factory::element("div").unwrap().id("main").unwrap();
    let combined = factory::combine(&div, '+', &inner).unwrap();

    insta::assert_snapshot!(combined.as_css(), @"div#main + table#data ~ tr");
}

#[test]
fn test_descendant_combination_renders_three_spaces() {
    let rows = factory::element("tr")
        .unwrap()
        .pseudo_class("nth-of-type(even)")
        .unwrap();
    let cells = factory::element("td")
        .unwrap()
        .pseudo_class("nth-of-type(even)")
        .unwrap();
    let combined = factory::combine(&rows, ' ', &cells).unwrap();

    assert_eq!(
        combined.as_css(),
        "tr:nth-of-type(even)   td:nth-of-type(even)"
    );
}

#[test]
fn test_builder_display_matches_rendered_text() {
    let selector = factory::element("a").unwrap().pseudo_class("hover").unwrap();
    assert_eq!(selector.to_string(), "a:hover");
}

#[test]
fn test_direct_builder_matches_factory() {
    let direct = SelectorBuilder::new().element("div").unwrap();
    let via_factory = factory::element("div").unwrap();
    assert_eq!(direct.as_css(), via_factory.as_css());
}

// ---------------------------------------------------------------------------
// JSON helpers
// ---------------------------------------------------------------------------

#[test]
fn test_rect_survives_json_round_trip() {
    let rect = Rect::new(12, 7);
    let text = to_json(&rect).unwrap();
    let back: Rect = from_json(&text).unwrap();
    assert_eq!(back, rect);
    assert_eq!(back.area(), 84);
}

#[test]
fn test_from_json_reports_malformed_input() {
    assert!(from_json::<Rect>("not json").is_err());
}
