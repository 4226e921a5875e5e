mod common;

use htmlgen::prelude::*;
use htmlgen::{AttrSlot, Element, TagKind};

#[test]
fn well_known_attributes_have_a_fixed_order() {
    let a = Div::new()
        .rel("r")
        .href("h")
        .height("10")
        .width("20")
        .alt("a")
        .src("s")
        .style("color: red")
        .role("main")
        .type_("t")
        .class("c")
        .data_id("d")
        .id("i");
    let b = Div::new()
        .id("i")
        .data_id("d")
        .class("c")
        .type_("t")
        .role("main")
        .style("color: red")
        .src("s")
        .alt("a")
        .width("20")
        .height("10")
        .href("h")
        .rel("r");

    assert_eq!(a.html(), b.html());
    assert!(a.html().starts_with(
        "<div id=\"i\" data-id=\"d\" class=\"c\" type=\"t\" role=\"main\" style=\"color: red\" \
         src=\"s\" alt=\"a\" width=\"20\" height=\"10\" href=\"h\" rel=\"r\">"
    ));
}

#[test]
fn empty_values_are_not_written() {
    assert_eq!(Span::new().id("").class("").html(), "<span></span>");
}

#[test]
fn free_form_attributes_follow_well_known_ones() {
    let el = Span::new()
        .attr("data-x", "1")
        .id("s")
        .aria_label("Close");
    assert_eq!(
        el.html(),
        "<span id=\"s\" data-x=\"1\" aria-label=\"Close\"></span>"
    );
}

#[test]
fn attr_routes_known_names_to_their_slot() {
    let el = Span::new().attr("class", "a").attr("id", "x").attr("class", "b");
    assert_eq!(el.element().attr(AttrSlot::Class), "b");
    assert_eq!(el.element().id(), "x");
    assert_eq!(el.element().attrs().other(), "");
}

#[test]
fn attribute_content_is_routed_through_add() -> common::TestResult {
    let mut el = Element::new(TagKind::Span);
    el.add(attr("title", "hint"))?;
    el.add(attr("style", "margin: 0"))?;
    assert_eq!(el.html(), "<span style=\"margin: 0\" title=\"hint\"></span>");
    assert!(el.is_empty());
    Ok(())
}

#[test]
fn class_replaces_and_add_class_appends() {
    let el = Div::new().class("row").add_class("g-2").add_class("mt-3");
    assert_eq!(el.element().class(), "row g-2 mt-3");
    assert_eq!(el.class("col").element().class(), "col");
}

#[test]
fn data_attributes_are_prefixed() {
    let el = Div::new().data("toggle", "tooltip");
    assert_eq!(el.element().attrs().other(), " data-toggle=\"tooltip\"");
}

#[test]
fn boolean_setters() {
    let el = Button::new()
        .hidden(false)
        .aria_expanded(false)
        .draggable(true)
        .spellcheck(false)
        .disabled()
        .text("Go");
    assert_eq!(
        el.html(),
        "<button aria-expanded=\"false\" draggable=\"true\" spellcheck=\"false\" disabled=\"disabled\">Go</button>"
    );
}

#[test]
fn global_text_attributes() {
    let el = P::new().lang("nb").dir("ltr").tabindex(0).title("t");
    assert_eq!(
        el.element().attrs().other(),
        " lang=\"nb\" dir=\"ltr\" tabindex=\"0\" title=\"t\""
    );
}
