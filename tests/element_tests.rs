mod common;

use common::{TestResult, init_logging};
use htmlgen::prelude::*;
use htmlgen::{Element, ElementError, TagKind};

#[test]
fn paragraph_renders_without_whitespace() {
    assert_eq!(p("Hello World").html(), "<p>Hello World</p>");
}

#[test]
fn nested_blocks_follow_formatting_flags() {
    let nav = Nav::new().child(
        Ul::new()
            .child(li("Home"))
            .child(li("About")),
    );
    assert_eq!(
        nav.html(),
        "<nav>\n<ul>\n<li>Home</li>\n<li>About</li>\n</ul>\n</nav>\n"
    );
}

#[test]
fn adding_to_non_container_fails() -> TestResult {
    init_logging();
    let mut input = Input::new().name("q");
    let before = input.html();

    let err = input.add(p("x")).unwrap_err();
    assert_eq!(err, ElementError::NotAContainer { tag: TagKind::Input });
    assert_eq!(
        err.to_string(),
        "cannot add element - <input> is not a container"
    );
    assert_eq!(input.html(), before);
    Ok(())
}

#[test]
fn empty_group_is_rejected() {
    let mut div = Element::new(TagKind::Div);
    assert_eq!(div.add(Group::new()).unwrap_err(), ElementError::EmptyGroup);
    assert!(div.is_empty());
}

#[test]
fn group_members_are_spliced_in_order() -> TestResult {
    let mut ul = Ul::new();
    ul.add(Group::new() + li("a") + li("b"))?;
    ul.add(li("c"))?;

    assert_eq!(ul.len(), 3);
    assert_eq!(ul.element().at(0)?.inner_html(), "a");
    assert_eq!(ul.element().at(2)?.inner_html(), "c");
    Ok(())
}

#[test]
fn lookup_by_id_searches_descendants_only() -> TestResult {
    let tree = Div::new()
        .id("root")
        .child(Section::new().id("outer").child(P::new().id("inner").text("deep")));

    assert!(tree.exists("inner"));
    assert!(!tree.exists("root"));
    assert!(tree.find_child("inner").is_none());
    assert!(tree.find_child("outer").is_some());
    assert_eq!(tree.get("inner")?.inner_html(), "deep");

    let err = tree.get("missing").unwrap_err();
    assert_eq!(err.to_string(), "no child element with given id exists: missing");
    Ok(())
}

#[test]
fn index_out_of_bounds_reports_position() {
    let div = Div::new().child(p("only"));
    let err = div.element().at(3).unwrap_err();
    assert_eq!(err, ElementError::IndexOutOfBounds { index: 3, len: 1 });
    assert!(err.to_string().starts_with("bounds error at pos: 3"));
}

#[test]
fn clear_keeps_attributes_and_clear_all_resets_them() {
    let mut div = Element::new(TagKind::Div).block();
    div.set_id("keep").set_class("x");
    div.add("text").unwrap();

    div.clear();
    assert_eq!(div.html(), "<div id=\"keep\" class=\"x\">\n</div>\n");

    div.clear_all();
    assert_eq!(div.html(), "<div>\n</div>\n");
}

#[test]
fn copies_are_deep() -> TestResult {
    let original = Div::new().child(P::new().id("p").text("one"));
    let mut copy = original.clone();
    copy.get_mut("p")?.element_mut().add(" two")?;

    assert_eq!(original.get("p")?.inner_html(), "one");
    assert_eq!(copy.get("p")?.inner_html(), "one two");
    Ok(())
}

#[test]
fn add_copy_leaves_source_usable() -> TestResult {
    let item = li("shared");
    let mut a = Element::new(TagKind::Ul);
    let mut b = Element::new(TagKind::Ol);
    a.add_copy(&item)?;
    b.add_copy(&item)?;
    assert_eq!(a.inner_html(), b.inner_html());
    assert_eq!(item.html(), "<li>shared</li>\n");
    Ok(())
}

#[test]
fn display_matches_html() {
    let node: Box<dyn Node> = Box::new(h2("Title"));
    assert_eq!(node.to_string(), node.html());
    assert_eq!(format!("{}", h2("Title")), "<h2>Title</h2>\n");
}

#[test]
fn escape_utility() {
    assert_eq!(htmlgen::escape("<a href='x'>&</a>"), "&lt;a href=&#39;x&#39;&gt;&amp;&lt;/a&gt;");
    assert_eq!(htmlgen::nbsp(2), "&nbsp;&nbsp;");
}
