use crate::builders::*;
use crate::*;

#[test]
fn test_widget_functions_compose() {
    let _ = env_logger::builder().is_test(true).try_init();

    let card = div_with_class("card")
        .child(h2("Totals"))
        .child(p("All figures in EUR."));
    assert_eq!(
        card.html(),
        "<div class=\"card\">\n<h2>Totals</h2>\n<p>All figures in EUR.</p></div>\n"
    );
}

#[test]
fn test_bullet_list_and_rows() {
    assert_eq!(
        bullet_list(["a", "b"]).html(),
        "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n"
    );
    assert_eq!(row(["1", "2"]).len(), 2);
    assert_eq!(
        header_row(["x"]).html(),
        "<tr>\n<th>\nx</th>\n</tr>\n"
    );
}

#[test]
fn test_escaped_text() {
    let para = P::new().child(escaped("a < b & \"c\""));
    assert_eq!(para.html(), "<p>a &lt; b &amp; &quot;c&quot;</p>");
}

#[test]
fn test_group_operator_into_list() {
    let items = Group::new() + li("one") + li("two") + li("three");
    let list = Ol::new().child(items);
    assert_eq!(list.len(), 3);
    assert!(list.element().at(2).is_ok());
}

#[test]
fn test_typed_nodes_survive_boxing() {
    let nodes: Vec<Box<dyn Node>> = vec![Box::new(br()), Box::new(h1("x")), Box::new(hr())];
    let copies = nodes.clone();
    let html: String = copies.iter().map(|n| n.html()).collect();
    assert_eq!(html, "<br><h1>x</h1>\n<hr>");
    assert!(copies[0].is::<Br>());
}

#[test]
fn test_anchor_and_image_helpers() {
    let link = anchor("https://example.org", "Example").target("_blank");
    assert_eq!(
        link.html(),
        r#"<a href="https://example.org" target="_blank">Example</a>"#
    );
    assert_eq!(
        img("a.png", "A").html(),
        "<img src=\"a.png\" alt=\"A\">\n"
    );
}
