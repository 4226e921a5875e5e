use crate::builders::*;

// Text-bearing elements
pub fn h1(text: &str) -> H1 {
    H1::new().text(text)
}

pub fn h2(text: &str) -> H2 {
    H2::new().text(text)
}

pub fn h3(text: &str) -> H3 {
    H3::new().text(text)
}

pub fn h4(text: &str) -> H4 {
    H4::new().text(text)
}

pub fn h5(text: &str) -> H5 {
    H5::new().text(text)
}

pub fn h6(text: &str) -> H6 {
    H6::new().text(text)
}

pub fn p(text: &str) -> P {
    P::new().text(text)
}

pub fn span(text: &str) -> Span {
    Span::new().text(text)
}

pub fn em(text: &str) -> Em {
    Em::new().text(text)
}

pub fn strong(text: &str) -> Strong {
    Strong::new().text(text)
}

pub fn code(text: &str) -> Code {
    Code::new().text(text)
}

pub fn li(text: &str) -> Li {
    Li::new().text(text)
}

pub fn td(text: &str) -> Td {
    Td::new().text(text)
}

pub fn th(text: &str) -> Th {
    Th::new().text(text)
}

pub fn title(text: &str) -> Title {
    Title::with_text(text)
}

/// Text with `&`, `<`, `>` and quotes escaped.
pub fn escaped(text: &str) -> Text {
    Text::escaped(text)
}

// Links and media
pub fn anchor(href: &str, text: &str) -> Anchor {
    Anchor::new().href(href).text(text)
}

pub fn img(src: &str, alt: &str) -> Img {
    Img::new().src(src).alt(alt)
}

pub fn stylesheet(href: &str) -> Link {
    Link::new().rel("stylesheet").href(href)
}

pub fn script(js: &str) -> Script {
    Script::new().code(js)
}

pub fn style(css: &str) -> Style {
    Style::new().css(css)
}

// Structures
pub fn div_with_class(class: &str) -> Div {
    Div::new().class(class)
}

/// An unordered list with one `<li>` per item.
pub fn bullet_list<'a>(items: impl IntoIterator<Item = &'a str>) -> Ul {
    items.into_iter().fold(Ul::new(), |ul, item| ul.child(li(item)))
}

/// A table row of `<td>` cells.
pub fn row<'a>(cells: impl IntoIterator<Item = &'a str>) -> Tr {
    cells.into_iter().fold(Tr::new(), |tr, cell| tr.child(td(cell)))
}

/// A table row of `<th>` cells.
pub fn header_row<'a>(cells: impl IntoIterator<Item = &'a str>) -> Tr {
    cells.into_iter().fold(Tr::new(), |tr, cell| tr.child(th(cell)))
}

pub fn br() -> Br {
    Br::new()
}

pub fn hr() -> Hr {
    Hr::new()
}
