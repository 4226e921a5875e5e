//! The tag catalog: one typed element per HTML tag, plus widget functions.
//!
//! Each type configures an [`htmlgen_core::Element`] with its tag and
//! formatting flags and adds the setters that make sense for that tag. All of
//! them share the [`Widget`](htmlgen_core::Widget) setters; tags that hold
//! content also implement [`ContainerWidget`](htmlgen_core::ContainerWidget).
//!
//! # Widget functions
//!
//! Small functions returning a pre-configured builder compose like any other
//! element:
//!
//! ```ignore
//! use htmlgen_tags::builders::*;
//! use htmlgen_tags::*;
//!
//! fn titled_card(title: &str, body: impl Into<Content>) -> Div {
//!     div_with_class("card")
//!         .child(h2(title))
//!         .child(body)
//! }
//!
//! let card = titled_card("Totals", p("All figures in EUR."));
//! ```
//!
//! Bootstrap grid helpers and navbar components live in [`bootstrap`].

mod setters;

pub mod bootstrap;

mod form;
mod head;
mod media;
mod sections;
mod table;
mod text;
mod widgets;

#[cfg(test)]
mod tests;

/// Every typed element.
///
/// Import with `use htmlgen_tags::builders::*;` for convenience.
pub mod builders {
    pub use super::form::{
        Button, Datalist, Fieldset, Form, Input, Label, Legend, Meter, Optgroup, Output, Progress,
        Select, SelectOption, Textarea,
    };
    pub use super::head::{Link, Meta, Script, Style, Title};
    pub use super::media::{Audio, Canvas, Iframe, Img, Picture, Source, Track, Video};
    pub use super::sections::{
        Article, Aside, Blockquote, Details, Dialog, Div, Figcaption, Figure, Footer, Header, Li,
        Main, Nav, Ol, Section, Summary, Template, Ul,
    };
    pub use super::table::{Caption, Col, Colgroup, Table, Tbody, Td, Tfoot, Th, Thead, Tr};
    pub use super::text::{
        Anchor, B, Br, Code, Del, Em, H1, H2, H3, H4, H5, H6, Hr, Ins, Mark, P, Pre, Q, S, Small,
        Span, Strong, Sub, Sup, Time, U,
    };
    pub use htmlgen_core::{ContainerWidget, Content, Group, Node, Text, Widget};
}

pub use self::widgets::*;
