//! Tag identities.
//!
//! Every node in a document tree carries a [`TagKind`]. The kind selects the
//! markup name written for the open and close tags. Three kinds have no markup
//! name at all: [`TagKind::Undefined`], [`TagKind::Group`] and
//! [`TagKind::Text`]. Nodes of those kinds render transparently.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The identity of a node, selecting its markup tag name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum TagKind {
    /// A node that has not been given an identity (e.g. after being moved out of).
    #[default]
    Undefined,
    /// A transparent grouping node used to batch-insert children.
    Group,
    /// Raw text content.
    Text,

    // Document structure
    Html,
    Head,
    Body,
    Title,
    Meta,
    Link,
    Style,
    Script,

    // Block containers
    Div,
    Nav,
    Header,
    Footer,
    Section,
    Article,
    Aside,
    Main,

    // Headings and text
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    P,
    Span,
    Em,
    Strong,
    B,
    Small,
    Q,
    S,
    U,
    Sub,
    Sup,
    Ins,
    Del,
    A,
    Br,
    Hr,
    Img,

    // Lists
    Ul,
    Ol,
    Li,

    // Tables
    Table,
    Caption,
    Thead,
    Tbody,
    Tfoot,
    Tr,
    Td,
    Th,
    Colgroup,
    Col,

    // Forms
    Form,
    Input,
    Button,
    Select,
    Option,
    Label,
    Fieldset,
    Legend,
    Textarea,
    Datalist,
    Optgroup,
    Output,
    Progress,
    Meter,

    // Semantic text
    Figure,
    Figcaption,
    Time,
    Mark,
    Code,
    Pre,
    Blockquote,

    // Interactive
    Details,
    Summary,
    Dialog,
    Template,

    // Media and embedded
    Video,
    Audio,
    Source,
    Track,
    Picture,
    Iframe,
    Canvas,
}

impl TagKind {
    /// Returns the markup tag name, or an empty string for kinds that render
    /// without a tag.
    pub fn name(self) -> &'static str {
        match self {
            TagKind::Undefined | TagKind::Group | TagKind::Text => "",
            TagKind::Html => "html",
            TagKind::Head => "head",
            TagKind::Body => "body",
            TagKind::Title => "title",
            TagKind::Meta => "meta",
            TagKind::Link => "link",
            TagKind::Style => "style",
            TagKind::Script => "script",
            TagKind::Div => "div",
            TagKind::Nav => "nav",
            TagKind::Header => "header",
            TagKind::Footer => "footer",
            TagKind::Section => "section",
            TagKind::Article => "article",
            TagKind::Aside => "aside",
            TagKind::Main => "main",
            TagKind::H1 => "h1",
            TagKind::H2 => "h2",
            TagKind::H3 => "h3",
            TagKind::H4 => "h4",
            TagKind::H5 => "h5",
            TagKind::H6 => "h6",
            TagKind::P => "p",
            TagKind::Span => "span",
            TagKind::Em => "em",
            TagKind::Strong => "strong",
            TagKind::B => "b",
            TagKind::Small => "small",
            TagKind::Q => "q",
            TagKind::S => "s",
            TagKind::U => "u",
            TagKind::Sub => "sub",
            TagKind::Sup => "sup",
            TagKind::Ins => "ins",
            TagKind::Del => "del",
            TagKind::A => "a",
            TagKind::Br => "br",
            TagKind::Hr => "hr",
            TagKind::Img => "img",
            TagKind::Ul => "ul",
            TagKind::Ol => "ol",
            TagKind::Li => "li",
            TagKind::Table => "table",
            TagKind::Caption => "caption",
            TagKind::Thead => "thead",
            TagKind::Tbody => "tbody",
            TagKind::Tfoot => "tfoot",
            TagKind::Tr => "tr",
            TagKind::Td => "td",
            TagKind::Th => "th",
            TagKind::Colgroup => "colgroup",
            TagKind::Col => "col",
            TagKind::Form => "form",
            TagKind::Input => "input",
            TagKind::Button => "button",
            TagKind::Select => "select",
            TagKind::Option => "option",
            TagKind::Label => "label",
            TagKind::Fieldset => "fieldset",
            TagKind::Legend => "legend",
            TagKind::Textarea => "textarea",
            TagKind::Datalist => "datalist",
            TagKind::Optgroup => "optgroup",
            TagKind::Output => "output",
            TagKind::Progress => "progress",
            TagKind::Meter => "meter",
            TagKind::Figure => "figure",
            TagKind::Figcaption => "figcaption",
            TagKind::Time => "time",
            TagKind::Mark => "mark",
            TagKind::Code => "code",
            TagKind::Pre => "pre",
            TagKind::Blockquote => "blockquote",
            TagKind::Details => "details",
            TagKind::Summary => "summary",
            TagKind::Dialog => "dialog",
            TagKind::Template => "template",
            TagKind::Video => "video",
            TagKind::Audio => "audio",
            TagKind::Source => "source",
            TagKind::Track => "track",
            TagKind::Picture => "picture",
            TagKind::Iframe => "iframe",
            TagKind::Canvas => "canvas",
        }
    }

    /// Whether nodes of this kind are written without any tag of their own.
    pub fn is_transparent(self) -> bool {
        self.name().is_empty()
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagKind::Undefined => f.write_str("(undefined)"),
            TagKind::Group => f.write_str("(group)"),
            TagKind::Text => f.write_str("(text)"),
            other => f.write_str(other.name()),
        }
    }
}
