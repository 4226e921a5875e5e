//! The table composite and its section elements.

use crate::node::{Content, Element, Node};
use crate::render::RenderContext;
use crate::widget::ContainerWidget;
use htmlgen_types::TagKind;
use std::fmt;

crate::define_element!(
    /// A `<caption>`, written first inside its table.
    Caption => Caption, block
);
crate::define_element!(
    /// A `<thead>` section.
    Thead => Thead, block
);
crate::define_element!(
    /// A `<tbody>` section.
    Tbody => Tbody, block
);
crate::define_element!(
    /// A `<tfoot>` section, written last inside its table.
    Tfoot => Tfoot, block
);

crate::impl_container_widget!(Caption, Thead, Tbody, Tfoot);

/// A `<table>` with dedicated caption and section slots.
///
/// Rows may be added to the sections or directly to the table. Sections are
/// written only when they have children, in the order caption, thead, tbody,
/// tfoot. Rows added directly are written in place of the body when the tbody
/// is empty.
#[derive(Debug, Clone)]
pub struct Table {
    element: Element,
    caption: Caption,
    thead: Thead,
    tbody: Tbody,
    tfoot: Tfoot,
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    pub fn new() -> Self {
        Self {
            element: Element::new(TagKind::Table).block(),
            caption: Caption::new(),
            thead: Thead::new(),
            tbody: Tbody::new(),
            tfoot: Tfoot::new(),
        }
    }

    pub fn caption(&self) -> &Caption {
        &self.caption
    }

    pub fn caption_mut(&mut self) -> &mut Caption {
        &mut self.caption
    }

    pub fn thead(&self) -> &Thead {
        &self.thead
    }

    pub fn thead_mut(&mut self) -> &mut Thead {
        &mut self.thead
    }

    pub fn tbody(&self) -> &Tbody {
        &self.tbody
    }

    pub fn tbody_mut(&mut self) -> &mut Tbody {
        &mut self.tbody
    }

    pub fn tfoot(&self) -> &Tfoot {
        &self.tfoot
    }

    pub fn tfoot_mut(&mut self) -> &mut Tfoot {
        &mut self.tfoot
    }

    /// Sets the caption content.
    pub fn with_caption(mut self, content: impl Into<Content>) -> Self {
        self.caption = self.caption.child(content);
        self
    }

    /// Adds a row to the `<thead>` section.
    pub fn header_row(mut self, row: impl Into<Content>) -> Self {
        self.thead = self.thead.child(row);
        self
    }

    /// Adds a row to the `<tbody>` section.
    pub fn body_row(mut self, row: impl Into<Content>) -> Self {
        self.tbody = self.tbody.child(row);
        self
    }

    /// Adds a row to the `<tfoot>` section.
    pub fn footer_row(mut self, row: impl Into<Content>) -> Self {
        self.tfoot = self.tfoot.child(row);
        self
    }
}

impl Node for Table {
    fn element(&self) -> &Element {
        &self.element
    }

    fn element_mut(&mut self) -> &mut Element {
        &mut self.element
    }

    fn write_html(&self, out: &mut String, ctx: &mut RenderContext<'_>) {
        self.element.write_open_tag(out);
        if !self.caption.is_empty() {
            self.caption.write_html(out, ctx);
        }
        if !self.thead.is_empty() {
            self.thead.write_html(out, ctx);
        }
        if self.tbody.is_empty() {
            self.element.write_children(out, ctx);
        } else {
            self.tbody.write_html(out, ctx);
        }
        if !self.tfoot.is_empty() {
            self.tfoot.write_html(out, ctx);
        }
        self.element.write_close_tag(out);
    }
}

impl crate::widget::Widget for Table {}
impl ContainerWidget for Table {}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.html())
    }
}
