//! Document metadata and script elements.

use crate::setters::value_setters;
use htmlgen_core::{ContainerWidget, Text, define_element, impl_container_widget};

pub use htmlgen_core::Title;

define_element!(
    /// A script block, inline or referencing `src`.
    Script => Script, block
);
define_element!(Style => Style, line);
define_element!(Link => Link, leaf, void, line);
define_element!(Meta => Meta, leaf, void, line);

impl_container_widget!(Script, Style);

impl Script {
    /// Adds inline code on its own line.
    pub fn code(self, js: impl Into<String>) -> Self {
        self.child(Text::new(js).with_newline())
    }
}

impl Style {
    /// Adds a rule block. Each block ends with a newline.
    pub fn css(self, css: impl Into<String>) -> Self {
        self.child(Text::new(css).with_newline())
    }
}

value_setters!(Meta {
    name => "name",
    content => "content",
    charset => "charset",
    http_equiv => "http-equiv",
});
