//! Headings, phrasing content and line breaks.

use crate::setters::value_setters;
use htmlgen_core::{Element, Node, RenderContext, TagKind, define_element, impl_container_widget};
use std::fmt;

define_element!(H1 => H1, line);
define_element!(H2 => H2, line);
define_element!(H3 => H3, line);
define_element!(H4 => H4, line);
define_element!(H5 => H5, line);
define_element!(H6 => H6, line);

define_element!(
    /// A paragraph. Written without any surrounding whitespace.
    P => P
);
define_element!(Span => Span);
define_element!(Em => Em);
define_element!(Strong => Strong);
define_element!(B => B);
define_element!(Small => Small);
define_element!(Mark => Mark);
define_element!(Code => Code);
define_element!(
    /// Preformatted text. Content is written as given.
    Pre => Pre, line
);
define_element!(
    /// A hyperlink (`<a>`).
    Anchor => A
);
define_element!(Time => Time);
define_element!(
    /// An inline quotation.
    Q => Q
);
define_element!(
    /// Struck-through text that is no longer accurate.
    S => S
);
define_element!(U => U);
define_element!(Sub => Sub);
define_element!(Sup => Sup);
define_element!(
    /// An insertion into the document.
    Ins => Ins
);
define_element!(
    /// A removal from the document.
    Del => Del
);

impl_container_widget!(
    H1, H2, H3, H4, H5, H6, P, Span, Em, Strong, B, Small, Mark, Code, Pre, Anchor, Time, Q, S, U,
    Sub, Sup, Ins, Del
);

value_setters!(Anchor {
    target => "target",
    /// Suggests a file name for the linked resource.
    download => "download",
});

value_setters!(Time {
    datetime => "datetime",
});

value_setters!(Q {
    cite => "cite",
});

value_setters!(Ins {
    cite => "cite",
    datetime => "datetime",
});

value_setters!(Del {
    cite => "cite",
    datetime => "datetime",
});

/// Defines a tag that always writes a fixed string, regardless of its
/// attributes.
macro_rules! fixed_element {
    ($(#[$meta:meta])* $name:ident => $kind:ident, $markup:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            element: Element,
        }

        impl $name {
            pub fn new() -> Self {
                Self {
                    element: Element::new(TagKind::$kind).leaf().void(),
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Node for $name {
            fn element(&self) -> &Element {
                &self.element
            }

            fn element_mut(&mut self) -> &mut Element {
                &mut self.element
            }

            fn write_html(&self, out: &mut String, _ctx: &mut RenderContext<'_>) {
                out.push_str($markup);
            }
        }

        /// The setters compile and store their values, but nothing they set
        /// is ever written: the markup stays fixed.
        impl htmlgen_core::Widget for $name {}

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str($markup)
            }
        }
    };
}

fixed_element!(
    /// A line break. Always written as `<br>`; attributes are ignored.
    Br => Br, "<br>"
);
fixed_element!(
    /// A thematic break. Always written as `<hr>`; attributes are ignored.
    Hr => Hr, "<hr>"
);
