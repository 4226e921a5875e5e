//! Consuming, chainable setters for typed elements.
//!
//! ```ignore
//! let card = Div::new()
//!     .id("summary")
//!     .class("card")
//!     .aria_label("Summary")
//!     .child(h2("Totals"))
//!     .child(p("All figures in EUR."));
//! ```

use crate::attributes::AttrSlot;
use crate::node::{Content, Node};

/// Attribute setters shared by every typed element.
///
/// Each setter takes the widget by value and hands it back, so calls chain.
pub trait Widget: Node + Sized {
    fn id(mut self, id: impl Into<String>) -> Self {
        self.element_mut().attrs_mut().set(AttrSlot::Id, id);
        self
    }

    fn data_id(mut self, id: impl Into<String>) -> Self {
        self.element_mut().attrs_mut().set(AttrSlot::DataId, id);
        self
    }

    /// Replaces the class list.
    fn class(mut self, class: impl Into<String>) -> Self {
        self.element_mut().attrs_mut().set(AttrSlot::Class, class);
        self
    }

    /// Appends to the class list, separated by a space.
    fn add_class(mut self, class: &str) -> Self {
        self.element_mut().attrs_mut().add_class(class);
        self
    }

    fn type_(mut self, value: impl Into<String>) -> Self {
        self.element_mut().attrs_mut().set(AttrSlot::Type, value);
        self
    }

    fn role(mut self, role: impl Into<String>) -> Self {
        self.element_mut().attrs_mut().set(AttrSlot::Role, role);
        self
    }

    fn style(mut self, style: impl Into<String>) -> Self {
        self.element_mut().attrs_mut().set(AttrSlot::Style, style);
        self
    }

    fn src(mut self, src: impl Into<String>) -> Self {
        self.element_mut().attrs_mut().set(AttrSlot::Src, src);
        self
    }

    fn alt(mut self, alt: impl Into<String>) -> Self {
        self.element_mut().attrs_mut().set(AttrSlot::Alt, alt);
        self
    }

    fn width(mut self, width: impl Into<String>) -> Self {
        self.element_mut().attrs_mut().set(AttrSlot::Width, width);
        self
    }

    fn height(mut self, height: impl Into<String>) -> Self {
        self.element_mut().attrs_mut().set(AttrSlot::Height, height);
        self
    }

    fn href(mut self, href: impl Into<String>) -> Self {
        self.element_mut().attrs_mut().set(AttrSlot::Href, href);
        self
    }

    fn rel(mut self, rel: impl Into<String>) -> Self {
        self.element_mut().attrs_mut().set(AttrSlot::Rel, rel);
        self
    }

    /// Sets any attribute by name. Well-known names go to their slot.
    fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.element_mut().attrs_mut().insert(name, value);
        self
    }

    /// Sets `data-<name>`.
    fn data(mut self, name: &str, value: &str) -> Self {
        self.element_mut().set_data(name, value);
        self
    }

    // --- ARIA ---

    fn aria_label(mut self, label: &str) -> Self {
        self.element_mut().attrs_mut().push_other("aria-label", label);
        self
    }

    fn aria_labelledby(mut self, ids: &str) -> Self {
        self.element_mut().attrs_mut().push_other("aria-labelledby", ids);
        self
    }

    fn aria_describedby(mut self, ids: &str) -> Self {
        self.element_mut().attrs_mut().push_other("aria-describedby", ids);
        self
    }

    fn aria_hidden(mut self, hidden: bool) -> Self {
        self.element_mut().attrs_mut().push_bool("aria-hidden", hidden);
        self
    }

    fn aria_expanded(mut self, expanded: bool) -> Self {
        self.element_mut().attrs_mut().push_bool("aria-expanded", expanded);
        self
    }

    fn aria_controls(mut self, ids: &str) -> Self {
        self.element_mut().attrs_mut().push_other("aria-controls", ids);
        self
    }

    fn aria_current(mut self, value: &str) -> Self {
        self.element_mut().attrs_mut().push_other("aria-current", value);
        self
    }

    fn aria_live(mut self, politeness: &str) -> Self {
        self.element_mut().attrs_mut().push_other("aria-live", politeness);
        self
    }

    // --- Global attributes ---

    /// Writes `hidden="hidden"` when `hidden` is true, nothing otherwise.
    fn hidden(mut self, hidden: bool) -> Self {
        if hidden {
            self.element_mut().attrs_mut().push_flag("hidden");
        }
        self
    }

    fn contenteditable(mut self, editable: bool) -> Self {
        self.element_mut().attrs_mut().push_bool("contenteditable", editable);
        self
    }

    fn draggable(mut self, draggable: bool) -> Self {
        self.element_mut().attrs_mut().push_bool("draggable", draggable);
        self
    }

    fn spellcheck(mut self, spellcheck: bool) -> Self {
        self.element_mut().attrs_mut().push_bool("spellcheck", spellcheck);
        self
    }

    fn tabindex(mut self, index: i32) -> Self {
        self.element_mut()
            .attrs_mut()
            .push_other("tabindex", &index.to_string());
        self
    }

    fn title(mut self, title: &str) -> Self {
        self.element_mut().attrs_mut().push_other("title", title);
        self
    }

    fn lang(mut self, lang: &str) -> Self {
        self.element_mut().attrs_mut().push_other("lang", lang);
        self
    }

    fn dir(mut self, dir: &str) -> Self {
        self.element_mut().attrs_mut().push_other("dir", dir);
        self
    }
}

/// Child insertion for typed elements that can hold children.
///
/// Only implemented by container tags, so adding a child to a void tag does
/// not compile on this path.
pub trait ContainerWidget: Widget {
    /// Adds a node, text, or attribute.
    ///
    /// The only failure left on this path is an empty group, which is logged
    /// and skipped.
    fn child(mut self, content: impl Into<Content>) -> Self {
        let tag = self.kind();
        if let Err(e) = self.element_mut().add(content) {
            log::warn!("Cannot add child to <{}>: {}", tag, e);
        }
        self
    }

    fn text(self, text: impl Into<String>) -> Self {
        self.child(Content::Text(text.into()))
    }

    fn children<I>(self, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Content>,
    {
        items.into_iter().fold(self, |widget, item| widget.child(item))
    }
}

/// Declares a typed element wrapping an [`Element`](crate::Element).
///
/// The tag kind is followed by formatting presets applied to the element
/// (`block`, `line`, `open_line`, `void`, `leaf`).
///
/// ```ignore
/// define_element!(
///     /// A division.
///     Div => Div, block
/// );
/// ```
#[macro_export]
macro_rules! define_element {
    ($(#[$meta:meta])* $name:ident => $kind:ident $(, $preset:ident)* $(,)?) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            element: $crate::Element,
        }

        impl $name {
            pub fn new() -> Self {
                Self {
                    element: $crate::Element::new($crate::TagKind::$kind)$(.$preset())*,
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $crate::Node for $name {
            fn element(&self) -> &$crate::Element {
                &self.element
            }

            fn element_mut(&mut self) -> &mut $crate::Element {
                &mut self.element
            }
        }

        impl $crate::Widget for $name {}

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&$crate::Node::html(self))
            }
        }
    };
}

/// Marks typed elements as able to hold children.
#[macro_export]
macro_rules! impl_container_widget {
    ($($t:ty),+ $(,)?) => {
        $(
            impl $crate::ContainerWidget for $t {}
        )+
    };
}
