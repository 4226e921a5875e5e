//! Block containers: divisions, landmarks, lists and disclosure widgets.

use crate::setters::{flag_setters, value_setters};
use htmlgen_core::{define_element, impl_container_widget};

define_element!(
    /// A generic block container.
    Div => Div, block
);
define_element!(Nav => Nav, block);
define_element!(Header => Header, block);
define_element!(Footer => Footer, block);
define_element!(Section => Section, block);
define_element!(Article => Article, block);
define_element!(Aside => Aside, block);
define_element!(Main => Main, block);
define_element!(Figure => Figure, block);
define_element!(Figcaption => Figcaption);
define_element!(Blockquote => Blockquote, block);

define_element!(Ul => Ul, block);
define_element!(Ol => Ol, block);
define_element!(
    /// A list item. Always followed by a newline.
    Li => Li, line
);

define_element!(Details => Details, block);
define_element!(Summary => Summary);
define_element!(Dialog => Dialog, block);
define_element!(
    /// Markup held inert until a script clones it into the document.
    Template => Template, block
);

impl_container_widget!(
    Div, Nav, Header, Footer, Section, Article, Aside, Main, Figure, Figcaption, Blockquote, Ul,
    Ol, Li, Details, Summary, Dialog, Template
);

value_setters!(Blockquote {
    cite => "cite",
});

value_setters!(Ol {
    start => "start",
});
flag_setters!(Ol {
    reversed => "reversed",
});

value_setters!(Li {
    value => "value",
});

flag_setters!(Details {
    /// Shows the details expanded.
    open => "open",
});

flag_setters!(Dialog {
    open => "open",
});
