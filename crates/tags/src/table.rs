//! Rows, cells and column groups.

use crate::setters::value_setters;
use htmlgen_core::{define_element, impl_container_widget};

pub use htmlgen_core::{Caption, Table, Tbody, Tfoot, Thead};

define_element!(Tr => Tr, block);
define_element!(
    /// A data cell.
    Td => Td, line
);
define_element!(
    /// A header cell. Content starts on the line after the open tag.
    Th => Th, block
);
define_element!(Colgroup => Colgroup, block);
define_element!(Col => Col, leaf, void);

impl_container_widget!(Tr, Td, Th, Colgroup);

value_setters!(Td {
    colspan => "colspan",
    rowspan => "rowspan",
    headers => "headers",
});

value_setters!(Th {
    /// `row`, `col`, `rowgroup` or `colgroup`.
    scope => "scope",
    colspan => "colspan",
    rowspan => "rowspan",
    abbr => "abbr",
    headers => "headers",
});

value_setters!(Colgroup {
    span => "span",
});

value_setters!(Col {
    span => "span",
});
