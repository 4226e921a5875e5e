//! # htmlgen-core
//!
//! The element tree and everything needed to turn it into markup.
//!
//! - **node**: the [`Node`] trait, the generic [`Element`], [`Text`] and [`Group`]
//! - **attributes**: the fixed-order attribute store
//! - **widget**: chainable setters and the `define_element!` macro
//! - **table** / **page**: composites with their own write order
//! - **registry**: page-level dependencies, scripts and styles
//!
//! Tag-specific types live in `htmlgen-tags`, which builds on the macros
//! exported here.

// Re-export foundation crates
pub use htmlgen_traits as traits;
pub use htmlgen_types as types;

pub mod attributes;
pub mod error;
pub mod escape;
pub mod node;
pub mod page;
pub mod registry;
pub mod render;
pub mod table;
pub mod widget;

pub use attributes::{Attr, AttrSlot, Attributes, attr};
pub use error::ElementError;
pub use escape::{escape, nbsp};
pub use node::{Content, Element, Group, Node, NodeClone, Text};
pub use page::{DEFAULT_PREAMBLE, Head, Page, Title};
pub use registry::DependencyRegistry;
pub use render::RenderContext;
pub use table::{Caption, Table, Tbody, Tfoot, Thead};
pub use widget::{ContainerWidget, Widget};

pub use htmlgen_traits::{InMemoryResourceProvider, ResourceError, ResourceProvider};
pub use htmlgen_types::{DeliveryMode, Dependency, DependencyKind, TagKind};
