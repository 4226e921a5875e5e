//! # htmlgen
//!
//! Build HTML documents as typed trees and render them to text.
//!
//! ```ignore
//! use htmlgen::prelude::*;
//!
//! let mut page = Page::new().title("Report").child(h1("Quarterly numbers"));
//! page.require(Dependency::BootstrapBundle);
//!
//! let mut chart = BarChart::new().id("sales");
//! chart.add("Q1", 12.0);
//! page.add(chart.node()?)?;
//!
//! std::fs::write("report.html", page.html())?;
//! ```
//!
//! The workspace is split the same way:
//! - **htmlgen-types**: tag identities, dependencies, delivery mode
//! - **htmlgen-traits** / **htmlgen-resource**: where embedded files come from
//! - **htmlgen-core**: the tree, attributes, table, page and registry
//! - **htmlgen-tags**: the typed tag catalog and widget functions
//!
//! This crate adds charts, an image gallery, page configuration and the
//! command line tool.

pub use htmlgen_core as tree;
pub use htmlgen_resource as resource;
pub use htmlgen_tags as tags;
pub use htmlgen_traits as traits;
pub use htmlgen_types as types;

pub mod charts;
pub mod config;
pub mod error;
pub mod gallery;

pub use charts::{BarChart, Chart, ChartNode, LineChart, TimeseriesLineChart};
pub use config::PageConfig;
pub use error::{ChartError, ConfigError, GalleryError, HtmlGenError};
pub use gallery::ImageRotator;

pub use htmlgen_core::{
    Attr, AttrSlot, Content, DeliveryMode, Dependency, DependencyRegistry, Element, ElementError,
    Group, Node, Page, RenderContext, Table, TagKind, Text, Widget, escape, nbsp,
};
pub use htmlgen_resource::FilesystemResourceProvider;
pub use htmlgen_traits::{InMemoryResourceProvider, ResourceError, ResourceProvider};

/// Everything needed to build pages, in one import.
pub mod prelude {
    pub use crate::charts::{BarChart, Chart, LineChart, TimeseriesLineChart};
    pub use crate::config::PageConfig;
    pub use crate::error::HtmlGenError;
    pub use crate::gallery::ImageRotator;
    pub use htmlgen_core::{DeliveryMode, Dependency, Page, attr};
    pub use htmlgen_tags::builders::*;
    pub use htmlgen_tags::*;
}
