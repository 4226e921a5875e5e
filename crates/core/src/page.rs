//! The page composite: a full document with head, body and dependency block.

use crate::node::{Content, Element, Node, Text};
use crate::registry::DependencyRegistry;
use crate::render::RenderContext;
use crate::widget::ContainerWidget;
use htmlgen_traits::{InMemoryResourceProvider, ResourceProvider};
use htmlgen_types::{DeliveryMode, Dependency, TagKind};
use std::fmt;
use std::sync::Arc;

pub const DEFAULT_PREAMBLE: &str = "<!DOCTYPE html>";

crate::define_element!(
    /// The document `<head>`.
    Head => Head, block
);
crate::define_element!(
    /// The document `<title>`.
    Title => Title, line
);

crate::impl_container_widget!(Head, Title);

impl Title {
    pub fn with_text(text: impl Into<String>) -> Self {
        Title::new().child(Text::new(text))
    }
}

/// A complete HTML document.
///
/// The page's own children form the body. Dependencies, scripts and styles
/// collected in its [`DependencyRegistry`] are resolved when the page is
/// rendered: stylesheets and head scripts go into `<head>`, dependency and
/// body scripts go right before `</body>`.
///
/// Rendering never changes the page. Nodes that register dependencies while
/// being written do so on a copy of the registry.
#[derive(Debug, Clone)]
pub struct Page {
    body: Element,
    head: Head,
    preamble: String,
    registry: DependencyRegistry,
    resources: Arc<dyn ResourceProvider>,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    pub fn new() -> Self {
        Self {
            body: Element::new(TagKind::Body),
            head: Head::new(),
            preamble: DEFAULT_PREAMBLE.to_string(),
            registry: DependencyRegistry::new(),
            resources: Arc::new(InMemoryResourceProvider::new()),
        }
    }

    /// Sets where embedded dependencies are loaded from.
    pub fn with_resources(mut self, resources: Arc<dyn ResourceProvider>) -> Self {
        self.resources = resources;
        self
    }

    pub fn set_resources(&mut self, resources: Arc<dyn ResourceProvider>) {
        self.resources = resources;
    }

    pub fn resources(&self) -> &Arc<dyn ResourceProvider> {
        &self.resources
    }

    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    pub fn set_preamble(&mut self, preamble: impl Into<String>) {
        self.preamble = preamble.into();
    }

    pub fn head(&self) -> &Head {
        &self.head
    }

    pub fn head_mut(&mut self) -> &mut Head {
        &mut self.head
    }

    /// Adds a `<title>` to the head.
    pub fn title(mut self, text: impl Into<String>) -> Self {
        self.head = self.head.child(Title::with_text(text));
        self
    }

    /// Adds body content and returns the page.
    pub fn child(mut self, content: impl Into<Content>) -> Self {
        if let Err(e) = self.body.add(content) {
            log::warn!("Cannot add child to page body: {}", e);
        }
        self
    }

    // --- Dependency registry ---

    pub fn require(&mut self, dependency: Dependency) {
        self.registry.require(dependency);
    }

    pub fn has_dependency(&self, dependency: Dependency) -> bool {
        self.registry.has_dependency(dependency)
    }

    pub fn add_head_script(&mut self, js: impl Into<String>) {
        self.registry.add_head_script(js);
    }

    pub fn add_body_script(&mut self, js: impl Into<String>) {
        self.registry.add_body_script(js);
    }

    /// Queues a snippet for the document-ready block. See
    /// [`DependencyRegistry::add_on_ready`].
    pub fn add_on_ready(&mut self, js: impl Into<String>, key: &str) {
        self.registry.add_on_ready(js, key);
    }

    pub fn add_style(&mut self, css: impl Into<String>) {
        self.registry.add_style(css);
    }

    pub fn set_delivery_mode(&mut self, mode: DeliveryMode) {
        self.registry.set_delivery_mode(mode);
    }

    pub fn delivery_mode(&self) -> DeliveryMode {
        self.registry.delivery_mode()
    }

    pub fn registry(&self) -> &DependencyRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut DependencyRegistry {
        &mut self.registry
    }
}

impl Node for Page {
    fn element(&self) -> &Element {
        &self.body
    }

    fn element_mut(&mut self) -> &mut Element {
        &mut self.body
    }

    /// Writes the whole document. The outer context is not used; a page
    /// always resolves against its own registry.
    fn write_html(&self, out: &mut String, _ctx: &mut RenderContext<'_>) {
        log::debug!(
            "Rendering page with {} body elements",
            self.body.children().len()
        );
        let start = out.len();
        let mut registry = self.registry.clone();

        let mut body = String::new();
        let mut head = String::new();
        {
            let mut ctx = RenderContext::new(&mut registry);
            for child in self.body.children() {
                child.write_html(&mut body, &mut ctx);
                body.push('\n');
            }
            self.head.element().write_children(&mut head, &mut ctx);
        }
        let resources = self.resources.as_ref();

        out.push_str(&self.preamble);
        out.push('\n');
        out.push_str("<html>\n");
        self.head.element().write_open_tag(out);
        out.push_str(&head);
        registry.write_head(out, resources);
        self.head.element().write_close_tag(out);
        out.push_str("<body>\n");
        out.push_str(&body);
        registry.write_body_end(out, resources);
        out.push_str("</body>\n");
        out.push_str("</html>\n");

        log::debug!("Rendered page ({} bytes)", out.len() - start);
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.html())
    }
}
