//! State threaded through a single render pass.

use crate::registry::DependencyRegistry;
use htmlgen_types::Dependency;

/// Gives nodes being written access to the enclosing page's registry.
///
/// Outside of a page there is no registry, and every registration is
/// silently skipped. Nodes must render the same markup either way.
#[derive(Debug, Default)]
pub struct RenderContext<'a> {
    registry: Option<&'a mut DependencyRegistry>,
}

impl<'a> RenderContext<'a> {
    /// A context for rendering a fragment that is not part of a page.
    pub fn detached() -> Self {
        Self { registry: None }
    }

    pub fn new(registry: &'a mut DependencyRegistry) -> Self {
        Self {
            registry: Some(registry),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.registry.is_some()
    }

    pub fn registry(&mut self) -> Option<&mut DependencyRegistry> {
        self.registry.as_deref_mut()
    }

    pub fn require(&mut self, dependency: Dependency) {
        if let Some(registry) = self.registry() {
            registry.require(dependency);
        }
    }

    pub fn add_on_ready(&mut self, js: &str, key: &str) {
        if let Some(registry) = self.registry() {
            registry.add_on_ready(js, key);
        }
    }

    pub fn add_body_script(&mut self, js: &str) {
        if let Some(registry) = self.registry() {
            registry.add_body_script(js);
        }
    }
}
