//! Page-level bookkeeping of dependencies and injected scripts.

use htmlgen_traits::ResourceProvider;
use htmlgen_types::{DeliveryMode, Dependency, DependencyKind};
use std::collections::{BTreeSet, HashSet};

/// Everything a page has been asked to inject around its content.
///
/// Requirements are idempotent. On-ready snippets keep their registration
/// order and are dropped when their key has been seen before.
#[derive(Debug, Clone, Default)]
pub struct DependencyRegistry {
    dependencies: BTreeSet<Dependency>,
    head_scripts: Vec<String>,
    body_scripts: Vec<String>,
    on_ready: Vec<String>,
    on_ready_keys: HashSet<String>,
    styles: Vec<String>,
    mode: DeliveryMode,
}

impl DependencyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `dependency` as required. A bundle also marks its constituents.
    pub fn require(&mut self, dependency: Dependency) {
        if !self.dependencies.insert(dependency) {
            log::trace!("Dependency '{}' already registered", dependency);
            return;
        }
        log::debug!("Registered dependency '{}'", dependency);
        for &part in dependency.constituents() {
            self.require(part);
        }
    }

    pub fn has_dependency(&self, dependency: Dependency) -> bool {
        self.dependencies.contains(&dependency)
    }

    /// Registered dependencies in emission order, bundles included.
    pub fn dependencies(&self) -> impl Iterator<Item = Dependency> + '_ {
        self.dependencies.iter().copied()
    }

    pub fn add_head_script(&mut self, js: impl Into<String>) {
        self.head_scripts.push(js.into());
    }

    pub fn add_body_script(&mut self, js: impl Into<String>) {
        self.body_scripts.push(js.into());
    }

    /// Queues a snippet to run once the document has loaded.
    ///
    /// A non-empty `key` suppresses every later snippet with the same key.
    /// Returns whether the snippet was queued.
    pub fn add_on_ready(&mut self, js: impl Into<String>, key: &str) -> bool {
        if !key.is_empty() && !self.on_ready_keys.insert(key.to_string()) {
            log::trace!("Dropping duplicate on-ready snippet for key '{}'", key);
            return false;
        }
        self.on_ready.push(js.into());
        true
    }

    pub fn add_style(&mut self, css: impl Into<String>) {
        self.styles.push(css.into());
    }

    pub fn set_delivery_mode(&mut self, mode: DeliveryMode) {
        self.mode = mode;
    }

    pub fn delivery_mode(&self) -> DeliveryMode {
        self.mode
    }

    pub fn head_scripts(&self) -> &[String] {
        &self.head_scripts
    }

    pub fn body_scripts(&self) -> &[String] {
        &self.body_scripts
    }

    pub fn on_ready_snippets(&self) -> &[String] {
        &self.on_ready
    }

    pub fn styles(&self) -> &[String] {
        &self.styles
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
            && self.head_scripts.is_empty()
            && self.body_scripts.is_empty()
            && self.on_ready.is_empty()
            && self.styles.is_empty()
    }

    /// Stylesheets, inline styles, head scripts and the on-ready block, in
    /// that order.
    pub(crate) fn write_head(&self, out: &mut String, resources: &dyn ResourceProvider) {
        for dependency in self.of_kind(DependencyKind::Stylesheet) {
            self.write_dependency(out, dependency, resources);
        }
        for css in &self.styles {
            write_block(out, "style", css);
        }
        for js in &self.head_scripts {
            write_block(out, "script", js);
        }
        if !self.on_ready.is_empty() {
            out.push_str("<script>\n");
            out.push_str("document.addEventListener('DOMContentLoaded', function() {\n");
            for js in &self.on_ready {
                out.push_str(js);
                out.push('\n');
            }
            out.push_str("});\n");
            out.push_str("</script>\n");
        }
    }

    /// Dependency scripts followed by body scripts.
    pub(crate) fn write_body_end(&self, out: &mut String, resources: &dyn ResourceProvider) {
        for dependency in self.of_kind(DependencyKind::Script) {
            self.write_dependency(out, dependency, resources);
        }
        for js in &self.body_scripts {
            write_block(out, "script", js);
        }
    }

    fn of_kind(&self, kind: DependencyKind) -> impl Iterator<Item = Dependency> + '_ {
        self.dependencies().filter(move |d| d.kind() == kind)
    }

    fn write_dependency(
        &self,
        out: &mut String,
        dependency: Dependency,
        resources: &dyn ResourceProvider,
    ) {
        let tag = match dependency.kind() {
            DependencyKind::Stylesheet => "style",
            DependencyKind::Script => "script",
            DependencyKind::Bundle => return,
        };

        match self.mode {
            DeliveryMode::Reference => {
                let Some(url) = dependency.cdn_url() else {
                    return;
                };
                if tag == "style" {
                    out.push_str(&format!("<link rel=\"stylesheet\" href=\"{}\">\n", url));
                } else {
                    out.push_str(&format!("<script src=\"{}\"></script>\n", url));
                }
            }
            DeliveryMode::Embedded => {
                let Some(name) = dependency.resource_name() else {
                    return;
                };
                match resources.load_text(name) {
                    Ok(text) => write_block(out, tag, &text),
                    Err(e) => {
                        log::warn!(
                            "Cannot embed '{}' from {}: {}",
                            name,
                            resources.name(),
                            e
                        );
                        out.push_str(&format!("<{tag}>/* {name} unavailable */</{tag}>\n"));
                    }
                }
            }
        }
    }
}

fn write_block(out: &mut String, tag: &str, body: &str) {
    out.push('<');
    out.push_str(tag);
    out.push_str(">\n");
    out.push_str(body);
    out.push_str("\n</");
    out.push_str(tag);
    out.push_str(">\n");
}
