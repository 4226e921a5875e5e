//! Third-party resources a page can require, and how they are delivered.

use serde::{Deserialize, Serialize};
use std::fmt;

const JSDELIVR: &str = "https://cdn.jsdelivr.net/npm";

/// A named external resource that a page may require any number of times.
///
/// The ordering is used to emit dependencies deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dependency {
    BootstrapCss,
    BootstrapJs,
    /// Registers both [`Dependency::BootstrapCss`] and [`Dependency::BootstrapJs`].
    BootstrapBundle,
    ApexChartsJs,
}

/// How a dependency is written into a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DependencyKind {
    Stylesheet,
    Script,
    /// Expands into finer-grained dependencies and is never written itself.
    Bundle,
}

/// Whether required dependencies are linked or inlined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryMode {
    /// Emit `<link>`/`<script src>` tags pointing at the CDN.
    #[default]
    #[serde(alias = "cdn")]
    Reference,
    /// Inline the full resource text into `<style>`/`<script>` blocks.
    Embedded,
}

impl Dependency {
    pub fn kind(self) -> DependencyKind {
        match self {
            Dependency::BootstrapCss => DependencyKind::Stylesheet,
            Dependency::BootstrapJs | Dependency::ApexChartsJs => DependencyKind::Script,
            Dependency::BootstrapBundle => DependencyKind::Bundle,
        }
    }

    /// External location used in [`DeliveryMode::Reference`]. Bundles have none.
    pub fn cdn_url(self) -> Option<String> {
        let path = match self {
            Dependency::BootstrapCss => "bootstrap@5.3.0/dist/css/bootstrap.min.css",
            Dependency::BootstrapJs => "bootstrap@5.3.0/dist/js/bootstrap.bundle.min.js",
            Dependency::ApexChartsJs => "apexcharts",
            Dependency::BootstrapBundle => return None,
        };
        Some(format!("{JSDELIVR}/{path}"))
    }

    /// Resource name looked up when the dependency is embedded.
    pub fn resource_name(self) -> Option<&'static str> {
        match self {
            Dependency::BootstrapCss => Some("bootstrap.min.css"),
            Dependency::BootstrapJs => Some("bootstrap.bundle.min.js"),
            Dependency::ApexChartsJs => Some("apexcharts.min.js"),
            Dependency::BootstrapBundle => None,
        }
    }

    /// The dependencies a bundle expands into. Empty for everything else.
    pub fn constituents(self) -> &'static [Dependency] {
        match self {
            Dependency::BootstrapBundle => &[Dependency::BootstrapCss, Dependency::BootstrapJs],
            _ => &[],
        }
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dependency::BootstrapCss => "bootstrap-css",
            Dependency::BootstrapJs => "bootstrap-js",
            Dependency::BootstrapBundle => "bootstrap-bundle",
            Dependency::ApexChartsJs => "apex-charts-js",
        };
        f.write_str(name)
    }
}
