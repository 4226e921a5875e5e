//! Page-level settings loaded from JSON.

use crate::error::ConfigError;
use htmlgen_core::{DEFAULT_PREAMBLE, DeliveryMode, InMemoryResourceProvider, Page};
use htmlgen_resource::FilesystemResourceProvider;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// How pages are set up before content is added.
///
/// ```json
/// { "preamble": "<!DOCTYPE html>", "delivery-mode": "embedded", "resource-dir": "assets" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PageConfig {
    pub preamble: String,
    pub delivery_mode: DeliveryMode,
    /// Directory holding the files inlined in embedded mode.
    pub resource_dir: Option<PathBuf>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            preamble: DEFAULT_PREAMBLE.to_string(),
            delivery_mode: DeliveryMode::default(),
            resource_dir: None,
        }
    }
}

impl PageConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::debug!("Loading page configuration from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Creates an empty page with these settings applied.
    pub fn build_page(&self) -> Page {
        let mut page = Page::new();
        page.set_preamble(self.preamble.clone());
        page.set_delivery_mode(self.delivery_mode);
        match &self.resource_dir {
            Some(dir) => page.set_resources(Arc::new(FilesystemResourceProvider::new(dir))),
            None => page.set_resources(Arc::new(InMemoryResourceProvider::new())),
        }
        page
    }
}
