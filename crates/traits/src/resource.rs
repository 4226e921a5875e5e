//! Resource lookup for embedded delivery.
//!
//! When a page inlines its dependencies it needs the full text of each
//! stylesheet or script. Where that text comes from (a directory on disk, a
//! table compiled into the host, a test fixture) is hidden behind
//! [`ResourceProvider`].

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, RwLock};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResourceError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Failed to load resource '{path}': {message}")]
    LoadFailed { path: String, message: String },

    #[error("Resource '{0}' is not valid UTF-8 text")]
    InvalidFormat(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ResourceError {
    fn from(err: std::io::Error) -> Self {
        ResourceError::Io(err.to_string())
    }
}

/// Reference-counted resource bytes.
pub type SharedResourceData = Arc<Vec<u8>>;

/// A source of named resources.
///
/// Providers are shared between clones of a page, so they must be
/// `Send + Sync` and use interior mutability if they change after creation.
pub trait ResourceProvider: Send + Sync + Debug {
    /// Loads the raw bytes of the resource called `name`.
    fn load(&self, name: &str) -> Result<SharedResourceData, ResourceError>;

    fn exists(&self, name: &str) -> bool;

    /// Loads a resource and decodes it as UTF-8.
    ///
    /// # Errors
    ///
    /// Fails with [`ResourceError::InvalidFormat`] when the bytes are not text.
    fn load_text(&self, name: &str) -> Result<String, ResourceError> {
        let data = self.load(name)?;
        String::from_utf8(data.to_vec()).map_err(|_| ResourceError::InvalidFormat(name.to_string()))
    }

    /// Directory that names are resolved against, if any.
    fn base_path(&self) -> Option<&str> {
        None
    }

    /// Human-readable provider name for log output.
    fn name(&self) -> &'static str;
}

/// Resources held in memory, keyed by name.
///
/// The default page provider. Hosts that compile their assets into the binary
/// register them here with [`InMemoryResourceProvider::with_text`].
#[derive(Debug, Default)]
pub struct InMemoryResourceProvider {
    resources: RwLock<HashMap<String, SharedResourceData>>,
}

impl InMemoryResourceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`InMemoryResourceProvider::add`] for text assets.
    pub fn with_text(self, name: impl Into<String>, text: impl Into<String>) -> Self {
        let name = name.into();
        if let Err(e) = self.add(name.clone(), text.into().into_bytes()) {
            log::warn!("Dropping resource '{}': {}", name, e);
        }
        self
    }

    /// Stores `data` under `name`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::LoadFailed` if the internal lock is poisoned.
    pub fn add(&self, name: impl Into<String>, data: Vec<u8>) -> Result<(), ResourceError> {
        let name = name.into();
        let mut resources = self.resources.write().map_err(|_| ResourceError::LoadFailed {
            path: name.clone(),
            message: "resource store lock poisoned".to_string(),
        })?;
        resources.insert(name, Arc::new(data));
        Ok(())
    }

    /// Removes a resource, returning its data if it was present.
    pub fn remove(&self, name: &str) -> Option<SharedResourceData> {
        self.resources.write().ok()?.remove(name)
    }

    /// Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.resources.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResourceProvider for InMemoryResourceProvider {
    fn load(&self, name: &str) -> Result<SharedResourceData, ResourceError> {
        let resources = self.resources.read().map_err(|_| ResourceError::LoadFailed {
            path: name.to_string(),
            message: "resource store lock poisoned".to_string(),
        })?;
        resources
            .get(name)
            .cloned()
            .ok_or_else(|| ResourceError::NotFound(name.to_string()))
    }

    fn exists(&self, name: &str) -> bool {
        self.resources
            .read()
            .map(|r| r.contains_key(name))
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "InMemoryResourceProvider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_text_then_load_text() {
        let provider = InMemoryResourceProvider::new().with_text("site.css", "body{margin:0}");
        assert_eq!(provider.load_text("site.css").unwrap(), "body{margin:0}");
        assert_eq!(provider.len(), 1);
    }

    #[test]
    fn test_missing_resource_is_not_found() {
        let provider = InMemoryResourceProvider::new();
        assert_eq!(
            provider.load_text("apexcharts.min.js"),
            Err(ResourceError::NotFound("apexcharts.min.js".to_string()))
        );
        assert!(!provider.exists("apexcharts.min.js"));
    }

    #[test]
    fn test_binary_resource_is_invalid_text() {
        let provider = InMemoryResourceProvider::new();
        provider.add("logo.bin", vec![0xff, 0xfe, 0x00]).unwrap();

        assert!(provider.load("logo.bin").is_ok());
        assert!(matches!(
            provider.load_text("logo.bin"),
            Err(ResourceError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_add_overwrites_and_remove_returns_data() {
        let provider = InMemoryResourceProvider::new();
        provider.add("app.js", b"one".to_vec()).unwrap();
        provider.add("app.js", b"two".to_vec()).unwrap();
        assert_eq!(provider.len(), 1);

        let removed = provider.remove("app.js").unwrap();
        assert_eq!(&*removed, b"two");
        assert!(provider.is_empty());
        assert!(provider.remove("app.js").is_none());
    }

    #[test]
    fn test_in_memory_provider_has_no_base_path() {
        let provider = InMemoryResourceProvider::new();
        assert!(provider.base_path().is_none());
        assert_eq!(provider.name(), "InMemoryResourceProvider");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ResourceError = io_err.into();
        assert!(matches!(err, ResourceError::Io(_)));
        assert!(err.to_string().contains("denied"));
    }
}
