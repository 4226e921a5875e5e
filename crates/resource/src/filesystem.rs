//! Assets read from a directory on disk.
//!
//! Names are resolved relative to the provider's root. A name may not escape
//! the root, either through `..` components or through an absolute path.

use htmlgen_traits::{ResourceError, ResourceProvider, SharedResourceData};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// Loads page dependencies such as `bootstrap.min.css` from a directory.
#[derive(Debug)]
pub struct FilesystemResourceProvider {
    root: PathBuf,
    /// `None` when the root did not exist at construction time.
    canonical_root: Option<PathBuf>,
}

impl FilesystemResourceProvider {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref().to_path_buf();
        let canonical_root = root.canonicalize().ok();
        if canonical_root.is_none() {
            log::debug!("Resource directory '{}' does not exist yet", root.display());
        }
        Self {
            root,
            canonical_root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps a resource name onto a path inside the root, or `None` if the
    /// name would leave it.
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        let relative = Path::new(name);
        if relative.is_absolute() {
            return None;
        }
        if relative
            .components()
            .any(|c| matches!(c, Component::ParentDir))
        {
            return None;
        }

        let joined = self.root.join(relative);
        match (joined.canonicalize(), &self.canonical_root) {
            // Symlinks can still point outside the root.
            (Ok(canonical), Some(root)) if !canonical.starts_with(root) => None,
            (Ok(canonical), _) => Some(canonical),
            (Err(_), _) => Some(joined),
        }
    }
}

impl ResourceProvider for FilesystemResourceProvider {
    fn load(&self, name: &str) -> Result<SharedResourceData, ResourceError> {
        let path = self.resolve(name).ok_or_else(|| {
            log::warn!("Blocked resource name outside of root: {}", name);
            ResourceError::NotFound(format!("{} (outside resource root)", name))
        })?;

        match std::fs::read(&path) {
            Ok(bytes) => {
                log::trace!("Loaded '{}' ({} bytes)", path.display(), bytes.len());
                Ok(Arc::new(bytes))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ResourceError::NotFound(name.to_string()))
            }
            Err(e) => Err(ResourceError::LoadFailed {
                path: name.to_string(),
                message: e.to_string(),
            }),
        }
    }

    fn exists(&self, name: &str) -> bool {
        self.resolve(name).is_some_and(|p| p.is_file())
    }

    fn base_path(&self) -> Option<&str> {
        self.root.to_str()
    }

    fn name(&self) -> &'static str {
        "FilesystemResourceProvider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_loads_text_asset() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("bootstrap.min.css"), ".btn{color:red}").unwrap();

        let provider = FilesystemResourceProvider::new(dir.path());
        assert!(provider.exists("bootstrap.min.css"));
        assert_eq!(provider.load_text("bootstrap.min.css").unwrap(), ".btn{color:red}");
    }

    #[test]
    fn test_missing_asset_is_not_found() {
        let dir = tempdir().unwrap();
        let provider = FilesystemResourceProvider::new(dir.path());

        assert!(matches!(
            provider.load("apexcharts.min.js"),
            Err(ResourceError::NotFound(_))
        ));
        assert!(!provider.exists("apexcharts.min.js"));
    }

    #[test]
    fn test_directories_are_not_resources() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("vendor")).unwrap();

        let provider = FilesystemResourceProvider::new(dir.path());
        assert!(!provider.exists("vendor"));
    }

    #[test]
    fn test_nested_names_resolve() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("js")).unwrap();
        fs::write(dir.path().join("js").join("app.js"), "init();").unwrap();

        let provider = FilesystemResourceProvider::new(dir.path());
        assert_eq!(&*provider.load("js/app.js").unwrap(), b"init();");
    }

    #[test]
    fn test_rejects_names_outside_root() {
        let dir = tempdir().unwrap();
        let provider = FilesystemResourceProvider::new(dir.path());

        assert!(provider.load("../../../etc/passwd").is_err());
        assert!(provider.load("/etc/passwd").is_err());
        assert!(!provider.exists(".."));
        assert!(!provider.exists("js/../../secret"));
    }

    #[test]
    fn test_reports_root_as_base_path() {
        let dir = tempdir().unwrap();
        let provider = FilesystemResourceProvider::new(dir.path());
        assert_eq!(provider.root(), dir.path());
        assert!(provider.base_path().is_some());
    }
}
