//! Resource providers backed by the host platform.
//!
//! - [`FilesystemResourceProvider`]: reads assets from a directory
//! - [`InMemoryResourceProvider`]: re-exported from `htmlgen-traits`

mod filesystem;

pub use filesystem::FilesystemResourceProvider;
pub use htmlgen_traits::InMemoryResourceProvider;
