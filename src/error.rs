use htmlgen_core::ElementError;
use htmlgen_traits::ResourceError;
use thiserror::Error;

/// Failures while turning chart data into markup.
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("{chart}: no data added")]
    NoData { chart: &'static str },

    #[error("Failed to serialize chart options: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to assemble chart markup: {0}")]
    Element(#[from] ElementError),
}

/// Failures while building an [`ImageRotator`](crate::ImageRotator).
#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("rotator: no images added")]
    NoImages,

    #[error("Failed to serialize image list: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Failures while loading a [`PageConfig`](crate::PageConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid page configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Any error raised while assembling and writing a document.
#[derive(Error, Debug)]
pub enum HtmlGenError {
    #[error("Element error: {0}")]
    Element(#[from] ElementError),

    #[error("Resource error: {0}")]
    Resource(#[from] ResourceError),

    #[error("Chart error: {0}")]
    Chart(#[from] ChartError),

    #[error("Gallery error: {0}")]
    Gallery(#[from] GalleryError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
