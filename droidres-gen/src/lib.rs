//! Droidres Generation Library
//!
//! This library renders a source image into the five Android density
//! buckets and drives batches of such renders over a directory.

pub mod batch;
pub mod generator;
pub mod sink;

pub use batch::process;
pub use generator::{AssetGenerator, GeneratorConfig};
pub use sink::{ChannelSink, MessageSink, StdoutSink};

/// Result type for droidres-gen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for droidres-gen operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Droidres core error: {0}")]
    Core(#[from] droidres_core::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("File not found: {0}")]
    SourceNotFound(std::path::PathBuf),
}
