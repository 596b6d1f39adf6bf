//! Droidres Core Library
//!
//! This library provides the density bucket table and resource naming rules
//! used to generate Android multi-density drawable assets.

pub mod density;
pub mod name;

pub use density::{detect_base_density, Density, BASELINE_DP};
pub use name::{asset_file_name, output_extension, sanitize_stem};

/// Result type for droidres-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for droidres-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid image width: {0}")]
    InvalidWidth(u32),
}
