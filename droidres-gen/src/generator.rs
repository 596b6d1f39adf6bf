//! Multi-density asset rendering

use std::fs;
use std::path::{Path, PathBuf};

use droidres_core::{asset_file_name, detect_base_density, Density};
use image::imageops::FilterType;
use image::GenericImageView;

use crate::sink::MessageSink;
use crate::{Error, Result};

/// Per-file delimiter in the progress stream
const SEPARATOR: &str = "--------------------------------------------------";

/// Generator configuration
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Resampling filter used for every resize
    pub filter: FilterType,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            filter: FilterType::Lanczos3,
        }
    }
}

/// Renders a source image into all five density buckets under a base
/// output directory.
///
/// Output lands in sibling `drawable-<tag>` subdirectories, one per
/// bucket, each holding a file with the sanitized asset name. Existing
/// files with the same name are silently overwritten.
pub struct AssetGenerator {
    output_base: PathBuf,
    config: GeneratorConfig,
}

impl AssetGenerator {
    /// Creates a generator writing under `output_base` with the default
    /// configuration
    pub fn new(output_base: impl Into<PathBuf>) -> Self {
        Self::with_config(output_base, GeneratorConfig::default())
    }

    /// Creates a generator with an explicit configuration
    pub fn with_config(output_base: impl Into<PathBuf>, config: GeneratorConfig) -> Self {
        Self {
            output_base: output_base.into(),
            config,
        }
    }

    /// Generates every density variant for one source file.
    ///
    /// All outcomes are reported through `sink`; a failure anywhere in the
    /// per-file body becomes a single error line, so one bad file never
    /// aborts a surrounding batch. A failure mid-loop leaves the variants
    /// already written in place.
    pub fn generate(&self, source: &Path, sink: &dyn MessageSink) {
        match self.try_generate(source, sink) {
            Ok(()) => {}
            Err(Error::SourceNotFound(path)) => {
                sink.line(&format!("File not found: {}", path.display()));
            }
            Err(err) => {
                sink.line(&format!(
                    "Error processing {}: {}",
                    display_name(source),
                    err
                ));
            }
        }
    }

    fn try_generate(&self, source: &Path, sink: &dyn MessageSink) -> Result<()> {
        if !source.exists() {
            return Err(Error::SourceNotFound(source.to_path_buf()));
        }

        let img = image::open(source)?;
        let (width, height) = img.dimensions();
        sink.line(&format!("Processing: {}", display_name(source)));
        sink.line(&format!("Original size: {} x {}", width, height));

        let file_name = asset_file_name(source);
        sink.line(&format!("Asset name: {file_name}"));

        let base = detect_base_density(width)?;
        sink.line(&format!(
            "Base density: {} ({:.1}x)",
            base.tag(),
            base.scale()
        ));

        let base_width = base.normalize(width);
        let base_height = base.normalize(height);

        fs::create_dir_all(&self.output_base)?;

        for density in Density::ALL {
            let target_width = density.target_px(base_width);
            let target_height = density.target_px(base_height);

            let dir = self.output_base.join(density.dir_name());
            fs::create_dir_all(&dir)?;

            let resized = img.resize_exact(target_width, target_height, self.config.filter);
            resized.save(dir.join(&file_name))?;

            sink.line(&format!(
                "{}: {}x{}",
                density.dir_name(),
                target_width,
                target_height
            ));
        }

        sink.line(SEPARATOR);
        Ok(())
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
