//! Android density buckets and base-density detection

use crate::{Error, Result};

/// Canonical icon baseline in density-independent pixels. Source images are
/// assumed to have been authored at some density multiple of this size.
pub const BASELINE_DP: f64 = 48.0;

/// One of the five fixed Android density buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Density {
    Mdpi,
    Hdpi,
    Xhdpi,
    Xxhdpi,
    Xxxhdpi,
}

impl Density {
    /// All buckets in ascending scale order. Mdpi (scale 1.0) is the
    /// normalization base for every derived dimension.
    pub const ALL: [Density; 5] = [
        Density::Mdpi,
        Density::Hdpi,
        Density::Xhdpi,
        Density::Xxhdpi,
        Density::Xxxhdpi,
    ];

    /// Lowercase qualifier tag, e.g. `"xhdpi"`
    pub fn tag(self) -> &'static str {
        match self {
            Density::Mdpi => "mdpi",
            Density::Hdpi => "hdpi",
            Density::Xhdpi => "xhdpi",
            Density::Xxhdpi => "xxhdpi",
            Density::Xxxhdpi => "xxxhdpi",
        }
    }

    /// Scale factor relative to mdpi
    pub fn scale(self) -> f64 {
        match self {
            Density::Mdpi => 1.0,
            Density::Hdpi => 1.5,
            Density::Xhdpi => 2.0,
            Density::Xxhdpi => 3.0,
            Density::Xxxhdpi => 4.0,
        }
    }

    /// Resource directory name for this bucket, e.g. `"drawable-xhdpi"`
    pub fn dir_name(self) -> String {
        format!("drawable-{}", self.tag())
    }

    /// Divides a pixel dimension by this bucket's scale, yielding the
    /// density-independent (mdpi) size
    pub fn normalize(self, px: u32) -> f64 {
        px as f64 / self.scale()
    }

    /// Scales an mdpi base dimension up to this bucket, rounding to the
    /// nearest pixel with a 1 px floor
    pub fn target_px(self, base: f64) -> u32 {
        ((base * self.scale()).round() as u32).max(1)
    }
}

/// Detects the density bucket a source image was most likely authored at,
/// assuming a target baseline of roughly 48 dp for icons/assets.
///
/// For each bucket in table order, the distance `|width / scale - 48|` is
/// computed and the first bucket with the smallest distance wins, so exact
/// ties resolve to the lower-density bucket.
pub fn detect_base_density(width: u32) -> Result<Density> {
    if width == 0 {
        return Err(Error::InvalidWidth(width));
    }
    Ok(nearest_bucket(width as f64))
}

fn nearest_bucket(width: f64) -> Density {
    let mut best = Density::Mdpi;
    let mut min_diff = f64::INFINITY;

    for density in Density::ALL {
        let diff = (width / density.scale() - BASELINE_DP).abs();
        if diff < min_diff {
            min_diff = diff;
            best = density;
        }
    }

    best
}
