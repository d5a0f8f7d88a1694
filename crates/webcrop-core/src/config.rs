// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Render configuration. The defaults are the site's built-in batch; a JSON
// manifest can replace any field without touching the source.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, WebcropError};
use crate::types::{AspectRatio, ImageCategory, MAX_WEBP_DIMENSION};

/// Source images rendered by the default batch, in processing order.
pub const DEFAULT_FILES: [&str; 6] = [
    "shampoo-car.jpg",
    "lustrant-voiture.jpg",
    "micro-fibre.jpg",
    "interieur-voiture.jpg",
    "exterieur-voiture.jpg",
    "lavage-les-2.jpg",
];

/// Output widths in pixels, shared by every file.
pub const DEFAULT_SIZES: [u32; 3] = [480, 800, 1200];

/// Lossy WebP quality factor.
pub const DEFAULT_QUALITY: f32 = 80.0;

/// Everything the batch renderer needs to know.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Directory holding the source images.
    pub image_dir: PathBuf,
    /// Where renditions are written. `None` writes next to the sources.
    pub output_dir: Option<PathBuf>,
    /// Source file names, relative to `image_dir`.
    pub files: Vec<String>,
    /// How many leading entries of `files` are product images. The rest are
    /// service images. A value past the end makes every file a product.
    pub product_group_len: usize,
    /// Ratio for product and service images.
    pub product_ratio: AspectRatio,
    /// Ratio for subscription images (manual runs only).
    pub subscription_ratio: AspectRatio,
    /// Rendition widths, in output order.
    pub sizes: Vec<u32>,
    /// WebP quality, 0-100.
    pub quality: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            image_dir: PathBuf::from("image"),
            output_dir: None,
            files: DEFAULT_FILES.iter().map(|f| f.to_string()).collect(),
            product_group_len: 3,
            product_ratio: AspectRatio::PRODUCT,
            subscription_ratio: AspectRatio::SUBSCRIPTION,
            sizes: DEFAULT_SIZES.to_vec(),
            quality: DEFAULT_QUALITY,
        }
    }
}

impl RenderConfig {
    /// Load a JSON manifest. Fields it leaves out keep their default values.
    pub fn from_manifest_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_manifest_str(&raw)
    }

    pub fn from_manifest_str(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that could only produce broken renditions.
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(WebcropError::InvalidConfig(
                "at least one output width is required".into(),
            ));
        }
        for ratio in [self.product_ratio, self.subscription_ratio] {
            if let Some(&width) = self
                .sizes
                .iter()
                .find(|&&w| w == 0 || ratio.derived_height(w) == 0)
            {
                return Err(WebcropError::InvalidConfig(format!(
                    "output width {width} gives an empty rendition at {ratio}"
                )));
            }
            if let Some(&width) = self.sizes.iter().find(|&&w| {
                w > MAX_WEBP_DIMENSION || ratio.derived_height(w) > MAX_WEBP_DIMENSION
            }) {
                return Err(WebcropError::InvalidConfig(format!(
                    "output width {width} at {ratio} exceeds the WebP limit of {MAX_WEBP_DIMENSION} pixels"
                )));
            }
        }
        if !(0.0..=100.0).contains(&self.quality) {
            return Err(WebcropError::InvalidConfig(format!(
                "quality must be within 0-100, got {}",
                self.quality
            )));
        }
        Ok(())
    }

    pub fn output_dir(&self) -> &Path {
        self.output_dir.as_deref().unwrap_or(&self.image_dir)
    }

    pub fn product_files(&self) -> &[String] {
        &self.files[..self.product_group_len.min(self.files.len())]
    }

    pub fn service_files(&self) -> &[String] {
        &self.files[self.product_group_len.min(self.files.len())..]
    }

    pub fn ratio_for(&self, category: ImageCategory) -> AspectRatio {
        match category {
            ImageCategory::Product | ImageCategory::Service => self.product_ratio,
            ImageCategory::Subscription => self.subscription_ratio,
        }
    }
}
