// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image processor — color normalization, center crop, exact resize, and lossy
// WebP output. Operates on in-memory images using the `image` and `webp`
// crates.

use std::path::Path;

use image::DynamicImage;
use image::imageops::FilterType;
use tracing::{debug, info, instrument};
use webcrop_core::error::{Result, WebcropError};
use webcrop_core::types::{AspectRatio, CropBox};

use crate::geometry::center_crop_box;

/// Processing chain over a single in-memory image.
///
/// Transformations consume `self` and return a new `ImageProcessor`, so a
/// rendition reads as one chain:
///
/// ```ignore
/// let cropped = ImageProcessor::open("image/micro-fibre.jpg")?
///     .normalize_rgb()
///     .center_crop(AspectRatio::PRODUCT)?;
/// cropped.resized_exact(480, 360)?.save_webp("image/micro-fibre-480.webp", 80.0)?;
/// ```
pub struct ImageProcessor {
    /// The current working image.
    image: DynamicImage,
}

impl ImageProcessor {
    // -- Construction ---------------------------------------------------------

    /// Decode an image file. The format is sniffed from the file contents.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let img = image::ImageReader::open(path.as_ref())?
            .with_guessed_format()?
            .decode()
            .map_err(|err| {
                WebcropError::Decode(format!("{}: {}", path.as_ref().display(), err))
            })?;
        info!(width = img.width(), height = img.height(), "Image loaded");
        Ok(Self { image: img })
    }

    /// Wrap an already-decoded `DynamicImage`.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self { image }
    }

    // -- Accessors ------------------------------------------------------------

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn as_dynamic(&self) -> &DynamicImage {
        &self.image
    }

    pub fn into_dynamic(self) -> DynamicImage {
        self.image
    }

    // -- Transformations ------------------------------------------------------

    /// Convert to 8-bit RGB. Alpha is dropped, palette and grayscale images
    /// are expanded, 16-bit and float images are narrowed.
    pub fn normalize_rgb(self) -> Self {
        match self.image {
            DynamicImage::ImageRgb8(_) => self,
            other => {
                debug!(color = ?other.color(), "Normalizing to RGB8");
                Self {
                    image: DynamicImage::ImageRgb8(other.to_rgb8()),
                }
            }
        }
    }

    /// Crop to the largest centered region with proportions `ratio`.
    pub fn center_crop(self, ratio: AspectRatio) -> Result<Self> {
        let crop = center_crop_box(self.width(), self.height(), ratio)?;
        self.crop_to(crop)
    }

    /// Crop to `crop`. Boxes that are empty or reach past the image edge are
    /// rejected rather than clamped.
    #[instrument(skip(self))]
    pub fn crop_to(self, crop: CropBox) -> Result<Self> {
        if !crop.fits_within(self.width(), self.height()) {
            return Err(WebcropError::Crop(format!(
                "box {crop} does not fit a {}x{} image",
                self.width(),
                self.height()
            )));
        }
        let cropped = self
            .image
            .crop_imm(crop.left, crop.top, crop.width(), crop.height());
        debug!(
            new_w = cropped.width(),
            new_h = cropped.height(),
            "Crop complete"
        );
        Ok(Self { image: cropped })
    }

    /// Resample to exactly `width` x `height` with Lanczos3, leaving `self`
    /// untouched so several renditions can be cut from one crop.
    pub fn resized_exact(&self, width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(WebcropError::Resize(format!(
                "target size {width}x{height} is empty"
            )));
        }
        let resized = self.image.resize_exact(width, height, FilterType::Lanczos3);
        Ok(Self { image: resized })
    }

    // -- Output ---------------------------------------------------------------

    /// Encode as lossy WebP at `quality` (0-100). No metadata is carried over.
    pub fn to_webp_bytes(&self, quality: f32) -> Result<Vec<u8>> {
        let rgb = self.image.to_rgb8();
        let encoder = webp::Encoder::from_rgb(rgb.as_raw(), rgb.width(), rgb.height());
        let encoded = encoder
            .encode_simple(false, quality)
            .map_err(|err| WebcropError::Encode(format!("{err:?}")))?;
        Ok(encoded.to_vec())
    }

    /// Encode as lossy WebP and write to `path`, replacing any existing file.
    pub fn save_webp(&self, path: impl AsRef<Path>, quality: f32) -> Result<()> {
        let bytes = self.to_webp_bytes(quality)?;
        std::fs::write(path.as_ref(), &bytes)?;
        debug!(
            path = %path.as_ref().display(),
            bytes = bytes.len(),
            "WebP written"
        );
        Ok(())
    }
}
