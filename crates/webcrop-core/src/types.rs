// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types: aspect ratios, crop boxes, image categories, and the
// derivative naming rule.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, WebcropError};

/// Largest width or height a WebP image can have.
pub const MAX_WEBP_DIMENSION: u32 = 16_383;

/// Desired width:height proportion, stored as two positive integers.
///
/// All comparisons and derived dimensions use exact integer arithmetic, so the
/// result for a given input never depends on floating-point rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(u32, u32)", into = "(u32, u32)")]
pub struct AspectRatio {
    width: u32,
    height: u32,
}

impl AspectRatio {
    /// 4:3, used for product and service images.
    pub const PRODUCT: Self = Self {
        width: 4,
        height: 3,
    };

    /// 3:2, used for subscription images. Not part of the default run.
    pub const SUBSCRIPTION: Self = Self {
        width: 3,
        height: 2,
    };

    /// Build a ratio, rejecting zero terms.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(WebcropError::InvalidConfig(format!(
                "aspect ratio terms must be positive, got {width}:{height}"
            )));
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Height of a rendition `width` pixels wide: floor(width × h / w).
    /// Saturates at `u32::MAX`.
    pub fn derived_height(&self, width: u32) -> u32 {
        scale(width, self.height, self.width)
    }

    /// Width that matches this ratio at `height` pixels: floor(height × w / h).
    /// Saturates at `u32::MAX`.
    pub fn derived_width(&self, height: u32) -> u32 {
        scale(height, self.width, self.height)
    }

    /// True when an image of `width` x `height` is strictly wider than this
    /// ratio. Equal proportions return false.
    pub fn image_is_wider(&self, width: u32, height: u32) -> bool {
        u64::from(width) * u64::from(self.height) > u64::from(height) * u64::from(self.width)
    }
}

fn scale(value: u32, numerator: u32, denominator: u32) -> u32 {
    let scaled = u64::from(value) * u64::from(numerator) / u64::from(denominator);
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

impl TryFrom<(u32, u32)> for AspectRatio {
    type Error = WebcropError;

    fn try_from((width, height): (u32, u32)) -> Result<Self> {
        Self::new(width, height)
    }
}

impl From<AspectRatio> for (u32, u32) {
    fn from(ratio: AspectRatio) -> Self {
        (ratio.width, ratio.height)
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

/// Rectangle inside a source image, in pixel coordinates.
///
/// `right` and `bottom` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropBox {
    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Whether the box is non-empty and lies inside a `width` x `height` image.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.left < self.right
            && self.top < self.bottom
            && self.right <= width
            && self.bottom <= height
    }
}

impl fmt::Display for CropBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}

/// Which group a source image belongs to. Decides the aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageCategory {
    Product,
    Service,
    Subscription,
}

impl ImageCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Product => "product",
            Self::Service => "service",
            Self::Subscription => "subscription",
        }
    }
}

impl fmt::Display for ImageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target dimensions of one rendition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivativeSpec {
    pub width: u32,
    pub height: u32,
}

impl DerivativeSpec {
    pub fn for_width(width: u32, ratio: AspectRatio) -> Self {
        Self {
            width,
            height: ratio.derived_height(width),
        }
    }

    /// `<dir>/<stem>-<width>.webp`
    pub fn output_path(&self, dir: &Path, stem: &str) -> PathBuf {
        dir.join(format!("{stem}-{}.webp", self.width))
    }
}
