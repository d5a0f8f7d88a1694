// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Center-crop geometry.

use tracing::debug;
use webcrop_core::error::{Result, WebcropError};
use webcrop_core::types::{AspectRatio, CropBox};

/// Largest box with proportions `ratio`, centered in a `width` x `height` image.
///
/// An image wider than the ratio loses equal margins left and right; anything
/// else (taller, or exactly equal) loses equal margins top and bottom. With
/// equal proportions that crop spans the full height at offset zero. Offsets
/// are floored, so an odd surplus leaves the extra pixel on the right/bottom.
pub fn center_crop_box(width: u32, height: u32, ratio: AspectRatio) -> Result<CropBox> {
    if width == 0 || height == 0 {
        return Err(WebcropError::Crop(format!(
            "cannot crop an empty {width}x{height} image"
        )));
    }

    let crop = if ratio.image_is_wider(width, height) {
        let new_width = ratio.derived_width(height);
        let left = (width - new_width) / 2;
        CropBox {
            left,
            top: 0,
            right: left + new_width,
            bottom: height,
        }
    } else {
        let new_height = ratio.derived_height(width);
        let top = (height - new_height) / 2;
        CropBox {
            left: 0,
            top,
            right: width,
            bottom: top + new_height,
        }
    };

    if crop.width() == 0 || crop.height() == 0 {
        return Err(WebcropError::Crop(format!(
            "{width}x{height} is too small for a {ratio} crop"
        )));
    }

    debug!(width, height, %ratio, %crop, "Computed center crop");
    Ok(crop)
}
