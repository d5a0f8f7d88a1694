// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// webcrop-render — center-crop geometry, the image processing chain
// (normalize, crop, resize, WebP encode), and the batch renderer that drives
// it over the configured source files.

pub mod batch;
pub mod geometry;
pub mod image;

pub use batch::BatchRenderer;
pub use geometry::center_crop_box;
pub use crate::image::processor::ImageProcessor;
