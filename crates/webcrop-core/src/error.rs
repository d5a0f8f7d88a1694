// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for webcrop.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for all webcrop operations.
#[derive(Debug, Error)]
pub enum WebcropError {
    // -- Configuration --
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("manifest could not be parsed: {0}")]
    Manifest(#[from] serde_json::Error),

    // -- Source lookup --
    #[error("source image not found: {}", .0.display())]
    MissingSource(PathBuf),

    // -- Pipeline stages --
    #[error("failed to decode image: {0}")]
    Decode(String),

    #[error("crop failed: {0}")]
    Crop(String),

    #[error("resize failed: {0}")]
    Resize(String),

    #[error("WebP encoding failed: {0}")]
    Encode(String),

    // -- Storage --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, WebcropError>;
