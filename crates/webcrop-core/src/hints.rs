// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Operator hints. Each error maps to a short plain-language summary and what
// to try next; the batch renderer appends these to failure log lines.

use crate::error::WebcropError;

/// Plain-language summary of an error with a suggested fix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    pub message: &'static str,
    pub suggestion: &'static str,
}

pub fn operator_hint(err: &WebcropError) -> Hint {
    match err {
        WebcropError::InvalidConfig(_) => Hint {
            message: "The render settings are not usable.",
            suggestion: "Check the output widths, aspect ratios, and quality in the manifest.",
        },
        WebcropError::Manifest(_) => Hint {
            message: "The manifest is not valid JSON.",
            suggestion: "Fix the syntax error reported above, or run without a manifest.",
        },
        WebcropError::MissingSource(_) => Hint {
            message: "The source image is missing.",
            suggestion: "Add the file to the image directory or remove it from the file list.",
        },
        WebcropError::Decode(_) => Hint {
            message: "The source file could not be read as an image.",
            suggestion: "Re-export it as JPEG or PNG and run again.",
        },
        WebcropError::Crop(_) => Hint {
            message: "The image is too small to crop to the requested proportions.",
            suggestion: "Use a larger source image.",
        },
        WebcropError::Resize(_) | WebcropError::Encode(_) => Hint {
            message: "A rendition could not be produced.",
            suggestion: "Check the configured widths and quality.",
        },
        WebcropError::Io(io) => match io.kind() {
            std::io::ErrorKind::PermissionDenied => Hint {
                message: "Permission denied while writing a rendition.",
                suggestion: "Make the output directory writable.",
            },
            _ => Hint {
                message: "A file could not be read or written.",
                suggestion: "Check free disk space and that the directories exist.",
            },
        },
    }
}
