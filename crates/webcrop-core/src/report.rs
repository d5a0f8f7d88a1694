// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Batch report: one outcome per source file, collected so callers can inspect
// results instead of scraping log output.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::ImageCategory;

/// A rendition that was written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivativeRecord {
    pub width: u32,
    pub height: u32,
    pub path: PathBuf,
}

/// What happened to one source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileStatus {
    /// Every configured width was written.
    Rendered,
    /// The source file does not exist. Not an error.
    SkippedMissing,
    /// Decoding, cropping, resizing, encoding, or writing failed.
    Failed { reason: String },
}

/// Outcome for a single source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    pub source: PathBuf,
    pub category: ImageCategory,
    #[serde(flatten)]
    pub status: FileStatus,
    /// Renditions on disk. For a failed file these are the ones written
    /// before the failure; they are left in place.
    pub outputs: Vec<DerivativeRecord>,
}

impl FileReport {
    pub fn is_rendered(&self) -> bool {
        matches!(self.status, FileStatus::Rendered)
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self.status, FileStatus::SkippedMissing)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, FileStatus::Failed { .. })
    }
}

/// Result of one full batch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub files: Vec<FileReport>,
}

impl BatchReport {
    pub fn rendered(&self) -> usize {
        self.files.iter().filter(|f| f.is_rendered()).count()
    }

    pub fn skipped(&self) -> usize {
        self.files.iter().filter(|f| f.is_skipped()).count()
    }

    pub fn failed(&self) -> usize {
        self.files.iter().filter(|f| f.is_failed()).count()
    }

    /// Every rendition written during the run, in order.
    pub fn outputs(&self) -> impl Iterator<Item = &DerivativeRecord> {
        self.files.iter().flat_map(|f| f.outputs.iter())
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
