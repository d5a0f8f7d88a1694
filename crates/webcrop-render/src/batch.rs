// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Batch renderer — walks the configured source files one at a time, cutting
// each into its responsive WebP renditions.
//
// Per-file failures never stop the batch: a missing source is skipped, any
// other failure is logged and recorded, and the next file is processed.
// Renditions written before a failure stay on disk.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{error, info, warn};
use webcrop_core::config::RenderConfig;
use webcrop_core::error::{Result, WebcropError};
use webcrop_core::hints::operator_hint;
use webcrop_core::report::{BatchReport, DerivativeRecord, FileReport, FileStatus};
use webcrop_core::types::{AspectRatio, DerivativeSpec, ImageCategory};

use crate::image::ImageProcessor;

/// Drives the load → crop → resize → encode → save chain over a file list.
pub struct BatchRenderer {
    config: RenderConfig,
}

impl BatchRenderer {
    /// Create a renderer, validating the configuration up front so no file is
    /// touched with settings that cannot work.
    pub fn new(config: RenderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render every configured file: product images first, then service
    /// images, both at the product ratio.
    pub fn render_all(&self) -> BatchReport {
        let started_at = Utc::now();
        info!(
            files = self.config.files.len(),
            sizes = ?self.config.sizes,
            image_dir = %self.config.image_dir.display(),
            "Starting batch"
        );

        let mut files = self.render_group(self.config.product_files(), ImageCategory::Product);
        files.extend(self.render_group(self.config.service_files(), ImageCategory::Service));
        finish(started_at, files)
    }

    /// Render every configured file at the subscription ratio instead.
    pub fn render_subscription(&self) -> BatchReport {
        let started_at = Utc::now();
        info!(
            files = self.config.files.len(),
            ratio = %self.config.subscription_ratio,
            "Starting subscription batch"
        );
        let files = self.render_group(&self.config.files, ImageCategory::Subscription);
        finish(started_at, files)
    }

    /// Render `files` with the ratio for `category`. The default run never
    /// calls this with `Subscription`; it exists for manual runs.
    pub fn render_group(&self, files: &[String], category: ImageCategory) -> Vec<FileReport> {
        files
            .iter()
            .map(|name| self.render_file(name, category))
            .collect()
    }

    /// Render one source file. Never returns an error: the outcome is in the
    /// report's status.
    pub fn render_file(&self, name: &str, category: ImageCategory) -> FileReport {
        let source = self.config.image_dir.join(name);
        let mut outputs = Vec::new();

        if self.locate_source(name).is_none() {
            warn!(path = %source.display(), "Skipping missing file");
            return FileReport {
                source,
                category,
                status: FileStatus::SkippedMissing,
                outputs,
            };
        }

        let ratio = self.config.ratio_for(category);
        let status = match self.render_derivatives(&source, ratio, &mut outputs) {
            Ok(()) => FileStatus::Rendered,
            Err(err) => {
                let hint = operator_hint(&err);
                error!(
                    path = %source.display(),
                    error = %err,
                    written = outputs.len(),
                    hint = hint.suggestion,
                    "Error processing file"
                );
                FileStatus::Failed {
                    reason: format!("{err} ({})", hint.message),
                }
            }
        };

        FileReport {
            source,
            category,
            status,
            outputs,
        }
    }

    /// Full path of `name` under the image directory, if it exists.
    pub fn locate_source(&self, name: &str) -> Option<PathBuf> {
        let path = self.config.image_dir.join(name);
        path.exists().then_some(path)
    }

    /// Decode, normalize, and crop once, then write one rendition per
    /// configured width. Each written rendition is pushed to `outputs` as soon
    /// as it is on disk.
    fn render_derivatives(
        &self,
        source: &Path,
        ratio: AspectRatio,
        outputs: &mut Vec<DerivativeRecord>,
    ) -> Result<()> {
        let stem = source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .ok_or_else(|| {
                WebcropError::Decode(format!("{} has no file name", source.display()))
            })?;

        let out_dir = self.config.output_dir();
        std::fs::create_dir_all(out_dir)?;

        let cropped = ImageProcessor::open(source)?
            .normalize_rgb()
            .center_crop(ratio)?;

        for &width in &self.config.sizes {
            let spec = DerivativeSpec::for_width(width, ratio);
            let path = spec.output_path(out_dir, &stem);
            cropped
                .resized_exact(spec.width, spec.height)?
                .save_webp(&path, self.config.quality)?;
            info!(path = %path.display(), width = spec.width, height = spec.height, "Saved");
            outputs.push(DerivativeRecord {
                width: spec.width,
                height: spec.height,
                path,
            });
        }
        Ok(())
    }
}

fn finish(started_at: DateTime<Utc>, files: Vec<FileReport>) -> BatchReport {
    let report = BatchReport {
        started_at,
        finished_at: Utc::now(),
        files,
    };
    info!(
        rendered = report.rendered(),
        skipped = report.skipped(),
        failed = report.failed(),
        "Batch finished"
    );
    report
}
