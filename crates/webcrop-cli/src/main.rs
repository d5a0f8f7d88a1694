// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// webcrop — generate center-cropped WebP renditions for responsive `srcset`.
//
// Entry point. Initialises logging, resolves the render configuration, and
// runs the batch. With no arguments the built-in file list is rendered from
// `image/` into `image/`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use webcrop_core::RenderConfig;
use webcrop_core::hints::operator_hint;
use webcrop_render::BatchRenderer;

#[derive(Debug, Parser)]
#[command(name = "webcrop", version, about)]
struct Cli {
    /// JSON manifest replacing the built-in file list, ratios, and widths.
    #[arg(long, value_name = "FILE")]
    manifest: Option<PathBuf>,

    /// Directory holding the source images.
    #[arg(long, value_name = "DIR")]
    image_dir: Option<PathBuf>,

    /// Directory to write renditions to (defaults to the image directory).
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Write a JSON report of every file's outcome.
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,

    /// Render the configured files at the subscription ratio.
    #[arg(long)]
    subscription: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let renderer = match load_config(&cli).and_then(BatchRenderer::new) {
        Ok(renderer) => renderer,
        Err(e) => {
            let hint = operator_hint(&e);
            tracing::error!(error = %e, "{} {}", hint.message, hint.suggestion);
            return ExitCode::FAILURE;
        }
    };

    let report = if cli.subscription {
        renderer.render_subscription()
    } else {
        renderer.render_all()
    };

    if let Some(path) = &cli.report {
        let written = report
            .to_json_pretty()
            .map_err(|e| e.to_string())
            .and_then(|json| std::fs::write(path, json).map_err(|e| e.to_string()));
        match written {
            Ok(()) => tracing::info!(path = %path.display(), "Report written"),
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "report not written"),
        }
    }

    println!("\nDone. Now update your HTML to reference the generated webp files (srcset).");
    ExitCode::SUCCESS
}

/// Built-in defaults, then the manifest, then directory flags.
fn load_config(cli: &Cli) -> webcrop_core::error::Result<RenderConfig> {
    let mut config = match &cli.manifest {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading manifest");
            RenderConfig::from_manifest_file(path)?
        }
        None => RenderConfig::default(),
    };
    if let Some(dir) = &cli.image_dir {
        config.image_dir = dir.clone();
    }
    if let Some(dir) = &cli.output_dir {
        config.output_dir = Some(dir.clone());
    }
    Ok(config)
}
