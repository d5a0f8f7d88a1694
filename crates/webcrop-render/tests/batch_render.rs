// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// End-to-end batch runs against synthetic source images in a temp directory.

use std::path::Path;

use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};
use webcrop_core::config::RenderConfig;
use webcrop_core::report::FileStatus;
use webcrop_core::types::ImageCategory;
use webcrop_render::BatchRenderer;

/// Write a gradient image; the format follows the file extension.
fn write_source(dir: &Path, name: &str, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 255 / width) as u8, (y * 255 / height) as u8, 90])
    });
    DynamicImage::ImageRgb8(img).save(dir.join(name)).unwrap();
}

fn dimensions(path: &Path) -> (u32, u32) {
    let img = image::open(path).unwrap();
    (img.width(), img.height())
}

fn config_for(dir: &Path) -> RenderConfig {
    RenderConfig {
        image_dir: dir.to_path_buf(),
        ..Default::default()
    }
}

#[test]
fn default_batch_renders_present_files_and_skips_missing_ones() {
    let dir = tempfile::tempdir().unwrap();
    write_source(dir.path(), "shampoo-car.jpg", 1600, 1000);
    write_source(dir.path(), "interieur-voiture.jpg", 1000, 1000);

    let renderer = BatchRenderer::new(config_for(dir.path())).unwrap();
    let report = renderer.render_all();

    assert_eq!(report.files.len(), 6);
    assert_eq!(report.rendered(), 2);
    assert_eq!(report.skipped(), 4);
    assert_eq!(report.failed(), 0);

    // Product group first, then service group, in configured order.
    let categories: Vec<_> = report.files.iter().map(|f| f.category).collect();
    assert_eq!(
        categories,
        [
            ImageCategory::Product,
            ImageCategory::Product,
            ImageCategory::Product,
            ImageCategory::Service,
            ImageCategory::Service,
            ImageCategory::Service,
        ]
    );

    for stem in ["shampoo-car", "interieur-voiture"] {
        for (width, height) in [(480, 360), (800, 600), (1200, 900)] {
            let path = dir.path().join(format!("{stem}-{width}.webp"));
            assert!(path.exists(), "missing {}", path.display());
            assert_eq!(dimensions(&path), (width, height));
        }
    }
    assert!(!dir.path().join("micro-fibre-480.webp").exists());
    assert_eq!(report.outputs().count(), 6);
}

#[test]
fn rerunning_overwrites_the_same_files() {
    let dir = tempfile::tempdir().unwrap();
    write_source(dir.path(), "micro-fibre.jpg", 900, 1400);
    let config = RenderConfig {
        sizes: vec![64, 120],
        ..config_for(dir.path())
    };
    let renderer = BatchRenderer::new(config).unwrap();

    let first = renderer.render_all();
    let second = renderer.render_all();

    let paths = |r: &webcrop_core::BatchReport| {
        r.outputs().map(|o| o.path.clone()).collect::<Vec<_>>()
    };
    assert_eq!(paths(&first), paths(&second));
    assert_eq!(second.failed(), 0);
    assert_eq!(
        dimensions(&dir.path().join("micro-fibre-120.webp")),
        (120, 90)
    );
}

#[test]
fn failure_keeps_earlier_renditions_and_continues() {
    let dir = tempfile::tempdir().unwrap();
    write_source(dir.path(), "shampoo-car.jpg", 400, 300);
    write_source(dir.path(), "lustrant-voiture.jpg", 400, 300);
    // A directory where the second rendition should go makes that write fail.
    std::fs::create_dir(dir.path().join("shampoo-car-80.webp")).unwrap();

    let config = RenderConfig {
        sizes: vec![40, 80, 120],
        ..config_for(dir.path())
    };
    let report = BatchRenderer::new(config).unwrap().render_all();

    let failed = &report.files[0];
    assert!(matches!(failed.status, FileStatus::Failed { .. }));
    assert_eq!(failed.outputs.len(), 1);
    assert!(dir.path().join("shampoo-car-40.webp").exists());
    assert!(!dir.path().join("shampoo-car-120.webp").exists());

    let next = &report.files[1];
    assert_eq!(next.status, FileStatus::Rendered);
    assert_eq!(next.outputs.len(), 3);
}

#[test]
fn transparent_png_is_flattened_to_rgb() {
    let dir = tempfile::tempdir().unwrap();
    let img = RgbaImage::from_pixel(300, 300, Rgba([10, 200, 30, 0]));
    DynamicImage::ImageRgba8(img)
        .save(dir.path().join("logo.png"))
        .unwrap();

    let config = RenderConfig {
        files: vec!["logo.png".into()],
        product_group_len: 1,
        sizes: vec![100],
        ..config_for(dir.path())
    };
    let report = BatchRenderer::new(config).unwrap().render_all();
    assert_eq!(report.rendered(), 1);
    assert_eq!(dimensions(&dir.path().join("logo-100.webp")), (100, 75));
}

#[test]
fn subscription_group_uses_the_second_ratio() {
    let dir = tempfile::tempdir().unwrap();
    write_source(dir.path(), "abonnement-basic.jpg", 1000, 1000);

    let config = RenderConfig {
        sizes: vec![120, 300],
        ..config_for(dir.path())
    };
    let renderer = BatchRenderer::new(config).unwrap();
    let files = renderer.render_group(&["abonnement-basic.jpg".to_string()], ImageCategory::Subscription);

    assert_eq!(files[0].status, FileStatus::Rendered);
    assert_eq!(
        dimensions(&dir.path().join("abonnement-basic-120.webp")),
        (120, 80)
    );
    assert_eq!(
        dimensions(&dir.path().join("abonnement-basic-300.webp")),
        (300, 200)
    );
}

#[test]
fn separate_output_dir_is_created() {
    let src = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let out_dir = out.path().join("nested").join("webp");
    write_source(src.path(), "lavage-les-2.jpg", 640, 480);

    let config = RenderConfig {
        output_dir: Some(out_dir.clone()),
        sizes: vec![64],
        ..config_for(src.path())
    };
    let report = BatchRenderer::new(config).unwrap().render_all();

    assert_eq!(report.rendered(), 1);
    assert!(out_dir.join("lavage-les-2-64.webp").exists());
    assert!(!src.path().join("lavage-les-2-64.webp").exists());
}

#[test]
fn report_serializes_to_json() {
    let dir = tempfile::tempdir().unwrap();
    write_source(dir.path(), "shampoo-car.jpg", 200, 150);
    let config = RenderConfig {
        sizes: vec![40],
        ..config_for(dir.path())
    };
    let report = BatchRenderer::new(config).unwrap().render_all();

    let json: serde_json::Value = serde_json::from_str(&report.to_json_pretty().unwrap()).unwrap();
    assert_eq!(json["files"][0]["status"], "rendered");
    assert_eq!(json["files"][0]["outputs"][0]["height"], 30);
    assert_eq!(json["files"][1]["status"], "skipped_missing");
}

#[test]
fn subscription_batch_covers_every_configured_file() {
    let dir = tempfile::tempdir().unwrap();
    write_source(dir.path(), "exterieur-voiture.jpg", 1200, 800);
    let config = RenderConfig {
        sizes: vec![90],
        ..config_for(dir.path())
    };
    let report = BatchRenderer::new(config).unwrap().render_subscription();

    assert_eq!(report.files.len(), 6);
    assert!(report
        .files
        .iter()
        .all(|f| f.category == ImageCategory::Subscription));
    assert_eq!(report.rendered(), 1);
    assert_eq!(
        dimensions(&dir.path().join("exterieur-voiture-90.webp")),
        (90, 60)
    );
}
