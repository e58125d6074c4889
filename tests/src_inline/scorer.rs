use super::*;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

fn png(img: RgbImage) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(img)
        .write_to(&mut buf, ImageFormat::Png)
        .unwrap();
    buf.into_inner()
}

fn solid_png(side: u32, rgb: [u8; 3]) -> Vec<u8> {
    png(RgbImage::from_pixel(side, side, Rgb(rgb)))
}

/// Smooth photographic-like content, defined in normalized coordinates.
fn scene(side: u32) -> RgbImage {
    let mut img = RgbImage::new(side, side);
    let s = side as f32;
    for (x, y, p) in img.enumerate_pixels_mut() {
        let u = x as f32 / s;
        let v = y as f32 / s;
        let r = 255.0 * u;
        let g = 255.0 * (1.0 - v);
        let b = 128.0 + 100.0 * ((u * 6.0).sin() * (v * 4.0).cos());
        *p = Rgb([r as u8, g as u8, b.clamp(0.0, 255.0) as u8]);
    }
    img
}

#[test]
fn test_empty_and_garbage_score_zero() {
    let scorer = AestheticScorer::new();
    assert_eq!(scorer.score(&[]), 0.0);
    assert_eq!(scorer.score(b"\x00\x01\x02garbage\xff\xfe"), 0.0);
    let mut fake_png = b"\x89PNG\r\n\x1a\n".to_vec();
    fake_png.extend_from_slice(&[0u8; 64]);
    assert_eq!(scorer.score(&fake_png), 0.0);
    assert!(scorer.evaluate(&[]).is_err());
}

#[test]
fn test_uniform_gray_near_zero() {
    let report = AestheticScorer::new()
        .evaluate(&solid_png(400, [128, 128, 128]))
        .unwrap();
    assert_eq!(report.colorfulness, 0.0);
    assert_eq!(report.saturation, 0.0);
    assert_eq!(report.contrast, 0.0);
    assert!(report.edge_density < 1.5);
    assert!(report.score < 0.5);
}

#[test]
fn test_pure_red() {
    let report = AestheticScorer::new()
        .evaluate(&solid_png(400, [255, 0, 0]))
        .unwrap();
    assert_eq!(report.saturation, 100.0);
    assert_eq!(report.colorfulness, 100.0);
    assert_eq!(report.contrast, 0.0);
    assert!(report.edge_density < 1.5);
    let expected = 0.35 * 100.0 + 0.25 * 100.0 + 0.15 * report.edge_density;
    assert!((report.score - expected).abs() < 1e-9);
}

#[test]
fn test_checkerboard_high_contrast_and_edges() {
    let mut img = RgbImage::new(400, 400);
    for (x, y, p) in img.enumerate_pixels_mut() {
        *p = if (x + y) % 2 == 0 { Rgb([255, 255, 255]) } else { Rgb([0, 0, 0]) };
    }
    let report = AestheticScorer::new().evaluate(&png(img)).unwrap();
    assert_eq!(report.contrast, 100.0);
    assert!(report.edge_density >= 50.0 - 1e-9);
    assert_eq!(report.saturation, 0.0);
}

#[test]
fn test_bounds_and_idempotence() {
    let scorer = AestheticScorer::new();
    let bytes = png(scene(257));
    let a = scorer.score(&bytes);
    let b = scorer.score(&bytes);
    assert!(a.to_bits() == b.to_bits());
    assert!((0.0..=100.0).contains(&a));
    let report = scorer.evaluate(&bytes).unwrap();
    for (_, v) in report.metrics() {
        assert!((0.0..=100.0).contains(&v));
    }
    assert_eq!(report.score, a);
}

#[test]
fn test_resolution_invariance() {
    let scorer = AestheticScorer::new();
    let small = scorer.evaluate(&png(scene(400))).unwrap();
    let large = scorer.evaluate(&png(scene(1000))).unwrap();
    assert!((small.score - large.score).abs() < 2.0);
    assert!((small.colorfulness - large.colorfulness).abs() < 2.0);
    assert!((small.contrast - large.contrast).abs() < 2.0);
}

#[test]
fn test_free_function_matches_default_scorer() {
    let bytes = solid_png(50, [30, 160, 90]);
    assert_eq!(score(&bytes), AestheticScorer::new().score(&bytes));
}

#[test]
fn test_custom_profile() {
    let mut profile = ScoringProfile::default_v1();
    profile.weights.colorfulness = 0.0;
    profile.weights.saturation = 1.0;
    profile.weights.contrast = 0.0;
    profile.weights.edge_density = 0.0;
    let scorer = AestheticScorer::with_profile(profile).unwrap();
    assert_eq!(scorer.score(&solid_png(64, [255, 0, 0])), 100.0);

    let mut bad = ScoringProfile::default_v1();
    bad.colorfulness_scale = -1.0;
    assert!(AestheticScorer::with_profile(bad).is_err());
}

#[test]
fn test_scorer_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AestheticScorer>();
}
