//! End-to-end pipeline tests: quote file in, PNG on disk out.
//!
//! Font paths deliberately point at nothing so the builtin bitmap face is
//! exercised — the full pipeline must work without any font asset present.

use quotewall::config::WallConfig;
use quotewall::render::{RenderError, render};
use quotewall::typeface::Face;
use quotewall::wrap::wrap_text;
use std::path::PathBuf;
use tempfile::TempDir;

/// Config pointing all paths into a temp dir, with nonexistent fonts.
fn test_config(tmp: &TempDir, quotes_json: &str) -> WallConfig {
    let quotes_path = tmp.path().join("quotes.json");
    std::fs::write(&quotes_path, quotes_json).unwrap();

    let mut config = WallConfig::default();
    config.quotes = quotes_path;
    config.output = tmp.path().join("wallpaper.png");
    config.fonts.quote = PathBuf::from("/nonexistent/regular.ttf");
    config.fonts.author = PathBuf::from("/nonexistent/italic.ttf");
    config
}

#[test]
fn renders_a_png_with_configured_dimensions() {
    let tmp = TempDir::new().unwrap();
    let mut config = test_config(
        &tmp,
        r#"[{"quote": "Stay hungry || stay foolish", "author": "Jobs"}]"#,
    );
    config.canvas.width = 640;
    config.canvas.height = 360;

    let report = render(&config).unwrap();

    assert!(config.output.exists());
    assert_eq!(report.width, 640);
    assert_eq!(report.height, 360);
    let written = image::open(&config.output).unwrap();
    assert_eq!(written.width(), 640);
    assert_eq!(written.height(), 360);
}

#[test]
fn report_carries_quote_author_and_fallback_flags() {
    let tmp = TempDir::new().unwrap();
    let config = test_config(
        &tmp,
        r#"[{"quote": "Stay hungry || stay foolish", "author": "Jobs"}]"#,
    );

    let report = render(&config).unwrap();

    assert_eq!(report.quote, "Stay hungry || stay foolish");
    assert_eq!(report.author.as_deref(), Some("Jobs"));
    // The marker forces exactly two lines at the default canvas width
    assert_eq!(report.lines, 2);
    assert!(report.quote_font_fallback);
    assert!(report.author_font_fallback);
}

#[test]
fn rendered_image_contains_text_pixels() {
    let tmp = TempDir::new().unwrap();
    let config = test_config(&tmp, r#"[{"quote": "hello", "author": "me"}]"#);

    render(&config).unwrap();

    // Background channels are capped at 60, so pure white can only come from
    // the drawn text.
    let written = image::open(&config.output).unwrap().to_rgb8();
    let white = written.pixels().filter(|p| p.0 == [255, 255, 255]).count();
    assert!(white > 0, "no text pixels found in rendered wallpaper");
}

#[test]
fn wrapper_splits_the_jobs_quote_at_the_marker() {
    // Same face the renderer falls back to when no TTF is present
    let face = Face::builtin(100.0);
    let lines = wrap_text(
        "Stay hungry || stay foolish",
        |s| face.measure(s),
        1920 - 40,
    );
    assert_eq!(lines, vec!["Stay hungry", "stay foolish"]);
}

#[test]
fn missing_quote_file_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let mut config = test_config(&tmp, "[]");
    config.quotes = PathBuf::from("/nonexistent/quotes.json");

    assert!(matches!(render(&config), Err(RenderError::Quotes(_))));
    assert!(!config.output.exists());
}

#[test]
fn empty_collection_is_fatal_before_rendering() {
    let tmp = TempDir::new().unwrap();
    let config = test_config(&tmp, "[]");

    assert!(matches!(render(&config), Err(RenderError::Quotes(_))));
    assert!(!config.output.exists());
}

#[test]
fn author_is_optional_end_to_end() {
    let tmp = TempDir::new().unwrap();
    let config = test_config(&tmp, r#"[{"quote": "no credit needed"}]"#);

    let report = render(&config).unwrap();
    assert_eq!(report.author, None);
    assert!(config.output.exists());
}
