//! End-to-end wallpaper rendering.
//!
//! One call runs the whole pipeline: pick a quote, load faces, synthesize the
//! gradient, wrap, compose, encode. Single-threaded and single-pass — the
//! canvas is owned by this one function from allocation to the final write.
//!
//! Returns a [`RenderReport`] describing what was rendered; presentation is
//! [`crate::output`]'s job. The only locally recovered failure is a missing
//! font (builtin fallback + stderr warning); everything else aborts.

use crate::config::{ConfigError, WallConfig};
use crate::quotes::{self, QuoteError};
use crate::typeface::{self, LoadedFace};
use crate::{compose, gradient, output, wrap};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Quote error: {0}")]
    Quotes(#[from] QuoteError),
    #[error("Image write error: {0}")]
    Image(#[from] image::ImageError),
}

/// What a render run produced, for CLI output.
#[derive(Debug)]
pub struct RenderReport {
    pub quote: String,
    pub author: Option<String>,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Number of lines the quote wrapped into.
    pub lines: usize,
    pub quote_font_fallback: bool,
    pub author_font_fallback: bool,
}

/// Render one wallpaper per the config and write it to `config.output`.
pub fn render(config: &WallConfig) -> Result<RenderReport, RenderError> {
    let quote = quotes::random_quote(&config.quotes)?;
    let text_color = config.canvas.color()?;

    let quote_face = load_face_or_warn(&config.fonts.quote, config.fonts.quote_size);
    let author_face = load_face_or_warn(&config.fonts.author, config.fonts.author_size);

    let mut canvas =
        gradient::generate_background(config.canvas.width, config.canvas.height, None, None);

    let wrap_width = config.canvas.width.saturating_sub(config.canvas.hpad);
    let lines = wrap::wrap_text(&quote.quote, |s| quote_face.face.measure(s), wrap_width);

    compose::compose(
        &mut canvas,
        &lines,
        &quote.attribution(),
        &quote_face.face,
        &author_face.face,
        text_color,
        config.canvas.hpad,
        config.canvas.vpad,
    );

    canvas.save(&config.output)?;

    Ok(RenderReport {
        quote: quote.quote,
        author: quote.author,
        output: config.output.clone(),
        width: config.canvas.width,
        height: config.canvas.height,
        lines: lines.len(),
        quote_font_fallback: quote_face.fallback,
        author_font_fallback: author_face.fallback,
    })
}

fn load_face_or_warn(path: &std::path::Path, size: f32) -> LoadedFace {
    let loaded = typeface::load_face(path, size);
    if loaded.fallback {
        output::print_fallback_warning(path);
    }
    loaded
}
