//! Font loading, glyph measurement, and text drawing.
//!
//! Two face kinds back the same interface:
//!
//! - [`Face::TrueType`] — a `rusttype` font at a given scale, used whenever
//!   the configured TTF loads.
//! - [`Face::Builtin`] — 8×8 bitmap glyphs (`font8x8`) scaled up to approximate
//!   the requested point size. This is the fallback when a font file is
//!   missing or corrupt, so a bad font path degrades the wallpaper instead of
//!   failing the run.
//!
//! [`load_face`] never fails: it returns the loaded face plus a `fallback`
//! flag, and the caller decides whether to warn.
//!
//! Measurement returns a [`TextBounds`] box in pixel units relative to the
//! line's top-left anchor; drawing takes the same anchor, so a string drawn
//! at `(x, y)` occupies roughly `measure(text)` translated by `(x, y)`.

use font8x8::{BASIC_FONTS, UnicodeFonts};
use image::{Rgb, RgbImage};
use rusttype::{Font, Scale, point};
use std::fs;
use std::path::Path;

/// Bounding box of a rendered string, in pixels, relative to the top-left of
/// its line box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBounds {
    pub const ZERO: TextBounds = TextBounds {
        left: 0,
        top: 0,
        right: 0,
        bottom: 0,
    };

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// A loadable text face: TrueType when the asset is available, builtin bitmap
/// otherwise.
pub enum Face {
    TrueType { font: Font<'static>, size: f32 },
    /// Builtin 8×8 glyphs drawn as `scale`×`scale` pixel blocks.
    Builtin { scale: i32 },
}

/// Result of loading a face: the face itself plus whether the builtin
/// fallback was substituted for a missing/corrupt font file.
pub struct LoadedFace {
    pub face: Face,
    pub fallback: bool,
}

/// Load a TTF at the given point size, falling back to the builtin bitmap
/// face on any read or parse failure. Never fails; the `fallback` flag tells
/// the caller whether to warn.
pub fn load_face(path: &Path, size: f32) -> LoadedFace {
    let loaded = fs::read(path)
        .ok()
        .and_then(|bytes| Font::try_from_vec(bytes));
    match loaded {
        Some(font) => LoadedFace {
            face: Face::TrueType { font, size },
            fallback: false,
        },
        None => LoadedFace {
            face: Face::builtin(size),
            fallback: true,
        },
    }
}

impl Face {
    /// Builtin bitmap face approximating the given point size. 8×8 glyphs are
    /// scaled by whole pixels, minimum 1.
    pub fn builtin(size: f32) -> Face {
        Face::Builtin {
            scale: ((size / 8.0).round() as i32).max(1),
        }
    }

    /// Measure the bounding box `text` would occupy when drawn.
    pub fn measure(&self, text: &str) -> TextBounds {
        if text.is_empty() {
            return TextBounds::ZERO;
        }
        match self {
            Face::TrueType { font, size } => measure_truetype(font, *size, text),
            Face::Builtin { scale } => {
                let glyph = 8 * scale;
                TextBounds {
                    left: 0,
                    top: 0,
                    right: text.chars().count() as i32 * glyph,
                    bottom: glyph,
                }
            }
        }
    }

    /// Draw `text` onto the canvas with its line box anchored at `(x, y)`.
    /// Pixels outside the canvas are clipped.
    pub fn draw(&self, canvas: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>, text: &str) {
        match self {
            Face::TrueType { font, size } => draw_truetype(canvas, font, *size, x, y, color, text),
            Face::Builtin { scale } => draw_builtin(canvas, *scale, x, y, color, text),
        }
    }
}

fn measure_truetype(font: &Font<'static>, size: f32, text: &str) -> TextBounds {
    let scale = Scale::uniform(size);
    let v_metrics = font.v_metrics(scale);
    let glyphs: Vec<_> = font.layout(text, scale, point(0.0, v_metrics.ascent)).collect();

    let mut bounds: Option<TextBounds> = None;
    for glyph in &glyphs {
        if let Some(bb) = glyph.pixel_bounding_box() {
            bounds = Some(match bounds {
                None => TextBounds {
                    left: bb.min.x,
                    top: bb.min.y,
                    right: bb.max.x,
                    bottom: bb.max.y,
                },
                Some(b) => TextBounds {
                    left: b.left.min(bb.min.x),
                    top: b.top.min(bb.min.y),
                    right: b.right.max(bb.max.x),
                    bottom: b.bottom.max(bb.max.y),
                },
            });
        }
    }
    // Whitespace-only text has no outlines; fall back to advance widths and
    // the full line height so layout still reserves space for it.
    bounds.unwrap_or_else(|| {
        let advance: f32 = glyphs
            .iter()
            .map(|g| g.unpositioned().h_metrics().advance_width)
            .sum();
        TextBounds {
            left: 0,
            top: 0,
            right: advance.ceil() as i32,
            bottom: (v_metrics.ascent - v_metrics.descent).ceil() as i32,
        }
    })
}

fn draw_truetype(
    canvas: &mut RgbImage,
    font: &Font<'static>,
    size: f32,
    x: i32,
    y: i32,
    color: Rgb<u8>,
    text: &str,
) {
    let scale = Scale::uniform(size);
    let v_metrics = font.v_metrics(scale);
    let origin = point(x as f32, y as f32 + v_metrics.ascent);
    for glyph in font.layout(text, scale, origin) {
        if let Some(bb) = glyph.pixel_bounding_box() {
            glyph.draw(|gx, gy, coverage| {
                let px = gx as i32 + bb.min.x;
                let py = gy as i32 + bb.min.y;
                blend_pixel(canvas, px, py, color, coverage);
            });
        }
    }
}

fn draw_builtin(canvas: &mut RgbImage, scale: i32, x: i32, y: i32, color: Rgb<u8>, text: &str) {
    let glyph_px = 8 * scale;
    let mut caret = x;
    for ch in text.chars() {
        if let Some(rows) = BASIC_FONTS.get(ch) {
            for (row_idx, row) in rows.iter().enumerate() {
                for bit in 0..8 {
                    if row & (1 << bit) == 0 {
                        continue;
                    }
                    // One font bit becomes a scale×scale block
                    let bx = caret + bit * scale;
                    let by = y + row_idx as i32 * scale;
                    for dy in 0..scale {
                        for dx in 0..scale {
                            blend_pixel(canvas, bx + dx, by + dy, color, 1.0);
                        }
                    }
                }
            }
        }
        caret += glyph_px;
    }
}

/// Alpha-blend `color` at `coverage` into the canvas, clipping out-of-bounds
/// writes.
fn blend_pixel(canvas: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>, coverage: f32) {
    if x < 0 || y < 0 || coverage <= 0.0 {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    if x >= canvas.width() || y >= canvas.height() {
        return;
    }
    let alpha = coverage.min(1.0);
    let inv = 1.0 - alpha;
    let dst = canvas.get_pixel_mut(x, y);
    dst.0[0] = (color.0[0] as f32 * alpha + dst.0[0] as f32 * inv) as u8;
    dst.0[1] = (color.0[1] as f32 * alpha + dst.0[1] as f32 * inv) as u8;
    dst.0[2] = (color.0[2] as f32 * alpha + dst.0[2] as f32 * inv) as u8;
}
