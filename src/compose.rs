//! Text layout and compositing onto the background canvas.
//!
//! The quote block is vertically centered and each line horizontally
//! centered. The author credit sits a fixed gap below the block at
//! `x = 0.8 × (width - author_width - hpad)` — a right-leaning but not
//! right-flush position. That formula is intentional legacy behavior and is
//! preserved verbatim; do not "fix" it to true right alignment.
//!
//! Position math lives in pure helpers so the arithmetic is unit testable
//! without a canvas or a font.

use crate::typeface::Face;
use image::{Rgb, RgbImage};

/// Vertical gap in pixels between the quote block and the author credit.
pub const AUTHOR_GAP: i32 = 100;

/// Total height of the quote block: line heights plus `vpad` after each line.
pub fn quote_block_height(line_heights: &[i32], vpad: u32) -> i32 {
    line_heights.iter().sum::<i32>() + vpad as i32 * line_heights.len() as i32
}

/// X position centering an item of `item_width` on the canvas.
pub fn centered_x(canvas_width: u32, item_width: i32) -> i32 {
    (canvas_width as i32 - item_width) / 2
}

/// The author line's right-leaning x position.
pub fn author_x(canvas_width: u32, author_width: i32, hpad: u32) -> i32 {
    (0.8 * (canvas_width as f32 - author_width as f32 - hpad as f32)) as i32
}

/// Draw the wrapped quote lines and the author credit over the background.
///
/// Mutates `canvas` in place; no new buffer is allocated. An empty `author`
/// string draws nothing.
pub fn compose(
    canvas: &mut RgbImage,
    quote_lines: &[String],
    author: &str,
    quote_face: &Face,
    author_face: &Face,
    text_color: Rgb<u8>,
    hpad: u32,
    vpad: u32,
) {
    let line_heights: Vec<i32> = quote_lines
        .iter()
        .map(|line| quote_face.measure(line).height())
        .collect();
    let block_height = quote_block_height(&line_heights, vpad);
    let mut y = (canvas.height() as i32 - block_height) / 2;

    for (line, height) in quote_lines.iter().zip(&line_heights) {
        let width = quote_face.measure(line).width();
        let x = centered_x(canvas.width(), width);
        quote_face.draw(canvas, x, y, text_color, line);
        y += height + vpad as i32;
    }

    let author_width = author_face.measure(author).width();
    let x = author_x(canvas.width(), author_width, hpad);
    author_face.draw(canvas, x, y + AUTHOR_GAP, text_color, author);
}
