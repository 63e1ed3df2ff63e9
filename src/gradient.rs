//! Dark gradient background synthesis.
//!
//! The background fades vertically between two colors. When a color is not
//! supplied, each of its three channels is drawn independently and uniformly
//! from `[0, 60]` — dark enough that white text always reads.
//!
//! The gradient varies only along Y, so the interpolated color is computed
//! once per row and written across the whole row. This is a required shape,
//! not an incidental one: the naive per-pixel version does W×H interpolations
//! for no benefit.

use image::{Rgb, RgbImage};
use rand::Rng;

/// Upper bound (inclusive) for auto-generated channel values. Keeps the
/// background dark regardless of which two colors are drawn.
pub const DARK_CHANNEL_MAX: u8 = 60;

/// Draw a random dark color: each channel uniform over `[0, DARK_CHANNEL_MAX]`.
pub fn random_dark_color(rng: &mut impl Rng) -> Rgb<u8> {
    Rgb([
        rng.gen_range(0..=DARK_CHANNEL_MAX),
        rng.gen_range(0..=DARK_CHANNEL_MAX),
        rng.gen_range(0..=DARK_CHANNEL_MAX),
    ])
}

/// Generate a `width`×`height` buffer fading vertically from `color1` (top)
/// to `color2` (bottom). Omitted colors are drawn via [`random_dark_color`].
///
/// Row `y` gets interpolation fraction `t = y / height`; each channel is
/// `round(c1 * (1 - t) + c2 * t)`. Callers guarantee `width, height > 0`.
pub fn generate_background(
    width: u32,
    height: u32,
    color1: Option<Rgb<u8>>,
    color2: Option<Rgb<u8>>,
) -> RgbImage {
    let mut rng = rand::thread_rng();
    let c1 = color1.unwrap_or_else(|| random_dark_color(&mut rng));
    let c2 = color2.unwrap_or_else(|| random_dark_color(&mut rng));

    let mut canvas = RgbImage::new(width, height);
    for (y, row) in canvas.enumerate_rows_mut() {
        let t = y as f32 / height as f32;
        let color = Rgb([
            lerp_channel(c1.0[0], c2.0[0], t),
            lerp_channel(c1.0[1], c2.0[1], t),
            lerp_channel(c1.0[2], c2.0[2], t),
        ]);
        for (_, _, pixel) in row {
            *pixel = color;
        }
    }
    canvas
}

fn lerp_channel(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 * (1.0 - t) + b as f32 * t).round() as u8
}
