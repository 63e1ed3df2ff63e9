//! # Quotewall
//!
//! A one-shot motivational wallpaper generator. Each run picks a random quote
//! from a JSON collection, lays it out over a freshly generated dark gradient,
//! and writes a single PNG. No daemon, no cache, no state between runs.
//!
//! # Architecture: One Pass, Pure Core
//!
//! The pipeline is a straight line through independent stages:
//!
//! ```text
//! quotes.json  →  pick one  →  wrap to width  →  compose over gradient  →  wallpaper.png
//! ```
//!
//! The two pieces with actual algorithmic content are kept free of I/O so they
//! can be unit tested without fonts or files:
//!
//! - **Word wrap** ([`wrap`]): greedy line fill against a caller-supplied
//!   measure function, with `||` in the quote text forcing a line break.
//! - **Gradient synthesis** ([`gradient`]): vertical interpolation between two
//!   random dark colors, computed once per row and filled across it.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `config.toml` loading, validation, and the stock config printer |
//! | [`quotes`] | Quote collection parsing and uniform random selection |
//! | [`gradient`] | Dark-color sampling and row-wise vertical gradient fill |
//! | [`wrap`] | Greedy word wrap with forced-break markers |
//! | [`typeface`] | Font loading with bitmap fallback, glyph measurement and drawing |
//! | [`compose`] | Layout math and compositing text onto the canvas |
//! | [`render`] | End-to-end pipeline: config in, PNG + report out |
//! | [`output`] | CLI output formatting — pure `format_*` functions, `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## Fonts Are Never Fatal
//!
//! A missing or corrupt TTF falls back to a built-in 8×8 bitmap face scaled to
//! the requested size, with a warning on stderr. A wallpaper in an ugly font
//! beats no wallpaper. Everything else about the inputs (quote file missing,
//! malformed JSON, empty collection) aborts with a descriptive error before
//! any rendering starts.
//!
//! ## Measurement Is a Seam
//!
//! The wrapper never touches a font directly — it takes a `&str -> TextBounds`
//! closure. Tests drive it with a character-count measure; production passes
//! the loaded face. This keeps the only non-trivial algorithm in the crate
//! fully deterministic under test.
//!
//! ## Row-Wise Gradient Fill
//!
//! The gradient varies only along Y, so the interpolated color is computed
//! once per row and written across the whole row. O(H) color computations
//! instead of O(W·H); at 1920×1080 that is the difference between trivial and
//! sloppy.

pub mod compose;
pub mod config;
pub mod gradient;
pub mod output;
pub mod quotes;
pub mod render;
pub mod typeface;
pub mod wrap;
