//! CLI output formatting.
//!
//! Each surface has a `format_*` function returning `Vec<String>` (pure, no
//! I/O, testable) and a `print_*` wrapper that writes it out. Render and
//! check results go to stdout; the font-fallback warning goes to stderr so
//! it survives piping the normal output away.
//!
//! ## Render
//!
//! ```text
//! Wallpaper created with quote: Stay hungry || stay foolish
//!     Author: Jobs
//!     Lines: 2
//!     Output: wallpaper.png (1920x1080)
//! ```
//!
//! ## Check
//!
//! ```text
//! Quotes
//! 001 Stay hungry || stay foolish (~ Jobs)
//! 002 Less, but better
//! 2 quotes in quotes.json
//! ```

use crate::quotes::Quote;
use crate::render::RenderReport;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Truncate display text to `max` characters, appending `…` when cut.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max).collect();
    format!("{cut}…")
}

/// Format the result of a render run.
pub fn format_render_output(report: &RenderReport) -> Vec<String> {
    let mut lines = vec![format!("Wallpaper created with quote: {}", report.quote)];
    if let Some(author) = &report.author {
        lines.push(format!("    Author: {author}"));
    }
    lines.push(format!("    Lines: {}", report.lines));
    lines.push(format!(
        "    Output: {} ({}x{})",
        report.output.display(),
        report.width,
        report.height
    ));
    lines
}

pub fn print_render_output(report: &RenderReport) {
    for line in format_render_output(report) {
        println!("{line}");
    }
}

/// Format the quote inventory for `quotewall check`.
pub fn format_check_output(quotes: &[Quote], source: &Path) -> Vec<String> {
    let mut lines = vec!["Quotes".to_string()];
    for (i, quote) in quotes.iter().enumerate() {
        let text = truncate(&quote.quote, 60);
        match &quote.author {
            Some(author) => lines.push(format!("{} {} (~ {})", format_index(i + 1), text, author)),
            None => lines.push(format!("{} {}", format_index(i + 1), text)),
        }
    }
    lines.push(format!("{} quotes in {}", quotes.len(), source.display()));
    lines
}

pub fn print_check_output(quotes: &[Quote], source: &Path) {
    for line in format_check_output(quotes, source) {
        println!("{line}");
    }
}

/// Warn that a font asset could not be loaded and the builtin face is used.
pub fn format_fallback_warning(font_path: &Path) -> String {
    format!(
        "Warning: font not found, falling back to built-in font: {}",
        font_path.display()
    )
}

pub fn print_fallback_warning(font_path: &Path) {
    eprintln!("{}", format_fallback_warning(font_path));
}
