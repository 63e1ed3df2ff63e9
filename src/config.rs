//! Wallpaper configuration module.
//!
//! Handles loading and validating `config.toml`. Everything has a stock
//! default, so a config file is optional and sparse — override just the
//! values you want. Unknown keys are rejected to catch typos early.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! quotes = "quotes.json"    # Quote collection (JSON array of {quote, author})
//! output = "wallpaper.png"  # Where the rendered wallpaper is written
//!
//! [canvas]
//! width = 1920
//! height = 1080
//! text_color = "#ffffff"    # Quote and author color, #rrggbb
//! hpad = 40                 # Horizontal padding in pixels
//! vpad = 40                 # Vertical gap between wrapped quote lines
//!
//! [fonts]
//! quote = "fonts/RobotoCondensed-VariableFont_wght.ttf"
//! author = "fonts/RobotoCondensed-Italic-VariableFont_wght.ttf"
//! quote_size = 100.0        # Point size for quote lines
//! author_size = 50.0        # Point size for the author credit
//! ```
//!
//! A missing font file is not a config error — rendering falls back to the
//! built-in bitmap face (see [`crate::typeface`]). Everything validated here
//! is fatal before any rendering begins.

use image::Rgb;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Wallpaper configuration loaded from `config.toml`.
///
/// All fields have stock defaults. User config files need only specify the
/// values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WallConfig {
    /// Path to the quote collection (JSON array of `{quote, author}`).
    pub quotes: PathBuf,
    /// Path the rendered wallpaper is written to.
    pub output: PathBuf,
    /// Canvas geometry, padding, and text color.
    pub canvas: CanvasConfig,
    /// Font assets and point sizes.
    pub fonts: FontsConfig,
}

impl Default for WallConfig {
    fn default() -> Self {
        Self {
            quotes: PathBuf::from("quotes.json"),
            output: PathBuf::from("wallpaper.png"),
            canvas: CanvasConfig::default(),
            fonts: FontsConfig::default(),
        }
    }
}

impl WallConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ConfigError::Validation(
                "canvas.width and canvas.height must be non-zero".into(),
            ));
        }
        if self.fonts.quote_size <= 0.0 || self.fonts.author_size <= 0.0 {
            return Err(ConfigError::Validation(
                "fonts.quote_size and fonts.author_size must be positive".into(),
            ));
        }
        // Surfaces a bad color string at load time, not mid-render
        self.canvas.color()?;
        Ok(())
    }
}

/// Canvas geometry, padding, and text color.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    /// Text color as `#rrggbb`.
    pub text_color: String,
    /// Horizontal padding in pixels (wrap budget and author inset).
    pub hpad: u32,
    /// Vertical gap between wrapped quote lines.
    pub vpad: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            text_color: "#ffffff".to_string(),
            hpad: 40,
            vpad: 40,
        }
    }
}

impl CanvasConfig {
    /// Parse `text_color` into pixel channels.
    pub fn color(&self) -> Result<Rgb<u8>, ConfigError> {
        parse_color(&self.text_color)
    }
}

/// Font assets and point sizes. Regular weight for the quote, italic for the
/// author credit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontsConfig {
    pub quote: PathBuf,
    pub author: PathBuf,
    pub quote_size: f32,
    pub author_size: f32,
}

impl Default for FontsConfig {
    fn default() -> Self {
        Self {
            quote: PathBuf::from("fonts/RobotoCondensed-VariableFont_wght.ttf"),
            author: PathBuf::from("fonts/RobotoCondensed-Italic-VariableFont_wght.ttf"),
            quote_size: 100.0,
            author_size: 50.0,
        }
    }
}

/// Parse a `#rrggbb` color string.
pub fn parse_color(s: &str) -> Result<Rgb<u8>, ConfigError> {
    let stripped = s.trim().trim_start_matches('#');
    if stripped.len() != 6 {
        return Err(ConfigError::Validation(format!("invalid color: {s}")));
    }
    let bytes = hex::decode(stripped)
        .map_err(|_| ConfigError::Validation(format!("invalid color: {s}")))?;
    Ok(Rgb([bytes[0], bytes[1], bytes[2]]))
}

/// Load config from an optional `config.toml` path.
///
/// `None` means no config file was given — stock defaults apply. A path that
/// does not exist or does not parse is fatal.
pub fn load(path: Option<&Path>) -> Result<WallConfig, ConfigError> {
    let config = match path {
        Some(p) => {
            let content = fs::read_to_string(p)?;
            toml::from_str(&content)?
        }
        None => WallConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

/// Stock `config.toml` with every option documented, for `quotewall gen-config`.
pub fn stock_config_toml() -> String {
    r##"# quotewall configuration
# All options are optional - defaults shown below.

# Quote collection: a JSON array of objects with a required "quote" field
# and an optional "author" field. A literal || inside a quote forces a
# line break at that point.
quotes = "quotes.json"

# Where the rendered wallpaper is written.
output = "wallpaper.png"

[canvas]
width = 1920
height = 1080
text_color = "#ffffff"    # Quote and author color, #rrggbb
hpad = 40                 # Horizontal padding in pixels
vpad = 40                 # Vertical gap between wrapped quote lines

[fonts]
# Missing font files are not fatal: rendering falls back to a built-in
# bitmap face and prints a warning.
quote = "fonts/RobotoCondensed-VariableFont_wght.ttf"
author = "fonts/RobotoCondensed-Italic-VariableFont_wght.ttf"
quote_size = 100.0
author_size = 50.0
"##
    .to_string()
}
