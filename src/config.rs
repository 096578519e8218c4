//! Sheet configuration: grid shape plus the purely visual hints.

use std::fmt;
use std::str::FromStr;

use crate::defaults;
use crate::errors::ConfigError;
use crate::geometry::{GridConfig, Orientation, PageSpec};
use crate::text::FontWeight;

/// Horizontal alignment of label text. Rendering hint only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextAlignment {
    Left,
    #[default]
    Center,
    Right,
}

impl FromStr for TextAlignment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(TextAlignment::Left),
            "center" | "centre" => Ok(TextAlignment::Center),
            "right" => Ok(TextAlignment::Right),
            _ => Err(ConfigError::UnknownAlignment { value: s.to_string() }),
        }
    }
}

impl fmt::Display for TextAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TextAlignment::Left => "left",
            TextAlignment::Center => "center",
            TextAlignment::Right => "right",
        })
    }
}

/// Outline drawn around each label. Rendering hint only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BorderStyle {
    None,
    #[default]
    Thick,
    Rounded,
}

impl FromStr for BorderStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(BorderStyle::None),
            "thick" => Ok(BorderStyle::Thick),
            "rounded" => Ok(BorderStyle::Rounded),
            _ => Err(ConfigError::UnknownBorder { value: s.to_string() }),
        }
    }
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BorderStyle::None => "none",
            BorderStyle::Thick => "thick",
            BorderStyle::Rounded => "rounded",
        })
    }
}

/// Everything needed to build a [`crate::LabelSheet`].
#[derive(Clone, Debug, PartialEq)]
pub struct SheetOptions {
    pub page: PageSpec,
    pub grid: GridConfig,
    pub alignment: TextAlignment,
    pub border: BorderStyle,
    /// CSS-style font family list for label text
    pub font_family: String,
    pub font_weight: FontWeight,
}

impl Default for SheetOptions {
    fn default() -> Self {
        SheetOptions {
            page: PageSpec::FOUR_BY_SIX,
            grid: GridConfig::default(),
            alignment: TextAlignment::default(),
            border: BorderStyle::default(),
            font_family: defaults::FONT_FAMILY.to_string(),
            font_weight: FontWeight::Normal,
        }
    }
}

impl SheetOptions {
    /// Options for a `rows` × `cols` grid (clamped to 1-6), everything else default.
    pub fn with_grid(rows: usize, cols: usize, orientation: Orientation) -> Self {
        SheetOptions {
            grid: GridConfig::new(rows, cols, orientation),
            ..Self::default()
        }
    }
}
