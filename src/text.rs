//! Text layout for the headless rendering surface.
//!
//! Glyph advances come from a proportional width table (or a fixed advance for
//! monospace families). Lines are broken the way a `white-space: pre-wrap`
//! block breaks them: hard breaks at `\n`, greedy wrapping at spaces, and a
//! word that is wider than the box stays whole on its own line.

use enum_dispatch::enum_dispatch;

use crate::defaults;
use crate::types::{Pt, Px};

/// Proportional character widths for printable ASCII, in hundredths of `CHARWID`.
#[rustfmt::skip]
pub const AW_CHAR: [u8; 95] = [
    45,  55,  62, 115,  90, 132, 125,  40,
    55,  55,  71, 115,  45,  48,  45,  50,
    91,  91,  91,  91,  91,  91,  91,  91,
    91,  91,  50,  50, 120, 120, 120,  78,
   142, 102, 105, 110, 115, 105,  98, 105,
   125,  58,  58, 107,  95, 145, 125, 115,
    95, 115, 107,  95,  97, 118, 102, 150,
   100,  93, 100,  58,  50,  58, 119,  72,
    72,  86,  92,  80,  92,  85,  52,  92,
    92,  47,  47,  88,  48, 135,  92,  86,
    92,  92,  69,  75,  58,  92,  80, 121,
    81,  80,  76,  91,  49,  91, 118,
];

/// Width of characters outside the table.
const FALLBACK_ADVANCE: u32 = 100;

/// Table units → em
const UNITS_TO_EM: f64 = defaults::CHARWID / defaults::CHARHT * 0.01;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Per-character advance widths in em.
#[enum_dispatch]
pub trait GlyphMetrics {
    fn advance_em(&self, c: char) -> f64;

    /// Advance of a whole run of text in em.
    fn run_em(&self, text: &str) -> f64 {
        text.chars().map(|c| self.advance_em(c)).sum()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Proportional {
    pub bold: bool,
}

impl GlyphMetrics for Proportional {
    fn advance_em(&self, c: char) -> f64 {
        let units = if (' '..='~').contains(&c) {
            AW_CHAR[(c as usize) - 0x20] as u32
        } else {
            FALLBACK_ADVANCE
        };
        let em = units as f64 * UNITS_TO_EM;
        if self.bold { em * defaults::BOLD_WIDEN } else { em }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Monospace;

impl GlyphMetrics for Monospace {
    fn advance_em(&self, _c: char) -> f64 {
        defaults::MONO_ADVANCE as f64 * UNITS_TO_EM
    }
}

#[enum_dispatch(GlyphMetrics)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FontMetrics {
    Proportional,
    Monospace,
}

impl FontMetrics {
    /// Pick metrics for a CSS-style family list.
    pub fn for_family(family: &str, weight: FontWeight) -> Self {
        let lower = family.to_ascii_lowercase();
        let first = lower.split(',').next().unwrap_or("").trim();
        if first.contains("mono") || first.contains("courier") || first == "consolas" {
            FontMetrics::Monospace(Monospace)
        } else {
            FontMetrics::Proportional(Proportional { bold: weight == FontWeight::Bold })
        }
    }
}

/// Computed typography of a text surface.
#[derive(Clone, Debug, PartialEq)]
pub struct TypographicStyle {
    pub family: String,
    pub size: Px,
    pub weight: FontWeight,
    pub line_height: Px,
}

impl TypographicStyle {
    /// Style at `size` with a `normal` line height (1.2 × font size).
    pub fn new(family: impl Into<String>, size: Pt, weight: FontWeight) -> Self {
        let size = size.to_px();
        TypographicStyle {
            family: family.into(),
            size,
            weight,
            line_height: size * defaults::LINE_HEIGHT_RATIO,
        }
    }

    /// Change the font size, keeping the line height proportional.
    pub fn set_size(&mut self, size: Pt) {
        self.size = size.to_px();
        self.line_height = self.size * defaults::LINE_HEIGHT_RATIO;
    }

    pub fn metrics(&self) -> FontMetrics {
        FontMetrics::for_family(&self.family, self.weight)
    }

    /// Rendered width of a single line.
    pub fn line_width(&self, line: &str) -> Px {
        self.size * self.metrics().run_em(line)
    }
}

impl Default for TypographicStyle {
    fn default() -> Self {
        TypographicStyle::new(defaults::FONT_FAMILY, defaults::MIN_EMPTY_FONT, FontWeight::Normal)
    }
}

/// Lines of a laid-out block of text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextBlock {
    pub lines: Vec<String>,
    pub line_height: Px,
}

impl TextBlock {
    pub fn height(&self) -> Px {
        self.line_height * self.lines.len() as f64
    }
}

/// Lay `text` out in a box `max_width` wide.
pub fn layout_text(text: &str, style: &TypographicStyle, max_width: Px) -> TextBlock {
    let mut lines = Vec::new();
    if !text.is_empty() {
        // A final newline ends the last line rather than opening a new one.
        let body = text.strip_suffix('\n').unwrap_or(text);
        for hard_line in body.split('\n') {
            wrap_line(hard_line, style, max_width, &mut lines);
        }
    }
    TextBlock { lines, line_height: style.line_height }
}

fn wrap_line(line: &str, style: &TypographicStyle, max_width: Px, out: &mut Vec<String>) {
    let mut words = line.split(' ');
    let mut current = words.next().unwrap_or("").to_string();

    for word in words {
        let candidate = format!("{current} {word}");
        // Trailing spaces hang past the edge instead of wrapping.
        let fits = style.line_width(candidate.trim_end_matches(' ')) <= max_width;
        if word.is_empty() || fits || current.trim().is_empty() {
            current = candidate;
        } else {
            out.push(std::mem::replace(&mut current, word.to_string()));
        }
    }
    out.push(current);
}
