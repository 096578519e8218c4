//! Heuristic font-size solver.
//!
//! Picks the largest size that should fit the text in a label without laying
//! out any glyphs: an average advance of half the font size per character and
//! a 1.2 line box. The result is never re-checked against real metrics; the
//! centering pass only repositions the text.

use crate::defaults;
use crate::geometry::Orientation;
use crate::types::{Length as Inches, Pt};

/// Line statistics the solver works from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextExtent {
    pub line_count: usize,
    /// Character count of the longest line
    pub longest_line: usize,
}

impl TextExtent {
    /// Split on `\n`; a trailing newline contributes an empty last line.
    pub fn of(text: &str) -> Self {
        let mut line_count = 0;
        let mut longest_line = 0;
        for line in text.split('\n') {
            line_count += 1;
            longest_line = longest_line.max(line.chars().count());
        }
        TextExtent { line_count, longest_line }
    }
}

/// Choose a font size in points for `text` inside a `cell_width` × `cell_height` label.
pub fn choose_font_size(
    text: &str,
    cell_width: Inches,
    cell_height: Inches,
    orientation: Orientation,
) -> Pt {
    if text.trim().is_empty() {
        return empty_font_size(cell_width);
    }

    let extent = TextExtent::of(text);

    // Rotated labels flow text along the cell's height.
    let (visual_w, visual_h) = match orientation {
        Orientation::Landscape => (cell_height, cell_width),
        Orientation::Portrait => (cell_width, cell_height),
    };
    let available_w = (visual_w - defaults::FIT_PADDING).to_points();
    let available_h = (visual_h - defaults::FIT_PADDING).to_points();

    let by_width = if extent.longest_line > 0 {
        available_w / (extent.longest_line as f64 * defaults::CHAR_WIDTH_RATIO)
    } else {
        defaults::MAX_FONT
    };
    let by_height = available_h / (extent.line_count as f64 * defaults::LINE_HEIGHT_RATIO);

    by_width
        .min(by_height)
        .clamp_to(defaults::MIN_FONT, defaults::MAX_FONT)
}

/// Size used for blank labels: proportional to the cell width, within [12, 40].
pub fn empty_font_size(cell_width: Inches) -> Pt {
    (cell_width.to_points() / defaults::EMPTY_FONT_DIVISOR)
        .clamp_to(defaults::MIN_EMPTY_FONT, defaults::MAX_FONT)
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: Inches = Inches::inches(1.81875);
    const H: Inches = Inches::inches(0.8979166666666667);

    #[test]
    fn extent_counts_lines_and_chars() {
        assert_eq!(TextExtent::of("ab\nabcd\n"), TextExtent { line_count: 3, longest_line: 4 });
        assert_eq!(TextExtent::of("héllo"), TextExtent { line_count: 1, longest_line: 5 });
    }

    #[test]
    fn empty_text_uses_width_default() {
        for w in [0.3, 0.6, 1.0, 1.81875, 3.7] {
            let expected = (w * 18.0_f64).clamp(12.0, 40.0);
            assert_eq!(choose_font_size("", Inches(w), H, Orientation::Portrait), Pt(expected));
            assert_eq!(choose_font_size("  \n ", Inches(w), H, Orientation::Portrait), Pt(expected));
        }
    }

    #[test]
    fn short_text_is_height_bound() {
        // (0.898 - 0.25) * 72 / 1.2 = 38.875
        let size = choose_font_size("Hi", W, H, Orientation::Portrait);
        assert!((size.0 - 38.875).abs() < 1e-9, "got {size}");
    }

    #[test]
    fn long_line_is_width_bound() {
        // (1.81875 - 0.25) * 72 / (20 * 0.5) = 11.295
        let size = choose_font_size("abcdefghijklmnopqrst", W, H, Orientation::Portrait);
        assert!((size.0 - 11.295).abs() < 1e-9, "got {size}");
    }

    #[test]
    fn landscape_swaps_visual_box() {
        let text = "abcdefghij";
        let landscape = choose_font_size(text, W, H, Orientation::Landscape);
        let portrait = choose_font_size(text, H, W, Orientation::Portrait);
        assert_eq!(landscape, portrait);
    }

    #[test]
    fn non_increasing_in_line_length() {
        let mut prev = Pt(f64::INFINITY);
        for n in 1..80 {
            let size = choose_font_size(&"x".repeat(n), W, H, Orientation::Portrait);
            assert!(size <= prev, "{n} chars grew from {prev} to {size}");
            assert!(size >= Pt(8.0) && size <= Pt(40.0));
            prev = size;
        }
    }

    #[test]
    fn non_increasing_in_line_count() {
        let mut prev = Pt(f64::INFINITY);
        for n in 1..20 {
            let text = vec!["abc"; n].join("\n");
            let size = choose_font_size(&text, W, H, Orientation::Portrait);
            assert!(size <= prev, "{n} lines grew from {prev} to {size}");
            assert!(size >= Pt(8.0) && size <= Pt(40.0));
            prev = size;
        }
    }

    #[test]
    fn huge_cell_caps_at_forty() {
        let size = choose_font_size("A", Inches(3.7), Inches(5.7), Orientation::Portrait);
        assert_eq!(size, Pt(40.0));
    }
}
