//! Default sizes and tuning constants (lengths in inches, font sizes in points,
//! surface padding in CSS pixels)

use crate::types::{Length as Inches, Pt, Px};

// Page
pub const PAGE_WIDTH: Inches = Inches::inches(4.0);
pub const PAGE_HEIGHT: Inches = Inches::inches(6.0);
pub const PAGE_MARGIN: Inches = Inches::inches(0.15);
pub const LABEL_GAP: Inches = Inches::inches(0.0625);

// Grid
pub const MIN_GRID: usize = 1;
pub const MAX_GRID: usize = 6;
pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 2;

// Font fit
/// Inset subtracted once from each visual axis (both edges combined).
pub const FIT_PADDING: Inches = Inches::inches(0.25);
/// Average glyph advance as a fraction of the font size.
pub const CHAR_WIDTH_RATIO: f64 = 0.5;
/// Line box height as a multiple of the font size.
pub const LINE_HEIGHT_RATIO: f64 = 1.2;
pub const MIN_FONT: Pt = Pt(8.0);
pub const MAX_FONT: Pt = Pt(40.0);
pub const MIN_EMPTY_FONT: Pt = Pt(12.0);
/// Empty labels get `cell_width_pt / EMPTY_FONT_DIVISOR`.
pub const EMPTY_FONT_DIVISOR: f64 = 4.0;

// Centering
pub const HORIZONTAL_PADDING: Px = Px(8.0);
pub const MIN_VERTICAL_PADDING: Px = Px(8.0);

// Surface typography
pub const FONT_FAMILY: &str = "Helvetica, Arial, sans-serif";
/// Glyph advance tables are in hundredths of `CHARWID`, relative to `CHARHT`.
pub const CHARWID: f64 = 0.08;
pub const CHARHT: f64 = 0.14;
pub const MONO_ADVANCE: u32 = 82;
pub const BOLD_WIDEN: f64 = 1.1;

// Borders
pub const BORDER_WIDTH: Px = Px(2.0);
pub const BORDER_RADIUS: Px = Px(8.0);
