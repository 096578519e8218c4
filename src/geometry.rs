//! Grid geometry: page + grid shape → physical label size
//!
//! Everything here is pure inch arithmetic. Landscape sheets transpose the
//! effective row/column counts; the per-cell 90° rotation is a separate,
//! render-time effect handled in [`crate::render`].

use std::fmt;
use std::str::FromStr;

use crate::defaults;
use crate::errors::ConfigError;
use crate::types::{Length as Inches, PtIn, SizeIn};

/// Physical description of the sheet being printed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageSpec {
    pub width: Inches,
    pub height: Inches,
    /// Outer margin applied on every edge
    pub margin: Inches,
    /// Gap between adjacent labels
    pub gap: Inches,
}

impl PageSpec {
    /// A 4"×6" shipping-label sheet.
    pub const FOUR_BY_SIX: PageSpec = PageSpec {
        width: defaults::PAGE_WIDTH,
        height: defaults::PAGE_HEIGHT,
        margin: defaults::PAGE_MARGIN,
        gap: defaults::LABEL_GAP,
    };

    /// Printable width inside the margins
    pub fn available_width(&self) -> Inches {
        self.width - self.margin * 2.0
    }

    /// Printable height inside the margins
    pub fn available_height(&self) -> Inches {
        self.height - self.margin * 2.0
    }
}

impl Default for PageSpec {
    fn default() -> Self {
        PageSpec::FOUR_BY_SIX
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    /// Axes transposed and every label rotated 90°
    Landscape,
}

impl Orientation {
    pub fn is_landscape(self) -> bool {
        matches!(self, Orientation::Landscape)
    }
}

impl FromStr for Orientation {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "portrait" | "vertical" => Ok(Orientation::Portrait),
            "landscape" | "horizontal" => Ok(Orientation::Landscape),
            _ => Err(ConfigError::UnknownOrientation { value: s.to_string() }),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Portrait => write!(f, "portrait"),
            Orientation::Landscape => write!(f, "landscape"),
        }
    }
}

/// Grid shape of the sheet. Rows and columns are always within
/// `[MIN_GRID, MAX_GRID]`; construct through [`GridConfig::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridConfig {
    rows: usize,
    cols: usize,
    pub orientation: Orientation,
}

impl GridConfig {
    /// Build a grid config, clamping rows and columns into the supported range.
    pub fn new(rows: usize, cols: usize, orientation: Orientation) -> Self {
        let clamped_rows = rows.clamp(defaults::MIN_GRID, defaults::MAX_GRID);
        let clamped_cols = cols.clamp(defaults::MIN_GRID, defaults::MAX_GRID);
        if clamped_rows != rows || clamped_cols != cols {
            crate::log::warn!(
                rows,
                cols,
                clamped_rows,
                clamped_cols,
                "grid size out of range, clamped"
            );
        }
        GridConfig { rows: clamped_rows, cols: clamped_cols, orientation }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of labels on the sheet
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// (rows, cols) of the physical slot grid after transposition
    pub fn effective_dims(&self) -> (usize, usize) {
        effective_dims(self.rows, self.cols, self.orientation)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig::new(defaults::DEFAULT_ROWS, defaults::DEFAULT_COLS, Orientation::Portrait)
    }
}

/// Physical (rows, cols) used for layout; landscape swaps the logical axes.
pub fn effective_dims(rows: usize, cols: usize, orientation: Orientation) -> (usize, usize) {
    match orientation {
        Orientation::Portrait => (rows, cols),
        Orientation::Landscape => (cols, rows),
    }
}

/// Compute the physical size of one label.
///
/// Counts of zero are treated as one; callers are expected to stay within
/// `[1, 6]` per axis so the result is always positive.
pub fn compute_cell_size(
    page: &PageSpec,
    rows: usize,
    cols: usize,
    orientation: Orientation,
) -> SizeIn {
    let (eff_rows, eff_cols) = effective_dims(rows.max(1), cols.max(1), orientation);

    let total_gap_w = page.gap * (eff_cols - 1) as f64;
    let total_gap_h = page.gap * (eff_rows - 1) as f64;

    SizeIn {
        w: (page.available_width() - total_gap_w) / eff_cols as f64,
        h: (page.available_height() - total_gap_h) / eff_rows as f64,
    }
}

/// Top-left corner of the slot at (`slot_row`, `slot_col`) in the physical grid.
pub fn slot_origin(page: &PageSpec, cell: SizeIn, slot_row: usize, slot_col: usize) -> PtIn {
    PtIn {
        x: page.margin + (cell.w + page.gap) * slot_col as f64,
        y: page.margin + (cell.h + page.gap) * slot_row as f64,
    }
}
