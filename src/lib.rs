//! Label grid layout and auto-fit typography for 4"×6" label sheets.
//!
//! A [`LabelSheet`] splits the page into a rows × columns grid (optionally
//! landscape: axes transposed and every label rotated 90°), picks a font size
//! per label with a fast heuristic, centers the text vertically from measured
//! line boxes, and prints the result as a single SVG page.
//!
//! ```
//! use fourbysix::{LabelSheet, Orientation, SheetOptions};
//!
//! let mut sheet = LabelSheet::new(SheetOptions::with_grid(3, 2, Orientation::Portrait));
//! sheet.update_cell("label-0-0", "FRAGILE");
//! assert_eq!(sheet.size_info(), "Label size: 1.82\" x 1.86\" (3x2)");
//! let svg = sheet.print().unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```

pub mod center;
pub mod config;
pub mod defaults;
pub mod errors;
pub mod fit;
pub mod geometry;
pub mod log;
pub mod measure;
pub mod render;
pub mod sheet;
pub mod store;
pub mod surface;
pub mod text;
pub mod types;

pub use center::{center_text, centered_padding};
pub use config::{BorderStyle, SheetOptions, TextAlignment};
pub use errors::{ConfigError, MeasureError, RenderError};
pub use fit::choose_font_size;
pub use geometry::{GridConfig, Orientation, PageSpec, compute_cell_size};
pub use measure::{Document, MeasureHost, Probe, ProbeGuard};
pub use sheet::{LabelSheet, LabelView};
pub use store::{CellId, LabelCell, LabelStore};
pub use surface::{Container, Padding, TextSurface};

/// Lay out a sheet with every label set to `text` and print it to SVG.
pub fn render_uniform(options: SheetOptions, text: &str) -> Result<String, miette::Report> {
    let mut sheet = LabelSheet::new(options);
    sheet.apply_bulk_text(text);
    Ok(sheet.print()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_sheet_repeats_the_text() {
        let svg = render_uniform(SheetOptions::with_grid(2, 2, Orientation::Portrait), "Box 7").unwrap();
        assert_eq!(svg.matches(">Box 7</tspan>").count(), 4);
    }
}
