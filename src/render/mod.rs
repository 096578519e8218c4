//! Placing laid-out labels on the physical page
//!
//! - `svg`: serialization of the placed labels

pub mod svg;

use glam::{DVec2, dvec2};

use crate::config::TextAlignment;
use crate::errors::RenderError;
use crate::geometry::slot_origin;
use crate::measure::MeasureHost;
use crate::sheet::{LabelSheet, LabelView};
use crate::text::layout_text;
use crate::types::{Length, SizePx};

/// One label positioned on the page, in pixels.
#[derive(Clone, Debug)]
pub struct PlacedLabel<'a> {
    pub view: LabelView<'a>,
    /// Center of the label's grid slot
    pub center: DVec2,
    /// The label's own box, before rotation
    pub size: SizePx,
    /// Clockwise rotation in degrees (0 or 90)
    pub rotation: f64,
    /// Wrapped lines with the center of each line box, relative to `center`
    pub lines: Vec<(String, DVec2)>,
}

/// Text anchor point and SVG `text-anchor` keyword for an alignment.
pub fn anchor_for(alignment: TextAlignment, size: SizePx, view: &LabelView<'_>) -> (f64, &'static str) {
    let half = size.w.0 / 2.0;
    match alignment {
        TextAlignment::Left => (-half + view.padding.left.0, "start"),
        TextAlignment::Center => ((view.padding.left.0 - view.padding.right.0) / 2.0, "middle"),
        TextAlignment::Right => (half - view.padding.right.0, "end"),
    }
}

/// Position every label of `sheet` on the page.
///
/// Labels fill the physical slot grid in row-major order. Landscape labels
/// keep the transposed box and are rotated 90° about their slot center, so
/// they cover the slot exactly.
pub fn place_labels<H: MeasureHost>(sheet: &LabelSheet<H>) -> Result<Vec<PlacedLabel<'_>>, RenderError> {
    let cell = sheet.cell_size();
    Length::try_positive(cell.w.0)
        .and_then(|_| Length::try_positive(cell.h.0))
        .map_err(|_| RenderError::DegenerateGeometry { width: cell.w.0, height: cell.h.0 })?;

    let options = sheet.options();
    let scaler = sheet.scaler();
    let (_, eff_cols) = options.grid.effective_dims();
    let rotation = if options.grid.orientation.is_landscape() { 90.0 } else { 0.0 };
    let size = sheet.label_box();
    let cell_px = scaler.size(cell);

    let placed = sheet
        .views()
        .enumerate()
        .map(|(index, view)| {
            let origin = scaler.point(slot_origin(&options.page, cell, index / eff_cols, index % eff_cols));
            let center = dvec2(origin.x.0 + cell_px.w.0 / 2.0, origin.y.0 + cell_px.h.0 / 2.0);

            let style = &view.surface.style;
            let block = layout_text(view.text, style, size.w - view.padding.horizontal());
            let (x, _) = anchor_for(options.alignment, size, &view);
            let top = -size.h.0 / 2.0 + view.padding.top.0;
            let lines = block
                .lines
                .into_iter()
                .enumerate()
                .map(|(i, line)| {
                    let y = top + block.line_height.0 * (i as f64 + 0.5);
                    (line, dvec2(x, y))
                })
                .collect();

            PlacedLabel { view, center, size, rotation, lines }
        })
        .collect();

    Ok(placed)
}
