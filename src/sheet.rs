//! The label sheet: configuration, content, and one text surface per label.
//!
//! Every user action goes through here so the derived values are refreshed in
//! order: store → geometry → font fit → commit to the surface → centering.

use crate::center::center_text;
use crate::config::{BorderStyle, SheetOptions, TextAlignment};
use crate::errors::RenderError;
use crate::fit::choose_font_size;
use crate::geometry::{GridConfig, Orientation, compute_cell_size};
use crate::measure::{Document, MeasureHost};
use crate::store::{CellId, LabelStore};
use crate::surface::{Container, Padding, TextSurface};
use crate::types::{Pt, Scaler, SizeIn, SizePx};

/// Read-only view of one label after layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelView<'a> {
    pub id: CellId,
    pub text: &'a str,
    pub font_size: Pt,
    pub padding: Padding,
    pub surface: &'a TextSurface,
}

/// A 4×6 sheet of labels.
#[derive(Debug)]
pub struct LabelSheet<H: MeasureHost = Document> {
    options: SheetOptions,
    store: LabelStore,
    /// Parallel to `store.cells()`
    surfaces: Vec<TextSurface>,
    host: H,
    bulk_draft: String,
    scaler: Scaler,
}

impl LabelSheet<Document> {
    /// Build a sheet measured by the built-in headless [`Document`].
    pub fn new(options: SheetOptions) -> Self {
        Self::with_host(options, Document::new())
    }
}

impl Default for LabelSheet<Document> {
    fn default() -> Self {
        Self::new(SheetOptions::default())
    }
}

impl<H: MeasureHost> LabelSheet<H> {
    /// Build a sheet on a caller-supplied measurement host and lay it out.
    pub fn with_host(options: SheetOptions, host: H) -> Self {
        let mut sheet = LabelSheet {
            options,
            store: LabelStore::new(),
            surfaces: Vec::new(),
            host,
            bulk_draft: String::new(),
            scaler: Scaler::default(),
        };
        let grid = sheet.options.grid;
        sheet.apply_layout(grid.rows(), grid.cols());
        sheet
    }

    pub fn options(&self) -> &SheetOptions {
        &self.options
    }

    pub fn grid(&self) -> GridConfig {
        self.options.grid
    }

    pub fn store(&self) -> &LabelStore {
        &self.store
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn scaler(&self) -> Scaler {
        self.scaler
    }

    /// Physical size of every label, in inches.
    pub fn cell_size(&self) -> SizeIn {
        let grid = self.options.grid;
        compute_cell_size(&self.options.page, grid.rows(), grid.cols(), grid.orientation)
    }

    /// Size of a label's own box in pixels, before any rotation.
    ///
    /// Landscape labels are drawn rotated, so their box is the cell transposed.
    pub fn label_box(&self) -> SizePx {
        let size = self.scaler.size(self.cell_size());
        if self.options.grid.orientation.is_landscape() {
            size.transposed()
        } else {
            size
        }
    }

    /// Font size the sheet would give `text` at the current geometry.
    pub fn font_size_for(&self, text: &str) -> Pt {
        let size = self.cell_size();
        choose_font_size(text, size.w, size.h, self.options.grid.orientation)
    }

    /// Resize the grid (clamped to 1-6 per axis) and lay every label out again.
    pub fn apply_layout(&mut self, rows: usize, cols: usize) {
        self.options.grid = GridConfig::new(rows, cols, self.options.grid.orientation);
        let grid = self.options.grid;
        self.store.apply_layout(grid.rows(), grid.cols());

        let family = self.options.font_family.clone();
        let weight = self.options.font_weight;
        self.surfaces
            .resize_with(self.store.len(), || TextSurface::new(&family, weight));

        crate::log::info!(rows = grid.rows(), cols = grid.cols(), "layout applied");
        self.relayout_all();
    }

    /// Switch orientation; takes effect immediately.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        if self.options.grid.orientation == orientation {
            return;
        }
        self.options.grid.orientation = orientation;
        self.relayout_all();
    }

    pub fn set_alignment(&mut self, alignment: TextAlignment) {
        self.options.alignment = alignment;
    }

    pub fn set_border(&mut self, border: BorderStyle) {
        self.options.border = border;
    }

    /// Edit one label. Unknown identities are ignored.
    pub fn update_cell(&mut self, identity: &str, text: impl Into<String>) -> Option<CellId> {
        let id = self.store.update_cell(identity, text)?;
        let index = self.store.index_of(id)?;
        self.refresh_cell(index);
        Some(id)
    }

    /// Give every label the same text.
    pub fn apply_bulk_text(&mut self, text: &str) {
        self.store.apply_bulk_text(text);
        self.relayout_all();
    }

    /// Pending bulk-edit text
    pub fn bulk_draft(&self) -> &str {
        &self.bulk_draft
    }

    pub fn set_bulk_draft(&mut self, text: impl Into<String>) {
        self.bulk_draft = text.into();
    }

    /// Apply the bulk-edit draft to every label, then clear the draft.
    pub fn apply_bulk_edit(&mut self) {
        let draft = std::mem::take(&mut self.bulk_draft);
        self.apply_bulk_text(&draft);
    }

    fn relayout_all(&mut self) {
        for index in 0..self.store.len() {
            self.refresh_cell(index);
        }
    }

    /// Fit, commit, then center one label.
    fn refresh_cell(&mut self, index: usize) {
        let cell_size = self.cell_size();
        let container = Container::from(self.label_box());
        let orientation = self.options.grid.orientation;

        let cell = &self.store.cells()[index];
        let font_size = choose_font_size(&cell.text, cell_size.w, cell_size.h, orientation);
        let surface = &mut self.surfaces[index];
        surface.commit(&cell.text, font_size);

        match center_text(&mut self.host, surface, &container) {
            Ok(_padding) => {
                crate::log::debug!(
                    cell = %cell.id,
                    font_pt = font_size.0,
                    top = _padding.top.0,
                    "label refreshed"
                );
            }
            Err(_err) => {
                crate::log::warn!(cell = %cell.id, error = %_err, "centering skipped");
            }
        }
    }

    /// Every label in row-major order.
    pub fn views(&self) -> impl Iterator<Item = LabelView<'_>> {
        self.store
            .cells()
            .iter()
            .zip(&self.surfaces)
            .map(|(cell, surface)| LabelView {
                id: cell.id,
                text: &cell.text,
                font_size: surface.size,
                padding: surface.padding,
                surface,
            })
    }

    pub fn view(&self, id: CellId) -> Option<LabelView<'_>> {
        let index = self.store.index_of(id)?;
        self.views().nth(index)
    }

    /// Human-readable label size, e.g. `Label size: 1.82" x 0.90" (6x2)`.
    pub fn size_info(&self) -> String {
        let size = self.cell_size();
        let grid = self.options.grid;
        let (a, b) = match grid.orientation {
            Orientation::Portrait => (grid.rows(), grid.cols()),
            Orientation::Landscape => (grid.cols(), grid.rows()),
        };
        format!("Label size: {:.2}\" x {:.2}\" ({a}x{b})", size.w.0, size.h.0)
    }

    /// Print trigger: render the sheet as a single 4×6 SVG page.
    pub fn print(&self) -> Result<String, RenderError> {
        crate::render::svg::render_svg(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sheet_is_six_by_two_placeholders() {
        let sheet = LabelSheet::default();
        assert_eq!(sheet.store().len(), 12);
        assert_eq!(sheet.views().next().map(|v| v.text), Some("Label 1"));
        assert_eq!(sheet.views().last().map(|v| v.text), Some("Label 12"));
    }

    #[test]
    fn every_label_gets_fitted_and_centered() {
        let sheet = LabelSheet::default();
        let container = sheet.label_box();
        for view in sheet.views() {
            assert_eq!(view.font_size, sheet.font_size_for(view.text));
            assert!(view.padding.top.0 >= 8.0);
            assert!(view.padding.bottom.0 >= 8.0);
            assert!(view.padding.top.0 <= container.h.0 / 2.0);
        }
        assert_eq!(sheet.host().attached_len(), 0);
    }

    #[test]
    fn edit_refreshes_only_that_label() {
        let mut sheet = LabelSheet::default();
        let untouched = sheet.view(CellId::new(0, 1)).map(|v| v.surface.clone());

        let id = sheet.update_cell("label-0-0", "a much longer line of label text");
        assert_eq!(id, Some(CellId::new(0, 0)));

        let edited = sheet.view(CellId::new(0, 0)).unwrap();
        assert_eq!(edited.font_size, sheet.font_size_for("a much longer line of label text"));
        assert!(edited.font_size < sheet.font_size_for("Label 1"));
        assert_eq!(sheet.view(CellId::new(0, 1)).map(|v| v.surface.clone()), untouched);
    }

    #[test]
    fn unknown_identity_changes_nothing() {
        let mut sheet = LabelSheet::default();
        assert_eq!(sheet.update_cell("label-9-9", "x"), None);
        assert!(sheet.views().all(|v| v.text.starts_with("Label ")));
    }

    #[test]
    fn orientation_switch_refits_everything() {
        let mut sheet = LabelSheet::default();
        sheet.set_orientation(Orientation::Landscape);
        let size = sheet.cell_size();
        for view in sheet.views() {
            let expected = choose_font_size(view.text, size.w, size.h, Orientation::Landscape);
            assert_eq!(view.font_size, expected);
        }
        let b = sheet.label_box();
        // 6x2 landscape slots are tall and narrow; the label box is drawn wide, then rotated
        assert!(b.w.0 > b.h.0);
        assert_eq!(b.w, sheet.scaler().len(size.h));
    }

    #[test]
    fn bulk_edit_applies_draft_and_clears_it() {
        let mut sheet = LabelSheet::default();
        sheet.set_bulk_draft("FRAGILE\nThis side up");
        sheet.apply_bulk_edit();
        assert_eq!(sheet.bulk_draft(), "");
        assert!(sheet.views().all(|v| v.text == "FRAGILE\nThis side up"));
    }

    #[test]
    fn layout_is_clamped() {
        let mut sheet = LabelSheet::default();
        sheet.apply_layout(0, 40);
        assert_eq!((sheet.grid().rows(), sheet.grid().cols()), (1, 6));
        assert_eq!(sheet.views().count(), 6);
    }
}
