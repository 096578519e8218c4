//! Label content: the authoritative text grid plus a flattened, row-major list.

use std::fmt;
use std::str::FromStr;

use crate::errors::ConfigError;

/// Stable identity of a label, `label-{row}-{col}` in text form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId {
    pub row: usize,
    pub col: usize,
}

impl CellId {
    pub fn new(row: usize, col: usize) -> Self {
        CellId { row, col }
    }

    /// Placeholder text for a freshly created cell in a grid `cols` wide.
    pub fn placeholder(&self, cols: usize) -> String {
        format!("Label {}", self.row * cols + self.col + 1)
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "label-{}-{}", self.row, self.col)
    }
}

impl FromStr for CellId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidCellId { value: s.to_string() };
        let rest = s.strip_prefix("label-").ok_or_else(invalid)?;
        let (row, col) = rest.split_once('-').ok_or_else(invalid)?;
        Ok(CellId {
            row: row.parse().map_err(|_| invalid())?,
            col: col.parse().map_err(|_| invalid())?,
        })
    }
}

/// One label in the flattened list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelCell {
    pub id: CellId,
    pub text: String,
}

/// Grid of label texts with a row-major flattened view.
///
/// The grid always has the dimensions of the last applied layout and the
/// flattened list always mirrors it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelStore {
    rows: usize,
    cols: usize,
    grid: Vec<Vec<String>>,
    cells: Vec<LabelCell>,
}

impl LabelStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store already laid out as `rows` × `cols` placeholders.
    pub fn with_layout(rows: usize, cols: usize) -> Self {
        let mut store = Self::new();
        store.apply_layout(rows, cols);
        store
    }

    /// Resize to `rows` × `cols`, keeping text of cells that already existed.
    pub fn apply_layout(&mut self, rows: usize, cols: usize) {
        let mut grid = Vec::with_capacity(rows);
        for row in 0..rows {
            let mut line = Vec::with_capacity(cols);
            for col in 0..cols {
                let text = match self.grid.get_mut(row).and_then(|r| r.get_mut(col)) {
                    Some(existing) => std::mem::take(existing),
                    None => CellId::new(row, col).placeholder(cols),
                };
                line.push(text);
            }
            grid.push(line);
        }

        crate::log::debug!(
            from_rows = self.rows,
            from_cols = self.cols,
            rows,
            cols,
            "applied layout"
        );

        self.rows = rows;
        self.cols = cols;
        self.grid = grid;
        self.rebuild_cells();
    }

    fn rebuild_cells(&mut self) {
        self.cells = self
            .grid
            .iter()
            .enumerate()
            .flat_map(|(row, line)| {
                line.iter().enumerate().map(move |(col, text)| LabelCell {
                    id: CellId::new(row, col),
                    text: text.clone(),
                })
            })
            .collect();
    }

    /// Replace the text of the cell named by `identity`.
    ///
    /// Malformed or out-of-range identities are ignored; returns the updated
    /// cell's id otherwise.
    pub fn update_cell(&mut self, identity: &str, text: impl Into<String>) -> Option<CellId> {
        let id = identity.parse::<CellId>().ok()?;
        self.set(id, text).then_some(id)
    }

    /// Replace the text at `id`; false when `id` is outside the grid.
    pub fn set(&mut self, id: CellId, text: impl Into<String>) -> bool {
        let Some(slot) = self.grid.get_mut(id.row).and_then(|r| r.get_mut(id.col)) else {
            return false;
        };
        let text = text.into();
        self.cells[id.row * self.cols + id.col].text = text.clone();
        *slot = text;
        true
    }

    /// Give every cell the same text.
    pub fn apply_bulk_text(&mut self, text: &str) {
        for line in &mut self.grid {
            for cell in line.iter_mut() {
                text.clone_into(cell);
            }
        }
        for cell in &mut self.cells {
            text.clone_into(&mut cell.text);
        }
    }

    pub fn text(&self, row: usize, col: usize) -> Option<&str> {
        self.grid.get(row)?.get(col).map(String::as_str)
    }

    /// Flattened cells in row-major order
    pub fn cells(&self) -> &[LabelCell] {
        &self.cells
    }

    /// Position of `id` in [`cells`](Self::cells)
    pub fn index_of(&self, id: CellId) -> Option<usize> {
        (id.row < self.rows && id.col < self.cols).then(|| id.row * self.cols + id.col)
    }

    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== CellId tests ====================

    #[test]
    fn cell_id_round_trips_through_text() {
        for row in 0..6 {
            for col in 0..6 {
                let id = CellId::new(row, col);
                assert_eq!(id.to_string().parse::<CellId>(), Ok(id));
            }
        }
    }

    #[test]
    fn cell_id_rejects_garbage() {
        for bad in ["", "label", "label-1", "label-a-b", "cell-1-2", "label--1-2", "label-1-2-3"] {
            assert!(bad.parse::<CellId>().is_err(), "{bad:?} parsed");
        }
    }

    // ==================== LabelStore tests ====================

    #[test]
    fn new_layout_is_all_placeholders() {
        let store = LabelStore::with_layout(2, 3);
        let texts: Vec<_> = store.cells().iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, ["Label 1", "Label 2", "Label 3", "Label 4", "Label 5", "Label 6"]);
    }

    #[test]
    fn resize_keeps_existing_and_numbers_new_cells_with_new_cols() {
        let mut store = LabelStore::with_layout(2, 2);
        store.update_cell("label-0-0", "X");
        store.update_cell("label-1-1", "");
        store.apply_layout(3, 3);

        assert_eq!(store.text(0, 0), Some("X"));
        assert_eq!(store.text(1, 1), Some(""));
        assert_eq!(store.text(0, 1), Some("Label 2"));
        // (0,2) is new: 0*3 + 2 + 1
        assert_eq!(store.text(0, 2), Some("Label 3"));
        assert_eq!(store.text(2, 0), Some("Label 7"));
    }

    #[test]
    fn shrinking_drops_cells_outside_the_grid() {
        let mut store = LabelStore::with_layout(3, 3);
        store.apply_layout(1, 2);
        assert_eq!(store.dims(), (1, 2));
        assert_eq!(store.len(), 2);
        assert_eq!(store.text(1, 0), None);
    }

    #[test]
    fn update_writes_grid_and_list() {
        let mut store = LabelStore::with_layout(2, 2);
        assert_eq!(store.update_cell("label-1-0", "hi\nthere"), Some(CellId::new(1, 0)));
        assert_eq!(store.text(1, 0), Some("hi\nthere"));
        assert_eq!(store.cells()[2].text, "hi\nthere");
    }

    #[test]
    fn bad_updates_are_ignored() {
        let mut store = LabelStore::with_layout(2, 2);
        let before = store.clone();
        assert_eq!(store.update_cell("label-5-0", "x"), None);
        assert_eq!(store.update_cell("label-0-2", "x"), None);
        assert_eq!(store.update_cell("nonsense", "x"), None);
        assert_eq!(store, before);
    }

    #[test]
    fn bulk_apply_is_idempotent() {
        let mut once = LabelStore::with_layout(3, 2);
        once.apply_bulk_text("Y");
        let mut twice = once.clone();
        twice.apply_bulk_text("Y");
        assert_eq!(once, twice);
        assert!(once.cells().iter().all(|c| c.text == "Y"));
        assert_eq!(once.dims(), (3, 2));
    }

    #[test]
    fn flattened_ids_are_row_major() {
        let store = LabelStore::with_layout(2, 2);
        let ids: Vec<String> = store.cells().iter().map(|c| c.id.to_string()).collect();
        insta::assert_snapshot!(ids.join(" "), @"label-0-0 label-0-1 label-1-0 label-1-1");
    }
}
