//! FILENAME: core/engine/src/grid.rs
//! PURPOSE: Dense rectangular storage for the cells of a sheet.
//! CONTEXT: Every position holds a cell; the shape is fixed once the last
//! row has been pushed. Cells are stored row-major in a single Vec and
//! addressed through `CellCoord`.

use crate::cell::Cell;
use crate::coord::CellCoord;
use crate::error::{SheetError, SheetResult};

#[derive(Debug, Clone)]
pub struct Grid {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Creates an empty grid whose rows will each hold `cols` cells.
    pub fn new(cols: usize) -> Self {
        Grid {
            cells: Vec::new(),
            rows: 0,
            cols,
        }
    }

    /// Appends a row. A row whose width differs from `cols()` is rejected
    /// and the grid is left unchanged.
    pub fn push_row(&mut self, row: Vec<Cell>) -> SheetResult<()> {
        if row.len() != self.cols {
            return Err(SheetError::RowWidth {
                expected: self.cols,
                found: row.len(),
            });
        }
        self.cells.extend(row);
        self.rows += 1;
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether `coord` addresses a cell of this grid.
    pub fn contains(&self, coord: CellCoord) -> bool {
        coord.row() < self.rows && coord.col() < self.cols
    }

    pub fn cell(&self, coord: CellCoord) -> Option<&Cell> {
        self.offset(coord).map(|offset| &self.cells[offset])
    }

    /// The resolved value at `coord`, or None while it is still pending.
    pub fn value(&self, coord: CellCoord) -> Option<f64> {
        self.cell(coord).and_then(Cell::value)
    }

    /// Replaces a pending cell with its computed value. Returns false, leaving
    /// the grid untouched, if the cell is outside the grid or already resolved.
    pub fn set_value(&mut self, coord: CellCoord, value: f64) -> bool {
        match self.offset(coord) {
            Some(offset) if !self.cells[offset].is_resolved() => {
                self.cells[offset] = Cell::Value(value);
                true
            }
            _ => false,
        }
    }

    /// Number of cells that are still pending.
    pub fn pending_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_resolved()).count()
    }

    fn offset(&self, coord: CellCoord) -> Option<usize> {
        self.contains(coord)
            .then(|| coord.row() * self.cols + coord.col())
    }
}
