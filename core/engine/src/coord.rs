//! FILENAME: core/engine/src/coord.rs
//! PURPOSE: Cell addressing types and the reference resolver.
//! CONTEXT: A formula mentions cells by label (column label + row label).
//! The column label is resolved to an index while the formula is parsed;
//! the row label is kept as-is and only turned into a row index when the
//! evaluator follows the reference. `CellCoord` is the fully resolved form
//! and can only be produced through a `Schema`.

use crate::error::{SheetError, SheetResult};
use crate::schema::Schema;

/// A resolved grid position with 0-based indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellCoord {
    row: usize,
    col: usize,
}

impl CellCoord {
    pub(crate) fn new(row: usize, col: usize) -> Self {
        CellCoord { row, col }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }
}

/// A reference as stored inside a parsed formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRef {
    /// Column index, already resolved against the schema.
    col: usize,
    /// Row label exactly as written in the formula.
    row_label: u32,
}

impl CellRef {
    pub(crate) fn new(col: usize, row_label: u32) -> Self {
        CellRef { col, row_label }
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn row_label(&self) -> u32 {
        self.row_label
    }

    /// Resolves the row label. Fails with `UnknownRow` if no data row
    /// carries that label, or `OutOfRange` if the reference was built
    /// against a schema with more columns.
    pub fn resolve(&self, schema: &Schema) -> SheetResult<CellCoord> {
        let row = schema.row_index(self.row_label)?;
        if self.col >= schema.column_count() {
            return Err(SheetError::OutOfRange { row, col: self.col });
        }
        Ok(CellCoord::new(row, self.col))
    }
}

/// Builds a `CellRef` from the two halves of a reference token.
pub(crate) fn resolve_reference(column: &str, row_label: u32, schema: &Schema) -> SheetResult<CellRef> {
    let col = schema.column_index(column)?;
    Ok(CellRef::new(col, row_label))
}
