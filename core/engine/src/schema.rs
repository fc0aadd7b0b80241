//! FILENAME: core/engine/src/schema.rs
//! PURPOSE: Label registry mapping column and row labels to grid indices.
//! CONTEXT: Columns are declared by the header line, rows by the first field
//! of each data row. Both are assigned sequential 0-based indices in
//! declaration order. A label may only be declared once.

use rustc_hash::FxHashMap;

use crate::coord::CellCoord;
use crate::error::{SheetError, SheetResult};

#[derive(Debug, Clone, Default)]
pub struct Schema {
    columns: Vec<String>,
    column_map: FxHashMap<String, usize>,
    rows: Vec<u32>,
    row_map: FxHashMap<u32, usize>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns the next column index to `label`.
    pub fn register_column(&mut self, label: &str) -> SheetResult<usize> {
        if self.column_map.contains_key(label) {
            return Err(SheetError::DuplicateColumn(label.to_string()));
        }
        let index = self.columns.len();
        self.columns.push(label.to_string());
        self.column_map.insert(label.to_string(), index);
        log::trace!(target: "SCHEMA", "column {:?} -> {}", label, index);
        Ok(index)
    }

    /// Assigns the next row index to `label`.
    pub fn register_row(&mut self, label: u32) -> SheetResult<usize> {
        if self.row_map.contains_key(&label) {
            return Err(SheetError::DuplicateRow(label));
        }
        let index = self.rows.len();
        self.rows.push(label);
        self.row_map.insert(label, index);
        log::trace!(target: "SCHEMA", "row {} -> {}", label, index);
        Ok(index)
    }

    pub fn column_index(&self, label: &str) -> SheetResult<usize> {
        self.column_map
            .get(label)
            .copied()
            .ok_or_else(|| SheetError::UnknownColumn(label.to_string()))
    }

    pub fn row_index(&self, label: u32) -> SheetResult<usize> {
        self.row_map
            .get(&label)
            .copied()
            .ok_or(SheetError::UnknownRow(label))
    }

    /// Resolves a column label / row label pair in one step.
    pub fn coord(&self, column: &str, row_label: u32) -> SheetResult<CellCoord> {
        Ok(CellCoord::new(
            self.row_index(row_label)?,
            self.column_index(column)?,
        ))
    }

    /// Display name of a cell, e.g. "B2".
    pub fn cell_name(&self, coord: CellCoord) -> String {
        match (self.columns.get(coord.col()), self.rows.get(coord.row())) {
            (Some(column), Some(row)) => format!("{}{}", column, row),
            _ => format!("({}, {})", coord.row(), coord.col()),
        }
    }

    pub fn column_labels(&self) -> &[String] {
        &self.columns
    }

    pub fn row_labels(&self) -> &[u32] {
        &self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
