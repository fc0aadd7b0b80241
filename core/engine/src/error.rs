//! FILENAME: core/engine/src/error.rs

use parser::ParseError;
use serde::Serialize;
use thiserror::Error;

/// The closed set of failure categories a run can end with.
///
/// `Format`, `UnknownReference`, `CircularReference` and `DivisionByZero`
/// cover parsing and evaluation. `DuplicateLabel` extends the set for a
/// header or row label declared twice, which is rejected while the sheet is
/// built rather than being resolved by a first-wins rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    Format,
    UnknownReference,
    CircularReference,
    DivisionByZero,
    DuplicateLabel,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SheetError {
    #[error(transparent)]
    Format(#[from] ParseError),

    #[error("input has no header line")]
    MissingHeader,

    #[error("data row {index} is empty")]
    EmptyRow { index: usize },

    #[error("row label `{0}` is not a non-negative integer")]
    InvalidRowLabel(String),

    #[error("row {row} has {found} cells, expected {expected}")]
    FieldCount {
        row: String,
        expected: usize,
        found: usize,
    },

    #[error("grid row has {found} cells, expected {expected}")]
    RowWidth { expected: usize, found: usize },

    #[error("schema is {schema_rows}x{schema_cols} but grid is {grid_rows}x{grid_cols}")]
    ShapeMismatch {
        schema_rows: usize,
        schema_cols: usize,
        grid_rows: usize,
        grid_cols: usize,
    },

    #[error("cell ({row}, {col}) is outside the grid")]
    OutOfRange { row: usize, col: usize },

    #[error("unknown column `{0}`")]
    UnknownColumn(String),

    #[error("unknown row `{0}`")]
    UnknownRow(u32),

    #[error("circular reference: {}", path.join(" -> "))]
    CircularReference { path: Vec<String> },

    #[error("division by zero")]
    DivisionByZero,

    #[error("duplicate column `{0}`")]
    DuplicateColumn(String),

    #[error("duplicate row `{0}`")]
    DuplicateRow(u32),

    /// Displays as one line, so the inner error is not exposed as a source.
    #[error("{cell}: {error}")]
    InCell { cell: String, error: Box<SheetError> },
}

impl SheetError {
    /// Attaches the name of the cell being parsed or evaluated.
    pub fn in_cell(self, cell: impl Into<String>) -> Self {
        SheetError::InCell {
            cell: cell.into(),
            error: Box::new(self),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            SheetError::Format(_)
            | SheetError::MissingHeader
            | SheetError::EmptyRow { .. }
            | SheetError::InvalidRowLabel(_)
            | SheetError::FieldCount { .. }
            | SheetError::RowWidth { .. }
            | SheetError::ShapeMismatch { .. } => ErrorKind::Format,
            SheetError::UnknownColumn(_)
            | SheetError::UnknownRow(_)
            | SheetError::OutOfRange { .. } => ErrorKind::UnknownReference,
            SheetError::CircularReference { .. } => ErrorKind::CircularReference,
            SheetError::DivisionByZero => ErrorKind::DivisionByZero,
            SheetError::DuplicateColumn(_) | SheetError::DuplicateRow(_) => {
                ErrorKind::DuplicateLabel
            }
            SheetError::InCell { error, .. } => error.kind(),
        }
    }

    /// The name of the cell the error was reported for, if any.
    pub fn cell(&self) -> Option<&str> {
        match self {
            SheetError::InCell { cell, .. } => Some(cell),
            _ => None,
        }
    }
}

pub type SheetResult<T> = Result<T, SheetError>;
