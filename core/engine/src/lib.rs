//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the sheet evaluation engine.
//! CONTEXT: Re-exports public types and modules for use by other crates.

pub mod cell;
pub mod coord;
pub mod error;
pub mod evaluator;
pub mod formula;
pub mod grid;
pub mod number_format;
pub mod schema;
pub mod sheet;

// Re-export commonly used types at the crate root
pub use cell::Cell;
pub use coord::{CellCoord, CellRef};
pub use error::{ErrorKind, SheetError, SheetResult};
pub use evaluator::Evaluator;
pub use formula::{apply, parse_formula, resolve_cell_token, Formula, Operand, Operator, DIVISION_EPSILON};
pub use grid::Grid;
pub use number_format::format_number;
pub use schema::Schema;
pub use sheet::{ResolvedRow, ResolvedSheet, Sheet};
