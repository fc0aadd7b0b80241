//! FILENAME: core/engine/src/cell.rs
//! PURPOSE: Defines the state of a single grid cell.
//! CONTEXT: A cell starts out holding its parsed formula and is replaced by
//! the computed number once evaluated. The transition is one-way; there is
//! no way back from `Value` to `Pending`.

use crate::formula::Formula;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell {
    /// Parsed but not yet evaluated.
    Pending(Formula),
    /// Final numeric value.
    Value(f64),
}

impl Cell {
    /// Returns the number if the cell is already resolved.
    pub fn value(&self) -> Option<f64> {
        match self {
            Cell::Value(v) => Some(*v),
            Cell::Pending(_) => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Cell::Value(_))
    }
}

impl From<Formula> for Cell {
    /// Literal formulas need no evaluation and are stored resolved.
    fn from(formula: Formula) -> Self {
        match formula {
            Formula::Literal(v) => Cell::Value(v),
            other => Cell::Pending(other),
        }
    }
}
