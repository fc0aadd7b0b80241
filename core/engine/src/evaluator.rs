//! FILENAME: core/engine/src/evaluator.rs
//! PURPOSE: Resolves pending cells to numbers, memoizing results in the grid.
//! CONTEXT: Resolution is a depth-first walk over the reference graph. The
//! walk is driven by an explicit stack of cells (the current resolution
//! chain) instead of native recursion, so a long chain of references cannot
//! exhaust the call stack. A same-shaped `in_progress` marker per cell plays
//! the role of the "gray" DFS color: meeting a marked cell again means the
//! chain has looped back on itself.
//!
//! ORDER OF WORK for the cell on top of the stack:
//! 1. Left operand: literal, resolved cell, or push the referenced cell.
//! 2. Right operand: same, only once the left side has a value.
//! 3. Apply the operator, store the value, clear the marker, pop.
//!
//! Because the left chain is finished before the right operand is looked
//! at, errors surface in the same order a recursive evaluator would report
//! them.

use crate::coord::CellCoord;
use crate::cell::Cell;
use crate::error::{SheetError, SheetResult};
use crate::formula::{apply, Formula, Operand};
use crate::grid::Grid;
use crate::schema::Schema;

/// Outcome of looking at one operand.
enum Step {
    Ready(f64),
    Descend(CellCoord),
}

pub struct Evaluator<'a> {
    grid: &'a mut Grid,
    schema: &'a Schema,
    in_progress: Vec<bool>,
    /// Number of formulas actually computed (memoized hits are not counted).
    computed: usize,
}

impl<'a> Evaluator<'a> {
    /// Fails with `ShapeMismatch` unless the grid has one row per registered
    /// row label and one column per registered column label.
    pub fn new(grid: &'a mut Grid, schema: &'a Schema) -> SheetResult<Self> {
        if grid.rows() != schema.row_count() || grid.cols() != schema.column_count() {
            return Err(SheetError::ShapeMismatch {
                schema_rows: schema.row_count(),
                schema_cols: schema.column_count(),
                grid_rows: grid.rows(),
                grid_cols: grid.cols(),
            });
        }
        let in_progress = vec![false; grid.rows() * grid.cols()];
        Ok(Evaluator {
            grid,
            schema,
            in_progress,
            computed: 0,
        })
    }

    pub fn computed(&self) -> usize {
        self.computed
    }

    /// Resolves every cell in row-major order and returns the values row by
    /// row. The first failure in that order aborts the pass.
    pub fn resolve_all(&mut self) -> SheetResult<Vec<Vec<f64>>> {
        let (rows, cols) = (self.grid.rows(), self.grid.cols());
        let mut values = Vec::with_capacity(rows);

        for row in 0..rows {
            let mut line = Vec::with_capacity(cols);
            for col in 0..cols {
                line.push(self.resolve(CellCoord::new(row, col))?);
            }
            values.push(line);
        }

        log::debug!(
            target: "EVAL",
            "resolved {} cells, {} formulas computed",
            rows * cols,
            self.computed
        );
        Ok(values)
    }

    /// Resolves one cell, computing any pending cells it depends on.
    pub fn resolve(&mut self, coord: CellCoord) -> SheetResult<f64> {
        if !self.grid.contains(coord) {
            return Err(SheetError::OutOfRange {
                row: coord.row(),
                col: coord.col(),
            });
        }
        if let Some(value) = self.grid.value(coord) {
            return Ok(value);
        }

        let mut chain = vec![coord];
        self.mark(coord, true);

        let result = self.drive(&mut chain);
        if result.is_err() {
            for pending in chain {
                self.mark(pending, false);
            }
        }
        result
    }

    fn drive(&mut self, chain: &mut Vec<CellCoord>) -> SheetResult<f64> {
        let mut last = 0.0;

        while let Some(&current) = chain.last() {
            let Some(&cell) = self.grid.cell(current) else {
                return Err(SheetError::OutOfRange {
                    row: current.row(),
                    col: current.col(),
                });
            };
            let (left, op, right) = match cell {
                Cell::Value(v) => {
                    self.finish(chain, current);
                    last = v;
                    continue;
                }
                Cell::Pending(Formula::Literal(v)) => {
                    self.store(chain, current, v);
                    last = v;
                    continue;
                }
                Cell::Pending(Formula::Binary { left, op, right }) => (left, op, right),
            };

            let lhs = match self.step(current, left, chain)? {
                Step::Ready(v) => v,
                Step::Descend(next) => {
                    self.enter(chain, next);
                    continue;
                }
            };
            let rhs = match self.step(current, right, chain)? {
                Step::Ready(v) => v,
                Step::Descend(next) => {
                    self.enter(chain, next);
                    continue;
                }
            };

            let value = apply(op, lhs, rhs).map_err(|e| e.in_cell(self.schema.cell_name(current)))?;
            log::trace!(
                target: "EVAL",
                "{} = {} {} {} = {}",
                self.schema.cell_name(current),
                lhs,
                op,
                rhs,
                value
            );
            self.store(chain, current, value);
            last = value;
        }

        Ok(last)
    }

    /// Looks at one operand of `current`.
    fn step(&self, current: CellCoord, operand: Operand, chain: &[CellCoord]) -> SheetResult<Step> {
        let reference = match operand {
            Operand::Number(v) => return Ok(Step::Ready(v)),
            Operand::Ref(reference) => reference,
        };

        let target = reference
            .resolve(self.schema)
            .map_err(|e| e.in_cell(self.schema.cell_name(current)))?;

        if let Some(v) = self.grid.value(target) {
            return Ok(Step::Ready(v));
        }
        if self.is_marked(target) {
            return Err(self.cycle_error(chain, target));
        }
        Ok(Step::Descend(target))
    }

    fn enter(&mut self, chain: &mut Vec<CellCoord>, next: CellCoord) {
        self.mark(next, true);
        chain.push(next);
    }

    fn store(&mut self, chain: &mut Vec<CellCoord>, coord: CellCoord, value: f64) {
        if self.grid.set_value(coord, value) {
            self.computed += 1;
        }
        self.finish(chain, coord);
    }

    fn finish(&mut self, chain: &mut Vec<CellCoord>, coord: CellCoord) {
        self.mark(coord, false);
        chain.pop();
    }

    /// Builds the error for a reference back into the current chain,
    /// naming every cell from the first visit of `target` to the repeat.
    fn cycle_error(&self, chain: &[CellCoord], target: CellCoord) -> SheetError {
        let start = chain.iter().position(|&c| c == target).unwrap_or(0);
        let path = chain[start..]
            .iter()
            .chain(std::iter::once(&target))
            .map(|&c| self.schema.cell_name(c))
            .collect();
        SheetError::CircularReference { path }
    }

    fn mark(&mut self, coord: CellCoord, value: bool) {
        let offset = coord.row() * self.grid.cols() + coord.col();
        if let Some(slot) = self.in_progress.get_mut(offset) {
            *slot = value;
        }
    }

    fn is_marked(&self, coord: CellCoord) -> bool {
        let offset = coord.row() * self.grid.cols() + coord.col();
        self.in_progress.get(offset).copied().unwrap_or(false)
    }
}
