//! FILENAME: core/engine/src/formula.rs
//! PURPOSE: Schema-aware formula representation and arithmetic.
//! CONTEXT: The parser crate produces label-based `CellExpr`/`Term` values.
//! This module resolves their column labels against the `Schema` and yields
//! the `Formula` stored in the grid. It also owns the operator semantics,
//! including the near-zero divisor check.

use parser::{CellExpr, Term};

use crate::coord::{resolve_reference, CellRef};
use crate::error::{SheetError, SheetResult};
use crate::schema::Schema;

pub use parser::Operator;

/// Divisors whose magnitude is below this value count as zero.
pub const DIVISION_EPSILON: f64 = 1e-15;

/// One side of a binary formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    Number(f64),
    Ref(CellRef),
}

/// The parsed, schema-resolved content of a cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Formula {
    Literal(f64),
    Binary {
        left: Operand,
        op: Operator,
        right: Operand,
    },
}

/// Parses raw cell text into a `Formula`.
/// Column labels are checked here; row labels are checked on evaluation.
pub fn parse_formula(text: &str, schema: &Schema) -> SheetResult<Formula> {
    match parser::parse(text)? {
        CellExpr::Number(n) => Ok(Formula::Literal(n)),
        CellExpr::Binary { left, op, right } => Ok(Formula::Binary {
            left: resolve_term(left, schema)?,
            op,
            right: resolve_term(right, schema)?,
        }),
    }
}

/// Turns a single operand token such as "A3" or "2.5" into an `Operand`.
pub fn resolve_cell_token(token: &str, schema: &Schema) -> SheetResult<Operand> {
    resolve_term(parser::parse_term(token)?, schema)
}

fn resolve_term(term: Term, schema: &Schema) -> SheetResult<Operand> {
    match term {
        Term::Number(n) => Ok(Operand::Number(n)),
        Term::Reference { column, row } => {
            resolve_reference(&column, row, schema).map(Operand::Ref)
        }
    }
}

/// Applies `op` to two resolved operand values.
pub fn apply(op: Operator, lhs: f64, rhs: f64) -> SheetResult<f64> {
    match op {
        Operator::Add => Ok(lhs + rhs),
        Operator::Subtract => Ok(lhs - rhs),
        Operator::Multiply => Ok(lhs * rhs),
        Operator::Divide => {
            if rhs.abs() < DIVISION_EPSILON {
                Err(SheetError::DivisionByZero)
            } else {
                Ok(lhs / rhs)
            }
        }
    }
}
