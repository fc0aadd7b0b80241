//! FILENAME: core/parser/src/lib.rs
//! PURPOSE: Library root for the tabula cell-text parser.
//! CONTEXT: This crate is purely syntactic. It turns the raw text of one cell
//! into a `CellExpr` whose references still carry their column and row
//! *labels*. Mapping labels to grid positions happens in the engine crate,
//! which owns the schema.
//!
//! PIPELINE: Cell Text --> Parser --> CellExpr --> (engine) Formula --> Evaluator
//!
//! SUPPORTED FEATURES:
//! - Literals: 42, 3.5
//! - Formulas with exactly one operator: =A1+5, =B2*C3, =10/A1
//! - Operators: + - * /
//! - Cell references: a non-digit column label followed by a digit row label

pub mod ast;
pub mod parser;

#[cfg(test)]
mod tests;

pub use ast::{CellExpr, Operator, Term};
pub use parser::{
    parse, parse_number, parse_row_label, parse_term, split_reference, ParseError, ParseResult,
    FORMULA_MARKER,
};
