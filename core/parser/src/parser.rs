//! FILENAME: core/parser/src/parser.rs
//! PURPOSE: Converts the raw text of a cell into a `CellExpr`.
//! CONTEXT: Cell text is already stripped of whitespace by the caller.
//! There is no precedence and no grouping: a formula holds exactly one
//! operator, so parsing is a split followed by two term parses.
//!
//! GRAMMAR:
//!   cell_text   --> literal | formula
//!   literal     --> DIGIT+ ( "." DIGIT+ )?
//!   formula     --> "=" operand operator operand
//!   operand     --> literal | cell_ref
//!   cell_ref    --> column_label DIGIT+        // column_label = non-digit run
//!   operator    --> "+" | "-" | "*" | "/"

use crate::ast::{CellExpr, Operator, Term};
use thiserror::Error;

/// Leading character that marks a cell as a formula.
pub const FORMULA_MARKER: char = '=';

/// Syntax errors for a single cell.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ParseError {
    #[error("empty cell")]
    Empty,

    #[error("no operator in formula `{0}`")]
    NoOperator(String),

    #[error("more than one operator in formula `{0}`")]
    MultipleOperators(String),

    #[error("formula is missing an operand")]
    EmptyOperand,

    #[error("no row in cell reference `{0}`")]
    NoRow(String),

    #[error("invalid row in cell reference `{0}`")]
    InvalidRow(String),

    #[error("row label `{0}` is not a non-negative integer")]
    InvalidRowLabel(String),

    #[error("incorrect number `{0}`")]
    InvalidNumber(String),
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses one cell's text.
///
/// Text without the leading `=` must be a literal. A formula is split at the
/// first operator character found when scanning for `+`, `-`, `*`, `/` in that
/// order; any further operator character anywhere in the formula is rejected.
pub fn parse(text: &str) -> ParseResult<CellExpr> {
    if text.is_empty() {
        return Err(ParseError::Empty);
    }

    let Some(body) = text.strip_prefix(FORMULA_MARKER) else {
        return parse_number(text).map(CellExpr::Number);
    };

    let Some((position, op)) = Operator::SCAN_ORDER
        .into_iter()
        .find_map(|op| body.find(op.symbol()).map(|pos| (pos, op)))
    else {
        return Err(ParseError::NoOperator(text.to_string()));
    };

    let (left, rest) = body.split_at(position);
    let right = &rest[op.symbol().len_utf8()..];

    if left
        .chars()
        .chain(right.chars())
        .any(|ch| Operator::from_symbol(ch).is_some())
    {
        return Err(ParseError::MultipleOperators(text.to_string()));
    }

    Ok(CellExpr::Binary {
        left: parse_term(left)?,
        op,
        right: parse_term(right)?,
    })
}

/// Parses one side of a formula: either a literal or a cell reference.
pub fn parse_term(token: &str) -> ParseResult<Term> {
    if token.is_empty() {
        return Err(ParseError::EmptyOperand);
    }

    let (column, row) = split_reference(token);
    if column.is_empty() {
        return parse_number(token).map(Term::Number);
    }
    if row.is_empty() {
        return Err(ParseError::NoRow(token.to_string()));
    }

    let row = parse_row_label(row).map_err(|_| ParseError::InvalidRow(token.to_string()))?;
    Ok(Term::Reference {
        column: column.to_string(),
        row,
    })
}

/// Splits a reference token at its first ASCII digit.
/// "A3" -> ("A", "3"), "Price12" -> ("Price", "12"), "12" -> ("", "12")
pub fn split_reference(token: &str) -> (&str, &str) {
    let split = token
        .find(|ch: char| ch.is_ascii_digit())
        .unwrap_or(token.len());
    token.split_at(split)
}

/// Parses a literal number: digits with an optional fractional part.
/// Signs, exponents and a bare "." are rejected.
pub fn parse_number(text: &str) -> ParseResult<f64> {
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text, None),
    };

    if !is_digits(whole) || !fraction.is_none_or(is_digits) {
        return Err(ParseError::InvalidNumber(text.to_string()));
    }

    text.parse::<f64>()
        .map_err(|_| ParseError::InvalidNumber(text.to_string()))
}

/// Parses a row label. Only ASCII digits are accepted.
pub fn parse_row_label(text: &str) -> ParseResult<u32> {
    if !is_digits(text) {
        return Err(ParseError::InvalidRowLabel(text.to_string()));
    }
    text.parse::<u32>()
        .map_err(|_| ParseError::InvalidRowLabel(text.to_string()))
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}
