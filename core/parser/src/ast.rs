//! FILENAME: core/parser/src/ast.rs
//! PURPOSE: Defines the syntax tree for a single cell's text.
//! CONTEXT: The grammar is deliberately tiny. A cell is either a literal
//! number or a formula made of two terms joined by one operator, so the
//! "tree" is at most one level deep.
//!
//! SUPPORTED EXPRESSIONS:
//! - Literals: 10, 0.25
//! - Binary formulas: =A1+5, =A1-B2, =3*C4, =D1/2
//! - Terms: literal numbers or cell references (column label + row label)

/// The parsed content of one cell.
#[derive(Debug, PartialEq, Clone)]
pub enum CellExpr {
    /// A bare literal such as `10` or `2.5`.
    Number(f64),

    /// A formula of the form `=<term><op><term>`.
    Binary {
        left: Term,
        op: Operator,
        right: Term,
    },
}

/// One side of a binary formula.
#[derive(Debug, PartialEq, Clone)]
pub enum Term {
    Number(f64),

    /// A cell reference like `A3` or `Price12`.
    /// `column` is the leading non-digit run, `row` the trailing row label.
    Reference { column: String, row: u32 },
}

/// The four arithmetic operators a formula may use.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Operator {
    Add,      // +
    Subtract, // -
    Multiply, // *
    Divide,   // /
}

impl Operator {
    /// Order in which formula text is scanned for an operator character.
    pub const SCAN_ORDER: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    pub fn from_symbol(ch: char) -> Option<Self> {
        Self::SCAN_ORDER.into_iter().find(|op| op.symbol() == ch)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Number(n) => write!(f, "{}", n),
            Term::Reference { column, row } => write!(f, "{}{}", column, row),
        }
    }
}

impl std::fmt::Display for CellExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellExpr::Number(n) => write!(f, "{}", n),
            CellExpr::Binary { left, op, right } => write!(f, "={}{}{}", left, op, right),
        }
    }
}
