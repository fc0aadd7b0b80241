//! FILENAME: core/parser/src/tests.rs
//! PURPOSE: Consolidated unit tests for the parser crate.

use crate::ast::{CellExpr, Operator, Term};
use crate::parser::{parse, parse_number, parse_row_label, parse_term, split_reference, ParseError};

fn reference(column: &str, row: u32) -> Term {
    Term::Reference {
        column: column.to_string(),
        row,
    }
}

// ========================================
// LITERALS
// ========================================

#[test]
fn parser_parses_integer_literal() {
    assert_eq!(parse("10").unwrap(), CellExpr::Number(10.0));
}

#[test]
fn parser_parses_decimal_literal() {
    assert_eq!(parse("3.25").unwrap(), CellExpr::Number(3.25));
    assert_eq!(parse("0.0000000000000001").unwrap(), CellExpr::Number(1e-16));
}

#[test]
fn parser_rejects_malformed_literals() {
    for text in ["abc", "1.", ".5", "1.2.3", "-4", "1e5", "+3", "12a"] {
        assert_eq!(
            parse(text),
            Err(ParseError::InvalidNumber(text.to_string())),
            "input {:?}",
            text
        );
    }
}

#[test]
fn parser_rejects_empty_cell() {
    assert_eq!(parse(""), Err(ParseError::Empty));
}

// ========================================
// FORMULAS
// ========================================

#[test]
fn parser_parses_reference_plus_literal() {
    assert_eq!(
        parse("=A1+5").unwrap(),
        CellExpr::Binary {
            left: reference("A", 1),
            op: Operator::Add,
            right: Term::Number(5.0),
        }
    );
}

#[test]
fn parser_parses_each_operator() {
    let cases = [
        ("=A1+B2", Operator::Add),
        ("=A1-B2", Operator::Subtract),
        ("=A1*B2", Operator::Multiply),
        ("=A1/B2", Operator::Divide),
    ];
    for (text, expected) in cases {
        match parse(text).unwrap() {
            CellExpr::Binary { left, op, right } => {
                assert_eq!(op, expected);
                assert_eq!(left, reference("A", 1));
                assert_eq!(right, reference("B", 2));
            }
            other => panic!("expected binary formula for {}, got {:?}", text, other),
        }
    }
}

#[test]
fn parser_parses_literal_on_left() {
    assert_eq!(
        parse("=10/Cell30").unwrap(),
        CellExpr::Binary {
            left: Term::Number(10.0),
            op: Operator::Divide,
            right: reference("Cell", 30),
        }
    );
}

#[test]
fn parser_parses_two_literals() {
    assert_eq!(
        parse("=1.5*2").unwrap(),
        CellExpr::Binary {
            left: Term::Number(1.5),
            op: Operator::Multiply,
            right: Term::Number(2.0),
        }
    );
}

#[test]
fn parser_keeps_multi_letter_column_labels() {
    assert_eq!(
        parse("=Total12-Tax3").unwrap(),
        CellExpr::Binary {
            left: reference("Total", 12),
            op: Operator::Subtract,
            right: reference("Tax", 3),
        }
    );
}

#[test]
fn parser_reports_missing_operator() {
    assert_eq!(parse("=A1"), Err(ParseError::NoOperator("=A1".to_string())));
    assert_eq!(parse("="), Err(ParseError::NoOperator("=".to_string())));
}

#[test]
fn parser_rejects_more_than_one_operator() {
    for text in ["=A1*2-3", "=A1+B1+C1", "=1/2/3", "=A1--2"] {
        assert_eq!(
            parse(text),
            Err(ParseError::MultipleOperators(text.to_string())),
            "input {:?}",
            text
        );
    }
}

#[test]
fn parser_reports_missing_operands() {
    assert_eq!(parse("=+5"), Err(ParseError::EmptyOperand));
    assert_eq!(parse("=A1*"), Err(ParseError::EmptyOperand));
}

#[test]
fn parser_reports_reference_without_row() {
    assert_eq!(parse("=A+1"), Err(ParseError::NoRow("A".to_string())));
}

#[test]
fn parser_reports_reference_with_non_digit_row() {
    assert_eq!(parse("=A1B+1"), Err(ParseError::InvalidRow("A1B".to_string())));
    assert_eq!(parse("=A1.5+1"), Err(ParseError::InvalidRow("A1.5".to_string())));
}

#[test]
fn parser_display_round_trips_formula_text() {
    let text = "=A1*2";
    assert_eq!(parse(text).unwrap().to_string(), text);
}

// ========================================
// TERMS AND LABELS
// ========================================

#[test]
fn split_reference_splits_at_first_digit() {
    assert_eq!(split_reference("A3"), ("A", "3"));
    assert_eq!(split_reference("Price12"), ("Price", "12"));
    assert_eq!(split_reference("42"), ("", "42"));
    assert_eq!(split_reference("Col"), ("Col", ""));
}

#[test]
fn parse_term_treats_digit_prefix_as_literal() {
    assert_eq!(parse_term("7").unwrap(), Term::Number(7.0));
    assert_eq!(parse_term("7.5").unwrap(), Term::Number(7.5));
    assert_eq!(
        parse_term("7A"),
        Err(ParseError::InvalidNumber("7A".to_string()))
    );
}

#[test]
fn parse_number_accepts_leading_zeros() {
    assert_eq!(parse_number("007").unwrap(), 7.0);
    assert_eq!(parse_number("0.50").unwrap(), 0.5);
}

#[test]
fn parse_row_label_accepts_only_digits() {
    assert_eq!(parse_row_label("30").unwrap(), 30);
    assert_eq!(parse_row_label("0").unwrap(), 0);
    assert_eq!(
        parse_row_label("-1"),
        Err(ParseError::InvalidRowLabel("-1".to_string()))
    );
    assert_eq!(
        parse_row_label(""),
        Err(ParseError::InvalidRowLabel(String::new()))
    );
    assert_eq!(
        parse_row_label("99999999999"),
        Err(ParseError::InvalidRowLabel("99999999999".to_string()))
    );
}

#[test]
fn operator_symbols_match_scan_order() {
    let symbols: String = Operator::SCAN_ORDER.iter().map(|op| op.symbol()).collect();
    assert_eq!(symbols, "+-*/");
    assert_eq!(Operator::from_symbol('/'), Some(Operator::Divide));
    assert_eq!(Operator::from_symbol('^'), None);
}
