//! Binary expression parsing
//!
//! Accepted shape: `OPERAND WS? OPERATOR WS? OPERAND`, where an operand is
//! ASCII digits or the letters I, V and X, and the operator is one of
//! `+ - * /`. Only ASCII whitespace may surround the operator.

use crate::error::{CalcError, CalcResult};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static EXPRESSION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]+|[IVX]+)[\t\n\x0C\r ]*([-+*/])[\t\n\x0C\r ]*([0-9]+|[IVX]+)$")
        .expect("expression pattern is a valid regex")
});

/// Supported arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = CalcError;

    fn try_from(symbol: char) -> CalcResult<Self> {
        match symbol {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Sub),
            '*' => Ok(Operator::Mul),
            '/' => Ok(Operator::Div),
            other => Err(CalcError::UnsupportedOperator(other)),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One parsed input line: two operand tokens and the operator between them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    pub left: String,
    pub operator: char,
    pub right: String,
}

impl Expression {
    /// Parse a line, ignoring surrounding whitespace
    pub fn parse(line: &str) -> CalcResult<Self> {
        let captures = EXPRESSION_PATTERN
            .captures(line.trim())
            .ok_or(CalcError::Format)?;

        let operator = captures[2].chars().next().ok_or(CalcError::Format)?;

        Ok(Self {
            left: captures[1].to_string(),
            operator,
            right: captures[3].to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_with_spaces() {
        let expr = Expression::parse("III + V").unwrap();
        assert_eq!(expr.left, "III");
        assert_eq!(expr.operator, '+');
        assert_eq!(expr.right, "V");
    }

    #[test]
    fn test_parse_without_spaces() {
        let expr = Expression::parse("10/3").unwrap();
        assert_eq!(expr.left, "10");
        assert_eq!(expr.operator, '/');
        assert_eq!(expr.right, "3");
    }

    #[test]
    fn test_parse_trims_line() {
        let expr = Expression::parse("  7 *  2 \n").unwrap();
        assert_eq!(expr.left, "7");
        assert_eq!(expr.operator, '*');
        assert_eq!(expr.right, "2");
    }

    #[test]
    fn test_parse_keeps_mixed_operands() {
        // System consistency is checked later, not by the grammar
        let expr = Expression::parse("III - 5").unwrap();
        assert_eq!(expr.left, "III");
        assert_eq!(expr.right, "5");
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        for line in [
            "",
            "3",
            "3 +",
            "+ 3",
            "3 + 4 + 5",
            "3 % 4",
            "-3 + 4",
            "3.5 + 1",
            "iii + v",
            "3I + 4",
            "L + X",
            "3\u{a0}+ 5",
            "3 +\u{2003}5",
        ] {
            assert_eq!(
                Expression::parse(line),
                Err(CalcError::Format),
                "Expected format error for {line:?}"
            );
        }
    }

    #[test]
    fn test_parse_rejects_non_ascii_digits() {
        assert_eq!(Expression::parse("٣ + ٤"), Err(CalcError::Format));
    }

    #[test]
    fn test_parse_accepts_ascii_whitespace_around_operator() {
        let expr = Expression::parse("3\t+\t5").unwrap();
        assert_eq!(expr.left, "3");
        assert_eq!(expr.right, "5");
    }

    #[test]
    fn test_operator_from_symbol() {
        assert_eq!(Operator::try_from('+'), Ok(Operator::Add));
        assert_eq!(Operator::try_from('-'), Ok(Operator::Sub));
        assert_eq!(Operator::try_from('*'), Ok(Operator::Mul));
        assert_eq!(Operator::try_from('/'), Ok(Operator::Div));
        assert_eq!(
            Operator::try_from('^'),
            Err(CalcError::UnsupportedOperator('^'))
        );
    }

    #[test]
    fn test_operator_display() {
        assert_eq!(Operator::Div.to_string(), "/");
        assert_eq!(Operator::Mul.symbol(), '*');
    }

    proptest! {
        #[test]
        fn parse_accepts_grammar(
            left in "[0-9]{1,3}|[IVX]{1,4}",
            op in "[-+*/]",
            pad_left in " {0,3}",
            pad_right in " {0,3}",
            right in "[0-9]{1,3}|[IVX]{1,4}",
        ) {
            let line = format!("{left}{pad_left}{op}{pad_right}{right}");
            let expr = Expression::parse(&line);
            prop_assert!(expr.is_ok(), "Should parse: {:?}", line);
            let expr = expr.unwrap();
            prop_assert_eq!(expr.left, left);
            prop_assert_eq!(expr.right, right);
        }
    }
}
