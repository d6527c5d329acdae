//! Expression evaluator
//!
//! Runs one input line through the fixed pipeline:
//! parse → classify → system consistency → Roman permission → resolve →
//! range → compute → format. The first failing step ends evaluation.

use crate::config::CalculatorConfig;
use crate::error::{CalcError, CalcResult, Side};
use crate::expression::{Expression, Operator};
use crate::numeral::{self, RomanTable, TokenKind, ALLOWED_RANGE, ROMAN_TABLE};
use std::fmt;
use std::num::NonZeroU32;
use tracing::{debug, trace, warn};

/// Successful evaluation result, rendered in the input's numeral system
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Arabic(i64),
    Roman(String),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Arabic(value) => write!(f, "{value}"),
            Answer::Roman(numeral) => f.write_str(numeral),
        }
    }
}

/// Evaluates single binary expressions over Arabic or Roman operands
#[derive(Debug, Clone)]
pub struct ExpressionEvaluator {
    table: &'static RomanTable,
    allow_roman: bool,
}

impl ExpressionEvaluator {
    pub fn new(allow_roman: bool) -> Self {
        Self {
            table: &ROMAN_TABLE,
            allow_roman,
        }
    }

    pub fn from_config(config: &CalculatorConfig) -> Self {
        Self::new(config.calculator.allow_roman)
    }

    pub fn allows_roman(&self) -> bool {
        self.allow_roman
    }

    pub fn table(&self) -> &RomanTable {
        self.table
    }

    /// Evaluate one input line
    pub fn evaluate(&self, line: &str) -> CalcResult<Answer> {
        let _span = crate::evaluation_span!(allow_roman = self.allow_roman).entered();

        let result = self.run_pipeline(line);
        match &result {
            Ok(answer) => debug!(answer = %answer, "Evaluation succeeded"),
            Err(e) => warn!(error_kind = e.kind(), "Evaluation failed: {}", e),
        }
        result
    }

    fn run_pipeline(&self, line: &str) -> CalcResult<Answer> {
        let expr = self.parse_expression(line)?;
        trace!(left = %expr.left, operator = %expr.operator, right = %expr.right, "Parsed expression");

        let left_kind = self.classify(&expr.left);
        let right_kind = self.classify(&expr.right);
        if left_kind == TokenKind::Invalid || right_kind == TokenKind::Invalid {
            return Err(CalcError::Format);
        }

        let left_roman = left_kind.is_roman();
        let right_roman = right_kind.is_roman();

        Self::validate_system_consistency(left_roman, right_roman)?;
        Self::validate_roman_permission(left_roman, right_roman, self.allow_roman)?;

        let a = self.resolve_operand(&expr.left, left_roman, Side::Left)?;
        let b = self.resolve_operand(&expr.right, right_roman, Side::Right)?;
        Self::validate_range(a, Side::Left)?;
        Self::validate_range(b, Side::Right)?;

        let value = Self::compute(a, b, expr.operator)?;
        debug!(a, b, operator = %expr.operator, value, "Computed result");

        if left_roman || right_roman {
            Ok(Answer::Roman(Self::to_roman(value)?))
        } else {
            Ok(Answer::Arabic(value))
        }
    }

    pub fn classify(&self, token: &str) -> TokenKind {
        numeral::classify(self.table, token)
    }

    pub fn parse_expression(&self, line: &str) -> CalcResult<Expression> {
        Expression::parse(line)
    }

    /// Resolve a token to its value under the given numeral system.
    ///
    /// Roman tokens must be one of the ten canonical literals exactly.
    pub fn resolve_operand(&self, token: &str, is_roman: bool, side: Side) -> CalcResult<i64> {
        if is_roman {
            self.table.lookup(token).ok_or(CalcError::InvalidRoman)
        } else {
            token
                .parse::<i64>()
                .map_err(|_| CalcError::invalid_arabic(side))
        }
    }

    pub fn validate_system_consistency(left_roman: bool, right_roman: bool) -> CalcResult<()> {
        if left_roman != right_roman {
            return Err(CalcError::MixedSystems);
        }
        Ok(())
    }

    pub fn validate_roman_permission(
        left_roman: bool,
        right_roman: bool,
        allow_roman: bool,
    ) -> CalcResult<()> {
        if left_roman && right_roman && !allow_roman {
            return Err(CalcError::RomanNotAllowed);
        }
        Ok(())
    }

    pub fn validate_range(value: i64, side: Side) -> CalcResult<()> {
        if !ALLOWED_RANGE.contains(&value) {
            return Err(CalcError::out_of_range(side));
        }
        Ok(())
    }

    /// Apply an operator symbol. Division truncates toward zero.
    pub fn compute(a: i64, b: i64, operator: char) -> CalcResult<i64> {
        let value = match Operator::try_from(operator)? {
            Operator::Add => a.checked_add(b),
            Operator::Sub => a.checked_sub(b),
            Operator::Mul => a.checked_mul(b),
            Operator::Div => {
                if b == 0 {
                    return Err(CalcError::DivisionByZero);
                }
                a.checked_div(b)
            }
        };
        value.ok_or(CalcError::Overflow)
    }

    /// Render a computed value as a Roman numeral
    pub fn to_roman(value: i64) -> CalcResult<String> {
        if value <= 0 {
            return Err(CalcError::NonPositiveRoman(value));
        }
        let positive = u32::try_from(value)
            .ok()
            .and_then(NonZeroU32::new)
            .ok_or(CalcError::Overflow)?;
        Ok(numeral::to_roman(positive))
    }
}

impl Default for ExpressionEvaluator {
    fn default() -> Self {
        Self::from_config(&CalculatorConfig::default())
    }
}
