//! Error types for expression evaluation
//!
//! Every variant renders as the exact line printed to the user. Evaluation
//! stops at the first error; nothing is retried.

use std::fmt;
use thiserror::Error;

/// Which operand of the binary expression an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("a"),
            Side::Right => f.write_str("b"),
        }
    }
}

/// Main error type for calculator operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CalcError {
    #[error("Неверный формат ввода")]
    Format,

    #[error("Калькулятор работает только с арабскими числами")]
    RomanNotAllowed,

    #[error("Калькулятор работает только с арабскими или только с римскими числами")]
    MixedSystems,

    #[error("неверное римское число")]
    InvalidRoman,

    #[error("Ошибка ввода числа {side}")]
    InvalidArabic { side: Side },

    #[error("Число '{side}' должно быть от 1 до 10 включительно")]
    OutOfRange { side: Side },

    #[error("деление на ноль")]
    DivisionByZero,

    #[error("неверная операция")]
    UnsupportedOperator(char),

    #[error("Результат работы с римскими числами не может быть меньше единицы")]
    NonPositiveRoman(i64),

    #[error("переполнение при вычислении")]
    Overflow,
}

impl CalcError {
    /// Stable machine-readable name, used as a structured log field
    pub fn kind(&self) -> &'static str {
        match self {
            CalcError::Format => "format_error",
            CalcError::RomanNotAllowed => "roman_not_allowed",
            CalcError::MixedSystems => "mixed_systems",
            CalcError::InvalidRoman | CalcError::InvalidArabic { .. } => "invalid_value",
            CalcError::OutOfRange { .. } => "out_of_range",
            CalcError::DivisionByZero => "division_by_zero",
            CalcError::UnsupportedOperator(_) => "unsupported_operator",
            CalcError::NonPositiveRoman(_) => "non_positive_roman",
            CalcError::Overflow => "overflow",
        }
    }

    /// Create an invalid Arabic operand error
    pub fn invalid_arabic(side: Side) -> Self {
        Self::InvalidArabic { side }
    }

    /// Create an out-of-range operand error
    pub fn out_of_range(side: Side) -> Self {
        Self::OutOfRange { side }
    }
}

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;
