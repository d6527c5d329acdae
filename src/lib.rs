//! romcalc - single-expression calculator for Arabic and Roman numerals
//!
//! Reads one binary expression such as `III + V` or `3 + 5`. Both operands
//! must come from the same numeral system and lie in 1..=10. Results of
//! Roman expressions are printed as Roman numerals.
//!
//! # Quick Start
//!
//! ```rust
//! use romcalc::{Answer, CalcError, ExpressionEvaluator};
//!
//! let evaluator = ExpressionEvaluator::new(true);
//!
//! assert_eq!(evaluator.evaluate("III + V"), Ok(Answer::Roman("VIII".to_string())));
//! assert_eq!(evaluator.evaluate("3 + 5"), Ok(Answer::Arabic(8)));
//! assert_eq!(evaluator.evaluate("III + 5"), Err(CalcError::MixedSystems));
//! ```

pub mod config;
pub mod error;
pub mod evaluator;
pub mod expression;
pub mod numeral;
pub mod observability;
pub mod session;

pub use config::{CalculatorConfig, CalculatorSection, ConfigError};
pub use error::{CalcError, CalcResult, Side};
pub use evaluator::{Answer, ExpressionEvaluator};
pub use expression::{Expression, Operator};
pub use numeral::{to_roman, RomanTable, TokenKind};
pub use session::Session;
