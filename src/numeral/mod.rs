//! Numeral systems accepted by the calculator
//!
//! Operands are either Arabic integer literals or one of the ten canonical
//! Roman literals "I" through "X".

pub mod roman;

use std::ops::RangeInclusive;

pub use roman::{to_roman, RomanTable, ROMAN_TABLE};

/// Closed interval every resolved operand must fall into
pub const ALLOWED_RANGE: RangeInclusive<i64> = 1..=10;

/// Classification of a single operand token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Roman,
    Arabic,
    Invalid,
}

impl TokenKind {
    pub fn is_roman(self) -> bool {
        matches!(self, TokenKind::Roman)
    }
}

/// Classify a token as Roman, Arabic or neither.
///
/// A token is Roman when every character is a Roman symbol known to `table`;
/// otherwise it is Arabic when it consists of ASCII digits only.
pub fn classify(table: &RomanTable, token: &str) -> TokenKind {
    if token.is_empty() {
        return TokenKind::Invalid;
    }

    if token.chars().all(|c| table.is_symbol(c)) {
        TokenKind::Roman
    } else if token.bytes().all(|b| b.is_ascii_digit()) {
        TokenKind::Arabic
    } else {
        TokenKind::Invalid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_roman() {
        let table = RomanTable::standard();
        assert_eq!(classify(&table, "III"), TokenKind::Roman);
        assert_eq!(classify(&table, "X"), TokenKind::Roman);
        // Unknown combinations are still Roman-looking; resolution rejects them
        assert_eq!(classify(&table, "VV"), TokenKind::Roman);
    }

    #[test]
    fn test_classify_arabic() {
        let table = RomanTable::standard();
        assert_eq!(classify(&table, "3"), TokenKind::Arabic);
        assert_eq!(classify(&table, "0010"), TokenKind::Arabic);
    }

    #[test]
    fn test_classify_invalid() {
        let table = RomanTable::standard();
        assert_eq!(classify(&table, ""), TokenKind::Invalid);
        assert_eq!(classify(&table, "3I"), TokenKind::Invalid);
        assert_eq!(classify(&table, "-3"), TokenKind::Invalid);
        assert_eq!(classify(&table, "L"), TokenKind::Invalid);
    }

    #[test]
    fn test_allowed_range_bounds() {
        assert!(ALLOWED_RANGE.contains(&1));
        assert!(ALLOWED_RANGE.contains(&10));
        assert!(!ALLOWED_RANGE.contains(&0));
        assert!(!ALLOWED_RANGE.contains(&11));
    }
}
