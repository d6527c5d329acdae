//! Roman numeral lookup and encoding
//!
//! Decoding is a plain table lookup over the ten canonical literals; no
//! general Roman numeral grammar is supported. Encoding is greedy over the
//! subtractive pairs up to C.

use once_cell::sync::Lazy;
use std::num::NonZeroU32;

const CANONICAL_LITERALS: [(&str, i64); 10] = [
    ("I", 1),
    ("II", 2),
    ("III", 3),
    ("IV", 4),
    ("V", 5),
    ("VI", 6),
    ("VII", 7),
    ("VIII", 8),
    ("IX", 9),
    ("X", 10),
];

const ENCODING_PAIRS: [(u32, &str); 9] = [
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Shared read-only instance of the standard table
pub static ROMAN_TABLE: Lazy<RomanTable> = Lazy::new(RomanTable::standard);

/// Immutable mapping from Roman literal to its value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomanTable {
    entries: Vec<(&'static str, i64)>,
}

impl RomanTable {
    /// Table of the ten literals "I".."X"
    pub fn standard() -> Self {
        Self {
            entries: CANONICAL_LITERALS.to_vec(),
        }
    }

    /// Exact lookup of a literal
    pub fn lookup(&self, literal: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|(symbol, _)| *symbol == literal)
            .map(|(_, value)| *value)
    }

    /// Whether a single character is itself a literal in the table
    pub fn is_symbol(&self, c: char) -> bool {
        let mut buf = [0u8; 4];
        self.lookup(c.encode_utf8(&mut buf)).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RomanTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Encode a positive value in subtractive Roman notation.
///
/// Zero and negative values have no Roman form; the argument type rules
/// them out, so callers convert and handle that case themselves.
pub fn to_roman(value: NonZeroU32) -> String {
    let mut remaining = value.get();
    let mut result = String::new();

    for (pair_value, symbol) in ENCODING_PAIRS {
        while remaining >= pair_value {
            result.push_str(symbol);
            remaining -= pair_value;
        }
    }

    result
}
