//! Numeric token classification
//!
//! Text inputs may contain `inf` or `nan` where a distance is missing or
//! undefined. Classification runs in two explicit stages: a strict decimal
//! parse first, then a permissive pass that recognizes non-finite spellings
//! and out-of-range literals. Nothing here reports errors through control
//! flow; the caller decides what an `Invalid` token means.

use crate::Value;

/// Outcome of reading one scalar token
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScalarToken {
    /// Ordinary decimal number
    Finite(Value),
    /// `inf`, `-inf`, `nan` or an overflowing literal
    NonFinite(Value),
    /// No token remained
    EndOfInput,
    /// Token text is not a number under either stage
    Invalid,
}

impl ScalarToken {
    /// Classify the next token, `None` meaning the input is exhausted
    pub fn classify(token: Option<&str>) -> Self {
        let Some(token) = token else {
            return ScalarToken::EndOfInput;
        };

        if let Some(value) = parse_strict(token) {
            return ScalarToken::Finite(value);
        }

        match parse_permissive(token) {
            Some(value) => ScalarToken::NonFinite(value),
            None => ScalarToken::Invalid,
        }
    }

    /// The parsed value for `Finite` and `NonFinite` tokens
    pub fn value(self) -> Option<Value> {
        match self {
            ScalarToken::Finite(value) | ScalarToken::NonFinite(value) => Some(value),
            ScalarToken::EndOfInput | ScalarToken::Invalid => None,
        }
    }
}

/// Plain decimal or scientific notation with a finite result
fn parse_strict(token: &str) -> Option<Value> {
    let decimal = !token.is_empty()
        && token
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !decimal {
        return None;
    }
    token.parse::<Value>().ok().filter(|value| value.is_finite())
}

/// Non-finite spellings in any case, with an optional sign
fn parse_permissive(token: &str) -> Option<Value> {
    let (negative, body) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };

    let magnitude = if body.eq_ignore_ascii_case("inf") || body.eq_ignore_ascii_case("infinity") {
        Value::INFINITY
    } else if body.eq_ignore_ascii_case("nan") {
        Value::NAN
    } else {
        // Decimal literal too large for the scalar type
        return token.parse::<Value>().ok().filter(|value| value.is_infinite());
    };

    Some(if negative { -magnitude } else { magnitude })
}
