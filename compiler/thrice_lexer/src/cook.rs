//! Literal cooking: decoding the text of literal lexemes into values.
//!
//! The scanner only checks literal *shape*. Cooking turns the checked text
//! into values and catches the one thing the scanner cannot: a hex escape
//! naming a value that is not a Unicode scalar value (`\D800`, `\110000`).
//!
//! # Escapes
//!
//! | Escape | Value |
//! |--------|-------|
//! | `\\` `\'` `\"` `` \` `` | the escaped delimiter |
//! | `\` + 1 to 8 hex digits | the codepoint with that value |
//!
//! The hex run is greedy: `"\41BC"` is the single codepoint U+41BC.

use std::iter::Peekable;
use std::str::Chars;

use crate::TokenKind;

/// Error decoding a literal's text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CookError {
    /// A hex escape outside the Unicode scalar value range.
    #[error("escape `\\{digits}` is not a valid Unicode codepoint")]
    InvalidCodepoint { digits: String },

    /// Text that the scanner would not have produced for this kind.
    #[error("malformed {kind} literal `{text}`")]
    Malformed { kind: TokenKind, text: String },
}

/// A cooked literal.
#[derive(Clone, Debug, PartialEq)]
pub enum LiteralValue {
    Character(char),
    String(String),
    RawString(String),
    Decimal(DecimalLiteral),
}

/// A decimal literal split into its digit runs, underscores removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecimalLiteral {
    pub integer: String,
    pub fraction: Option<String>,
    pub exponent: Option<String>,
}

impl DecimalLiteral {
    /// The value as a float (may round, may be infinite).
    pub fn to_f64(&self) -> f64 {
        let mut text = self.integer.clone();
        if let Some(fraction) = &self.fraction {
            text.push('.');
            text.push_str(fraction);
        }
        if let Some(exponent) = &self.exponent {
            text.push('e');
            text.push_str(exponent);
        }
        // Digit runs are never empty, so this is always valid float syntax
        text.parse().unwrap_or(f64::NAN)
    }
}

fn malformed(kind: TokenKind, text: &str) -> CookError {
    CookError::Malformed {
        kind,
        text: text.to_owned(),
    }
}

/// Strip one `delimiter` from each end of `text`.
fn strip_delimiters(text: &str, delimiter: char) -> Option<&str> {
    text.strip_prefix(delimiter)?.strip_suffix(delimiter)
}

/// Decode the escape after a `\`.
fn decode_escape(chars: &mut Peekable<Chars<'_>>) -> Option<Result<char, CookError>> {
    match chars.next()? {
        c @ ('\\' | '\'' | '"' | '`') => Some(Ok(c)),
        c if c.is_ascii_hexdigit() => {
            let mut digits = String::from(c);
            while let Some(&d) = chars.peek() {
                if !d.is_ascii_hexdigit() {
                    break;
                }
                digits.push(d);
                chars.next();
            }
            if digits.len() > 8 {
                return None;
            }
            let value = u32::from_str_radix(&digits, 16).ok()?;
            Some(char::from_u32(value).ok_or(CookError::InvalidCodepoint { digits }))
        }
        _ => None,
    }
}

/// Decode every escaped character of a literal body.
fn unescape(body: &str, kind: TokenKind, text: &str) -> Result<String, CookError> {
    let mut result = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            let decoded = decode_escape(&mut chars).ok_or_else(|| malformed(kind, text))?;
            result.push(decoded?);
        } else {
            result.push(c);
        }
    }
    Ok(result)
}

/// Cook a character literal, quotes included: `'a'`, `'\27'`.
pub fn cook_character(text: &str) -> Result<char, CookError> {
    let body = strip_delimiters(text, '\'')
        .ok_or_else(|| malformed(TokenKind::Character, text))?;
    let value = unescape(body, TokenKind::Character, text)?;
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(malformed(TokenKind::Character, text)),
    }
}

/// Cook a string literal, quotes included.
pub fn cook_string(text: &str) -> Result<String, CookError> {
    let body =
        strip_delimiters(text, '"').ok_or_else(|| malformed(TokenKind::String, text))?;
    unescape(body, TokenKind::String, text)
}

/// Cook a raw string literal, backticks included. Contents are verbatim.
pub fn cook_raw_string(text: &str) -> Result<String, CookError> {
    strip_delimiters(text, '`')
        .map(str::to_owned)
        .ok_or_else(|| malformed(TokenKind::RawString, text))
}

/// Split a decimal literal into its integer, fraction and exponent runs.
pub fn cook_decimal(text: &str) -> Result<DecimalLiteral, CookError> {
    let digits = |run: &str| -> Result<String, CookError> {
        let cleaned: String = run.chars().filter(|&c| c != '_').collect();
        if !run.starts_with(|c: char| c.is_ascii_digit())
            || !cleaned.chars().all(|c| c.is_ascii_digit())
        {
            return Err(malformed(TokenKind::Decimal, text));
        }
        Ok(cleaned)
    };

    let (mantissa, exponent) = match text.find(['e', 'E']) {
        Some(at) => (&text[..at], Some(&text[at + 1..])),
        None => (text, None),
    };
    let (integer, fraction) = match mantissa.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (mantissa, None),
    };

    Ok(DecimalLiteral {
        integer: digits(integer)?,
        fraction: fraction.map(digits).transpose()?,
        exponent: exponent.map(digits).transpose()?,
    })
}

/// Cook the text of a lexeme of the given kind. `None` for non-literals.
pub fn cook(kind: TokenKind, text: &str) -> Result<Option<LiteralValue>, CookError> {
    let value = match kind {
        TokenKind::Character => LiteralValue::Character(cook_character(text)?),
        TokenKind::String => LiteralValue::String(cook_string(text)?),
        TokenKind::RawString => LiteralValue::RawString(cook_raw_string(text)?),
        TokenKind::Decimal => LiteralValue::Decimal(cook_decimal(text)?),
        _ => return Ok(None),
    };
    Ok(Some(value))
}

#[cfg(test)]
mod tests;
