//! Fatal scanner errors.
//!
//! Unclassifiable codepoints are not errors: they become `UNKNOWN` lexemes.
//! Only malformed literals and unterminated block comments stop the scan.
//! Every variant carries the [`Location`] diagnostics point at.

use std::fmt;

use thrice_lexer_core::Location;

/// The three delimited literal forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    Character,
    String,
    RawString,
}

impl LiteralKind {
    /// The delimiter that opens and closes this literal.
    pub const fn delimiter(self) -> char {
        match self {
            LiteralKind::Character => '\'',
            LiteralKind::String => '"',
            LiteralKind::RawString => '`',
        }
    }
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LiteralKind::Character => "character",
            LiteralKind::String => "string",
            LiteralKind::RawString => "raw string",
        })
    }
}

/// A lexical error that aborts scanning.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum LexError {
    /// `''`: a character literal must hold exactly one character.
    #[error("empty character literal")]
    EmptyCharacterLiteral { location: Location },

    /// The closing delimiter never came. `location` is the opening delimiter.
    #[error("unterminated {kind} literal")]
    UnterminatedLiteral { kind: LiteralKind, location: Location },

    /// A newline inside a character or string literal.
    #[error("newline in {kind} literal")]
    BareNewlineInLiteral { kind: LiteralKind, location: Location },

    /// `\` followed by no escapable codepoint, or by more than eight hex digits.
    /// `location` is the backslash.
    #[error("escape sequence has {digits} hexadecimal digits, expected 1 to 8")]
    InvalidEscapeDigitCount { digits: u32, location: Location },

    /// `e`/`E` not followed by a digit. `location` is right after the marker.
    #[error("missing digit in decimal exponent")]
    MissingExponentDigit { location: Location },

    /// `#{` without a matching `}#`. `location` is the `#`.
    #[error("unterminated block comment")]
    UnterminatedBlockComment { location: Location },
}

impl LexError {
    /// Where the error occurred.
    pub fn location(&self) -> Location {
        match *self {
            LexError::EmptyCharacterLiteral { location }
            | LexError::UnterminatedLiteral { location, .. }
            | LexError::BareNewlineInLiteral { location, .. }
            | LexError::InvalidEscapeDigitCount { location, .. }
            | LexError::MissingExponentDigit { location }
            | LexError::UnterminatedBlockComment { location } => location,
        }
    }

    /// A short hint on how to fix the error.
    pub fn help(&self) -> String {
        match self {
            LexError::EmptyCharacterLiteral { .. } => {
                "a character literal holds exactly one character; escape a quote as `'\\''`"
                    .to_owned()
            }
            LexError::UnterminatedLiteral { kind, .. } => {
                format!("add a closing `{}`", kind.delimiter())
            }
            LexError::BareNewlineInLiteral { .. } => {
                "use `\\a` for a newline, or a raw string for multi-line text".to_owned()
            }
            LexError::InvalidEscapeDigitCount { .. } => {
                "escape one of \\ ' \" ` or write the codepoint as 1 to 8 hex digits".to_owned()
            }
            LexError::MissingExponentDigit { .. } => {
                "write the exponent as digits, e.g. `1e10`".to_owned()
            }
            LexError::UnterminatedBlockComment { .. } => {
                "close the comment with `}#`".to_owned()
            }
        }
    }
}
