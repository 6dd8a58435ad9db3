//! Scanner for the Thrice language.
//!
//! Converts a [`SourceBuffer`] into a sequence of [`Lexeme`]s: a
//! [`TokenKind`] and the [`Span`] of source text it covers. Spaces and
//! comments produce no lexemes. Codepoints no rule accepts become
//! one-codepoint `UNKNOWN` lexemes; malformed literals and unterminated
//! block comments stop the scan with a [`LexError`].
//!
//! # Entry Points
//!
//! - [`scan`] / [`scan_buffer`]: all-or-nothing.
//! - [`scan_partial`]: the lexemes produced before a failure, plus the failure.
//! - [`Scanner`]: pull one lexeme at a time.
//!
//! # Example
//!
//! ```
//! use thrice_lexer::{scan_buffer, TokenKind};
//! use thrice_lexer_core::SourceBuffer;
//!
//! let buffer = SourceBuffer::new("if x <= 1.5");
//! let kinds: Vec<TokenKind> = scan_buffer(&buffer)
//!     .unwrap()
//!     .iter()
//!     .map(|lexeme| lexeme.kind)
//!     .collect();
//! assert_eq!(
//!     kinds,
//!     [TokenKind::If, TokenKind::Identifier, TokenKind::LeftArrowEquals, TokenKind::Decimal]
//! );
//! ```

pub mod cook;
mod keywords;
mod lex_error;
mod marks;
mod scanner;
mod token_kind;

pub use cook::{CookError, DecimalLiteral, LiteralValue};
pub use keywords::{is_keyword, lookup as lookup_keyword, KEYWORDS};
pub use lex_error::{LexError, LiteralKind};
pub use marks::{is_literal_delimiter, lookup_mark, MARKS};
pub use scanner::Scanner;
pub use token_kind::TokenKind;

use thrice_lexer_core::{SourceBuffer, SourceFile, Span};
use tracing::{debug, trace};

/// One classified piece of source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Lexeme {
    pub kind: TokenKind,
    pub span: Span,
}

impl Lexeme {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Lexeme { kind, span }
    }

    /// The text this lexeme covers in `buffer`.
    pub fn text(&self, buffer: &SourceBuffer) -> String {
        self.span.text(buffer)
    }

    /// Decode the value of a literal lexeme; `None` for other kinds.
    pub fn cook(&self, buffer: &SourceBuffer) -> Result<Option<LiteralValue>, CookError> {
        if !self.kind.is_literal() {
            return Ok(None);
        }
        cook::cook(self.kind, &self.text(buffer))
    }
}

/// Result of scanning a buffer without giving up the lexemes on failure.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOutput {
    /// Lexemes in source order, up to the failure if there was one.
    pub lexemes: Vec<Lexeme>,
    /// The fatal error that stopped the scan.
    pub error: Option<LexError>,
}

impl LexOutput {
    /// Discard the partial lexemes if the scan failed.
    pub fn into_result(self) -> Result<Vec<Lexeme>, LexError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.lexemes),
        }
    }
}

/// Scan `buffer`, keeping every lexeme produced before a fatal error.
#[tracing::instrument(level = "debug", skip_all, fields(len = buffer.len()))]
pub fn scan_partial(buffer: &SourceBuffer) -> LexOutput {
    let mut scanner = Scanner::new(buffer);
    let mut lexemes = Vec::new();
    let error = loop {
        match scanner.next_lexeme() {
            Ok(Some(lexeme)) => {
                trace!(kind = %lexeme.kind, span = %lexeme.span, "lexeme");
                lexemes.push(lexeme);
            }
            Ok(None) => break None,
            Err(err) => break Some(err),
        }
    };
    debug!(lexemes = lexemes.len(), failed = error.is_some(), "scan finished");
    LexOutput { lexemes, error }
}

/// Scan `buffer` into lexemes.
pub fn scan_buffer(buffer: &SourceBuffer) -> Result<Vec<Lexeme>, LexError> {
    scan_partial(buffer).into_result()
}

/// Scan the contents of a source file into lexemes.
pub fn scan(source: &SourceFile) -> Result<Vec<Lexeme>, LexError> {
    debug!(name = source.name(), path = %source.path().display(), "scanning source");
    scan_buffer(source.contents())
}
