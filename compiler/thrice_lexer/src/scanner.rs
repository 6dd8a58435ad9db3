//! The scanner: turns a codepoint buffer into lexemes one at a time.
//!
//! # Rule Order
//!
//! At each position the scanner first tries the skip rules (a single space,
//! then comments), then the token rules: marks, character literal, string
//! literal, raw string literal, decimal literal, word. The first rule that
//! applies wins. A codepoint no rule accepts becomes a one-codepoint
//! `UNKNOWN` lexeme.
//!
//! Marks never include literal delimiters, digits or ASCII letters, so after
//! the mark rule the remaining rules are selected by the first codepoint
//! without changing the outcome of the ordered search.

use thrice_lexer_core::{Cursor, Location, SourceBuffer, Span};

use crate::keywords::{self, MAX_KEYWORD_LEN};
use crate::lex_error::{LexError, LiteralKind};
use crate::marks;
use crate::{Lexeme, TokenKind};

/// Pull-based scanner over one [`SourceBuffer`].
///
/// Iterating yields `Ok(lexeme)` until the end of the buffer, or a single
/// `Err` after which the iterator is exhausted.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    failed: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(buffer: &'a SourceBuffer) -> Self {
        Scanner {
            cursor: buffer.cursor(),
            failed: false,
        }
    }

    /// Produce the next lexeme, `Ok(None)` at the end of the buffer.
    pub fn next_lexeme(&mut self) -> Result<Option<Lexeme>, LexError> {
        loop {
            if self.cursor.is_eof() {
                return Ok(None);
            }
            if self.skip()? {
                continue;
            }
            let first = self.cursor.location();
            let kind = self.scan_token()?;
            let span = Span::new(first, self.cursor.location());
            return Ok(Some(Lexeme::new(kind, span)));
        }
    }

    // === Skip Rules ===

    fn skip(&mut self) -> Result<bool, LexError> {
        Ok(self.skip_whitespace() || self.skip_comment()?)
    }

    /// Only U+0020. Tabs and line breaks become `UNKNOWN`.
    fn skip_whitespace(&mut self) -> bool {
        self.cursor.eat(' ')
    }

    fn skip_comment(&mut self) -> Result<bool, LexError> {
        let opener = self.cursor.location();
        if !self.cursor.eat('#') {
            return Ok(false);
        }
        if self.cursor.eat('{') {
            // Block comments do not nest: the first `}#` closes
            if !self.cursor.eat_through("}#") {
                return Err(LexError::UnterminatedBlockComment { location: opener });
            }
        } else {
            self.cursor.eat_line();
        }
        Ok(true)
    }

    // === Token Rules ===

    fn scan_token(&mut self) -> Result<TokenKind, LexError> {
        if let Some(kind) = marks::eat_mark(&mut self.cursor) {
            return Ok(kind);
        }
        let kind = match self.cursor.current() {
            '\'' => self.character_literal()?,
            '"' => self.string_literal()?,
            '`' => self.raw_string_literal()?,
            '0'..='9' => self.decimal_literal()?,
            'a'..='z' | 'A'..='Z' => self.word(),
            _ => {
                self.cursor.advance();
                TokenKind::Unknown
            }
        };
        Ok(kind)
    }

    // === Literals ===

    fn character_literal(&mut self) -> Result<TokenKind, LexError> {
        let opener = self.cursor.location();
        self.cursor.advance();
        if self.cursor.current() == '\'' {
            return Err(LexError::EmptyCharacterLiteral { location: opener });
        }
        self.escaped_character(LiteralKind::Character, opener)?;
        if !self.cursor.eat('\'') {
            return Err(LexError::UnterminatedLiteral {
                kind: LiteralKind::Character,
                location: opener,
            });
        }
        Ok(TokenKind::Character)
    }

    fn string_literal(&mut self) -> Result<TokenKind, LexError> {
        let opener = self.cursor.location();
        self.cursor.advance();
        while !self.cursor.eat('"') {
            self.escaped_character(LiteralKind::String, opener)?;
        }
        Ok(TokenKind::String)
    }

    fn raw_string_literal(&mut self) -> Result<TokenKind, LexError> {
        let opener = self.cursor.location();
        self.cursor.advance();
        if !self.cursor.eat_through("`") {
            return Err(LexError::UnterminatedLiteral {
                kind: LiteralKind::RawString,
                location: opener,
            });
        }
        Ok(TokenKind::RawString)
    }

    /// Consume one possibly escaped character inside a character or string literal.
    fn escaped_character(&mut self, kind: LiteralKind, opener: Location) -> Result<(), LexError> {
        let unterminated = LexError::UnterminatedLiteral {
            kind,
            location: opener,
        };
        if self.cursor.is_eof() {
            return Err(unterminated);
        }
        match self.cursor.current() {
            '\n' => Err(LexError::BareNewlineInLiteral {
                kind,
                location: self.cursor.location(),
            }),
            '\\' => {
                let backslash = self.cursor.location();
                self.cursor.advance();
                if self.cursor.is_eof() {
                    return Err(unterminated);
                }
                if self.cursor.eat_if(|c| matches!(c, '\\' | '\'' | '"' | '`')) {
                    return Ok(());
                }
                // The whole hex run is consumed before its length is checked
                let digits = self.cursor.eat_while(|c| c.is_ascii_hexdigit());
                if (1..=8).contains(&digits) {
                    Ok(())
                } else {
                    Err(LexError::InvalidEscapeDigitCount {
                        digits,
                        location: backslash,
                    })
                }
            }
            _ => {
                self.cursor.advance();
                Ok(())
            }
        }
    }

    fn decimal_literal(&mut self) -> Result<TokenKind, LexError> {
        self.eat_digits();

        let before_dot = self.cursor;
        if self.cursor.eat('.') {
            if self.cursor.eat_if(|c| c.is_ascii_digit()) {
                self.eat_digits();
            } else {
                // `1.foo`: the dot belongs to the next lexeme
                self.cursor = before_dot;
            }
        }

        if self.cursor.eat_if(|c| matches!(c, 'e' | 'E')) {
            if !self.cursor.eat_if(|c| c.is_ascii_digit()) {
                return Err(LexError::MissingExponentDigit {
                    location: self.cursor.location(),
                });
            }
            self.eat_digits();
        }
        Ok(TokenKind::Decimal)
    }

    fn eat_digits(&mut self) {
        self.cursor.eat_while(|c| c.is_ascii_digit() || c == '_');
    }

    // === Words ===

    fn word(&mut self) -> TokenKind {
        let start = self.cursor.pos();
        let capitalized = self.cursor.current().is_ascii_uppercase();
        self.cursor.eat_while(|c| c.is_ascii_alphabetic());
        if capitalized {
            return TokenKind::Identifier;
        }
        match keyword_kind(self.cursor.slice_from(start)) {
            // `if_` escapes the keyword; the underscore is part of the identifier
            Some(kind) => {
                if self.cursor.eat('_') {
                    TokenKind::Identifier
                } else {
                    kind
                }
            }
            None => TokenKind::Identifier,
        }
    }
}

/// Keyword lookup over a run of ASCII letters without allocating.
fn keyword_kind(letters: &[char]) -> Option<TokenKind> {
    if letters.len() > MAX_KEYWORD_LEN {
        return None;
    }
    let mut bytes = [0u8; MAX_KEYWORD_LEN];
    for (byte, &c) in bytes.iter_mut().zip(letters) {
        *byte = u8::try_from(c).ok()?;
    }
    std::str::from_utf8(&bytes[..letters.len()])
        .ok()
        .and_then(keywords::lookup)
}

impl Iterator for Scanner<'_> {
    type Item = Result<Lexeme, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_lexeme() {
            Ok(lexeme) => lexeme.map(Ok),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}
