//! Punctuation and operator marks.
//!
//! [`MARKS`] is ordered by descending length so that a linear scan finds the
//! longest mark at a position: `==` is tried before `=`, `<=` before `<`.

use thrice_lexer_core::Cursor;

use crate::TokenKind;

/// Every mark with its kind, longest first.
pub static MARKS: &[(&str, TokenKind)] = &[
    // Two-codepoint marks
    ("^=", TokenKind::CaretEquals),
    ("*=", TokenKind::StarEquals),
    ("/=", TokenKind::SlashEquals),
    ("+=", TokenKind::PlusEquals),
    ("-=", TokenKind::MinusEquals),
    ("&=", TokenKind::AmpersandEquals),
    ("|=", TokenKind::PipeEquals),
    ("<=", TokenKind::LeftArrowEquals),
    (">=", TokenKind::RightArrowEquals),
    ("!=", TokenKind::ExclamationEquals),
    ("==", TokenKind::EqualsEquals),
    // One-codepoint marks
    ("(", TokenKind::OpeningParenthesis),
    (")", TokenKind::ClosingParenthesis),
    ("{", TokenKind::OpeningBrace),
    ("}", TokenKind::ClosingBrace),
    ("[", TokenKind::OpeningBracket),
    ("]", TokenKind::ClosingBracket),
    ("'", TokenKind::Prime),
    ("\"", TokenKind::Quote),
    ("`", TokenKind::Backtick),
    ("^", TokenKind::Caret),
    ("*", TokenKind::Star),
    ("/", TokenKind::Slash),
    ("+", TokenKind::Plus),
    ("-", TokenKind::Minus),
    ("&", TokenKind::Ampersand),
    ("|", TokenKind::Pipe),
    ("!", TokenKind::Exclamation),
    ("<", TokenKind::LeftArrow),
    (">", TokenKind::RightArrow),
    ("$", TokenKind::Dollar),
    ("~", TokenKind::Tilde),
    (".", TokenKind::Dot),
    ("=", TokenKind::Equals),
    (",", TokenKind::Comma),
    (":", TokenKind::Colon),
    (";", TokenKind::Semicolon),
    ("@", TokenKind::At),
];

/// Look up the kind of an exact mark string.
pub fn lookup_mark(text: &str) -> Option<TokenKind> {
    MARKS
        .iter()
        .find(|&&(mark, _)| mark == text)
        .map(|&(_, kind)| kind)
}

/// Returns `true` for the codepoints that open a literal.
///
/// These are marks in the table, but the scanner hands them to the literal
/// scanners instead of emitting `PRIME`, `QUOTE` or `BACKTICK`.
#[inline]
pub fn is_literal_delimiter(c: char) -> bool {
    matches!(c, '\'' | '"' | '`')
}

/// Consume the longest mark at the cursor, if any.
///
/// Never matches a literal delimiter.
pub(crate) fn eat_mark(cursor: &mut Cursor<'_>) -> Option<TokenKind> {
    if cursor.is_eof() || is_literal_delimiter(cursor.current()) {
        return None;
    }
    MARKS
        .iter()
        .find(|&&(mark, _)| cursor.eat_str(mark))
        .map(|&(_, kind)| kind)
}

#[cfg(test)]
mod tests;
