//! Reserved keyword resolution.
//!
//! [`lookup`] uses the word's length as a first-pass filter (keywords range
//! from 2 to 11 codepoints), then matches against the keywords of that
//! length. [`KEYWORDS`] lists the same set for callers that need to
//! enumerate it.

use crate::TokenKind;

/// Length of the longest keyword.
pub const MAX_KEYWORD_LEN: usize = 11;

/// Every reserved keyword with its kind, grouped by category.
pub static KEYWORDS: &[(&str, TokenKind)] = &[
    ("private", TokenKind::Private),
    ("protected", TokenKind::Protected),
    ("public", TokenKind::Public),
    ("import", TokenKind::Import),
    ("const", TokenKind::Const),
    ("var", TokenKind::Var),
    ("func", TokenKind::Func),
    ("proc", TokenKind::Proc),
    ("entrypoint", TokenKind::Entrypoint),
    ("free", TokenKind::Free),
    ("interface", TokenKind::Interface),
    ("struct", TokenKind::Struct),
    ("class", TokenKind::Class),
    ("enum", TokenKind::Enum),
    ("union", TokenKind::Union),
    ("variant", TokenKind::Variant),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("for", TokenKind::For),
    ("while", TokenKind::While),
    ("do", TokenKind::Do),
    ("switch", TokenKind::Switch),
    ("case", TokenKind::Case),
    ("default", TokenKind::Default),
    ("fallthrough", TokenKind::Fallthrough),
    ("break", TokenKind::Break),
    ("continue", TokenKind::Continue),
    ("return", TokenKind::Return),
    ("mutable", TokenKind::Mutable),
    ("shared", TokenKind::Shared),
    ("volatile", TokenKind::Volatile),
    ("alignas", TokenKind::Alignas),
    ("threadlocal", TokenKind::Threadlocal),
];

/// Look up a reserved keyword by text.
///
/// Returns `None` for anything that is not exactly a keyword, including
/// capitalized spellings (`If`) and escaped forms (`if_`).
#[inline]
pub fn lookup(text: &str) -> Option<TokenKind> {
    let bytes = text.as_bytes();
    let len = bytes.len();

    // Guard: all keywords are 2-11 chars and start with a lowercase letter
    if !(2..=MAX_KEYWORD_LEN).contains(&len) || !bytes[0].is_ascii_lowercase() {
        return None;
    }

    match len {
        2 => match text {
            "do" => Some(TokenKind::Do),
            "if" => Some(TokenKind::If),
            _ => None,
        },
        3 => match text {
            "for" => Some(TokenKind::For),
            "var" => Some(TokenKind::Var),
            _ => None,
        },
        4 => match text {
            "case" => Some(TokenKind::Case),
            "else" => Some(TokenKind::Else),
            "enum" => Some(TokenKind::Enum),
            "free" => Some(TokenKind::Free),
            "func" => Some(TokenKind::Func),
            "proc" => Some(TokenKind::Proc),
            _ => None,
        },
        5 => match text {
            "break" => Some(TokenKind::Break),
            "class" => Some(TokenKind::Class),
            "const" => Some(TokenKind::Const),
            "union" => Some(TokenKind::Union),
            "while" => Some(TokenKind::While),
            _ => None,
        },
        6 => match text {
            "import" => Some(TokenKind::Import),
            "public" => Some(TokenKind::Public),
            "return" => Some(TokenKind::Return),
            "shared" => Some(TokenKind::Shared),
            "struct" => Some(TokenKind::Struct),
            "switch" => Some(TokenKind::Switch),
            _ => None,
        },
        7 => match text {
            "alignas" => Some(TokenKind::Alignas),
            "default" => Some(TokenKind::Default),
            "mutable" => Some(TokenKind::Mutable),
            "private" => Some(TokenKind::Private),
            "variant" => Some(TokenKind::Variant),
            _ => None,
        },
        8 => match text {
            "continue" => Some(TokenKind::Continue),
            "volatile" => Some(TokenKind::Volatile),
            _ => None,
        },
        9 => match text {
            "interface" => Some(TokenKind::Interface),
            "protected" => Some(TokenKind::Protected),
            _ => None,
        },
        10 => match text {
            "entrypoint" => Some(TokenKind::Entrypoint),
            _ => None,
        },
        11 => match text {
            "fallthrough" => Some(TokenKind::Fallthrough),
            "threadlocal" => Some(TokenKind::Threadlocal),
            _ => None,
        },
        _ => None,
    }
}

/// Returns `true` if `text` is a reserved keyword.
#[inline]
pub fn is_keyword(text: &str) -> bool {
    lookup(text).is_some()
}
