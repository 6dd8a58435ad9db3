use super::*;
use pretty_assertions::assert_eq;
use thrice_lexer_core::SourceBuffer;

#[test]
fn table_is_sorted_longest_first() {
    let lengths: Vec<usize> = MARKS.iter().map(|(mark, _)| mark.chars().count()).collect();
    let mut sorted = lengths.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(lengths, sorted);
}

#[test]
fn table_has_unique_strings_and_kinds() {
    for (i, (mark, kind)) in MARKS.iter().enumerate() {
        for (other_mark, other_kind) in &MARKS[i + 1..] {
            assert_ne!(mark, other_mark);
            assert_ne!(kind, other_kind);
        }
    }
    assert_eq!(MARKS.len(), 38);
}

#[test]
fn lookup_exact_strings() {
    assert_eq!(lookup_mark("=="), Some(TokenKind::EqualsEquals));
    assert_eq!(lookup_mark("="), Some(TokenKind::Equals));
    assert_eq!(lookup_mark("<="), Some(TokenKind::LeftArrowEquals));
    assert_eq!(lookup_mark("'"), Some(TokenKind::Prime));
    assert_eq!(lookup_mark("\""), Some(TokenKind::Quote));
    assert_eq!(lookup_mark("`"), Some(TokenKind::Backtick));
    assert_eq!(lookup_mark("==="), None);
    assert_eq!(lookup_mark("?"), None);
    assert_eq!(lookup_mark(""), None);
}

fn eat(source: &str) -> (Option<TokenKind>, u32) {
    let buffer = SourceBuffer::new(source);
    let mut cursor = buffer.cursor();
    let kind = eat_mark(&mut cursor);
    (kind, cursor.pos())
}

#[test]
fn eat_prefers_longest() {
    assert_eq!(eat("=="), (Some(TokenKind::EqualsEquals), 2));
    assert_eq!(eat("==="), (Some(TokenKind::EqualsEquals), 2));
    assert_eq!(eat("<=x"), (Some(TokenKind::LeftArrowEquals), 2));
    assert_eq!(eat("<x"), (Some(TokenKind::LeftArrow), 1));
    assert_eq!(eat("!"), (Some(TokenKind::Exclamation), 1));
}

#[test]
fn eat_skips_literal_delimiters() {
    assert_eq!(eat("'a'"), (None, 0));
    assert_eq!(eat("\"s\""), (None, 0));
    assert_eq!(eat("`r`"), (None, 0));
}

#[test]
fn eat_rejects_non_marks() {
    assert_eq!(eat("?"), (None, 0));
    assert_eq!(eat("a"), (None, 0));
    assert_eq!(eat(""), (None, 0));
}
