//! Property-based tests for the scanner.
//!
//! Arbitrary input checks the structural guarantees (coverage, ordering,
//! determinism, position bookkeeping). Generated token sequences check
//! that well-formed source scans back into exactly the tokens it was
//! built from, whatever skippable text separates them.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use thrice_lexer::{
    is_literal_delimiter, lookup_keyword, scan_buffer, scan_partial, TokenKind, KEYWORDS, MARKS,
};
use thrice_lexer_core::SourceBuffer;

// -- Input Strategies --

/// Source text biased towards the codepoints the scanner cares about.
fn lexically_dense_source() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9_ #{}()'\"`\\\\.=<>!^*/+&|$~,:;@eE?\n\t]{0,120}")
        .expect("valid regex")
}

fn any_source() -> impl Strategy<Value = String> {
    prop_oneof![
        lexically_dense_source(),
        prop::string::string_regex("(?s).{0,80}").expect("valid regex"),
    ]
}

/// One well-formed token with the kind it must scan as.
fn token_strategy() -> impl Strategy<Value = (String, TokenKind)> {
    let marks: Vec<(&'static str, TokenKind)> = MARKS
        .iter()
        .copied()
        .filter(|(mark, _)| !mark.starts_with(is_literal_delimiter))
        .collect();

    prop_oneof![
        prop::sample::select(KEYWORDS).prop_map(|(text, kind)| (text.to_owned(), kind)),
        prop::sample::select(KEYWORDS)
            .prop_map(|(text, _)| (format!("{text}_"), TokenKind::Identifier)),
        prop::sample::select(marks).prop_map(|(text, kind)| (text.to_owned(), kind)),
        "[a-zA-Z]{1,10}".prop_map(|word| {
            let kind = if word.starts_with(|c: char| c.is_ascii_uppercase()) {
                TokenKind::Identifier
            } else {
                lookup_keyword(&word).unwrap_or(TokenKind::Identifier)
            };
            (word, kind)
        }),
        "[0-9][0-9_]{0,5}(\\.[0-9][0-9_]{0,3})?([eE][0-9]{1,2})?"
            .prop_map(|text| (text, TokenKind::Decimal)),
        "'([a-z ]|\\\\[\\\\'\"`]|\\\\[0-9a-f]{1,8})'".prop_map(|text| (text, TokenKind::Character)),
        "\"([a-z #{}]|\\\\[\\\\'\"`]|\\\\[0-9a-f]{1,8} )*\"".prop_map(|text| (text, TokenKind::String)),
        "`[^`]{0,12}`".prop_map(|text| (text, TokenKind::RawString)),
    ]
}

fn separator_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![" ", "   ", " #{ block }# ", " # line\n", "#{\n}#"])
}

// -- Structural Properties --

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn spans_are_ordered_and_in_bounds(source in any_source()) {
        let buffer = SourceBuffer::new(&source);
        let output = scan_partial(&buffer);
        let mut previous_end = 0;
        for lexeme in &output.lexemes {
            prop_assert!(lexeme.span.first.offset >= previous_end);
            prop_assert!(lexeme.span.first.offset < lexeme.span.last.offset);
            prop_assert!(lexeme.span.last.offset <= buffer.len());
            previous_end = lexeme.span.last.offset;
        }
    }

    #[test]
    fn gaps_are_only_spaces_and_comments(source in any_source()) {
        let buffer = SourceBuffer::new(&source);
        let output = scan_partial(&buffer);
        let mut boundaries: Vec<(u32, u32)> = Vec::new();
        let mut previous_end = 0;
        for lexeme in &output.lexemes {
            boundaries.push((previous_end, lexeme.span.first.offset));
            previous_end = lexeme.span.last.offset;
        }
        if output.error.is_none() {
            boundaries.push((previous_end, buffer.len()));
        }
        for (start, end) in boundaries {
            let gap = buffer.text(start, end);
            let rescanned = scan_buffer(&SourceBuffer::new(&gap));
            prop_assert_eq!(rescanned, Ok(Vec::new()), "gap {:?}", gap);
        }
    }

    #[test]
    fn scanning_is_deterministic(source in any_source()) {
        let buffer = SourceBuffer::new(&source);
        prop_assert_eq!(scan_partial(&buffer), scan_partial(&buffer));
    }

    #[test]
    fn lexeme_count_is_bounded_by_length(source in any_source()) {
        let buffer = SourceBuffer::new(&source);
        let output = scan_partial(&buffer);
        prop_assert!(output.lexemes.len() <= buffer.len() as usize);
    }

    #[test]
    fn locations_agree_with_recount(source in lexically_dense_source()) {
        let buffer = SourceBuffer::new(&source);
        let output = scan_partial(&buffer);
        for lexeme in &output.lexemes {
            prop_assert_eq!(lexeme.span.first, buffer.location_at(lexeme.span.first.offset));
            prop_assert_eq!(lexeme.span.last, buffer.location_at(lexeme.span.last.offset));
        }
        if let Some(error) = &output.error {
            let location = error.location();
            prop_assert_eq!(location, buffer.location_at(location.offset));
        }
    }

    #[test]
    fn errors_come_after_every_lexeme(source in lexically_dense_source()) {
        let buffer = SourceBuffer::new(&source);
        let output = scan_partial(&buffer);
        if let (Some(error), Some(last)) = (&output.error, output.lexemes.last()) {
            prop_assert!(error.location().offset >= last.span.last.offset);
        }
    }
}

// -- Generated Token Streams --

proptest! {
    #[test]
    fn well_formed_tokens_scan_back(
        tokens in prop::collection::vec(token_strategy(), 0..24),
        separator in separator_strategy(),
    ) {
        let texts: Vec<&str> = tokens.iter().map(|(text, _)| text.as_str()).collect();
        let source = texts.join(separator);
        let buffer = SourceBuffer::new(&source);

        let lexemes = scan_buffer(&buffer).unwrap();
        let scanned: Vec<(String, TokenKind)> = lexemes
            .iter()
            .map(|lexeme| (lexeme.text(&buffer), lexeme.kind))
            .collect();
        prop_assert_eq!(scanned, tokens);
    }

    #[test]
    fn cooked_literals_decode(tokens in prop::collection::vec(token_strategy(), 1..12)) {
        let texts: Vec<&str> = tokens.iter().map(|(text, _)| text.as_str()).collect();
        let source = texts.join(" ");
        let buffer = SourceBuffer::new(&source);

        for lexeme in scan_buffer(&buffer).unwrap() {
            let cooked = lexeme.cook(&buffer);
            if lexeme.kind.is_literal() {
                // Hex escapes may still name a surrogate; everything else cooks
                if let Err(error) = cooked {
                    prop_assert!(
                        matches!(error, thrice_lexer::CookError::InvalidCodepoint { .. }),
                        "{} failed: {}", lexeme.text(&buffer), error
                    );
                }
            } else {
                prop_assert_eq!(cooked, Ok(None));
            }
        }
    }
}
