use super::*;
use crate::loader::{load, LoadOptions};
use crate::model::Package;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;
use thrice_lexer::{LiteralKind, TokenKind};
use thrice_lexer_core::Location;

#[test]
fn lexes_every_source() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("lib")).unwrap();
    fs::write(dir.path().join("main.tr"), "entrypoint main() {}").unwrap();
    fs::write(dir.path().join("lib/math.tr"), "func add(a: Int) { return a + 1 }").unwrap();

    let workspace = lex_workspace(load(dir.path(), &LoadOptions::default()).unwrap());

    assert!(workspace.failures().is_empty());
    assert_eq!(workspace.source_count(), 2);

    let Some(Package::File(main)) = workspace.packages.get("main") else {
        panic!("main should be a file package");
    };
    let kinds: Vec<TokenKind> = main.model.lexemes.iter().map(|l| l.kind).collect();
    assert_eq!(kinds, [
        TokenKind::Entrypoint,
        TokenKind::Identifier,
        TokenKind::OpeningParenthesis,
        TokenKind::ClosingParenthesis,
        TokenKind::OpeningBrace,
        TokenKind::ClosingBrace,
    ]);
    assert!(main.model.is_ok());
    assert_eq!(workspace.lexeme_count(), 6 + 13);
}

#[test]
fn failures_keep_partial_lexemes() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("bad.tr"), "var s = \"open").unwrap();
    fs::write(dir.path().join("good.tr"), "var x").unwrap();

    let workspace = lex_workspace(load(dir.path(), &LoadOptions::default()).unwrap());
    let bad_path = dir.path().join("bad.tr");

    let failures = workspace.failures();
    assert_eq!(failures.len(), 1);
    let bad = failures[0];
    assert_eq!(bad.path, bad_path);
    assert_eq!(bad.model.error, Some(LexError::UnterminatedLiteral {
        kind: LiteralKind::String,
        location: Location::new(8, 1, 9),
    }));
    assert_eq!(bad.model.lexemes.len(), 3);
    assert!(!bad.model.is_ok());
}

#[test]
fn failures_span_modules_in_path_order() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("lib/deep")).unwrap();
    fs::write(dir.path().join("zeta.tr"), "#{").unwrap();
    fs::write(dir.path().join("lib/deep/alpha.tr"), "x = `raw").unwrap();
    fs::write(dir.path().join("lib/ok.tr"), "y").unwrap();

    let workspace = lex_workspace(load(dir.path(), &LoadOptions::default()).unwrap());

    let failures = workspace.failures();
    let paths: Vec<_> = failures.iter().map(|source| source.path.clone()).collect();
    assert_eq!(paths, [
        dir.path().join("lib/deep/alpha.tr"),
        dir.path().join("zeta.tr"),
    ]);
    assert_eq!(failures[0].model.contents, SourceBuffer::new("x = `raw"));
    assert_eq!(failures[0].name.as_str(), "alpha");
    assert_eq!(failures[1].model.error, Some(LexError::UnterminatedBlockComment {
        location: Location::START,
    }));
}

#[test]
fn lexical_scan_matches_scanner() {
    let contents = SourceBuffer::new("a == b");
    let lexical = Lexical::scan(contents.clone());
    assert_eq!(lexical.contents, contents);
    assert_eq!(lexical.lexemes, thrice_lexer::scan_buffer(&contents).unwrap());
    assert_eq!(lexical.error, None);
}
