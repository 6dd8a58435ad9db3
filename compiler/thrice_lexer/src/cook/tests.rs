use super::*;
use pretty_assertions::assert_eq;

// === Characters ===

#[test]
fn plain_character() {
    assert_eq!(cook_character("'a'"), Ok('a'));
    assert_eq!(cook_character("'\u{3BB}'"), Ok('\u{3BB}'));
}

#[test]
fn escaped_delimiters() {
    assert_eq!(cook_character(r"'\''"), Ok('\''));
    assert_eq!(cook_character(r"'\\'"), Ok('\\'));
    assert_eq!(cook_character(r#"'\"'"#), Ok('"'));
    assert_eq!(cook_character(r"'\`'"), Ok('`'));
}

#[test]
fn hex_escapes() {
    assert_eq!(cook_character(r"'\a'"), Ok('\n'));
    assert_eq!(cook_character(r"'\41'"), Ok('A'));
    assert_eq!(cook_character(r"'\0001F600'"), Ok('\u{1F600}'));
}

#[test]
fn surrogate_is_invalid_codepoint() {
    assert_eq!(
        cook_character(r"'\D800'"),
        Err(CookError::InvalidCodepoint {
            digits: "D800".to_owned()
        })
    );
    assert!(matches!(
        cook_character(r"'\110000'"),
        Err(CookError::InvalidCodepoint { .. })
    ));
}

#[test]
fn malformed_characters() {
    for text in ["''", "'ab'", "'a", "a'", r"'\'", r"'\q'", r"'\123456789'"] {
        assert!(
            matches!(cook_character(text), Err(CookError::Malformed { .. })),
            "{text}"
        );
    }
}

// === Strings ===

#[test]
fn strings() {
    assert_eq!(cook_string(r#""""#), Ok(String::new()));
    assert_eq!(cook_string(r#""hello""#), Ok("hello".to_owned()));
    assert_eq!(cook_string(r#""say \"hi\"\a""#), Ok("say \"hi\"\n".to_owned()));
}

#[test]
fn hex_run_is_greedy() {
    assert_eq!(cook_string(r#""\41BC""#), Ok("\u{41BC}".to_owned()));
    assert_eq!(cook_string(r#""\41 BC""#), Ok("A BC".to_owned()));
}

#[test]
fn raw_strings_are_verbatim() {
    assert_eq!(cook_raw_string(r"`a\b`"), Ok(r"a\b".to_owned()));
    assert_eq!(cook_raw_string("`line\nline`"), Ok("line\nline".to_owned()));
    assert!(cook_raw_string("`").is_err());
}

// === Decimals ===

#[test]
fn integral_decimal() {
    let decimal = cook_decimal("1_000").unwrap();
    assert_eq!(
        decimal,
        DecimalLiteral {
            integer: "1000".to_owned(),
            fraction: None,
            exponent: None,
        }
    );
    assert_eq!(decimal.to_f64(), 1000.0);
}

#[test]
fn fractional_decimal_with_exponent() {
    let decimal = cook_decimal("1.5e1_0").unwrap();
    assert_eq!(decimal.integer, "1");
    assert_eq!(decimal.fraction.as_deref(), Some("5"));
    assert_eq!(decimal.exponent.as_deref(), Some("10"));
    assert_eq!(decimal.to_f64(), 1.5e10);
}

#[test]
fn upper_case_exponent() {
    let decimal = cook_decimal("2E3").unwrap();
    assert_eq!(decimal.exponent.as_deref(), Some("3"));
    assert_eq!(decimal.to_f64(), 2000.0);
}

#[test]
fn malformed_decimals() {
    for text in ["", "x", "1.", "1e", ".5", "1.2.3", "_1"] {
        assert!(cook_decimal(text).is_err(), "{text}");
    }
}

// === Dispatch ===

#[test]
fn cook_dispatches_by_kind() {
    assert_eq!(
        cook(TokenKind::Character, "'x'"),
        Ok(Some(LiteralValue::Character('x')))
    );
    assert_eq!(
        cook(TokenKind::RawString, "`x`"),
        Ok(Some(LiteralValue::RawString("x".to_owned())))
    );
    assert_eq!(cook(TokenKind::Identifier, "x"), Ok(None));
    assert_eq!(cook(TokenKind::Plus, "+"), Ok(None));
}
