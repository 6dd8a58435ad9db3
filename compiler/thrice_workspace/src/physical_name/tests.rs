use super::*;
use pretty_assertions::assert_eq;

#[test]
fn plain_names() {
    for name in ["main", "io", "utf8", "a", "x2y"] {
        let physical = PhysicalName::new(name).unwrap();
        assert_eq!(physical.as_str(), name);
    }
}

#[test]
fn escaped_keywords() {
    for name in ["if_", "struct_", "threadlocal_"] {
        let physical = PhysicalName::new(name).unwrap();
        assert_eq!(physical.as_str(), name);
    }
}

#[test]
fn bare_keywords_are_accepted() {
    assert!(PhysicalName::new("return").is_ok());
}

#[test]
fn empty() {
    assert_eq!(PhysicalName::new(""), Err(InvalidNameError::Empty));
}

#[test]
fn underscore_requires_keyword_prefix() {
    assert_eq!(
        PhysicalName::new("main_"),
        Err(InvalidNameError::NotAnEscapedKeyword {
            name: "main_".to_owned()
        })
    );
    assert!(PhysicalName::new("_").is_err());
    assert!(PhysicalName::new("if__").is_err());
}

#[test]
fn initial_must_be_lowercase_letter() {
    assert_eq!(
        PhysicalName::new("Main"),
        Err(InvalidNameError::InvalidInitial {
            name: "Main".to_owned(),
            initial: 'M'
        })
    );
    assert!(PhysicalName::new("2d").is_err());
}

#[test]
fn body_is_lowercase_letters_and_digits() {
    assert_eq!(
        PhysicalName::new("my-lib"),
        Err(InvalidNameError::InvalidCharacter {
            name: "my-lib".to_owned(),
            character: '-',
            index: 2
        })
    );
    assert!(PhysicalName::new("myLib").is_err());
    assert!(PhysicalName::new("snake_case").is_err());
    assert!(PhysicalName::new("caf\u{e9}").is_err());
}

#[test]
fn error_messages() {
    assert_eq!(
        PhysicalName::new("main_").unwrap_err().to_string(),
        "`main_` ends with `_` but `main` is not a keyword"
    );
    assert_eq!(
        PhysicalName::new("Main").unwrap_err().to_string(),
        "`Main` must start with a lowercase ASCII letter, not 'M'"
    );
}

#[test]
fn display_and_borrow() {
    let name = PhysicalName::new("core").unwrap();
    assert_eq!(name.to_string(), "core");
    let borrowed: &str = name.borrow();
    assert_eq!(borrowed, "core");
}
