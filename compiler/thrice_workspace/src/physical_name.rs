//! Validated names of packages, modules and sources.
//!
//! A physical name is what a file stem or directory name must look like to
//! be addressable from Thrice code: a lowercase ASCII letter followed by
//! lowercase ASCII letters or digits. A keyword can be used by escaping it
//! with a trailing underscore (`if_`), the same way the scanner escapes
//! keywords in source.

use std::borrow::Borrow;
use std::fmt;

use thrice_lexer::is_keyword;

/// Why a name is not a valid physical name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidNameError {
    #[error("name is empty")]
    Empty,

    #[error("`{name}` ends with `_` but `{}` is not a keyword", unescaped(.name))]
    NotAnEscapedKeyword { name: String },

    #[error("`{name}` must start with a lowercase ASCII letter, not {initial:?}")]
    InvalidInitial { name: String, initial: char },

    #[error("`{name}` contains {character:?} at {index}; only lowercase ASCII letters and digits are allowed")]
    InvalidCharacter {
        name: String,
        character: char,
        index: usize,
    },
}

/// A validated package, module or source name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhysicalName(String);

impl PhysicalName {
    pub fn new(name: &str) -> Result<Self, InvalidNameError> {
        check(name)?;
        Ok(PhysicalName(name.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn unescaped(name: &str) -> &str {
    name.strip_suffix('_').unwrap_or(name)
}

fn check(name: &str) -> Result<(), InvalidNameError> {
    if name.is_empty() {
        return Err(InvalidNameError::Empty);
    }
    if let Some(prefix) = name.strip_suffix('_') {
        if !is_keyword(prefix) {
            return Err(InvalidNameError::NotAnEscapedKeyword {
                name: name.to_owned(),
            });
        }
        return Ok(());
    }

    let mut chars = name.char_indices();
    if let Some((_, initial)) = chars.next() {
        if !initial.is_ascii_lowercase() {
            return Err(InvalidNameError::InvalidInitial {
                name: name.to_owned(),
                initial,
            });
        }
    }
    for (index, character) in chars {
        if !(character.is_ascii_lowercase() || character.is_ascii_digit()) {
            return Err(InvalidNameError::InvalidCharacter {
                name: name.to_owned(),
                character,
                index,
            });
        }
    }
    Ok(())
}

impl fmt::Display for PhysicalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for PhysicalName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests;
