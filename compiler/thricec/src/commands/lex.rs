//! `thrice lex`: dump the lexemes of one file.

use std::io::{self, Write};
use std::path::Path;

use thrice_lexer::scan_partial;
use thrice_workspace::{read_source, LoadOptions};

use super::Outcome;
use crate::reporting::{emit_lex_error, emit_load_error};

#[derive(Clone, Debug, Default)]
pub struct LexFileOptions {
    /// Print the span of each lexeme.
    pub spans: bool,
    pub load: LoadOptions,
}

/// Lex a file and display the lexeme stream.
///
/// Lexemes produced before a fatal error are still printed.
pub fn lex_file(
    path: &Path,
    options: &LexFileOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> io::Result<Outcome> {
    let source = match read_source(path, &options.load) {
        Ok(source) => source,
        Err(error) => {
            emit_load_error(err, &error)?;
            return Ok(Outcome::Failure);
        }
    };
    let contents = source.contents();
    let output = scan_partial(contents);

    writeln!(
        out,
        "Lexemes for '{}' ({} lexemes):",
        path.display(),
        output.lexemes.len()
    )?;
    for lexeme in &output.lexemes {
        let text = lexeme.text(contents);
        if options.spans {
            writeln!(out, "  {} '{}' @ {}", lexeme.kind, text.escape_debug(), lexeme.span)?;
        } else {
            writeln!(out, "  {} '{}'", lexeme.kind, text.escape_debug())?;
        }
    }

    match &output.error {
        Some(error) => {
            emit_lex_error(err, path, contents, error)?;
            Ok(Outcome::Failure)
        }
        None => Ok(Outcome::Success),
    }
}
