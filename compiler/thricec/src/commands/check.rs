//! `thrice check`: load and lex a whole workspace.

use std::io::{self, Write};
use std::path::Path;

use thrice_workspace::{lex_workspace, load, LoadOptions};
use tracing::info;

use super::Outcome;
use crate::reporting::{emit_lex_error, emit_load_error};

/// Check every source under `root`, reporting each failing file.
pub fn check_workspace(
    root: &Path,
    options: &LoadOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> io::Result<Outcome> {
    let workspace = match load(root, options) {
        Ok(workspace) => workspace,
        Err(error) => {
            emit_load_error(err, &error)?;
            return Ok(Outcome::Failure);
        }
    };
    let lexed = lex_workspace(workspace);

    let failures = lexed.failures();
    for source in &failures {
        if let Some(error) = &source.model.error {
            emit_lex_error(err, &source.path, &source.model.contents, error)?;
            writeln!(err)?;
        }
    }

    let sources = lexed.source_count();
    let lexemes = lexed.lexeme_count();
    info!(sources, lexemes, errors = failures.len(), "check finished");
    writeln!(
        out,
        "{sources} {}, {lexemes} {}, {} {}",
        plural(sources, "source", "sources"),
        plural(lexemes, "lexeme", "lexemes"),
        failures.len(),
        plural(failures.len(), "error", "errors"),
    )?;

    if failures.is_empty() {
        Ok(Outcome::Success)
    } else {
        Ok(Outcome::Failure)
    }
}

fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 {
        one
    } else {
        many
    }
}
