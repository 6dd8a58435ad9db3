//! Lexing every source of a workspace in parallel.

use thrice_lexer::{scan_partial, LexError, LexOutput, Lexeme};
use thrice_lexer_core::SourceBuffer;
use tracing::debug;

use crate::model::{Source, Workspace};

/// A scanned source: its text, the lexemes, and the error that stopped the
/// scan if there was one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lexical {
    pub contents: SourceBuffer,
    pub lexemes: Vec<Lexeme>,
    pub error: Option<LexError>,
}

impl Lexical {
    pub fn scan(contents: SourceBuffer) -> Self {
        let LexOutput { lexemes, error } = scan_partial(&contents);
        Lexical {
            contents,
            lexemes,
            error,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Scan every source of `workspace` on the rayon thread pool.
#[tracing::instrument(level = "debug", skip_all, fields(root = %workspace.root.display()))]
pub fn lex_workspace(workspace: Workspace<SourceBuffer>) -> Workspace<Lexical> {
    let lexed = workspace.map_par(Lexical::scan);
    debug!(
        sources = lexed.source_count(),
        failures = lexed.failures().len(),
        "workspace lexed"
    );
    lexed
}

impl Workspace<Lexical> {
    /// Sources whose scan failed, ordered by path.
    pub fn failures(&self) -> Vec<&Source<Lexical>> {
        self.sources()
            .into_iter()
            .filter(|source| !source.model.is_ok())
            .collect()
    }

    /// Total number of lexemes across all sources.
    pub fn lexeme_count(&self) -> usize {
        self.sources()
            .iter()
            .map(|source| source.model.lexemes.len())
            .sum()
    }
}

#[cfg(test)]
mod tests;
