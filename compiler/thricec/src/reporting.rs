//! Diagnostic rendering.
//!
//! Lexer errors are shown with the offending source line and a caret under
//! the error column:
//!
//! ```text
//! error: unterminated string literal
//!  --> src/main.tr:3:9
//!   |
//! 3 |     x = "abc
//!   |         ^
//!   = help: add a closing `"`
//! ```

use std::io::{self, Write};
use std::path::Path;

use thrice_lexer::LexError;
use thrice_lexer_core::SourceBuffer;
use thrice_workspace::LoadError;

/// Write a lexer error with its source context.
pub fn emit_lex_error(
    w: &mut dyn Write,
    path: &Path,
    contents: &SourceBuffer,
    error: &LexError,
) -> io::Result<()> {
    let location = error.location();
    let index = contents.line_index();
    let line_text = index
        .line_start(location.line)
        .zip(index.line_end(location.line))
        .map(|(start, end)| contents.text(start, end))
        .unwrap_or_default();

    let line_number = location.line.to_string();
    let gutter = " ".repeat(line_number.len());
    let caret_pad = " ".repeat(location.column.saturating_sub(1) as usize);

    writeln!(w, "error: {error}")?;
    writeln!(w, "{gutter}--> {}:{location}", path.display())?;
    writeln!(w, "{gutter} |")?;
    writeln!(w, "{line_number} | {line_text}")?;
    writeln!(w, "{gutter} | {caret_pad}^")?;
    writeln!(w, "{gutter} = help: {}", error.help())?;
    Ok(())
}

/// Write a loader error.
pub fn emit_load_error(w: &mut dyn Write, error: &LoadError) -> io::Result<()> {
    writeln!(w, "error: {error}")
}
