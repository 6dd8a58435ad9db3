//! Command handlers for the `thrice` CLI.
//!
//! Handlers write regular output to `out` and diagnostics to `err`, and
//! report whether the command succeeded; the binary maps that to an exit
//! status.

mod check;
mod lex;

pub use check::check_workspace;
pub use lex::{lex_file, LexFileOptions};

/// Whether a command found problems in its input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}
