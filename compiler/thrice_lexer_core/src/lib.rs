//! Low-level building blocks for the Thrice scanner.
//!
//! This crate owns everything the scanner needs that is not about token
//! classification:
//!
//! - [`SourceBuffer`]: an immutable, sentinel-terminated sequence of Unicode
//!   codepoints holding one source file.
//! - [`Cursor`]: a `Copy` read head over a buffer that keeps line and column
//!   counters up to date as it advances, so snapshots double as backtrack points.
//! - [`Location`] / [`Span`]: 1-based source positions and the spans built from them.
//! - [`LineIndex`]: random-access offset to location lookup for diagnostics.
//! - [`SourceFile`]: a named, path-carrying buffer as handed to the scanner.
//!
//! All offsets are codepoint offsets, never byte offsets.

mod cursor;
mod location;
mod source_buffer;
mod source_file;

pub use cursor::Cursor;
pub use location::{LineIndex, Location, Span};
pub use source_buffer::SourceBuffer;
pub use source_file::SourceFile;
