//! Source positions and spans.
//!
//! A [`Location`] is an absolute codepoint offset together with its 1-based
//! line and column. A [`Span`] is a pair of locations delimiting a half-open
//! range `[first, last)` of a buffer.
//!
//! Locations are normally produced by the [`Cursor`](crate::Cursor) as it
//! scans. To find the bounds of a line for diagnostics, use [`LineIndex`],
//! which pre-computes line starts.

use std::fmt;

use crate::SourceBuffer;

/// A position in a source buffer.
///
/// `line` and `column` are 1-based; `column` restarts at 1 right after every
/// `'\n'` codepoint.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    /// Absolute codepoint offset from the start of the buffer.
    pub offset: u32,
    pub line: u32,
    pub column: u32,
}

impl Location {
    /// Location of offset 0.
    pub const START: Location = Location {
        offset: 0,
        line: 1,
        column: 1,
    };

    #[inline]
    pub const fn new(offset: u32, line: u32, column: u32) -> Self {
        Location {
            offset,
            line,
            column,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Half-open range `[first, last)` of a source buffer.
///
/// # Invariant
///
/// `first.offset <= last.offset`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub first: Location,
    pub last: Location,
}

impl Span {
    #[inline]
    pub fn new(first: Location, last: Location) -> Self {
        debug_assert!(
            first.offset <= last.offset,
            "span start {} exceeds end {}",
            first.offset,
            last.offset
        );
        Span { first, last }
    }

    /// The codepoints this span covers in `buffer`.
    pub fn contents<'b>(&self, buffer: &'b SourceBuffer) -> &'b [char] {
        buffer.slice(self.first.offset, self.last.offset)
    }

    /// The codepoints this span covers in `buffer`, as a `String`.
    pub fn text(&self, buffer: &SourceBuffer) -> String {
        buffer.text(self.first.offset, self.last.offset)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.first, self.last)
    }
}

/// Pre-computed line start table for finding the bounds of a line.
///
/// # Example
///
/// ```
/// use thrice_lexer_core::{LineIndex, Location, SourceBuffer};
///
/// let buffer = SourceBuffer::new("line1\nline2\nline3");
/// let index = LineIndex::build(&buffer);
///
/// assert_eq!(index.line_start(2), Some(6));
/// assert_eq!(index.line_end(2), Some(11));
/// assert_eq!(index.line_end(3), Some(17));
/// assert_eq!(buffer.location_at(6), Location::new(6, 2, 1));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineIndex {
    /// Offset of each line start: `starts[0] == 0`, `starts[n]` is the
    /// offset right after the n-th newline.
    starts: Vec<u32>,
    /// Length of the indexed buffer, the end of the last line.
    len: u32,
}

impl LineIndex {
    /// Scan `buffer` once for newlines.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "buffer offsets are bounded by SourceBuffer::len, a u32"
    )]
    pub fn build(buffer: &SourceBuffer) -> Self {
        let mut starts = vec![0u32];
        for (i, &c) in buffer.as_chars().iter().enumerate() {
            if c == '\n' {
                starts.push((i + 1) as u32);
            }
        }
        LineIndex {
            starts,
            len: buffer.len(),
        }
    }

    /// Offset of the first codepoint of a 1-based line.
    pub fn line_start(&self, line: u32) -> Option<u32> {
        if line == 0 {
            return None;
        }
        self.starts.get((line - 1) as usize).copied()
    }

    /// Offset one past the last codepoint of a 1-based line, excluding its newline.
    pub fn line_end(&self, line: u32) -> Option<u32> {
        let start = self.line_start(line)?;
        let end = self
            .starts
            .get(line as usize)
            .map_or(self.len, |next| next - 1);
        Some(end.max(start))
    }
}
