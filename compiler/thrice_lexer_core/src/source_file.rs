//! A loaded source file: name, path and decoded contents.

use std::path::{Path, PathBuf};

use crate::SourceBuffer;

/// One source file as handed to the scanner.
///
/// `name` is the file stem (the module-level name of the source), `path`
/// is where it was loaded from. The scanner only reads `contents`; the other
/// fields travel along for diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    name: String,
    path: PathBuf,
    contents: SourceBuffer,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, contents: SourceBuffer) -> Self {
        SourceFile {
            name: name.into(),
            path: path.into(),
            contents,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn contents(&self) -> &SourceBuffer {
        &self.contents
    }
}
