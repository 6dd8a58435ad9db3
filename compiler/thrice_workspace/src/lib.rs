//! Thrice workspaces: loading source trees from disk and lexing them.
//!
//! A workspace is a root directory. Each `.tr` file in it is a file
//! package; each subdirectory is a directory package whose `.tr` files are
//! sources and whose subdirectories are submodules. File stems and
//! directory names must be valid [`PhysicalName`]s.
//!
//! ```no_run
//! use std::path::Path;
//! use thrice_workspace::{lex_workspace, load, LoadOptions};
//!
//! let workspace = load(Path::new("src"), &LoadOptions::default())?;
//! let lexed = lex_workspace(workspace);
//! for source in lexed.failures() {
//!     if let Some(error) = &source.model.error {
//!         eprintln!("{}: {error}", source.path.display());
//!     }
//! }
//! # Ok::<(), thrice_workspace::LoadError>(())
//! ```

mod lex;
mod loader;
mod model;
mod physical_name;

pub use lex::{lex_workspace, Lexical};
pub use loader::{load, read_source, LoadError, LoadOptions};
pub use model::{Module, Package, Source, Workspace};
pub use physical_name::{InvalidNameError, PhysicalName};
