//! Loading a workspace from disk.
//!
//! Every entry of the root directory becomes a package: a file with the
//! source extension is a file package, a directory is a directory package
//! loaded recursively. Other files are skipped, as are hidden entries
//! (names starting with `.`). Directories that end up with no sources are
//! dropped.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thrice_lexer_core::{SourceBuffer, SourceFile};
use tracing::{debug, trace};

use crate::model::{Module, Package, Source, Workspace};
use crate::{InvalidNameError, PhysicalName};

/// Loader configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadOptions {
    /// Extension of source files, without the dot.
    pub extension: String,
    /// Replace `\r\n` with `\n` before decoding.
    pub normalize_line_endings: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions {
            extension: "tr".to_owned(),
            normalize_line_endings: true,
        }
    }
}

/// Failure to load a workspace or source.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("{}", read_message(.path, .source))]
    Io { path: PathBuf, source: io::Error },

    #[error("`{}` is not a directory", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("invalid name for `{}`: {source}", .path.display())]
    InvalidName {
        path: PathBuf,
        source: InvalidNameError,
    },

    #[error("`{}` has a name that is not valid UTF-8", .path.display())]
    NonUtf8Name { path: PathBuf },

    #[error("`{}` and `{}` both define `{name}`", .first.display(), .second.display())]
    DuplicateName {
        name: PhysicalName,
        first: PathBuf,
        second: PathBuf,
    },
}

impl LoadError {
    /// The path the error is about.
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Io { path, .. }
            | LoadError::NotADirectory { path }
            | LoadError::InvalidName { path, .. }
            | LoadError::NonUtf8Name { path } => path,
            LoadError::DuplicateName { second, .. } => second,
        }
    }
}

fn read_message(path: &Path, err: &io::Error) -> String {
    let path = path.display();
    match err.kind() {
        io::ErrorKind::NotFound => format!("cannot find '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {err}"),
    }
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> LoadError + '_ {
    move |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Load every package under `root`.
#[tracing::instrument(level = "debug", skip_all, fields(root = %root.display()))]
pub fn load(root: &Path, options: &LoadOptions) -> Result<Workspace<SourceBuffer>, LoadError> {
    if !root.is_dir() {
        return Err(LoadError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let mut workspace = Workspace::new(root);
    for path in entries(root)? {
        let package = if path.is_dir() {
            load_module(&path, options)?.map(Package::Directory)
        } else {
            load_source(&path, options)?.map(Package::File)
        };
        if let Some(package) = package {
            insert_unique(&mut workspace.packages, package.name().clone(), package, |p| {
                p.path().to_path_buf()
            })?;
        }
    }
    debug!(packages = workspace.packages.len(), "workspace loaded");
    Ok(workspace)
}

/// Read and validate a single source file.
///
/// Unlike [`load`], this does not check the extension.
pub fn read_source(path: &Path, options: &LoadOptions) -> Result<SourceFile, LoadError> {
    let name = physical_name(path, file_stem(path)?)?;
    let contents = read_contents(path, options)?;
    Ok(SourceFile::new(name.as_str(), path, contents))
}

fn load_module(
    path: &Path,
    options: &LoadOptions,
) -> Result<Option<Module<SourceBuffer>>, LoadError> {
    let dir_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| LoadError::NonUtf8Name {
            path: path.to_path_buf(),
        })?;
    let mut module = Module::new(path, physical_name(path, dir_name)?);

    for entry in entries(path)? {
        if entry.is_dir() {
            if let Some(submodule) = load_module(&entry, options)? {
                insert_unique(
                    &mut module.submodules,
                    submodule.name.clone(),
                    submodule,
                    |m| m.path.clone(),
                )?;
            }
        } else if let Some(source) = load_source(&entry, options)? {
            insert_unique(&mut module.sources, source.name.clone(), source, |s| {
                s.path.clone()
            })?;
        }
    }

    if module.is_empty() {
        debug!(path = %path.display(), "skipping empty module");
        return Ok(None);
    }
    Ok(Some(module))
}

fn load_source(
    path: &Path,
    options: &LoadOptions,
) -> Result<Option<Source<SourceBuffer>>, LoadError> {
    if path.extension().and_then(|ext| ext.to_str()) != Some(options.extension.as_str()) {
        debug!(path = %path.display(), "skipping non-source file");
        return Ok(None);
    }
    let name = physical_name(path, file_stem(path)?)?;
    let contents = read_contents(path, options)?;
    trace!(path = %path.display(), len = contents.len(), "loaded source");
    Ok(Some(Source::new(path, name, contents)))
}

fn read_contents(path: &Path, options: &LoadOptions) -> Result<SourceBuffer, LoadError> {
    let text = fs::read_to_string(path).map_err(io_error(path))?;
    if options.normalize_line_endings && text.contains("\r\n") {
        return Ok(SourceBuffer::new(&text.replace("\r\n", "\n")));
    }
    Ok(SourceBuffer::new(&text))
}

/// Non-hidden directory entries, sorted so loading order is stable.
fn entries(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error(dir))? {
        let path = entry.map_err(io_error(dir))?.path();
        let hidden = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with('.'));
        if hidden {
            trace!(path = %path.display(), "skipping hidden entry");
            continue;
        }
        paths.push(path);
    }
    paths.sort();
    Ok(paths)
}

fn file_stem(path: &Path) -> Result<&str, LoadError> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| LoadError::NonUtf8Name {
            path: path.to_path_buf(),
        })
}

fn physical_name(path: &Path, name: &str) -> Result<PhysicalName, LoadError> {
    PhysicalName::new(name).map_err(|source| LoadError::InvalidName {
        path: path.to_path_buf(),
        source,
    })
}

fn insert_unique<T>(
    map: &mut rustc_hash::FxHashMap<PhysicalName, T>,
    name: PhysicalName,
    value: T,
    path_of: impl Fn(&T) -> PathBuf,
) -> Result<(), LoadError> {
    if let Some(existing) = map.get(&name) {
        return Err(LoadError::DuplicateName {
            first: path_of(existing),
            second: path_of(&value),
            name,
        });
    }
    map.insert(name, value);
    Ok(())
}
