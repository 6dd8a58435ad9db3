//! The workspace tree: packages, modules and sources.
//!
//! The tree is generic over the per-source model `M`. Loading produces a
//! `Workspace<SourceBuffer>`; lexing maps it into a `Workspace<Lexical>`
//! without changing its shape.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::PhysicalName;

/// One source file and its model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Source<M> {
    pub path: PathBuf,
    pub name: PhysicalName,
    pub model: M,
}

impl<M> Source<M> {
    pub fn new(path: impl Into<PathBuf>, name: PhysicalName, model: M) -> Self {
        Source {
            path: path.into(),
            name,
            model,
        }
    }

    /// Replace the model, keeping path and name.
    pub fn map<N>(self, f: impl FnOnce(M) -> N) -> Source<N> {
        Source {
            path: self.path,
            name: self.name,
            model: f(self.model),
        }
    }
}

/// A directory of sources and submodules.
///
/// Loaded modules are never empty: a directory with neither sources nor
/// non-empty submodules is dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Module<M> {
    pub path: PathBuf,
    pub name: PhysicalName,
    pub sources: FxHashMap<PhysicalName, Source<M>>,
    pub submodules: FxHashMap<PhysicalName, Module<M>>,
}

impl<M> Module<M> {
    pub fn new(path: impl Into<PathBuf>, name: PhysicalName) -> Self {
        Module {
            path: path.into(),
            name,
            sources: FxHashMap::default(),
            submodules: FxHashMap::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty() && self.submodules.is_empty()
    }

    /// Every source in this module and its submodules.
    pub fn all_sources(&self) -> Vec<&Source<M>> {
        let mut sources = Vec::new();
        self.collect_sources(&mut sources);
        sources
    }

    fn collect_sources<'m>(&'m self, out: &mut Vec<&'m Source<M>>) {
        out.extend(self.sources.values());
        for submodule in self.submodules.values() {
            submodule.collect_sources(out);
        }
    }

    /// Map every source model in parallel.
    pub fn map_par<N, F>(self, f: &F) -> Module<N>
    where
        M: Send,
        N: Send,
        F: Fn(M) -> N + Sync,
    {
        let Module {
            path,
            name,
            sources,
            submodules,
        } = self;
        let (sources, submodules) = rayon::join(
            || {
                sources
                    .into_par_iter()
                    .map(|(name, source)| (name, source.map(f)))
                    .collect()
            },
            || {
                submodules
                    .into_par_iter()
                    .map(|(name, module)| (name, module.map_par(f)))
                    .collect()
            },
        );
        Module {
            path,
            name,
            sources,
            submodules,
        }
    }
}

/// A top-level entry of a workspace: a single file or a directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Package<M> {
    File(Source<M>),
    Directory(Module<M>),
}

impl<M> Package<M> {
    pub fn name(&self) -> &PhysicalName {
        match self {
            Package::File(source) => &source.name,
            Package::Directory(module) => &module.name,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Package::File(source) => &source.path,
            Package::Directory(module) => &module.path,
        }
    }

    fn map_par<N, F>(self, f: &F) -> Package<N>
    where
        M: Send,
        N: Send,
        F: Fn(M) -> N + Sync,
    {
        match self {
            Package::File(source) => Package::File(source.map(f)),
            Package::Directory(module) => Package::Directory(module.map_par(f)),
        }
    }
}

/// All packages found under one root directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Workspace<M> {
    pub root: PathBuf,
    pub packages: FxHashMap<PhysicalName, Package<M>>,
}

impl<M> Workspace<M> {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Workspace {
            root: root.into(),
            packages: FxHashMap::default(),
        }
    }

    /// Every source in the workspace, ordered by path.
    pub fn sources(&self) -> Vec<&Source<M>> {
        let mut sources = Vec::new();
        for package in self.packages.values() {
            match package {
                Package::File(source) => sources.push(source),
                Package::Directory(module) => module.collect_sources(&mut sources),
            }
        }
        sources.sort_by(|a, b| a.path.cmp(&b.path));
        sources
    }

    pub fn source_count(&self) -> usize {
        self.packages
            .values()
            .map(|package| match package {
                Package::File(_) => 1,
                Package::Directory(module) => module.all_sources().len(),
            })
            .sum()
    }

    /// Map every source model in parallel, keeping the tree shape.
    pub fn map_par<N, F>(self, f: F) -> Workspace<N>
    where
        M: Send,
        N: Send,
        F: Fn(M) -> N + Sync,
    {
        let packages = self
            .packages
            .into_par_iter()
            .map(|(name, package)| (name, package.map_par(&f)))
            .collect();
        Workspace {
            root: self.root,
            packages,
        }
    }
}
