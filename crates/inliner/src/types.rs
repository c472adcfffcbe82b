//! Shared type definitions for the inliner crate
//!
//! This module contains common types that are used across multiple components
//! of the transformer, ensuring consistency and avoiding circular dependencies.

use std::{
    hash::BuildHasherDefault,
    path::{Path, PathBuf},
};

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHasher;

pub type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;
pub type FxIndexSet<T> = IndexSet<T, BuildHasherDefault<FxHasher>>;

/// What the resolution service knows about a dotted module path
///
/// Only `Source` and `Namespace` carry a location inside the project, so they
/// are the only origins that can ever fall under the transform boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ModuleOrigin {
    /// A module file (`foo.py`) or a regular package (`foo/__init__.py`)
    Source(PathBuf),

    /// A namespace package: a directory without `__init__.py`
    Namespace(PathBuf),

    /// Python standard library modules (e.g., os, sys, json)
    Intrinsic,

    /// Third-party packages installed via pip/conda (e.g., numpy, requests)
    External,
}

impl ModuleOrigin {
    /// Backing location of the module inside the project, if any
    pub fn location(&self) -> Option<&Path> {
        match self {
            Self::Source(path) | Self::Namespace(path) => Some(path),
            Self::Intrinsic | Self::External => None,
        }
    }

    /// Check if this is a standard library module
    pub fn is_intrinsic(&self) -> bool {
        matches!(self, Self::Intrinsic)
    }

    /// Check if the origin is a regular package, i.e. backed by `__init__.py`
    pub fn is_package(&self) -> bool {
        match self {
            Self::Source(path) => path.file_name().is_some_and(|name| name == "__init__.py"),
            Self::Namespace(_) => true,
            Self::Intrinsic | Self::External => false,
        }
    }
}

impl std::fmt::Display for ModuleOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Source(path) => write!(f, "source {}", path.display()),
            Self::Namespace(path) => write!(f, "namespace {}", path.display()),
            Self::Intrinsic => write!(f, "stdlib"),
            Self::External => write!(f, "third-party"),
        }
    }
}
