//! State container for one import transform run
//!
//! A fresh [`TransformState`] is created for every file transform and for
//! every recursively embedded dependency, so "embed once" holds per tracking
//! scope rather than across the whole dependency closure.

use std::path::{Path, PathBuf};

use crate::types::FxIndexSet;

/// Tracking for one Python scope: the module body, or a function/class body
#[derive(Debug, Clone, Default)]
pub(crate) struct ScopeState {
    /// Dotted paths whose source has already been executed into a namespace
    initialized: FxIndexSet<String>,
    /// Whether `import types` has already been emitted
    helper_imported: bool,
}

#[derive(Debug)]
pub struct TransformState {
    boundary: PathBuf,
    scope: ScopeState,
    modified: bool,
}

impl TransformState {
    pub fn new(boundary: PathBuf) -> Self {
        Self {
            boundary,
            scope: ScopeState::default(),
            modified: false,
        }
    }

    pub fn boundary(&self) -> &Path {
        &self.boundary
    }

    /// Whether any statement has been replaced so far
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub(crate) fn mark_modified(&mut self) {
        self.modified = true;
    }

    pub(crate) fn is_initialized(&self, module_path: &str) -> bool {
        self.scope.initialized.contains(module_path)
    }

    pub(crate) fn mark_initialized(&mut self, module_path: &str) {
        self.scope.initialized.insert(module_path.to_owned());
    }

    /// Returns `true` exactly once per scope: the caller must then emit the
    /// namespace helper import
    pub(crate) fn take_helper_import(&mut self) -> bool {
        !std::mem::replace(&mut self.scope.helper_imported, true)
    }

    /// Start tracking a nested scope, returning the enclosing one
    pub(crate) fn enter_nested_scope(&mut self) -> ScopeState {
        std::mem::take(&mut self.scope)
    }

    /// Start tracking a conditional block of the current scope
    ///
    /// The block sees everything initialized before it, but what it
    /// initializes is forgotten once the block is left: the block may not
    /// run at all.
    pub(crate) fn fork_scope(&self) -> ScopeState {
        self.scope.clone()
    }

    pub(crate) fn restore_scope(&mut self, saved: ScopeState) {
        self.scope = saved;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_clean() {
        let state = TransformState::new(PathBuf::from("/"));
        assert_eq!(state.boundary(), Path::new("/"));
        assert!(!state.is_modified());
        assert!(!state.is_initialized("somepackage.constants"));
    }

    #[test]
    fn test_helper_import_is_taken_once() {
        let mut state = TransformState::new(PathBuf::from("/"));
        assert!(state.take_helper_import());
        assert!(!state.take_helper_import());
        assert!(!state.take_helper_import());
    }

    #[test]
    fn test_nested_scope_is_independent() {
        let mut state = TransformState::new(PathBuf::from("/"));
        state.mark_initialized("pkg.mod");
        assert!(state.take_helper_import());

        let saved = state.enter_nested_scope();
        assert!(!state.is_initialized("pkg.mod"));
        assert!(state.take_helper_import());
        state.mark_initialized("pkg.other");
        state.restore_scope(saved);

        assert!(state.is_initialized("pkg.mod"));
        assert!(!state.is_initialized("pkg.other"));
        assert!(!state.take_helper_import());
    }

    #[test]
    fn test_forked_block_does_not_leak() {
        let mut state = TransformState::new(PathBuf::from("/"));
        state.mark_initialized("pkg.mod");

        let saved = state.fork_scope();
        assert!(state.is_initialized("pkg.mod"));
        assert!(state.take_helper_import());
        state.mark_initialized("pkg.branch");
        state.restore_scope(saved);

        assert!(!state.is_initialized("pkg.branch"));
        assert!(state.take_helper_import());
    }
}
