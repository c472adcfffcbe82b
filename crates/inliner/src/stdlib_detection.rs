//! Standard library detection utilities
//!
//! This module provides a single source of truth for determining whether a module
//! is intrinsic to the Python runtime, i.e. never a candidate for inlining.

use ruff_python_stdlib::sys;

/// Check if a module name represents a Python standard library module
///
/// This uses ruff's comprehensive stdlib database and handles both direct
/// matches and submodules (e.g., both "os" and "os.path" are recognized).
///
/// # Arguments
/// * `module_name` - The module name to check
/// * `python_version` - The Python 3 minor version (e.g., 10 for Python 3.10)
pub fn is_stdlib_module(module_name: &str, python_version: u8) -> bool {
    // Special case for __future__ which is always a stdlib module
    // but not included in ruff's is_known_standard_library
    if module_name == "__future__" {
        return true;
    }

    if sys::is_known_standard_library(python_version, module_name) {
        return true;
    }

    // Check if it's a submodule of a stdlib module
    if let Some(top_level) = module_name.split('.').next() {
        sys::is_known_standard_library(python_version, top_level)
    } else {
        false
    }
}
