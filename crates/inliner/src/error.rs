//! Named failures of the import transformer
//!
//! Everything else (I/O, parse errors) travels as plain `anyhow::Error` with
//! context attached; these variants exist so callers can `downcast_ref` and
//! react to the specific condition.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    /// The base module of an import statement is unknown to the resolver
    #[error("No module named '{0}'")]
    ModuleNotFound(String),

    /// A dependency was reached again while it was still being embedded
    #[error("Circular dependency detected while embedding: {}", .chain.join(" -> "))]
    CircularDependency { chain: Vec<String> },

    /// A relative import that climbs above the top-level package
    #[error("Invalid relative import '{import}' in module {}", .module.as_deref().unwrap_or("<script>"))]
    InvalidRelativeImport {
        import: String,
        module: Option<String>,
    },
}
