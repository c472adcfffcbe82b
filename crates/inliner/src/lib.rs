//! Rewrites imports of in-tree Python modules into inlined initialization code
//!
//! The entry point is [`driver::transform_file`]; [`import_transformer`]
//! holds the engine and [`resolver`] the module lookup it relies on.

pub mod ast_builder;
pub mod codegen;
pub mod config;
pub mod driver;
pub mod error;
pub mod import_transformer;
pub mod resolver;
pub mod stdlib_detection;
pub mod types;
