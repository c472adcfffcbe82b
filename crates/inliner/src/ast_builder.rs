//! AST builder module for creating synthetic AST nodes
//!
//! This module provides factory functions for creating AST nodes that don't
//! originate from source files. All synthetic nodes use default ranges and
//! `AtomicNodeIndex::dummy()` to clearly indicate they are generated.

pub mod expressions;
pub mod statements;
