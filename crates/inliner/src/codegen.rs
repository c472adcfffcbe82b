//! Parse and render services
//!
//! Thin layer over the ruff parser and code generator. Rendering reuses the
//! [`Stylist`] detected from the source being rendered so that generated
//! statements match the file's indentation, quoting and line endings.

use anyhow::{Context, Result};
use ruff_python_ast::{ModModule, Stmt};
use ruff_python_codegen::{Generator, Stylist};
use ruff_python_parser::parse_module;

/// Parse `source` into a module and detect its style
pub fn parse<'src>(source: &'src str, label: &str) -> Result<(ModModule, Stylist<'src>)> {
    let parsed = parse_module(source).with_context(|| format!("Failed to parse {label}"))?;
    let stylist = Stylist::from_tokens(parsed.tokens(), source);
    Ok((parsed.into_syntax(), stylist))
}

/// Render a single statement without a trailing line ending
pub fn render_stmt(stmt: &Stmt, stylist: &Stylist<'_>) -> String {
    Generator::from(stylist).stmt(stmt)
}

/// Render a statement body, one top-level statement per line
pub fn render_body(body: &[Stmt], stylist: &Stylist<'_>) -> String {
    let line_ending = stylist.line_ending().as_str();
    let mut code = String::new();
    for stmt in body {
        code.push_str(&render_stmt(stmt, stylist));
        code.push_str(line_ending);
    }
    code
}

/// Render a whole module
pub fn render_module(module: &ModModule, stylist: &Stylist<'_>) -> String {
    render_body(&module.body, stylist)
}
