//! Statement AST node factory functions
//!
//! This module provides factory functions for creating various types of statement AST nodes.
//! All statements are created with `TextRange::default()` and `AtomicNodeIndex::dummy()`
//! to indicate their synthetic nature.

use ruff_python_ast::{
    Alias, AtomicNodeIndex, ElifElseClause, Expr, ExprContext, Identifier, Stmt, StmtAssign,
    StmtExpr, StmtIf, StmtImport,
};
use ruff_text_size::TextRange;

use super::expressions;

/// Creates an assignment statement node.
///
/// # Arguments
/// * `targets` - The assignment targets (left-hand side)
/// * `value` - The assigned value (right-hand side)
pub fn assign(targets: Vec<Expr>, value: Expr) -> Stmt {
    Stmt::Assign(StmtAssign {
        targets,
        value: Box::new(value),
        range: TextRange::default(),
        node_index: AtomicNodeIndex::dummy(),
    })
}

/// Creates a simple assignment statement with a string target.
///
/// # Example
/// ```ignore
/// // Creates: `SOME_CONSTANT = somepackage.constants.SOME_CONSTANT`
/// let value = expressions::dotted_name("somepackage.constants.SOME_CONSTANT", ExprContext::Load);
/// let stmt = simple_assign("SOME_CONSTANT", value);
/// ```
pub fn simple_assign(target: &str, value: Expr) -> Stmt {
    let target_expr = expressions::name(target, ExprContext::Store);
    assign(vec![target_expr], value)
}

/// Creates an assignment to a dotted target; a single segment becomes a plain
/// name binding, more segments an attribute-of-parent binding.
pub fn dotted_assign(target: &str, value: Expr) -> Stmt {
    assign(vec![expressions::dotted_name(target, ExprContext::Store)], value)
}

/// Creates an expression statement node.
pub fn expr(expr: Expr) -> Stmt {
    Stmt::Expr(StmtExpr {
        value: Box::new(expr),
        range: TextRange::default(),
        node_index: AtomicNodeIndex::dummy(),
    })
}

/// Creates an import statement node.
///
/// # Example
/// ```ignore
/// // Creates: `import sys, os as operating_system`
/// let stmt = import(vec![alias("sys", None), alias("os", Some("operating_system"))]);
/// ```
pub fn import(names: Vec<Alias>) -> Stmt {
    Stmt::Import(StmtImport {
        names,
        range: TextRange::default(),
        node_index: AtomicNodeIndex::dummy(),
    })
}

/// Creates an alias node for import statements.
pub fn alias(name: &str, asname: Option<&str>) -> Alias {
    Alias {
        name: Identifier::new(name, TextRange::default()),
        asname: asname.map(|s| Identifier::new(s, TextRange::default())),
        range: TextRange::default(),
        node_index: AtomicNodeIndex::dummy(),
    }
}

/// Creates an if statement node.
///
/// # Arguments
/// * `test` - The condition expression
/// * `body` - The statements to execute if the condition is true
/// * `orelse` - The statements to execute if the condition is false (optional)
pub fn if_stmt(test: Expr, body: Vec<Stmt>, orelse: Vec<Stmt>) -> Stmt {
    let mut elif_else_clauses = Vec::new();

    // If there's an orelse, add it as an else clause
    if !orelse.is_empty() {
        elif_else_clauses.push(ElifElseClause {
            test: None, // None indicates else clause
            body: orelse,
            range: TextRange::default(),
            node_index: AtomicNodeIndex::dummy(),
        });
    }

    Stmt::If(StmtIf {
        test: Box::new(test),
        body,
        elif_else_clauses,
        range: TextRange::default(),
        node_index: AtomicNodeIndex::dummy(),
    })
}
