//! Import inlining
//!
//! [`ImportTransformer`] walks every statement body of a module and replaces
//! each import of an in-boundary module with code that rebuilds the imported
//! bindings without the runtime module search:
//!
//! ```python
//! import types
//! print('from somepackage.constants import SOME_CONSTANT\n')
//! if not isinstance(locals().get('somepackage', {}), types.ModuleType):
//!     somepackage = types.ModuleType('somepackage', 'The somepackage module')
//! ...
//! exec("SOME_CONSTANT = 'some_id'\n", somepackage.constants.__dict__)
//! SOME_CONSTANT = somepackage.constants.SOME_CONSTANT
//! ```

mod boundary;
mod embedder;
mod namespace;
mod state;
mod statement;

use std::path::PathBuf;

use anyhow::Result;
use log::debug;
use ruff_python_ast::{ExceptHandler, Expr, ExprContext, ModModule, Stmt};
use ruff_python_codegen::Stylist;

pub use boundary::{is_within, should_transform};
pub use namespace::{HELPER_MODULE, namespace_dict, synthesize};
pub use state::TransformState;
pub use statement::{
    ImportStatement, ImportedName, ModuleContext, ResolvedItem, WILDCARD, classify,
};

use crate::{
    ast_builder::{expressions, statements},
    codegen,
    resolver::ModuleResolution,
};

/// Settings shared by a file transform and every dependency it embeds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOptions {
    /// Absolute directory; only modules located below it are inlined
    pub boundary: PathBuf,
    /// Emit a `print(...)` echo before every inlined item
    pub echo_imports: bool,
}

pub struct ImportTransformer<'a> {
    resolver: &'a dyn ModuleResolution,
    stylist: &'a Stylist<'a>,
    options: &'a TransformOptions,
    /// The module being transformed, for relative imports
    context: ModuleContext,
    /// Modules currently being embedded, outermost first
    embedding_chain: Vec<String>,
    state: TransformState,
}

impl std::fmt::Debug for ImportTransformer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImportTransformer")
            .field("context", &self.context)
            .field("embedding_chain", &self.embedding_chain)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<'a> ImportTransformer<'a> {
    pub fn new(
        resolver: &'a dyn ModuleResolution,
        stylist: &'a Stylist<'a>,
        options: &'a TransformOptions,
        context: ModuleContext,
    ) -> Self {
        let chain = context.name.iter().cloned().collect();
        Self::with_chain(resolver, stylist, options, context, chain)
    }

    pub(crate) fn with_chain(
        resolver: &'a dyn ModuleResolution,
        stylist: &'a Stylist<'a>,
        options: &'a TransformOptions,
        context: ModuleContext,
        embedding_chain: Vec<String>,
    ) -> Self {
        Self {
            resolver,
            stylist,
            options,
            context,
            embedding_chain,
            state: TransformState::new(options.boundary.clone()),
        }
    }

    /// Whether at least one import statement was replaced
    pub fn is_modified(&self) -> bool {
        self.state.is_modified()
    }

    /// Transform a module recursively, handling imports at any depth
    pub fn transform_module(&mut self, module: &mut ModModule) -> Result<()> {
        debug!(
            "Transforming imports of {}",
            self.context.name.as_deref().unwrap_or("<script>")
        );
        self.transform_statements(&mut module.body)
    }

    fn transform_statements(&mut self, stmts: &mut Vec<Stmt>) -> Result<()> {
        let body = std::mem::take(stmts);
        let mut rewritten = Vec::with_capacity(body.len());

        for mut stmt in body {
            if let Some(replacement) = self.transform_import(&stmt)? {
                debug!("Replaced import with {} statements", replacement.len());
                rewritten.extend(replacement);
                continue;
            }
            self.transform_nested(&mut stmt)?;
            rewritten.push(stmt);
        }

        *stmts = rewritten;
        Ok(())
    }

    fn transform_nested(&mut self, stmt: &mut Stmt) -> Result<()> {
        match stmt {
            Stmt::FunctionDef(func_def) => {
                debug!("Entering function '{}'", func_def.name);
                self.transform_scope(&mut func_def.body)?;
            }
            Stmt::ClassDef(class_def) => {
                debug!("Entering class '{}'", class_def.name);
                self.transform_scope(&mut class_def.body)?;
            }
            Stmt::If(if_stmt) => {
                self.transform_block(&mut if_stmt.body)?;
                for clause in &mut if_stmt.elif_else_clauses {
                    self.transform_block(&mut clause.body)?;
                }
            }
            Stmt::While(while_stmt) => {
                self.transform_block(&mut while_stmt.body)?;
                self.transform_block(&mut while_stmt.orelse)?;
            }
            Stmt::For(for_stmt) => {
                self.transform_block(&mut for_stmt.body)?;
                self.transform_block(&mut for_stmt.orelse)?;
            }
            Stmt::With(with_stmt) => self.transform_block(&mut with_stmt.body)?,
            Stmt::Try(try_stmt) => {
                self.transform_block(&mut try_stmt.body)?;
                for handler in &mut try_stmt.handlers {
                    let ExceptHandler::ExceptHandler(handler) = handler;
                    self.transform_block(&mut handler.body)?;
                }
                self.transform_block(&mut try_stmt.orelse)?;
                self.transform_block(&mut try_stmt.finalbody)?;
            }
            Stmt::Match(match_stmt) => {
                for case in &mut match_stmt.cases {
                    self.transform_block(&mut case.body)?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// A function or class body: a Python scope of its own
    fn transform_scope(&mut self, body: &mut Vec<Stmt>) -> Result<()> {
        let enclosing = self.state.enter_nested_scope();
        let result = self.transform_statements(body);
        self.state.restore_scope(enclosing);
        result
    }

    /// A block that may or may not run, inside the current scope
    fn transform_block(&mut self, body: &mut Vec<Stmt>) -> Result<()> {
        let enclosing = self.state.fork_scope();
        let result = self.transform_statements(body);
        self.state.restore_scope(enclosing);
        result
    }

    /// Replacement for an import statement, `None` to keep it unchanged
    fn transform_import(&mut self, stmt: &Stmt) -> Result<Option<Vec<Stmt>>> {
        let Some(statement) = ImportStatement::from_stmt(stmt, &self.context)? else {
            return Ok(None);
        };
        if !should_transform(&statement, self.resolver, self.state.boundary())? {
            return Ok(None);
        }

        let items = classify(&statement, self.resolver)?;
        let echo = codegen::render_stmt(stmt, self.stylist);
        let mut generated = Vec::new();
        let mut residual = Vec::new();

        for item in &items {
            if statement.is_plain() && !self.is_inlinable(&item.resolved_path) {
                debug!("Keeping '{}' as a regular import", item.resolved_path);
                residual.push(statements::alias(
                    &item.requested_name,
                    item.alias.as_deref(),
                ));
                continue;
            }
            self.emit_item(&statement, item, &echo, &mut generated)?;
        }

        if generated.is_empty() {
            debug!("Nothing to inline for '{echo}'");
            return Ok(None);
        }

        self.state.mark_modified();
        if residual.is_empty() {
            Ok(Some(generated))
        } else {
            let mut replacement = vec![statements::import(residual)];
            replacement.extend(generated);
            Ok(Some(replacement))
        }
    }

    /// Whether a module named by a plain import may be inlined
    fn is_inlinable(&self, module_name: &str) -> bool {
        !self.resolver.is_intrinsic(module_name)
            && self
                .resolver
                .resolve(module_name)
                .is_some_and(|origin| is_within(&origin, self.state.boundary()))
    }

    /// Append the code realizing one imported item
    fn emit_item(
        &mut self,
        statement: &ImportStatement,
        item: &ResolvedItem,
        echo: &str,
        generated: &mut Vec<Stmt>,
    ) -> Result<()> {
        let Some(source) = self.embed(&item.resolved_path)? else {
            debug!("Skipping '{}': no source", item.resolved_path);
            return Ok(());
        };

        if self.state.take_helper_import() {
            generated.push(namespace::helper_import());
        }
        if self.options.echo_imports {
            generated.push(echo_stmt(echo));
        }

        if item.is_wildcard() {
            generated.push(exec_stmt(&source, locals()));
            return Ok(());
        }

        if !self.state.is_initialized(&item.resolved_path) {
            generated.extend(synthesize(&item.resolved_path));
            generated.push(exec_stmt(&source, namespace_dict(&item.resolved_path)));
            self.state.mark_initialized(&item.resolved_path);
        }

        if let Some(binding) = binding(statement, item) {
            generated.push(binding);
        }
        Ok(())
    }
}

/// The name binding an item leaves in the importing scope
///
/// `import a.b.c` needs none: the synthesized hierarchy already bound `a`.
fn binding(statement: &ImportStatement, item: &ResolvedItem) -> Option<Stmt> {
    let value = match statement {
        ImportStatement::Plain { .. } if item.alias.is_none() => return None,
        ImportStatement::Plain { .. } => {
            expressions::dotted_name(&item.requested_name, ExprContext::Load)
        }
        ImportStatement::From { .. } if item.is_module => {
            expressions::dotted_name(&item.resolved_path, ExprContext::Load)
        }
        ImportStatement::From { .. } => expressions::attribute(
            expressions::dotted_name(&item.resolved_path, ExprContext::Load),
            &item.requested_name,
            ExprContext::Load,
        ),
    };
    Some(statements::simple_assign(item.binding_name(), value))
}

/// `print('<statement>\n')`
fn echo_stmt(rendered: &str) -> Stmt {
    statements::expr(expressions::call(
        expressions::name("print", ExprContext::Load),
        vec![expressions::string_literal(&format!("{rendered}\n"))],
        vec![],
    ))
}

/// `exec('<source>', <globals>)`
fn exec_stmt(source: &str, globals: Expr) -> Stmt {
    statements::expr(expressions::call(
        expressions::name("exec", ExprContext::Load),
        vec![expressions::string_literal(source), globals],
        vec![],
    ))
}

/// `locals()`
fn locals() -> Expr {
    expressions::call(expressions::name("locals", ExprContext::Load), vec![], vec![])
}
