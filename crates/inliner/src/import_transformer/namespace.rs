//! Synthetic namespace hierarchy generation
//!
//! Every segment of an inlined module path becomes a `types.ModuleType`
//! object in the generated program. Creation is guarded by a runtime
//! existence check, so sibling imports sharing a prefix reuse the namespace
//! created by whichever import ran first.

use ruff_python_ast::{ExprContext, Stmt, UnaryOp};

use crate::ast_builder::{expressions, statements};

/// Module providing the namespace type in the generated program
pub const HELPER_MODULE: &str = "types";

/// `import types`
pub(crate) fn helper_import() -> Stmt {
    statements::import(vec![statements::alias(HELPER_MODULE, None)])
}

/// `types.ModuleType`
fn namespace_type() -> ruff_python_ast::Expr {
    expressions::attribute(
        expressions::name(HELPER_MODULE, ExprContext::Load),
        "ModuleType",
        ExprContext::Load,
    )
}

/// Guarded creation steps for every prefix of `module_path`, root first
///
/// For `a.b` this produces:
///
/// ```python
/// if not isinstance(locals().get('a', {}), types.ModuleType):
///     a = types.ModuleType('a', 'The a module')
/// if not isinstance(locals().get('a', {}).__dict__.get('b', {}), types.ModuleType):
///     a.b = types.ModuleType('a.b', 'The a.b module')
/// ```
pub fn synthesize(module_path: &str) -> Vec<Stmt> {
    let segments: Vec<&str> = module_path.split('.').collect();
    (1..=segments.len())
        .map(|depth| {
            let prefix = &segments[..depth];
            let cumulative = prefix.join(".");
            statements::if_stmt(
                expressions::unary_op(UnaryOp::Not, is_namespace(prefix)),
                vec![statements::dotted_assign(&cumulative, new_namespace(&cumulative))],
                vec![],
            )
        })
        .collect()
}

/// `isinstance(<value at prefix>, types.ModuleType)`
///
/// The value is reached with `locals().get('s1', {})` followed by
/// `.__dict__.get('si', {})` for each deeper segment, so a missing segment
/// reads as an empty dict instead of raising.
fn is_namespace(prefix: &[&str]) -> ruff_python_ast::Expr {
    let scope = expressions::call(
        expressions::name("locals", ExprContext::Load),
        vec![],
        vec![],
    );
    let lookup = prefix.iter().enumerate().fold(scope, |scope, (depth, segment)| {
        let mapping = if depth == 0 {
            scope
        } else {
            expressions::attribute(scope, "__dict__", ExprContext::Load)
        };
        expressions::method_call(
            mapping,
            "get",
            vec![expressions::string_literal(segment), expressions::empty_dict()],
        )
    });

    expressions::call(
        expressions::name("isinstance", ExprContext::Load),
        vec![lookup, namespace_type()],
        vec![],
    )
}

/// `types.ModuleType('a.b', 'The a.b module')`
fn new_namespace(cumulative: &str) -> ruff_python_ast::Expr {
    expressions::call(
        namespace_type(),
        vec![
            expressions::string_literal(cumulative),
            expressions::string_literal(&format!("The {cumulative} module")),
        ],
        vec![],
    )
}

/// `a.b.__dict__`, the globals a module's embedded source executes in
pub fn namespace_dict(module_path: &str) -> ruff_python_ast::Expr {
    expressions::attribute(
        expressions::dotted_name(module_path, ExprContext::Load),
        "__dict__",
        ExprContext::Load,
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::import_transformer::tests::render_normalized;

    #[test]
    fn test_helper_import() {
        assert_eq!(render_normalized(&[helper_import()]), "import types\n");
    }

    #[test]
    fn test_synthesize_two_segments() {
        let rendered = render_normalized(&synthesize("somepackage.constants"));
        assert_eq!(
            rendered,
            "if not isinstance(locals().get('somepackage', {}), types.ModuleType):\n    \
             somepackage = types.ModuleType('somepackage', 'The somepackage module')\n\
             if not isinstance(locals().get('somepackage', {}).__dict__.get('constants', {}), \
             types.ModuleType):\n    \
             somepackage.constants = types.ModuleType('somepackage.constants', 'The \
             somepackage.constants module')\n"
        );
    }

    #[test]
    fn test_synthesize_emits_one_step_per_segment() {
        let steps = synthesize("somepackage.submod.some_class");
        assert_eq!(steps.len(), 3);

        let rendered = render_normalized(&steps[2..]);
        assert!(rendered.contains(
            "locals().get('somepackage', {}).__dict__.get('submod', {}).__dict__.get('some_class', {})"
        ));
        assert!(rendered.contains(
            "somepackage.submod.some_class = types.ModuleType('somepackage.submod.some_class'"
        ));
    }

    #[test]
    fn test_namespace_dict() {
        let rendered = render_normalized(&[statements::expr(namespace_dict("a.b"))]);
        assert_eq!(rendered, "a.b.__dict__\n");
    }
}
