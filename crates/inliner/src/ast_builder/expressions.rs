//! Expression AST node factory functions
//!
//! This module provides factory functions for creating the expression nodes the
//! import transformer emits: names, dotted attribute chains, calls and literals.

use ruff_python_ast::{
    Arguments, AtomicNodeIndex, Expr, ExprAttribute, ExprCall, ExprContext, ExprDict, ExprName,
    ExprStringLiteral, ExprUnaryOp, Identifier, Keyword, StringLiteral, StringLiteralFlags,
    StringLiteralValue, UnaryOp, name::Name, str::Quote,
};
use ruff_text_size::TextRange;

/// Creates a name expression node.
///
/// # Example
/// ```ignore
/// // Creates: `types`
/// let expr = name("types", ExprContext::Load);
/// ```
pub fn name(id: &str, ctx: ExprContext) -> Expr {
    Expr::Name(ExprName {
        id: Name::new(id),
        ctx,
        range: TextRange::default(),
        node_index: AtomicNodeIndex::dummy(),
    })
}

/// Creates an attribute access expression node: `value.attr`
pub fn attribute(value: Expr, attr: &str, ctx: ExprContext) -> Expr {
    Expr::Attribute(ExprAttribute {
        value: Box::new(value),
        attr: Identifier::new(attr, TextRange::default()),
        ctx,
        range: TextRange::default(),
        node_index: AtomicNodeIndex::dummy(),
    })
}

/// Creates the expression reaching a dotted path by attribute access from its
/// root name.
///
/// Only the outermost node carries `ctx`; the inner chain is always loaded.
///
/// # Example
/// ```ignore
/// // Creates: `a.b.c` as an assignment target
/// let target = dotted_name("a.b.c", ExprContext::Store);
/// ```
pub fn dotted_name(path: &str, ctx: ExprContext) -> Expr {
    let mut parts = path.split('.');
    let root = parts.next().unwrap_or(path);
    let rest: Vec<&str> = parts.collect();

    let Some((last, inner)) = rest.split_last() else {
        return name(root, ctx);
    };

    let value = inner.iter().fold(name(root, ExprContext::Load), |value, part| {
        attribute(value, part, ExprContext::Load)
    });
    attribute(value, last, ctx)
}

/// Creates a function call expression node.
///
/// # Example
/// ```ignore
/// // Creates: `locals()`
/// let expr = call(name("locals", ExprContext::Load), vec![], vec![]);
/// ```
pub fn call(func: Expr, args: Vec<Expr>, keywords: Vec<Keyword>) -> Expr {
    Expr::Call(ExprCall {
        func: Box::new(func),
        arguments: Arguments {
            args: args.into_boxed_slice(),
            keywords: keywords.into_boxed_slice(),
            range: TextRange::default(),
            node_index: AtomicNodeIndex::dummy(),
        },
        range: TextRange::default(),
        node_index: AtomicNodeIndex::dummy(),
    })
}

/// Creates a method call expression node: `value.method(args...)`
pub fn method_call(value: Expr, method: &str, args: Vec<Expr>) -> Expr {
    call(attribute(value, method, ExprContext::Load), args, vec![])
}

/// Creates a string literal expression node.
///
/// Double quotes are preferred; the generator still switches quotes when the
/// value contains more double than single quotes.
pub fn string_literal(value: &str) -> Expr {
    Expr::StringLiteral(ExprStringLiteral {
        value: StringLiteralValue::single(StringLiteral {
            value: value.into(),
            flags: StringLiteralFlags::empty().with_quote_style(Quote::Double),
            range: TextRange::default(),
            node_index: AtomicNodeIndex::dummy(),
        }),
        range: TextRange::default(),
        node_index: AtomicNodeIndex::dummy(),
    })
}

/// Creates an empty dict literal: `{}`
pub fn empty_dict() -> Expr {
    Expr::Dict(ExprDict {
        items: vec![],
        range: TextRange::default(),
        node_index: AtomicNodeIndex::dummy(),
    })
}

/// Creates a unary operation expression node.
///
/// # Example
/// ```ignore
/// // Creates: `not flag`
/// let expr = unary_op(UnaryOp::Not, name("flag", ExprContext::Load));
/// ```
pub fn unary_op(op: UnaryOp, operand: Expr) -> Expr {
    Expr::UnaryOp(ExprUnaryOp {
        op,
        operand: Box::new(operand),
        range: TextRange::default(),
        node_index: AtomicNodeIndex::dummy(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dotted_name_single_segment() {
        match dotted_name("somepackage", ExprContext::Load) {
            Expr::Name(name) => assert_eq!(name.id.as_str(), "somepackage"),
            other => panic!("Expected Name, got {other:?}"),
        }
    }

    #[test]
    fn test_dotted_name_builds_attribute_chain() {
        let Expr::Attribute(outer) = dotted_name("a.b.c", ExprContext::Store) else {
            panic!("Expected Attribute");
        };
        assert_eq!(outer.attr.as_str(), "c");
        assert_eq!(outer.ctx, ExprContext::Store);

        let Expr::Attribute(middle) = outer.value.as_ref() else {
            panic!("Expected nested Attribute");
        };
        assert_eq!(middle.attr.as_str(), "b");
        assert_eq!(middle.ctx, ExprContext::Load);

        match middle.value.as_ref() {
            Expr::Name(root) => assert_eq!(root.id.as_str(), "a"),
            other => panic!("Expected Name root, got {other:?}"),
        }
    }

    #[test]
    fn test_string_literal() {
        let Expr::StringLiteral(literal) = string_literal("some_id") else {
            panic!("Expected StringLiteral");
        };
        assert_eq!(literal.value.to_str(), "some_id");
    }
}
