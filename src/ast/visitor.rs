use crate::{
    ast::{Expr, LiteralValue},
    frontend::token::Token,
};

/// A read-only operation over expression trees, producing a `T` per node.
///
/// There is one method per [`Expr`] variant. [`Expr::accept`] selects the
/// method from the node's own variant, so an implementation never inspects
/// node types itself; it only says what to do for each of them.
pub trait Visitor<T> {
    /// Handles an [`Expr::Binary`] node.
    fn visit_binary_expr(&mut self, left: &Expr, operator: &Token, right: &Expr) -> T;
    /// Handles an [`Expr::Grouping`] node.
    fn visit_grouping_expr(&mut self, expression: &Expr) -> T;
    /// Handles an [`Expr::Literal`] node.
    fn visit_literal_expr(&mut self, value: &LiteralValue) -> T;
    /// Handles an [`Expr::Unary`] node.
    fn visit_unary_expr(&mut self, operator: &Token, right: &Expr) -> T;
}
