use crate::{
    ast::{Expr, LiteralValue, visitor::Visitor},
    frontend::token::Token,
};

/// Prints expression trees in prefix form with every compound node
/// parenthesized.
///
/// - Binary: `( <operator> <left> <right>)`
/// - Grouping: `( group <expression>)`
/// - Unary: `( <operator> <right>)`
/// - Literal: the value itself, `nil` when absent
///
/// The printer keeps no state, so printing a tree always gives the same text.
///
/// # Example
/// ```
/// use loxide::{
///     ast::{Expr, printer::AstPrinter},
///     frontend::{lexer::TokenKind, token::Token},
/// };
///
/// let expr = Expr::binary(Expr::unary(Token::symbol(TokenKind::Minus, "-", 1),
///                                     Expr::literal(123.0)),
///                         Token::symbol(TokenKind::Star, "*", 1),
///                         Expr::grouping(Expr::literal(45.67)));
///
/// assert_eq!(AstPrinter.print(&expr), "( * ( - 123) ( group 45.67))");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct AstPrinter;

impl AstPrinter {
    /// Renders `expr` as text.
    pub fn print(&mut self, expr: &Expr) -> String {
        expr.accept(self)
    }

    fn parenthesize(&mut self, name: &str, exprs: &[&Expr]) -> String {
        let mut builder = String::from("( ");
        builder.push_str(name);
        for expr in exprs {
            builder.push(' ');
            builder.push_str(&expr.accept(self));
        }
        builder.push(')');
        builder
    }
}

impl Visitor<String> for AstPrinter {
    fn visit_binary_expr(&mut self, left: &Expr, operator: &Token, right: &Expr) -> String {
        self.parenthesize(&operator.lexeme, &[left, right])
    }

    fn visit_grouping_expr(&mut self, expression: &Expr) -> String {
        self.parenthesize("group", &[expression])
    }

    fn visit_literal_expr(&mut self, value: &LiteralValue) -> String {
        value.to_string()
    }

    fn visit_unary_expr(&mut self, operator: &Token, right: &Expr) -> String {
        self.parenthesize(&operator.lexeme, &[right])
    }
}
