use loxide::{
    ast::{Expr, ExprKind, LiteralValue, printer::AstPrinter, visitor::Visitor},
    frontend::{
        lexer::TokenKind,
        token::{Literal, Token},
    },
};

fn op(kind: TokenKind, lexeme: &str) -> Token {
    Token::symbol(kind, lexeme, 1)
}

/// `-123 * (45.67)`
fn sample() -> Expr {
    Expr::binary(Expr::unary(op(TokenKind::Minus, "-"), Expr::literal(123.0)),
                 op(TokenKind::Star, "*"),
                 Expr::grouping(Expr::literal(45.67)))
}

#[test]
fn prints_reference_tree() {
    assert_eq!(AstPrinter.print(&sample()), "( * ( - 123) ( group 45.67))");
}

#[test]
fn printing_is_repeatable() {
    let expr = sample();
    let mut printer = AstPrinter;

    let first = printer.print(&expr);
    let second = printer.print(&expr);

    assert_eq!(first, second);
}

#[test]
fn prints_every_literal_kind() {
    let mut printer = AstPrinter;

    assert_eq!(printer.print(&Expr::literal(LiteralValue::Nil)), "nil");
    assert_eq!(printer.print(&Expr::literal(None::<f64>)), "nil");
    assert_eq!(printer.print(&Expr::literal(true)), "true");
    assert_eq!(printer.print(&Expr::literal(false)), "false");
    assert_eq!(printer.print(&Expr::literal("hello")), "hello");
    assert_eq!(printer.print(&Expr::literal(Some(2.5))), "2.5");
    assert_eq!(printer.print(&Expr::literal(7.0)), "7");
}

#[test]
fn prints_nested_groupings_and_unaries() {
    let expr = Expr::unary(op(TokenKind::Bang, "!"),
                           Expr::grouping(Expr::grouping(Expr::literal(LiteralValue::Nil))));

    assert_eq!(AstPrinter.print(&expr), "( ! ( group ( group nil)))");
}

#[test]
fn prints_left_nested_binaries() {
    // (1 + 2) - 3 >= 0
    let sum = Expr::binary(Expr::literal(1.0), op(TokenKind::Plus, "+"), Expr::literal(2.0));
    let difference = Expr::binary(Expr::grouping(sum), op(TokenKind::Minus, "-"), Expr::literal(3.0));
    let comparison = Expr::binary(difference,
                                  op(TokenKind::GreaterEqual, ">="),
                                  Expr::literal(0.0));

    assert_eq!(AstPrinter.print(&comparison), "( >= ( - ( group ( + 1 2)) 3) 0)");
}

#[test]
fn token_literals_become_node_literals() {
    assert_eq!(LiteralValue::from(Literal::Number(4.0)), LiteralValue::Number(4.0));
    assert_eq!(LiteralValue::from(Literal::String("s".into())),
               LiteralValue::String("s".into()));
    assert_eq!(LiteralValue::from(None::<Literal>), LiteralValue::Nil);
}

#[test]
fn nodes_expose_their_variant() {
    let expr = sample();
    assert_eq!(expr.kind(), ExprKind::Binary);

    let Expr::Binary { left, right, .. } = &expr else {
        panic!("sample is a binary expression");
    };
    assert_eq!(left.kind(), ExprKind::Unary);
    assert_eq!(right.kind(), ExprKind::Grouping);

    let Expr::Grouping { expression } = right.as_ref() else {
        panic!("right operand is a grouping");
    };
    assert_eq!(expression.kind(), ExprKind::Literal);
}

/// Renders a tree in reverse Polish notation, written without touching the
/// node types.
struct Rpn;

impl Visitor<String> for Rpn {
    fn visit_binary_expr(&mut self, left: &Expr, operator: &Token, right: &Expr) -> String {
        format!("{} {} {}", left.accept(self), right.accept(self), operator.lexeme)
    }

    fn visit_grouping_expr(&mut self, expression: &Expr) -> String {
        expression.accept(self)
    }

    fn visit_literal_expr(&mut self, value: &LiteralValue) -> String {
        value.to_string()
    }

    fn visit_unary_expr(&mut self, operator: &Token, right: &Expr) -> String {
        format!("{} {}", right.accept(self), operator.lexeme)
    }
}

/// Records the order in which nodes are visited.
#[derive(Default)]
struct Trace {
    visited: Vec<ExprKind>,
}

impl Visitor<()> for Trace {
    fn visit_binary_expr(&mut self, left: &Expr, _: &Token, right: &Expr) {
        self.visited.push(ExprKind::Binary);
        left.accept(self);
        right.accept(self);
    }

    fn visit_grouping_expr(&mut self, expression: &Expr) {
        self.visited.push(ExprKind::Grouping);
        expression.accept(self);
    }

    fn visit_literal_expr(&mut self, _: &LiteralValue) {
        self.visited.push(ExprKind::Literal);
    }

    fn visit_unary_expr(&mut self, _: &Token, right: &Expr) {
        self.visited.push(ExprKind::Unary);
        right.accept(self);
    }
}

#[test]
fn new_operations_plug_into_the_same_tree() {
    let expr = sample();

    assert_eq!(expr.accept(&mut Rpn), "123 - 45.67 *");

    let mut trace = Trace::default();
    expr.accept(&mut trace);
    assert_eq!(trace.visited,
               [ExprKind::Binary,
                ExprKind::Unary,
                ExprKind::Literal,
                ExprKind::Grouping,
                ExprKind::Literal]);
}

#[test]
fn dispatch_works_through_trait_objects() {
    let expr = sample();
    let mut visitors: Vec<Box<dyn Visitor<String>>> = vec![Box::new(AstPrinter), Box::new(Rpn)];

    let outputs: Vec<_> = visitors.iter_mut().map(|v| expr.accept(v.as_mut())).collect();

    assert_eq!(outputs, ["( * ( - 123) ( group 45.67))", "123 - 45.67 *"]);
}

#[test]
fn trees_are_plain_values() {
    let original = sample();
    let copy = original.clone();

    assert_eq!(original, copy);
    assert_eq!(AstPrinter.print(&original), AstPrinter.print(&copy));
}
