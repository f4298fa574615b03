use std::fmt;

use crate::frontend::token::{Literal, Token};

/// Operations over expression trees.
///
/// Declares the [`Visitor`](visitor::Visitor) trait: one method per
/// expression variant. Adding an operation over the tree means implementing
/// this trait for a new type; the node types stay untouched.
pub mod visitor;
/// Renders expression trees as fully parenthesized prefix text.
///
/// The printer is the reference [`Visitor`](visitor::Visitor) and a debugging
/// aid: every compound node is wrapped in parentheses with its operator or
/// label first, so the structure of a tree can be read off its output.
pub mod printer;

/// A constant value appearing directly in an expression.
///
/// `LiteralValue` covers everything a literal expression can hold: numbers,
/// strings, booleans and the absent value `nil`.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A double precision number.
    Number(f64),
    /// A string, without quotes.
    String(String),
    /// `true` or `false`.
    Bool(bool),
    /// The absent value.
    Nil,
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<String> for LiteralValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<Literal> for LiteralValue {
    fn from(value: Literal) -> Self {
        match value {
            Literal::Number(n) => Self::Number(n),
            Literal::String(s) => Self::String(s),
        }
    }
}

impl<T: Into<Self>> From<Option<T>> for LiteralValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Nil, Into::into)
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Nil => f.write_str("nil"),
        }
    }
}

/// Identifies which variant an [`Expr`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExprKind {
    /// [`Expr::Binary`]
    Binary,
    /// [`Expr::Grouping`]
    Grouping,
    /// [`Expr::Literal`]
    Literal,
    /// [`Expr::Unary`]
    Unary,
}

/// An expression tree node.
///
/// The set of variants is closed. Children are boxed and owned by exactly one
/// parent, so every `Expr` is a tree. Nodes are built once and never changed;
/// operations over them are written as [`Visitor`](visitor::Visitor)
/// implementations and run through [`Expr::accept`].
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// An infix operation such as `a * b`.
    Binary {
        /// Left operand.
        left:     Box<Self>,
        /// The operator token.
        operator: Token,
        /// Right operand.
        right:    Box<Self>,
    },
    /// A parenthesized sub-expression.
    Grouping {
        /// The expression inside the parentheses.
        expression: Box<Self>,
    },
    /// A constant.
    Literal {
        /// The constant value.
        value: LiteralValue,
    },
    /// A prefix operation such as `-a` or `!a`.
    Unary {
        /// The operator token.
        operator: Token,
        /// The operand.
        right:    Box<Self>,
    },
}

impl Expr {
    /// Builds an [`Expr::Binary`] node.
    #[must_use]
    pub fn binary(left: Self, operator: Token, right: Self) -> Self {
        Self::Binary { left: Box::new(left),
                       operator,
                       right: Box::new(right) }
    }

    /// Builds an [`Expr::Grouping`] node.
    #[must_use]
    pub fn grouping(expression: Self) -> Self {
        Self::Grouping { expression: Box::new(expression) }
    }

    /// Builds an [`Expr::Literal`] node.
    #[must_use]
    pub fn literal(value: impl Into<LiteralValue>) -> Self {
        Self::Literal { value: value.into() }
    }

    /// Builds an [`Expr::Unary`] node.
    #[must_use]
    pub fn unary(operator: Token, right: Self) -> Self {
        Self::Unary { operator,
                      right: Box::new(right) }
    }

    /// The variant tag of this node.
    #[must_use]
    pub const fn kind(&self) -> ExprKind {
        match self {
            Self::Binary { .. } => ExprKind::Binary,
            Self::Grouping { .. } => ExprKind::Grouping,
            Self::Literal { .. } => ExprKind::Literal,
            Self::Unary { .. } => ExprKind::Unary,
        }
    }

    /// Runs `visitor` on this node.
    ///
    /// The node picks the visitor method matching its own variant and hands
    /// it the variant's fields. Visitors recurse into children by calling
    /// `accept` on them.
    ///
    /// # Example
    /// ```
    /// use loxide::ast::{Expr, LiteralValue, visitor::Visitor};
    /// use loxide::frontend::token::Token;
    ///
    /// /// Counts the nodes of a tree.
    /// struct Size;
    ///
    /// impl Visitor<usize> for Size {
    ///     fn visit_binary_expr(&mut self, left: &Expr, _: &Token, right: &Expr) -> usize {
    ///         1 + left.accept(self) + right.accept(self)
    ///     }
    ///
    ///     fn visit_grouping_expr(&mut self, expression: &Expr) -> usize {
    ///         1 + expression.accept(self)
    ///     }
    ///
    ///     fn visit_literal_expr(&mut self, _: &LiteralValue) -> usize {
    ///         1
    ///     }
    ///
    ///     fn visit_unary_expr(&mut self, _: &Token, right: &Expr) -> usize {
    ///         1 + right.accept(self)
    ///     }
    /// }
    ///
    /// let expr = Expr::grouping(Expr::literal(1.0));
    /// assert_eq!(expr.accept(&mut Size), 2);
    /// ```
    pub fn accept<T, V>(&self, visitor: &mut V) -> T
        where V: visitor::Visitor<T> + ?Sized
    {
        match self {
            Self::Binary { left, operator, right } => {
                visitor.visit_binary_expr(left, operator, right)
            },
            Self::Grouping { expression } => visitor.visit_grouping_expr(expression),
            Self::Literal { value } => visitor.visit_literal_expr(value),
            Self::Unary { operator, right } => visitor.visit_unary_expr(operator, right),
        }
    }
}
