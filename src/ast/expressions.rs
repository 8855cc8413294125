use std::fmt::Display;

use crate::{lexer::tokens::TokenKind, Span};

use super::{ast::Expr, node::NodeKind};

// LITERALS

/// Number Expression
/// Keeps the digits exactly as written; no numeric conversion happens here.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    pub value: String,
    pub span: Span,
}

/// Symbol Expression
/// A reference to (or the name of) a variable.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolExpr {
    pub value: String,
    pub span: Span,
}

// COMPLEX

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(BinaryOperator::Add),
            TokenKind::Dash => Some(BinaryOperator::Subtract),
            TokenKind::Star => Some(BinaryOperator::Multiply),
            TokenKind::Slash => Some(BinaryOperator::Divide),
            _ => None,
        }
    }

    pub fn node_kind(&self) -> NodeKind {
        match self {
            BinaryOperator::Add => NodeKind::Addition,
            BinaryOperator::Subtract => NodeKind::Subtraction,
            BinaryOperator::Multiply => NodeKind::Multiplication,
            BinaryOperator::Divide => NodeKind::Division,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Binary Expression
/// `left <operator> right`, operands in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: BinaryOperator,
    pub right: Box<Expr>,
    pub span: Span,
}

/// Grouping Expression
/// A parenthesised expression. The span includes both parentheses.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupingExpr {
    pub expression: Box<Expr>,
    pub span: Span,
}
