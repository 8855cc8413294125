use crate::Span;

use super::{ast::Expr, expressions::SymbolExpr};

/// `let <identifier> = <assigned_value>;`
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt {
    pub identifier: SymbolExpr,
    pub assigned_value: Expr,
    pub span: Span,
}

/// An expression followed by `;`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Expr,
    pub span: Span,
}
