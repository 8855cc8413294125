use std::slice::Iter;

use crate::Span;

use super::{
    expressions::{BinaryExpr, GroupingExpr, NumberExpr, SymbolExpr},
    node::ASTNode,
    statements::{ExpressionStmt, VarDeclStmt},
};

/// Root of a parsed source: its statements in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub body: Vec<Stmt>,
    pub span: Span,
}

impl Program {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }

    pub fn to_node(&self) -> ASTNode {
        ASTNode::from(self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    VarDecl(VarDeclStmt),
    Expression(ExpressionStmt),
}

impl Stmt {
    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::VarDecl(stmt) => &stmt.span,
            Stmt::Expression(stmt) => &stmt.span,
        }
    }
}

/// Expressions may nest arbitrarily deep (long operator chains are left-deep), so
/// dropping and comparing walk the tree with an explicit stack instead of recursing.
#[derive(Debug, Clone)]
pub enum Expr {
    Number(NumberExpr),
    Symbol(SymbolExpr),
    Binary(BinaryExpr),
    Grouping(GroupingExpr),
}

impl Expr {
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Number(expr) => &expr.span,
            Expr::Symbol(expr) => &expr.span,
            Expr::Binary(expr) => &expr.span,
            Expr::Grouping(expr) => &expr.span,
        }
    }

    /// Moves compound children out onto `stack`, leaving empty leaves in their place.
    fn detach_children(&mut self, stack: &mut Vec<Expr>) {
        match self {
            Expr::Binary(binary) => {
                stack.extend(detach(binary.left.as_mut()));
                stack.extend(detach(binary.right.as_mut()));
            }
            Expr::Grouping(grouping) => stack.extend(detach(grouping.expression.as_mut())),
            Expr::Number(_) | Expr::Symbol(_) => {}
        }
    }
}

fn detach(slot: &mut Expr) -> Option<Expr> {
    match slot {
        Expr::Number(_) | Expr::Symbol(_) => None,
        Expr::Binary(_) | Expr::Grouping(_) => {
            let placeholder = Expr::Symbol(SymbolExpr {
                value: String::new(),
                span: slot.get_span().clone(),
            });
            Some(std::mem::replace(slot, placeholder))
        }
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        let mut stack = vec![];
        self.detach_children(&mut stack);

        // Each popped node only has leaves left by the time it is dropped
        while let Some(mut expr) = stack.pop() {
            expr.detach_children(&mut stack);
        }
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        let mut pairs = vec![(self, other)];

        while let Some(pair) = pairs.pop() {
            match pair {
                (Expr::Number(left), Expr::Number(right)) => {
                    if left != right {
                        return false;
                    }
                }
                (Expr::Symbol(left), Expr::Symbol(right)) => {
                    if left != right {
                        return false;
                    }
                }
                (Expr::Binary(left), Expr::Binary(right)) => {
                    if left.operator != right.operator || left.span != right.span {
                        return false;
                    }
                    pairs.push((left.right.as_ref(), right.right.as_ref()));
                    pairs.push((left.left.as_ref(), right.left.as_ref()));
                }
                (Expr::Grouping(left), Expr::Grouping(right)) => {
                    if left.span != right.span {
                        return false;
                    }
                    pairs.push((left.expression.as_ref(), right.expression.as_ref()));
                }
                _ => return false,
            }
        }

        true
    }
}
