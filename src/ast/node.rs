use std::fmt::Display;

use super::{
    ast::{Expr, Program, Stmt},
    expressions::{BinaryExpr, GroupingExpr},
    statements::{ExpressionStmt, VarDeclStmt},
};

/// Label of a node in the uniform tree view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Program,
    VariableDeclaration,
    ExpressionStatement,
    Addition,
    Subtraction,
    Multiplication,
    Division,
    GroupingExpression,
    NumberLiteral,
    Identifier,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Program => "Program",
            NodeKind::VariableDeclaration => "VariableDeclaration",
            NodeKind::ExpressionStatement => "ExpressionStatement",
            NodeKind::Addition => "Addition",
            NodeKind::Subtraction => "Subtraction",
            NodeKind::Multiplication => "Multiplication",
            NodeKind::Division => "Division",
            NodeKind::GroupingExpression => "GroupingExpression",
            NodeKind::NumberLiteral => "NumberLiteral",
            NodeKind::Identifier => "Identifier",
        }
    }
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Uniform view of the tree: a kind, ordered children, and a value on leaves.
///
/// Spans are dropped, so two views compare equal whenever the trees have the
/// same shape and lexemes. Conversion, comparison, printing and dropping all use
/// an explicit stack, so arbitrarily deep trees are fine.
#[derive(Debug, Clone)]
pub struct ASTNode {
    pub kind: NodeKind,
    pub children: Vec<ASTNode>,
    pub value: Option<String>,
}

impl ASTNode {
    pub fn new(kind: NodeKind, children: Vec<ASTNode>) -> Self {
        ASTNode {
            kind,
            children,
            value: None,
        }
    }

    pub fn leaf(kind: NodeKind, value: &str) -> Self {
        ASTNode {
            kind,
            children: vec![],
            value: Some(value.to_string()),
        }
    }
}

impl Drop for ASTNode {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

impl PartialEq for ASTNode {
    fn eq(&self, other: &Self) -> bool {
        let mut pairs = vec![(self, other)];

        while let Some((left, right)) = pairs.pop() {
            if left.kind != right.kind
                || left.value != right.value
                || left.children.len() != right.children.len()
            {
                return false;
            }
            pairs.extend(left.children.iter().zip(right.children.iter()));
        }

        true
    }
}

impl Eq for ASTNode {}

impl Display for ASTNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut stack = vec![(self, 0)];
        let mut first = true;

        while let Some((node, indent)) = stack.pop() {
            if !first {
                writeln!(f)?;
            }
            first = false;

            write!(f, "{}{}", "  ".repeat(indent), node.kind)?;
            if let Some(value) = &node.value {
                write!(f, "({})", value)?;
            }

            stack.extend(node.children.iter().rev().map(|child| (child, indent + 1)));
        }

        Ok(())
    }
}

impl From<&Program> for ASTNode {
    fn from(program: &Program) -> Self {
        ASTNode::new(NodeKind::Program, program.iter().map(ASTNode::from).collect())
    }
}

impl From<&Stmt> for ASTNode {
    fn from(stmt: &Stmt) -> Self {
        match stmt {
            Stmt::VarDecl(VarDeclStmt {
                identifier,
                assigned_value,
                ..
            }) => ASTNode::new(
                NodeKind::VariableDeclaration,
                vec![
                    ASTNode::leaf(NodeKind::Identifier, &identifier.value),
                    ASTNode::from(assigned_value),
                ],
            ),
            Stmt::Expression(ExpressionStmt { expression, .. }) => {
                ASTNode::new(NodeKind::ExpressionStatement, vec![ASTNode::from(expression)])
            }
        }
    }
}

enum Visit<'a> {
    Enter(&'a Expr),
    Exit(NodeKind, usize),
}

impl From<&Expr> for ASTNode {
    fn from(expr: &Expr) -> Self {
        let mut visits = vec![Visit::Enter(expr)];
        let mut built: Vec<ASTNode> = vec![];

        while let Some(visit) = visits.pop() {
            match visit {
                Visit::Enter(Expr::Number(number)) => {
                    built.push(ASTNode::leaf(NodeKind::NumberLiteral, &number.value))
                }
                Visit::Enter(Expr::Symbol(symbol)) => {
                    built.push(ASTNode::leaf(NodeKind::Identifier, &symbol.value))
                }
                Visit::Enter(Expr::Binary(BinaryExpr { left, operator, right, .. })) => {
                    visits.push(Visit::Exit(operator.node_kind(), 2));
                    visits.push(Visit::Enter(right));
                    visits.push(Visit::Enter(left));
                }
                Visit::Enter(Expr::Grouping(GroupingExpr { expression, .. })) => {
                    visits.push(Visit::Exit(NodeKind::GroupingExpression, 1));
                    visits.push(Visit::Enter(expression));
                }
                Visit::Exit(kind, arity) => {
                    let children = built.split_off(built.len() - arity);
                    built.push(ASTNode::new(kind, children));
                }
            }
        }

        // Every Exit folds its children into one node, leaving exactly the root
        built.pop().expect("expression conversion yields a root node")
    }
}
