//! Unit tests for the AST module.
//!
//! Covers the conversion of typed trees into the uniform node view and its
//! pretty-printed form.

use crate::{lexer::tokens::TokenKind, Position, Span};

use super::{
    ast::{Expr, Program, Stmt},
    expressions::{BinaryExpr, BinaryOperator, GroupingExpr, NumberExpr, SymbolExpr},
    node::{ASTNode, NodeKind},
    statements::{ExpressionStmt, VarDeclStmt},
};

fn span() -> Span {
    Span {
        start: Position::null(),
        end: Position::null(),
    }
}

fn number(value: &str) -> Expr {
    Expr::Number(NumberExpr {
        value: value.to_string(),
        span: span(),
    })
}

fn symbol(value: &str) -> SymbolExpr {
    SymbolExpr {
        value: value.to_string(),
        span: span(),
    }
}

fn binary(left: Expr, operator: BinaryOperator, right: Expr) -> Expr {
    Expr::Binary(BinaryExpr {
        left: Box::new(left),
        operator,
        right: Box::new(right),
        span: span(),
    })
}

#[test]
fn test_binary_operator_mapping() {
    assert_eq!(BinaryOperator::from_token_kind(TokenKind::Plus), Some(BinaryOperator::Add));
    assert_eq!(BinaryOperator::from_token_kind(TokenKind::Dash), Some(BinaryOperator::Subtract));
    assert_eq!(BinaryOperator::from_token_kind(TokenKind::Star), Some(BinaryOperator::Multiply));
    assert_eq!(BinaryOperator::from_token_kind(TokenKind::Slash), Some(BinaryOperator::Divide));
    assert_eq!(BinaryOperator::from_token_kind(TokenKind::Semicolon), None);

    assert_eq!(BinaryOperator::Divide.node_kind(), NodeKind::Division);
    assert_eq!(BinaryOperator::Subtract.to_string(), "-");
}

#[test]
fn test_program_to_node() {
    let program = Program {
        body: vec![
            Stmt::VarDecl(VarDeclStmt {
                identifier: symbol("x"),
                assigned_value: number("5"),
                span: span(),
            }),
            Stmt::Expression(ExpressionStmt {
                expression: Expr::Grouping(GroupingExpr {
                    expression: Box::new(binary(
                        Expr::Symbol(symbol("x")),
                        BinaryOperator::Divide,
                        number("2"),
                    )),
                    span: span(),
                }),
                span: span(),
            }),
        ],
        span: span(),
    };

    assert_eq!(
        program.to_node(),
        ASTNode::new(
            NodeKind::Program,
            vec![
                ASTNode::new(
                    NodeKind::VariableDeclaration,
                    vec![
                        ASTNode::leaf(NodeKind::Identifier, "x"),
                        ASTNode::leaf(NodeKind::NumberLiteral, "5"),
                    ]
                ),
                ASTNode::new(
                    NodeKind::ExpressionStatement,
                    vec![ASTNode::new(
                        NodeKind::GroupingExpression,
                        vec![ASTNode::new(
                            NodeKind::Division,
                            vec![
                                ASTNode::leaf(NodeKind::Identifier, "x"),
                                ASTNode::leaf(NodeKind::NumberLiteral, "2"),
                            ]
                        )]
                    )]
                ),
            ]
        )
    );
}

#[test]
fn test_node_equality_ignores_spans() {
    let mut moved = number("1");
    if let Expr::Number(literal) = &mut moved {
        literal.span.start.0 = 99;
    }

    assert_ne!(moved, number("1"));
    assert_eq!(ASTNode::from(&moved), ASTNode::from(&number("1")));
}

#[test]
fn test_node_display() {
    let expr = binary(number("1"), BinaryOperator::Add, Expr::Symbol(symbol("y")));
    let node = ASTNode::new(
        NodeKind::Program,
        vec![ASTNode::new(NodeKind::ExpressionStatement, vec![ASTNode::from(&expr)])],
    );

    assert_eq!(
        node.to_string(),
        "Program\n  ExpressionStatement\n    Addition\n      NumberLiteral(1)\n      Identifier(y)"
    );
}

#[test]
fn test_node_kind_labels() {
    assert_eq!(NodeKind::Program.to_string(), "Program");
    assert_eq!(NodeKind::VariableDeclaration.as_str(), "VariableDeclaration");
    assert_eq!(NodeKind::GroupingExpression.as_str(), "GroupingExpression");
}

fn deep_grouping(depth: usize, innermost: &str) -> Expr {
    let mut expr = Expr::Symbol(symbol(innermost));
    for _ in 0..depth {
        expr = Expr::Grouping(GroupingExpr {
            expression: Box::new(expr),
            span: span(),
        });
    }
    expr
}

#[test]
fn test_deep_trees_drop_compare_and_convert() {
    let deep = deep_grouping(100_000, "x");

    assert!(deep == deep_grouping(100_000, "x"));
    assert!(deep != deep_grouping(100_000, "y"));
    assert!(deep != deep_grouping(99_999, "x"));

    let node = ASTNode::from(&deep);
    assert!(node == ASTNode::from(&deep_grouping(100_000, "x")));
    assert!(node != ASTNode::from(&deep_grouping(100_000, "y")));

    drop(node);
    drop(deep);
}

#[test]
fn test_deep_left_chain() {
    let mut chain = number("0");
    for i in 1..50_000 {
        chain = binary(chain, BinaryOperator::Subtract, number(&i.to_string()));
    }

    let node = ASTNode::from(&chain);
    assert_eq!(node.kind, NodeKind::Subtraction);
    assert_eq!(node.children[1], ASTNode::leaf(NodeKind::NumberLiteral, "49999"));
    assert!(chain != number("0"));
}
