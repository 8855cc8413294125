use crate::{
    ast::{
        ast::Stmt,
        expressions::SymbolExpr,
        statements::{ExpressionStmt, VarDeclStmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
    Span,
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if let Some(stmt_fn) = parser.get_stmt_lookup().get(&parser.current_token_kind()).copied() {
        return stmt_fn(parser);
    }

    let expression = parse_expr(parser, BindingPower::Default)?;

    let end = parser.expect_error(TokenKind::Semicolon, ErrorImpl::ExpectedSemicolon)?.span.end;

    Ok(Stmt::Expression(ExpressionStmt {
        span: Span {
            start: expression.get_span().start.clone(),
            end,
        },
        expression,
    }))
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start_token = parser.advance();

    let name = parser.expect_error(TokenKind::Identifier, ErrorImpl::ExpectedIdentifier)?;
    parser.expect_error(TokenKind::Assignment, ErrorImpl::ExpectedAssignment)?;

    let assigned_value = parse_expr(parser, BindingPower::Default)?;

    let end = parser
        .expect_error(TokenKind::Semicolon, ErrorImpl::ExpectedDeclarationSemicolon)?
        .span
        .end;

    Ok(Stmt::VarDecl(VarDeclStmt {
        span: Span {
            start: start_token.span.start,
            end,
        },
        identifier: SymbolExpr {
            value: name.value,
            span: name.span,
        },
        assigned_value,
    }))
}
