use crate::{
    ast::{
        ast::Expr,
        expressions::{BinaryExpr, BinaryOperator, GroupingExpr, NumberExpr, SymbolExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud_fn = match parser.get_nud_lookup().get(&token_kind) {
        Some(nud_fn) => *nud_fn,
        None => return Err(Error::new(ErrorImpl::ExpectedExpression, parser.get_position())),
    };

    let mut left = nud_fn(parser)?;

    // While the current token is an infix operator binding tighter than bp, fold it into lhs
    loop {
        let token_kind = parser.current_token_kind();
        let Some(led_fn) = parser.get_led_lookup().get(&token_kind).copied() else {
            break;
        };

        let operator_bp = *parser.get_bp_lookup().get(&token_kind).unwrap_or(&BindingPower::Default);
        if operator_bp <= bp {
            break;
        }

        left = led_fn(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let token = parser.advance();
            Ok(Expr::Number(NumberExpr { value: token.value, span: token.span }))
        }
        TokenKind::Identifier => {
            let token = parser.advance();
            Ok(Expr::Symbol(SymbolExpr { value: token.value, span: token.span }))
        }
        _ => Err(Error::new(ErrorImpl::ExpectedExpression, parser.get_position())),
    }
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance();
    let operator = match BinaryOperator::from_token_kind(operator_token.kind) {
        Some(operator) => operator,
        None => return Err(Error::new(ErrorImpl::ExpectedExpression, operator_token.span.start)),
    };

    // Same binding power on the right keeps equal-precedence operators left-associative
    let right = parse_expr(parser, bp)?;

    Ok(Expr::Binary(BinaryExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone(),
        },
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.advance().span.start;
    parser.enter_group(start.clone())?;

    let expression = parse_expr(parser, BindingPower::Default)?;
    let end = parser.expect_error(TokenKind::CloseParen, ErrorImpl::ExpectedCloseParen)?.span.end;
    parser.exit_group();

    Ok(Expr::Grouping(GroupingExpr {
        expression: Box::new(expression),
        span: Span { start, end },
    }))
}
