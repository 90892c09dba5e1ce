//! Expression grammar, loosest binding first:
//!
//! ```text
//! assignment := IDENT 'be' assignment | or
//! or         := and ('or' and)*
//! and        := equality ('and' equality)*
//! equality   := unary (('is' | 'am' | 'are') unary)*
//! unary      := 'not' unary | call
//! call       := primary ('—' (primary (',' primary)*)? '—')*
//! primary    := 'true' | 'false' | 'nothing' | STRING | NUMBER | IDENT
//! ```

use crate::{
    ast::expressions::Expr,
    errors::errors::{Error, ErrorImpl, MAX_ARITY},
    lexer::tokens::{Literal, TokenKind},
};

use super::{lookups::EQUALITY_OPERATORS, parser::Parser};

pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_assignment_expr(parser)
}

/// Right associative. Anything other than a bare name before `be` is
/// reported and the right-hand value stands in for the whole assignment.
pub fn parse_assignment_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let expr = parse_or_expr(parser)?;

    if parser.matches(&[TokenKind::Be]) {
        let be = parser.previous().clone();
        let value = parse_assignment_expr(parser)?;

        if let Expr::Variable { name } = expr {
            return Ok(Expr::Assign {
                name,
                value: Box::new(value),
            });
        }

        parser.report(&be, ErrorImpl::InvalidAssignmentTarget);
        return Ok(value);
    }

    Ok(expr)
}

pub fn parse_or_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut expr = parse_and_expr(parser)?;

    while parser.matches(&[TokenKind::Or]) {
        let operator = parser.previous().clone();
        let right = parse_and_expr(parser)?;
        expr = Expr::Logical {
            left: Box::new(expr),
            operator,
            right: Box::new(right),
        };
    }

    Ok(expr)
}

pub fn parse_and_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut expr = parse_equality_expr(parser)?;

    while parser.matches(&[TokenKind::And]) {
        let operator = parser.previous().clone();
        let right = parse_equality_expr(parser)?;
        expr = Expr::Logical {
            left: Box::new(expr),
            operator,
            right: Box::new(right),
        };
    }

    Ok(expr)
}

pub fn parse_equality_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut expr = parse_unary_expr(parser)?;

    while parser.matches(EQUALITY_OPERATORS) {
        let operator = parser.previous().clone();
        let right = parse_unary_expr(parser)?;
        expr = Expr::Binary {
            left: Box::new(expr),
            operator,
            right: Box::new(right),
        };
    }

    Ok(expr)
}

pub fn parse_unary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    if parser.matches(&[TokenKind::Not]) {
        let operator = parser.previous().clone();
        let right = parse_unary_expr(parser)?;
        return Ok(Expr::Unary {
            operator,
            right: Box::new(right),
        });
    }

    parse_call_expr(parser)
}

/// A primary followed by any number of `— args —` suffixes, so `f — a — — b —`
/// calls the result of `f — a —` with `b`.
pub fn parse_call_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut expr = parse_primary_expr(parser)?;

    while parser.matches(&[TokenKind::EmDash]) {
        expr = finish_call(parser, expr)?;
    }

    Ok(expr)
}

// Arguments are primaries only, the same as `if` and `while` conditions.
fn finish_call(parser: &mut Parser, callee: Expr) -> Result<Expr, Error> {
    let mut arguments = vec![];

    if !parser.check(TokenKind::EmDash) {
        loop {
            if arguments.len() == MAX_ARITY {
                let token = parser.current_token().clone();
                parser.report(
                    &token,
                    ErrorImpl::ArityExceeded {
                        what: "arguments",
                        limit: MAX_ARITY,
                    },
                );
            }

            arguments.push(parse_primary_expr(parser)?);

            if !parser.matches(&[TokenKind::Comma]) {
                break;
            }
        }
    }

    let paren = parser.expect(TokenKind::EmDash, "Expect '—' after arguments.")?;

    Ok(Expr::Call {
        callee: Box::new(callee),
        paren,
        arguments,
    })
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token();

    let value = match token.kind {
        TokenKind::False => Literal::Bool(false),
        TokenKind::True => Literal::Bool(true),
        TokenKind::Nothing => Literal::Nothing,
        TokenKind::String => token
            .literal
            .clone()
            .unwrap_or_else(|| Literal::String(token.value.clone())),
        TokenKind::Number => match &token.literal {
            Some(literal) => literal.clone(),
            None => Literal::Number(token.value.parse().map_err(|_| {
                parser.error_at(
                    token,
                    ErrorImpl::NumberParseError {
                        token: token.value.clone(),
                    },
                )
            })?),
        },
        TokenKind::Identifier => {
            let name = parser.advance().clone();
            return Ok(Expr::Variable { name });
        }
        _ => {
            return Err(parser.error_at(
                token,
                ErrorImpl::UnexpectedPrimary {
                    token: token.value.clone(),
                },
            ))
        }
    };

    parser.advance();
    Ok(Expr::Literal { value })
}
