use crate::{
    ast::statements::Stmt,
    errors::errors::{Error, ErrorImpl, MAX_ARITY},
    lexer::tokens::TokenKind,
};

use super::{
    expr::{parse_expr, parse_primary_expr},
    parser::Parser,
};

/// Parses one declaration, recovering from any failure inside it.
///
/// On failure the error is reported at the token the parser stopped on,
/// tokens are skipped up to the next statement boundary and a
/// `Stmt::Error` takes the declaration's place.
pub fn parse_declaration(parser: &mut Parser) -> Stmt {
    let result = match parser.get_decl_handler(parser.current_token_kind()) {
        Some(handler) => handler(parser),
        None => parse_stmt(parser),
    };

    match result {
        Ok(stmt) => stmt,
        Err(error) => {
            let token = parser.current_token().clone();
            parser.report_error(&token, &error);
            parser.synchronize();
            Stmt::Error { token }
        }
    }
}

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if let Some(handler) = parser.get_stmt_handler(parser.current_token_kind()) {
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let expression = parse_expr(parser)?;

    parser.expect(TokenKind::Semicolon, "Expect ';' after value.")?;

    Ok(Stmt::Expression { expression })
}

// to name — a, b —: body .
pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    let name = parser.expect(TokenKind::Identifier, "Expect function name.")?;
    parser.expect(TokenKind::EmDash, "Expect '—' after function name.")?;

    let mut params = Vec::new();
    if !parser.check(TokenKind::EmDash) {
        loop {
            if params.len() == MAX_ARITY {
                let token = parser.current_token().clone();
                parser.report(
                    &token,
                    ErrorImpl::ArityExceeded {
                        what: "parameters",
                        limit: MAX_ARITY,
                    },
                );
            }

            params.push(parser.expect(TokenKind::Identifier, "Expect parameter name.")?);

            if !parser.matches(&[TokenKind::Comma]) {
                break;
            }
        }
    }

    parser.expect(TokenKind::EmDash, "Expect '—' after parameters.")?;
    parser.expect(TokenKind::Colon, "Expect ':' before function body.")?;

    let body = parse_block(parser)?;

    Ok(Stmt::Function { name, params, body })
}

/// Declarations up to and including the closing `.`. The opening `:` has
/// already been consumed by the caller.
pub fn parse_block(parser: &mut Parser) -> Result<Vec<Stmt>, Error> {
    let mut statements = Vec::new();

    while !parser.check(TokenKind::Dot) && !parser.is_at_end() {
        statements.push(parse_declaration(parser));
    }

    parser.expect(TokenKind::Dot, "Expect '.' after block.")?;

    Ok(statements)
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    Ok(Stmt::Block {
        statements: parse_block(parser)?,
    })
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    let name = parser.expect(TokenKind::Identifier, "Expect variable name.")?;

    let initializer = if parser.matches(&[TokenKind::Be]) {
        Some(parse_expr(parser)?)
    } else {
        None
    };

    parser.expect(TokenKind::Semicolon, "Expect ';' after variable declaration.")?;

    Ok(Stmt::Var { name, initializer })
}

// The condition is a single primary, not a full expression.
pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    parser.expect(TokenKind::EmDash, "Expect '—' after 'if'.")?;
    let condition = parse_primary_expr(parser)?;
    parser.expect(TokenKind::EmDash, "Expect '—' after if condition.")?;

    let then_branch = Box::new(parse_stmt(parser)?);
    let else_branch = if parser.matches(&[TokenKind::Else]) {
        Some(Box::new(parse_stmt(parser)?))
    } else {
        None
    };

    Ok(Stmt::If {
        condition,
        then_branch,
        else_branch,
    })
}

pub fn parse_print_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    let expression = parse_expr(parser)?;
    parser.expect(TokenKind::Semicolon, "Expect ';' after value.")?;

    Ok(Stmt::Print { expression })
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let keyword = parser.advance().clone();

    let value = if !parser.check(TokenKind::Semicolon) {
        Some(parse_expr(parser)?)
    } else {
        None
    };

    parser.expect(TokenKind::Semicolon, "Expect ';' after return value.")?;

    Ok(Stmt::Return { keyword, value })
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    parser.expect(TokenKind::EmDash, "Expect '—' after 'while'.")?;
    let condition = parse_primary_expr(parser)?;
    parser.expect(TokenKind::EmDash, "Expect '—' after condition.")?;

    let body = Box::new(parse_stmt(parser)?);

    Ok(Stmt::While { condition, body })
}
