use std::collections::HashMap;

use crate::{ast::statements::Stmt, errors::errors::Error, lexer::tokens::TokenKind};

use super::{parser::Parser, stmt::*};

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;

/// `is`, `am` and `are` all mean "equals".
pub const EQUALITY_OPERATORS: &[TokenKind] = &[TokenKind::Is, TokenKind::Am, TokenKind::Are];

pub const PRINT_KEYWORDS: &[TokenKind] = &[TokenKind::Print, TokenKind::Know, TokenKind::Say];

/// Tokens that begin a declaration or statement. Recovery stops in front
/// of any of these. `for` is reserved and stops recovery even though no
/// statement starts with it yet.
pub const SYNC_KINDS: &[TokenKind] = &[
    TokenKind::To,
    TokenKind::Let,
    TokenKind::For,
    TokenKind::If,
    TokenKind::While,
    TokenKind::Print,
    TokenKind::Know,
    TokenKind::Say,
    TokenKind::Ampersand,
];

pub fn create_token_lookups(parser: &mut Parser) {
    // Declarations
    parser.decl(TokenKind::To, parse_fn_decl_stmt);
    parser.decl(TokenKind::Let, parse_var_decl_stmt);

    // Statements
    parser.stmt(TokenKind::If, parse_if_stmt);
    for kind in PRINT_KEYWORDS {
        parser.stmt(*kind, parse_print_stmt);
    }
    parser.stmt(TokenKind::Ampersand, parse_return_stmt);
    parser.stmt(TokenKind::While, parse_while_stmt);
    parser.stmt(TokenKind::Colon, parse_block_stmt);
}
