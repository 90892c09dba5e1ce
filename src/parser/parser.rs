//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct, its token cursor and the
//! top-level `parse` entry points. Grammar rules live in `stmt` and `expr`.

use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::statements::Stmt,
    errors::{
        errors::{Error, ErrorImpl},
        sink::{DiagnosticSink, Diagnostics},
    },
    lexer::{
        lexer::tokenize,
        tokens::{Token, TokenKind},
    },
    Position, Span,
};

use super::{
    lookups::{create_token_lookups, StmtHandler, StmtLookup, SYNC_KINDS},
    stmt::parse_declaration,
};

/// The main parser structure that maintains parsing state.
///
/// A parser owns its token stream and cursor and is used for exactly one
/// pass. Diagnostics go to the borrowed sink as they are found.
pub struct Parser<'a> {
    /// The list of tokens to parse, always terminated by `EOF`
    tokens: Vec<Token>,
    /// Index of the current token
    pos: usize,
    /// The name of the source file being parsed
    file: Rc<String>,
    /// Where diagnostics are reported
    sink: &'a mut dyn DiagnosticSink,
    /// Handlers for tokens that open a declaration (`to`, `let`)
    decl_lookup: StmtLookup,
    /// Handlers for tokens that open any other statement
    stmt_lookup: StmtLookup,
}

impl<'a> Parser<'a> {
    /// Creates a new Parser with its lookup tables populated.
    ///
    /// If `tokens` does not end in an `EOF` token one is appended, so the
    /// cursor always has a sentinel to stop on.
    pub fn new(mut tokens: Vec<Token>, file: Rc<String>, sink: &'a mut dyn DiagnosticSink) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let (end, line) = match tokens.last() {
                Some(token) => (token.span.end.clone(), token.line),
                None => (Position(0, Rc::clone(&file)), 1),
            };

            tokens.push(Token {
                kind: TokenKind::EOF,
                value: String::from("EOF"),
                literal: None,
                line,
                span: Span {
                    start: end.clone(),
                    end,
                },
            });
        }

        let mut parser = Parser {
            tokens,
            pos: 0,
            file,
            sink,
            decl_lookup: HashMap::new(),
            stmt_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the most recently consumed token.
    pub fn previous(&self) -> &Token {
        &self.tokens[self.pos.saturating_sub(1)]
    }

    pub fn is_at_end(&self) -> bool {
        self.current_token_kind() == TokenKind::EOF
    }

    /// Advances to the next token and returns the one just consumed.
    /// The cursor never moves past `EOF`.
    pub fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.pos += 1;
        }
        self.previous()
    }

    /// True if the current token is `kind`. Always false at `EOF`.
    pub fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.current_token_kind() == kind
    }

    /// Consumes the current token if it is any of `kinds`.
    pub fn matches(&mut self, kinds: &[TokenKind]) -> bool {
        if kinds.iter().any(|kind| self.check(*kind)) {
            self.advance();
            return true;
        }

        false
    }

    /// Expects a token of the specified kind.
    ///
    /// Returns the consumed token, or a `MissingExpectedToken` error located
    /// at the current token carrying `message`. The cursor does not move on
    /// failure.
    pub fn expect(&mut self, expected_kind: TokenKind, message: &str) -> Result<Token, Error> {
        if self.check(expected_kind) {
            return Ok(self.advance().clone());
        }

        let token = self.current_token();
        Err(self.error_at(
            token,
            ErrorImpl::MissingExpectedToken {
                token: token.value.clone(),
                message: String::from(message),
            },
        ))
    }

    /// Builds an error located at `token`.
    pub fn error_at(&self, token: &Token, error_impl: ErrorImpl) -> Error {
        Error::new(error_impl, token.span.start.clone())
    }

    /// Reports a problem that does not stop parsing.
    pub fn report(&mut self, token: &Token, error_impl: ErrorImpl) {
        let error = self.error_at(token, error_impl);
        self.sink.report(token, &error);
    }

    /// Reports an error that unwound a declaration.
    pub fn report_error(&mut self, token: &Token, error: &Error) {
        self.sink.report(token, error);
    }

    /// Discards tokens until a likely statement boundary.
    ///
    /// Stops after a `;`, before a token that opens a declaration or
    /// statement, or at `EOF`. At least one token is always consumed so a
    /// failing declaration cannot stall the parse.
    pub fn synchronize(&mut self) {
        self.advance();

        while !self.is_at_end() {
            if self.previous().kind == TokenKind::Semicolon {
                return;
            }

            if SYNC_KINDS.contains(&self.current_token_kind()) {
                return;
            }

            self.advance();
        }
    }

    /// Registers a handler for a token that opens a declaration.
    pub fn decl(&mut self, kind: TokenKind, decl_fn: StmtHandler) {
        self.decl_lookup.insert(kind, decl_fn);
    }

    /// Registers a handler for a token that opens a statement.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    pub fn get_decl_handler(&self, kind: TokenKind) -> Option<StmtHandler> {
        self.decl_lookup.get(&kind).copied()
    }

    pub fn get_stmt_handler(&self, kind: TokenKind) -> Option<StmtHandler> {
        self.stmt_lookup.get(&kind).copied()
    }

    pub fn get_file(&self) -> &Rc<String> {
        &self.file
    }

    /// Parses declarations until `EOF`.
    ///
    /// The result has one entry per top-level declaration attempted; the
    /// ones that failed are `Stmt::Error`.
    pub fn parse(&mut self) -> Vec<Stmt> {
        let mut body = vec![];

        while !self.is_at_end() {
            body.push(parse_declaration(self));
        }

        body
    }
}

/// Parses a stream of tokens into a list of top-level statements.
///
/// This is the main entry point for parsing. Every problem found is reported
/// to `sink`; the pass itself always runs to `EOF`. Callers should refuse to
/// evaluate the result if anything was reported.
///
/// # Arguments
///
/// * `tokens` - Vector of tokens to parse, normally ending in `EOF`
/// * `file` - Reference-counted string containing the source file name
/// * `sink` - Receives every diagnostic, in source order
pub fn parse(tokens: Vec<Token>, file: Rc<String>, sink: &mut dyn DiagnosticSink) -> Vec<Stmt> {
    let mut parser = Parser::new(tokens, file, sink);
    parser.parse()
}

/// The statements and diagnostics produced from one source text.
#[derive(Debug, Clone)]
pub struct ParseOutput {
    pub statements: Vec<Stmt>,
    pub diagnostics: Diagnostics,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }
}

/// Tokenizes and parses `source`, collecting diagnostics.
///
/// Only a lexing failure is returned as `Err`; parse problems end up in
/// `ParseOutput::diagnostics`.
pub fn parse_source(source: &str, file: &str) -> Result<ParseOutput, Error> {
    let tokens = tokenize(source.to_string(), Some(file.to_string()))?;
    let mut diagnostics = Diagnostics::new();
    let statements = parse(tokens, Rc::new(file.to_string()), &mut diagnostics);

    Ok(ParseOutput {
        statements,
        diagnostics,
    })
}
