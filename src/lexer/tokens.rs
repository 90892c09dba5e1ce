use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("to", TokenKind::To);
        map.insert("let", TokenKind::Let);
        map.insert("be", TokenKind::Be);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("for", TokenKind::For);
        map.insert("print", TokenKind::Print);
        map.insert("know", TokenKind::Know);
        map.insert("say", TokenKind::Say);
        map.insert("or", TokenKind::Or);
        map.insert("and", TokenKind::And);
        map.insert("is", TokenKind::Is);
        map.insert("am", TokenKind::Am);
        map.insert("are", TokenKind::Are);
        map.insert("not", TokenKind::Not);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("nothing", TokenKind::Nothing);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    String,
    Identifier,

    EmDash, // —
    Comma,
    Colon,
    Dot,
    Semicolon,
    Ampersand, // return

    // Reserved
    To,
    Let,
    Be,
    If,
    Else,
    While,
    For,
    Print,
    Know,
    Say,
    Or,
    And,
    Is,
    Am,
    Are,
    Not,
    True,
    False,
    Nothing,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Value carried by a literal token.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Bool(bool),
    String(String),
    Number(f64),
    Nothing,
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Bool(value) => write!(f, "{}", value),
            Literal::String(value) => write!(f, "{:?}", value),
            Literal::Number(value) => write!(f, "{}", value),
            Literal::Nothing => write!(f, "nothing"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub literal: Option<Literal>,
    pub line: usize,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}
