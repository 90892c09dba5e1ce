use crate::lexer::tokens::Token;

use super::expressions::Expr;

/// Statement tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Expression { expression: Expr },
    /// `print`, `know` or `say` followed by a value
    Print { expression: Expr },
    Var {
        name: Token,
        initializer: Option<Expr>,
    },
    /// `: declarations .`
    Block { statements: Vec<Stmt> },
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    While { condition: Expr, body: Box<Stmt> },
    Function {
        name: Token,
        params: Vec<Token>,
        body: Vec<Stmt>,
    },
    /// `& value ;`, with `keyword` the ampersand
    Return { keyword: Token, value: Option<Expr> },
    /// Stands in for a declaration that failed to parse. `token` is where
    /// the failure was detected; the diagnostic itself went to the sink.
    Error { token: Token },
}
