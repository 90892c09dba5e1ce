use crate::lexer::tokens::{Literal, Token};

/// Expression tree.
///
/// Every node owns its children; nothing is shared and nothing is mutated
/// once the parser hands the tree out.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// `true`, `false`, `nothing`, a string or a number
    Literal { value: Literal },
    /// A bare name
    Variable { name: Token },
    /// `name be value`
    Assign { name: Token, value: Box<Expr> },
    /// `and` / `or`, kept apart from `Binary` so the evaluator can short-circuit
    Logical {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },
    /// `is` / `am` / `are`
    Binary {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },
    /// `not right`
    Unary { operator: Token, right: Box<Expr> },
    /// `callee — arguments —`, with `paren` the closing em-dash
    Call {
        callee: Box<Expr>,
        paren: Token,
        arguments: Vec<Expr>,
    },
}
