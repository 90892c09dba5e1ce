//! Renders trees as parenthesised prefix expressions, e.g.
//! `(if x (block (print x)))`.

use super::{expressions::Expr, statements::Stmt};

pub fn print_expr(expr: &Expr) -> String {
    match expr {
        Expr::Literal { value } => value.to_string(),
        Expr::Variable { name } => name.value.clone(),
        Expr::Assign { name, value } => {
            format!("(be {} {})", name.value, print_expr(value))
        }
        Expr::Logical {
            left,
            operator,
            right,
        }
        | Expr::Binary {
            left,
            operator,
            right,
        } => parenthesize(&operator.value, &[left.as_ref(), right.as_ref()]),
        Expr::Unary { operator, right } => parenthesize(&operator.value, &[right.as_ref()]),
        Expr::Call {
            callee, arguments, ..
        } => {
            let mut parts = vec![print_expr(callee)];
            parts.extend(arguments.iter().map(print_expr));
            format!("(call {})", parts.join(" "))
        }
    }
}

pub fn print_stmt(stmt: &Stmt) -> String {
    match stmt {
        Stmt::Expression { expression } => format!("(expr {})", print_expr(expression)),
        Stmt::Print { expression } => format!("(print {})", print_expr(expression)),
        Stmt::Var {
            name,
            initializer: Some(initializer),
        } => format!("(var {} {})", name.value, print_expr(initializer)),
        Stmt::Var { name, .. } => format!("(var {})", name.value),
        Stmt::Block { statements } => with_body("(block", statements),
        Stmt::If {
            condition,
            then_branch,
            else_branch,
        } => match else_branch {
            Some(else_branch) => format!(
                "(if {} {} {})",
                print_expr(condition),
                print_stmt(then_branch),
                print_stmt(else_branch)
            ),
            None => format!("(if {} {})", print_expr(condition), print_stmt(then_branch)),
        },
        Stmt::While { condition, body } => {
            format!("(while {} {})", print_expr(condition), print_stmt(body))
        }
        Stmt::Function { name, params, body } => {
            let params = params
                .iter()
                .map(|param| param.value.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            with_body(&format!("(to {} ({})", name.value, params), body)
        }
        Stmt::Return {
            value: Some(value), ..
        } => format!("(return {})", print_expr(value)),
        Stmt::Return { .. } => String::from("(return)"),
        Stmt::Error { token } => format!("(error {:?})", token.value),
    }
}

/// One line per top-level statement.
pub fn print_program(statements: &[Stmt]) -> String {
    statements
        .iter()
        .map(print_stmt)
        .collect::<Vec<_>>()
        .join("\n")
}

fn parenthesize(name: &str, exprs: &[&Expr]) -> String {
    let mut parenthesized = format!("({name}");

    for expr in exprs {
        parenthesized.push(' ');
        parenthesized.push_str(&print_expr(expr));
    }

    parenthesized.push(')');

    parenthesized
}

fn with_body(head: &str, body: &[Stmt]) -> String {
    let mut out = String::from(head);

    for stmt in body {
        out.push(' ');
        out.push_str(&print_stmt(stmt));
    }

    out.push(')');
    out
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        lexer::tokens::{Literal, Token, TokenKind},
        Position, Span,
    };

    use super::*;

    fn token(kind: TokenKind, value: &str) -> Token {
        let file = Rc::new(String::from("test.coem"));
        Token {
            kind,
            value: value.to_string(),
            literal: None,
            line: 1,
            span: Span {
                start: Position(0, Rc::clone(&file)),
                end: Position(0, file),
            },
        }
    }

    #[test]
    fn test_print_nested_expression() {
        let expr = Expr::Logical {
            left: Box::new(Expr::Unary {
                operator: token(TokenKind::Not, "not"),
                right: Box::new(Expr::Variable {
                    name: token(TokenKind::Identifier, "done"),
                }),
            }),
            operator: token(TokenKind::Or, "or"),
            right: Box::new(Expr::Binary {
                left: Box::new(Expr::Variable {
                    name: token(TokenKind::Identifier, "x"),
                }),
                operator: token(TokenKind::Is, "is"),
                right: Box::new(Expr::Literal {
                    value: Literal::String(String::from("y")),
                }),
            }),
        };

        assert_eq!(print_expr(&expr), "(or (not done) (is x \"y\"))");
    }

    #[test]
    fn test_print_function_and_call() {
        let stmt = Stmt::Function {
            name: token(TokenKind::Identifier, "greet"),
            params: vec![
                token(TokenKind::Identifier, "a"),
                token(TokenKind::Identifier, "b"),
            ],
            body: vec![Stmt::Return {
                keyword: token(TokenKind::Ampersand, "&"),
                value: Some(Expr::Call {
                    callee: Box::new(Expr::Variable {
                        name: token(TokenKind::Identifier, "f"),
                    }),
                    paren: token(TokenKind::EmDash, "—"),
                    arguments: vec![Expr::Literal {
                        value: Literal::Nothing,
                    }],
                }),
            }],
        };

        assert_eq!(print_stmt(&stmt), "(to greet (a b) (return (call f nothing)))");
    }

    #[test]
    fn test_print_error_placeholder() {
        let stmt = Stmt::Error {
            token: token(TokenKind::Semicolon, ";"),
        };

        assert_eq!(print_stmt(&stmt), "(error \";\")");
    }
}
