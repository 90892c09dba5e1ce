//! Diagnostic sinks.
//!
//! The parser never prints. Every problem it finds is handed to a
//! [`DiagnosticSink`] together with the token it was found at; the sink
//! decides whether to collect, print or ignore it.

use crate::lexer::tokens::{Token, TokenKind};

use super::errors::Error;

pub trait DiagnosticSink {
    fn report(&mut self, token: &Token, error: &Error);
}

/// A reported problem and the token it was reported at.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub token: Token,
    pub error: Error,
}

impl Diagnostic {
    pub fn get_error_name(&self) -> &str {
        self.error.get_error_name()
    }

    pub fn message(&self) -> String {
        self.error.message()
    }
}

/// Collects every reported diagnostic in order.
#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    pub reported: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics::default()
    }

    pub fn has_errors(&self) -> bool {
        !self.reported.is_empty()
    }

    pub fn len(&self) -> usize {
        self.reported.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reported.is_empty()
    }

    /// Number of diagnostics with the given error name, e.g. `"ArityExceeded"`.
    pub fn count(&self, error_name: &str) -> usize {
        self.reported
            .iter()
            .filter(|diagnostic| diagnostic.get_error_name() == error_name)
            .count()
    }
}

impl DiagnosticSink for Diagnostics {
    fn report(&mut self, token: &Token, error: &Error) {
        self.reported.push(Diagnostic {
            token: token.clone(),
            error: error.clone(),
        });
    }
}

/// Prints diagnostics to stderr as `[line N] Error at 'x': message`.
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    pub had_error: bool,
}

impl ConsoleReporter {
    pub fn format(token: &Token, error: &Error) -> String {
        let location = if token.kind == TokenKind::EOF {
            String::from(" at end")
        } else {
            format!(" at '{}'", token.value)
        };

        format!("[line {}] Error{}: {}", token.line, location, error.message())
    }
}

impl DiagnosticSink for ConsoleReporter {
    fn report(&mut self, token: &Token, error: &Error) {
        self.had_error = true;
        eprintln!("{}", ConsoleReporter::format(token, error));
    }
}
