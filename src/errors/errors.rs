use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// Upper bound on parameters in a declaration and arguments in a call.
pub const MAX_ARITY: usize = 255;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnterminatedString { .. } => "UnterminatedString",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::MissingExpectedToken { .. } => "MissingExpectedToken",
            ErrorImpl::InvalidAssignmentTarget => "InvalidAssignmentTarget",
            ErrorImpl::ArityExceeded { .. } => "ArityExceeded",
            ErrorImpl::UnexpectedPrimary { .. } => "UnexpectedPrimary",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedString { line } => ErrorTip::Suggestion(format!(
                "String starting on line {} is never closed",
                line
            )),
            ErrorImpl::NumberParseError { token } => {
                ErrorTip::Suggestion(format!("Invalid number: `{}`", token))
            }
            ErrorImpl::MissingExpectedToken { message, .. } => {
                ErrorTip::Suggestion(message.clone())
            }
            ErrorImpl::InvalidAssignmentTarget => {
                ErrorTip::Suggestion(String::from("Only a variable can appear before `be`"))
            }
            ErrorImpl::ArityExceeded { what, limit } => {
                ErrorTip::Suggestion(format!("Can't have more than {} {}", limit, what))
            }
            ErrorImpl::UnexpectedPrimary { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, expected a literal or a name",
                token
            )),
        }
    }

    /// Human readable message, as handed to a `DiagnosticSink`.
    pub fn message(&self) -> String {
        match &self.internal_error {
            ErrorImpl::MissingExpectedToken { message, .. } => message.clone(),
            ErrorImpl::InvalidAssignmentTarget => String::from("Invalid assignment target."),
            ErrorImpl::ArityExceeded { what, limit } => {
                format!("Can't have more than {} {}.", limit, what)
            }
            ErrorImpl::UnexpectedPrimary { .. } => String::from("Expect expression."),
            other => other.to_string(),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.get_error_name(), self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unterminated string starting on line {line}")]
    UnterminatedString { line: usize },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("missing expected token at {token:?}: {message}")]
    MissingExpectedToken { token: String, message: String },
    #[error("invalid assignment target")]
    InvalidAssignmentTarget,
    #[error("more than {limit} {what}")]
    ArityExceeded { what: &'static str, limit: usize },
    #[error("expected expression, found {token:?}")]
    UnexpectedPrimary { token: String },
}
