//! Error types and error reporting for the front-end.
//!
//! This module defines:
//!
//! - Error structures with source position information
//! - Specific error variants for lexing and parsing
//! - The `DiagnosticSink` trait the parser reports through
//! - Sinks that collect diagnostics or print them to stderr

pub mod errors;
pub mod sink;
