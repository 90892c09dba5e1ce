//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into the token stream the parser consumes. It handles:
//!
//! - Tokenization using an ordered table of anchored regex patterns
//! - Recognition of keywords, identifiers, strings and numbers
//! - The em-dash, colon and period delimiters of the grammar
//! - Line tracking for diagnostics, comments and whitespace

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
