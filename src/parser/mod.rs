//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms a
//! stream of tokens into a list of statements. It handles:
//!
//! - Declaration and statement parsing, dispatched through lookup tables
//! - Expression parsing as a precedence ladder, one function per level
//! - Panic-mode error recovery at declaration boundaries
//!
//! Failures travel as `Result<_, Error>` until the nearest declaration,
//! which reports them, resynchronises and leaves a `Stmt::Error` behind.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
